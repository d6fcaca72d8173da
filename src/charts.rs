//! Chart Views
//!
//! Config builders for the six dashboard charts plus the glue that hands
//! them to the chart registry. Builders are pure and return JSON; only the
//! tick and tooltip callbacks touch JS values.

use leptos::prelude::*;
use leptos_chartjs::{ChartError, ChartHandle, ChartSpec, SharedChartRegistry};
use serde_json::{json, Value};
use wasm_bindgen::JsValue;

use crate::format::format_currency_short;
use crate::models::{Assignment, Project, SCurve};
use crate::tables::assignment_target_label;
use crate::workload::WorkloadEntry;

pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const PLANNED_COLOR: &str = "#006400";
const ACTUAL_COLOR: &str = "#D32F2F";
const FALLBACK_COLOR: &str = "#6c757d";
const PIE_PALETTE: [&str; 8] = [
    "#006400", "#28a745", "#ffc107", "#D32F2F", "#1E88E5", "#20c997", "#fd7e14", "#e83e8c",
];
const MAX_LABEL_CHARS: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKey {
    OverallSCurve,
    StatusDistribution,
    ProjectSCurve,
    ProjectDeviation,
    ManpowerDistribution,
    TeamWorkload,
}

impl ChartKey {
    pub fn canvas_id(self) -> &'static str {
        match self {
            ChartKey::OverallSCurve => "overall-s-curve-chart",
            ChartKey::StatusDistribution => "status-distribution-chart",
            ChartKey::ProjectSCurve => "project-s-curve-chart",
            ChartKey::ProjectDeviation => "project-deviation-chart",
            ChartKey::ManpowerDistribution => "manpower-project-distribution-chart",
            ChartKey::TeamWorkload => "team-workload-chart",
        }
    }
}

pub type ChartRegistryHandle = SharedChartRegistry<ChartKey>;

/// Destroy the chart under `key` and build a new one from `spec`
pub fn render_chart(registry: ChartRegistryHandle, key: ChartKey, spec: ChartSpec) {
    let result = registry
        .try_update_value(|charts| charts.replace(key, || ChartHandle::create(key.canvas_id(), spec)))
        .unwrap_or_else(|| Err(ChartError::Js("chart registry disposed".to_string())));
    if let Err(e) = result {
        log::error!("[charts] {:?} failed: {}", key, e);
    }
}

pub fn destroy_chart(registry: ChartRegistryHandle, key: ChartKey) {
    registry.update_value(|charts| {
        charts.destroy(key);
    });
}

/// Resize every live chart, logging per-chart failures
pub fn redraw_all(registry: ChartRegistryHandle) {
    let failures = registry.try_with_value(|charts| charts.redraw_all()).unwrap_or_default();
    for (key, e) in failures {
        log::error!("[charts] resize {:?} failed: {}", key, e);
    }
}

// ========================
// S-Curves
// ========================

/// Labels, planned and actual; missing or empty parts use the 12-month defaults
pub fn s_curve_series(curve: &SCurve) -> (Vec<String>, Vec<f64>, Vec<f64>) {
    let labels = match curve.labels.as_ref().filter(|l| !l.is_empty()) {
        Some(labels) => labels.clone(),
        None => MONTH_LABELS.iter().map(|m| m.to_string()).collect(),
    };
    let series = |values: &Option<Vec<f64>>| match values.as_ref().filter(|v| !v.is_empty()) {
        Some(values) => values.clone(),
        None => vec![0.0; MONTH_LABELS.len()],
    };
    (labels, series(&curve.planned), series(&curve.actual))
}

fn line_dataset(label: &str, data: &[f64], border: &str, fill: &str) -> Value {
    json!({
        "label": label,
        "data": data,
        "borderColor": border,
        "backgroundColor": fill,
        "borderWidth": 2,
        "tension": 0.4,
        "fill": true,
        "pointRadius": 3
    })
}

/// Planned/actual line chart. The overall curve carries axis titles.
pub fn s_curve_config(curve: &SCurve, axis_titles: bool) -> Value {
    let (labels, planned, actual) = s_curve_series(curve);
    let axis = |title: &str| {
        if axis_titles {
            json!({ "display": true, "text": title, "font": { "size": 12 } })
        } else {
            json!({ "display": false })
        }
    };
    json!({
        "type": "line",
        "data": {
            "labels": labels,
            "datasets": [
                line_dataset("Planned", &planned, PLANNED_COLOR, "rgba(0, 100, 0, 0.1)"),
                line_dataset("Actual", &actual, ACTUAL_COLOR, "rgba(211, 47, 47, 0.1)")
            ]
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": { "legend": { "position": "top", "labels": { "font": { "size": 11 } } } },
            "scales": {
                "y": { "beginAtZero": true, "max": 100, "title": axis("Progress (%)"), "ticks": { "font": { "size": 11 } } },
                "x": { "title": axis("Bulan"), "ticks": { "font": { "size": 11 } } }
            }
        }
    })
}

// ========================
// Distributions
// ========================

pub fn status_color(status: &str) -> &'static str {
    match status {
        "Not Started" => "#e9ecef",
        "In Progress" => "#fff3cd",
        "On Track" => "#d4edda",
        "Delayed" => "#f8d7da",
        "Completed" => "#d1ecf1",
        _ => FALLBACK_COLOR,
    }
}

pub fn status_distribution_config<'a>(counts: impl IntoIterator<Item = (&'a String, &'a f64)>) -> Value {
    let (labels, data): (Vec<&String>, Vec<f64>) = counts.into_iter().map(|(k, v)| (k, *v)).unzip();
    let colors: Vec<&str> = labels.iter().map(|l| status_color(l)).collect();
    json!({
        "type": "doughnut",
        "data": {
            "labels": labels,
            "datasets": [{ "data": data, "backgroundColor": colors, "borderWidth": 1 }]
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": { "legend": { "position": "right", "labels": { "font": { "size": 11 }, "padding": 15 } } }
        }
    })
}

/// Weekly hours summed per target label, in first-seen order
pub fn distribution_by_target(assignments: &[Assignment], projects: &[Project]) -> Vec<(String, f64)> {
    let mut groups: Vec<(String, f64)> = Vec::new();
    for assignment in assignments {
        let label = assignment_target_label(assignment, projects).unwrap_or_else(|| "Unknown".to_string());
        let hours = assignment.hours_per_week.unwrap_or(0.0);
        match groups.iter_mut().find(|(l, _)| *l == label) {
            Some((_, total)) => *total += hours,
            None => groups.push((label, hours)),
        }
    }
    groups
}

/// Distribution pie for a person's assignments. `None` exactly when the list
/// is empty, which is also when the panel hides the canvas.
pub fn manpower_distribution_chart(assignments: &[Assignment], projects: &[Project]) -> Option<Value> {
    let groups = distribution_by_target(assignments, projects);
    (!groups.is_empty()).then(|| manpower_distribution_config(&groups))
}

pub fn manpower_distribution_config(groups: &[(String, f64)]) -> Value {
    let labels: Vec<&str> = groups.iter().map(|(l, _)| l.as_str()).collect();
    let data: Vec<f64> = groups.iter().map(|(_, h)| *h).collect();
    json!({
        "type": "pie",
        "data": {
            "labels": labels,
            "datasets": [{ "data": data, "backgroundColor": PIE_PALETTE, "borderWidth": 1 }]
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": { "legend": { "position": "right", "labels": { "font": { "size": 11 }, "padding": 15 } } }
        }
    })
}

// ========================
// Deviation
// ========================

pub fn deviation_config(project: &Project) -> Value {
    json!({
        "type": "bar",
        "data": {
            "labels": ["Budget", "Actual Cost"],
            "datasets": [{
                "data": [project.budget.unwrap_or(0.0), project.actual_cost.unwrap_or(0.0)],
                "backgroundColor": [PLANNED_COLOR, ACTUAL_COLOR],
                "borderWidth": 1
            }]
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "scales": { "y": { "beginAtZero": true, "ticks": { "font": { "size": 11 } } } },
            "plugins": { "legend": { "display": false } }
        }
    })
}

pub fn deviation_spec(project: &Project) -> ChartSpec {
    ChartSpec::new(deviation_config(project)).with_callback(&["options", "scales", "y", "ticks", "callback"], |value| {
        JsValue::from_str(&format_currency_short(value.as_f64().unwrap_or(0.0)))
    })
}

// ========================
// Team Workload
// ========================

/// First 15 characters, with `...` when cut
pub fn truncate_label(name: &str) -> String {
    if name.chars().count() > MAX_LABEL_CHARS {
        format!("{}...", name.chars().take(MAX_LABEL_CHARS).collect::<String>())
    } else {
        name.to_string()
    }
}

pub fn workload_config(entries: &[WorkloadEntry]) -> Value {
    let labels: Vec<String> = entries.iter().map(|e| truncate_label(&e.name)).collect();
    let available: Vec<f64> = entries.iter().map(|e| e.available_hours).collect();
    let assigned: Vec<f64> = entries.iter().map(|e| e.assigned_hours).collect();
    let fills: Vec<&str> = entries.iter().map(|e| e.level().fill_color()).collect();
    let borders: Vec<&str> = entries.iter().map(|e| e.level().border_color()).collect();
    json!({
        "type": "bar",
        "data": {
            "labels": labels,
            "datasets": [
                {
                    "label": "Total Hours Available",
                    "data": available,
                    "backgroundColor": "rgba(0, 100, 0, 0.7)",
                    "borderColor": PLANNED_COLOR,
                    "borderWidth": 1,
                    "barPercentage": 0.6,
                    "categoryPercentage": 0.8
                },
                {
                    "label": "Assigned Hours",
                    "data": assigned,
                    "backgroundColor": fills,
                    "borderColor": borders,
                    "borderWidth": 1,
                    "barPercentage": 0.6,
                    "categoryPercentage": 0.8
                }
            ]
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "animation": { "duration": 1000, "easing": "easeOutQuart" },
            "scales": {
                "y": {
                    "beginAtZero": true,
                    "title": { "display": true, "text": "Jam per Minggu", "font": { "size": 12, "weight": "bold" } },
                    "grid": { "color": "rgba(0,0,0,0.1)" },
                    "ticks": { "font": { "size": 11 }, "stepSize": 10 }
                },
                "x": {
                    "grid": { "display": false },
                    "ticks": { "font": { "size": 11 }, "maxRotation": 45, "minRotation": 0 }
                }
            },
            "plugins": {
                "legend": { "position": "top", "labels": { "font": { "size": 12 }, "padding": 20 } },
                "tooltip": {
                    "backgroundColor": "rgba(0,0,0,0.8)",
                    "titleFont": { "size": 12 },
                    "bodyFont": { "size": 11 },
                    "padding": 10
                }
            }
        }
    })
}

/// `Assigned Hours: 36 jam (90.0% utilization)`
pub fn workload_tooltip_label(dataset_label: &str, hours: f64, utilization: Option<f64>) -> String {
    let mut label = String::new();
    if !dataset_label.is_empty() {
        label.push_str(dataset_label);
        label.push_str(": ");
    }
    label.push_str(&format!("{} jam", crate::format::format_number(hours)));
    if let Some(utilization) = utilization {
        label.push_str(&format!(" ({:.1}% utilization)", utilization));
    }
    label
}

fn js_field(target: &JsValue, key: &str) -> JsValue {
    js_sys::Reflect::get(target, &JsValue::from_str(key)).unwrap_or(JsValue::UNDEFINED)
}

pub fn workload_spec(entries: &[WorkloadEntry]) -> ChartSpec {
    let utilizations: Vec<f64> = entries.iter().map(|e| e.utilization).collect();
    ChartSpec::new(workload_config(entries)).with_callback(
        &["options", "plugins", "tooltip", "callbacks", "label"],
        move |context| {
            let dataset_label = js_field(&js_field(&context, "dataset"), "label")
                .as_string()
                .unwrap_or_default();
            let hours = js_field(&js_field(&context, "parsed"), "y").as_f64().unwrap_or(0.0);
            let dataset_index = js_field(&context, "datasetIndex").as_f64().unwrap_or(0.0) as usize;
            let data_index = js_field(&context, "dataIndex").as_f64().unwrap_or(0.0) as usize;
            let utilization = if dataset_index == 1 {
                utilizations.get(data_index).copied()
            } else {
                None
            };
            JsValue::from_str(&workload_tooltip_label(&dataset_label, hours, utilization))
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_s_curve_defaults_when_empty() {
        let (labels, planned, actual) = s_curve_series(&SCurve::default());
        assert_eq!(labels.len(), 12);
        assert_eq!(labels[0], "Jan");
        assert_eq!(planned, vec![0.0; 12]);
        assert_eq!(actual, vec![0.0; 12]);

        let empty_lists = SCurve {
            labels: Some(vec![]),
            planned: Some(vec![]),
            actual: None,
        };
        assert_eq!(s_curve_series(&empty_lists).0.len(), 12);
    }

    #[test]
    fn test_s_curve_config() {
        let curve = SCurve {
            labels: Some(vec!["Q1".into(), "Q2".into()]),
            planned: Some(vec![40.0, 100.0]),
            actual: Some(vec![35.0, 80.0]),
        };
        let config = s_curve_config(&curve, true);
        assert_eq!(config["type"], "line");
        assert_eq!(config["data"]["labels"], json!(["Q1", "Q2"]));
        assert_eq!(config["data"]["datasets"][0]["borderColor"], "#006400");
        assert_eq!(config["data"]["datasets"][1]["data"], json!([35.0, 80.0]));
        assert_eq!(config["options"]["scales"]["y"]["max"], 100);
        assert_eq!(config["options"]["scales"]["x"]["title"]["text"], "Bulan");

        let plain = s_curve_config(&curve, false);
        assert_eq!(plain["options"]["scales"]["y"]["title"]["display"], false);
    }

    #[test]
    fn test_status_distribution_palette() {
        let mut counts = BTreeMap::new();
        counts.insert("Delayed".to_string(), 2.0);
        counts.insert("On Hold".to_string(), 1.0);
        let config = status_distribution_config(&counts);
        assert_eq!(config["data"]["labels"], json!(["Delayed", "On Hold"]));
        assert_eq!(config["data"]["datasets"][0]["backgroundColor"], json!(["#f8d7da", "#6c757d"]));
    }

    #[test]
    fn test_distribution_chart_only_with_visible_canvas() {
        assert_eq!(manpower_distribution_chart(&[], &[]), None);

        let unresolved = vec![Assignment { id: 9, ..Default::default() }];
        let config = manpower_distribution_chart(&unresolved, &[]);
        assert_eq!(config.map(|c| c["data"]["labels"].clone()), Some(json!(["Unknown"])));
    }

    #[test]
    fn test_distribution_groups_in_first_seen_order() {
        let projects = vec![Project {
            id: 1,
            name: Some("Bendungan".into()),
            ..Default::default()
        }];
        let assignments = vec![
            Assignment { id: 1, non_project_id: Some(7), hours_per_week: Some(5.0), ..Default::default() },
            Assignment { id: 2, project_id: Some(1), hours_per_week: Some(10.0), ..Default::default() },
            Assignment { id: 3, non_project_id: Some(7), hours_per_week: Some(3.0), ..Default::default() },
            Assignment { id: 4, ..Default::default() },
        ];
        let groups = distribution_by_target(&assignments, &projects);
        assert_eq!(
            groups,
            vec![
                ("Non-Proyek 7".to_string(), 8.0),
                ("Proyek Bendungan".to_string(), 10.0),
                ("Unknown".to_string(), 0.0),
            ]
        );
        let config = manpower_distribution_config(&groups);
        assert_eq!(config["type"], "pie");
        assert_eq!(config["data"]["datasets"][0]["data"], json!([8.0, 10.0, 0.0]));
    }

    #[test]
    fn test_deviation_config() {
        let project = Project {
            budget: Some(5_000_000.0),
            ..Default::default()
        };
        let config = deviation_config(&project);
        assert_eq!(config["data"]["datasets"][0]["data"], json!([5_000_000.0, 0.0]));
        assert_eq!(config["options"]["plugins"]["legend"]["display"], false);
    }

    #[test]
    fn test_truncate_label() {
        assert_eq!(truncate_label("Andi"), "Andi");
        assert_eq!(truncate_label("Muhammad Rizky Pratama"), "Muhammad Rizky ...");
        assert_eq!(truncate_label("Exactly15Chars!"), "Exactly15Chars!");
    }

    #[test]
    fn test_workload_config_colors_by_utilization() {
        let entry = |name: &str, utilization: f64| WorkloadEntry {
            name: name.to_string(),
            available_hours: 40.0,
            assigned_hours: utilization * 0.4,
            utilization,
            failed: false,
        };
        let config = workload_config(&[entry("A", 50.0), entry("B", 90.0), entry("C", 120.0)]);
        assert_eq!(
            config["data"]["datasets"][1]["borderColor"],
            json!(["#28a745", "#ffc107", "#D32F2F"])
        );
        assert_eq!(config["data"]["datasets"][0]["data"], json!([40.0, 40.0, 40.0]));
        assert_eq!(config["options"]["scales"]["y"]["ticks"]["stepSize"], 10);
    }

    #[test]
    fn test_workload_tooltip_label() {
        assert_eq!(workload_tooltip_label("Total Hours Available", 40.0, None), "Total Hours Available: 40 jam");
        assert_eq!(
            workload_tooltip_label("Assigned Hours", 36.0, Some(90.0)),
            "Assigned Hours: 36 jam (90.0% utilization)"
        );
        assert_eq!(workload_tooltip_label("", 8.0, None), "8 jam");
    }

    #[test]
    fn test_canvas_ids() {
        assert_eq!(ChartKey::TeamWorkload.canvas_id(), "team-workload-chart");
        assert_eq!(ChartKey::ManpowerDistribution.canvas_id(), "manpower-project-distribution-chart");
    }
}
