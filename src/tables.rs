//! Table Renderers
//!
//! Pure functions turning records into `<tr>` markup for `inner_html`.
//! Every interpolated value is escaped. Row buttons carry `data-action`
//! and `data-id` for the delegated click handler in `TableBody`.

use crate::format::{
    category_color, escape_html, format_currency, format_date, format_number, or_dash, priority_class,
    priority_label, status_class, status_label,
};
use crate::models::{Assignment, Location, ManPower, NonProject, Project, Task};

/// Decoded click on a row button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Edit(u32),
    Delete(u32),
}

impl RowAction {
    pub fn parse(action: &str, id: &str) -> Option<Self> {
        let id = id.trim().parse().ok()?;
        match action {
            "edit" => Some(RowAction::Edit(id)),
            "delete" => Some(RowAction::Delete(id)),
            _ => None,
        }
    }
}

pub fn placeholder_row(colspan: u8, message: &str) -> String {
    format!(
        r#"<tr><td colspan="{}" class="text-center text-muted">{}</td></tr>"#,
        colspan,
        escape_html(message)
    )
}

pub fn project_name(projects: &[Project], id: u32) -> Option<&str> {
    projects.iter().find(|p| p.id == id).and_then(|p| p.name.as_deref())
}

/// `Proyek <name>` or `Non-Proyek <id>`; None when the assignment has no target
pub fn assignment_target_label(assignment: &Assignment, projects: &[Project]) -> Option<String> {
    if let Some(id) = assignment.project_id {
        return Some(match project_name(projects, id) {
            Some(name) => format!("Proyek {}", name),
            None => format!("Proyek #{}", id),
        });
    }
    assignment.non_project_id.map(|id| format!("Non-Proyek {}", id))
}

/// Bootstrap color for an availability percentage
pub fn availability_bar_class(availability: f64) -> &'static str {
    if availability > 80.0 {
        "bg-success"
    } else if availability > 50.0 {
        "bg-warning"
    } else {
        "bg-danger"
    }
}

fn status_badge(status: Option<&str>) -> String {
    format!(
        r#"<span class="status-badge status-{}">{}</span>"#,
        escape_html(&status_class(status)),
        escape_html(status_label(status))
    )
}

fn priority_badge(priority: Option<&str>) -> String {
    format!(
        r#"<span class="priority-badge priority-{}">{}</span>"#,
        escape_html(&priority_class(priority)),
        escape_html(priority_label(priority))
    )
}

fn progress_cell(progress: Option<f64>, height: u8, label_class: &str, bar_class: &str) -> String {
    let progress = format_number(progress.unwrap_or(0.0));
    format!(
        r#"<div class="d-flex align-items-center"><div class="progress flex-grow-1 me-2" style="height: {height}px;"><div class="progress-bar{bar}" style="width: {progress}%"></div></div><span class="{label_class}">{progress}%</span></div>"#,
        height = height,
        bar = if bar_class.is_empty() { String::new() } else { format!(" {}", bar_class) },
        progress = progress,
        label_class = label_class,
    )
}

fn date_range_cell(start: Option<&str>, end: Option<&str>) -> String {
    format!(
        r#"<div class="small">{}</div><div class="small text-muted">s/d {}</div>"#,
        escape_html(&format_date(start)),
        escape_html(&format_date(end))
    )
}

fn edit_delete_buttons(id: u32) -> String {
    format!(
        r#"<div class="btn-group btn-group-sm"><button class="btn btn-outline-primary" data-action="edit" data-id="{id}" title="Edit"><i class="fas fa-edit"></i></button><button class="btn btn-outline-danger" data-action="delete" data-id="{id}" title="Hapus"><i class="fas fa-trash"></i></button></div>"#,
        id = id
    )
}

fn delete_button(id: u32) -> String {
    format!(
        r#"<button class="btn btn-outline-danger btn-sm" data-action="delete" data-id="{}" title="Hapus"><i class="fas fa-trash"></i></button>"#,
        id
    )
}

/// Secondary line under a name, omitted when empty
fn subline(value: Option<&str>, class: &str) -> String {
    match value.filter(|v| !v.is_empty()) {
        Some(v) => format!(r#"<div class="{}">{}</div>"#, class, escape_html(v)),
        None => String::new(),
    }
}

// ========================
// Summary
// ========================

pub fn priority_projects_rows(projects: &[Project]) -> String {
    if projects.is_empty() {
        return placeholder_row(3, "Tidak ada proyek prioritas");
    }
    projects
        .iter()
        .map(|p| {
            format!(
                r#"<tr class="slide-in"><td><strong class="text-primary">{}</strong></td><td>{}</td><td>{}</td></tr>"#,
                escape_html(or_dash(p.name.as_deref())),
                escape_html(&format_date(p.end_date.as_deref())),
                status_badge(p.status.as_deref())
            )
        })
        .collect()
}

/// Project names are looked up in the cached projects list
pub fn priority_tasks_rows(tasks: &[Task], projects: &[Project]) -> String {
    if tasks.is_empty() {
        return placeholder_row(6, "Tidak ada task prioritas");
    }
    tasks
        .iter()
        .map(|t| {
            let project = t.project_id.and_then(|id| project_name(projects, id));
            format!(
                r#"<tr class="slide-in"><td><small class="text-primary">{}</small></td><td><strong>{}</strong></td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>"#,
                escape_html(or_dash(project)),
                escape_html(or_dash(t.name.as_deref())),
                escape_html(or_dash(t.pic.as_deref())),
                escape_html(&format_date(t.due_date.as_deref())),
                status_badge(t.status.as_deref()),
                progress_cell(t.progress, 6, "small", "")
            )
        })
        .collect()
}

// ========================
// Projects
// ========================

pub fn projects_rows(projects: &[Project]) -> String {
    if projects.is_empty() {
        return placeholder_row(7, "Belum ada proyek");
    }
    projects
        .iter()
        .map(|p| {
            let location = match p.location.as_deref().filter(|l| !l.is_empty()) {
                Some(l) => format!(
                    r#"<div class="text-muted small"><i class="fas fa-map-marker-alt"></i> {}</div>"#,
                    escape_html(l)
                ),
                None => String::new(),
            };
            format!(
                r#"<tr class="slide-in"><td><div class="fw-bold text-primary">{}</div>{}</td><td>{}</td><td>{}</td><td>{}</td><td class="fw-bold">{}</td><td>{}</td><td>{}</td></tr>"#,
                escape_html(or_dash(p.name.as_deref())),
                location,
                status_badge(p.status.as_deref()),
                priority_badge(p.priority.as_deref()),
                date_range_cell(p.start_date.as_deref(), p.end_date.as_deref()),
                format_currency(p.budget.unwrap_or(0.0)),
                progress_cell(p.progress, 6, "small", ""),
                edit_delete_buttons(p.id)
            )
        })
        .collect()
}

pub fn project_tasks_rows(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return placeholder_row(6, "Belum ada task");
    }
    tasks
        .iter()
        .map(|t| {
            format!(
                r#"<tr><td><div class="fw-bold">{}</div>{}</td><td>{}</td><td>{}</td><td class="small">{}</td><td>{}</td><td>{}</td></tr>"#,
                escape_html(or_dash(t.name.as_deref())),
                subline(t.description.as_deref(), "text-muted small"),
                escape_html(or_dash(t.pic.as_deref())),
                escape_html(&format_date(t.due_date.as_deref())),
                escape_html(or_dash(t.action_plan.as_deref())),
                status_badge(t.status.as_deref()),
                delete_button(t.id)
            )
        })
        .collect()
}

/// Detail card for the selected project
pub fn project_info_html(project: &Project) -> String {
    let budget = project.budget.unwrap_or(0.0);
    let actual = project.actual_cost.unwrap_or(0.0);
    let variance = budget - actual;
    let (variance_class, variance_icon) = if variance >= 0.0 {
        ("text-success", "fa-arrow-up")
    } else {
        ("text-danger", "fa-arrow-down")
    };
    let progress = format_number(project.progress.unwrap_or(0.0));

    format!(
        r#"<div class="mb-3"><h6 class="text-muted mb-2">Deskripsi</h6><p class="small">{description}</p></div>
<div class="mb-3"><h6 class="text-muted mb-2">Lokasi</h6><p class="small"><i class="fas fa-map-marker-alt"></i> {location}</p></div>
<div class="mb-3"><h6 class="text-muted mb-2">Tanggal</h6><p class="small mb-1">Start: {start}</p><p class="small">End: {end}</p></div>
<div class="mb-3"><h6 class="text-muted mb-2">Finansial</h6><p class="small mb-1">Budget: {budget}</p><p class="small mb-1">Actual: {actual}</p><p class="small {variance_class}"><i class="fas {variance_icon}"></i> Variance: {variance}</p></div>
<div class="mb-3"><h6 class="text-muted mb-2">Progress</h6><div class="progress" style="height: 10px;"><div class="progress-bar" style="width: {progress}%"></div></div><div class="d-flex justify-content-between mt-1"><small class="text-muted">0%</small><small class="fw-bold">{progress}%</small><small class="text-muted">100%</small></div></div>"#,
        description = escape_html(or_dash(project.description.as_deref())),
        location = escape_html(or_dash(project.location.as_deref())),
        start = escape_html(&format_date(project.start_date.as_deref())),
        end = escape_html(&format_date(project.end_date.as_deref())),
        budget = format_currency(budget),
        actual = format_currency(actual),
        variance_class = variance_class,
        variance_icon = variance_icon,
        variance = format_currency(variance.abs()),
        progress = progress,
    )
}

// ========================
// Non-Projects
// ========================

pub fn non_projects_rows(non_projects: &[NonProject]) -> String {
    if non_projects.is_empty() {
        return concat!(
            r#"<tr><td colspan="7" class="text-center py-4"><div class="text-muted">"#,
            r#"<i class="fas fa-inbox fa-2x mb-3"></i><div>Belum ada non-proyek</div>"#,
            r#"<small>Klik &quot;Tambah&quot; untuk menambahkan non-proyek baru</small></div></td></tr>"#
        )
        .to_string();
    }
    non_projects
        .iter()
        .map(|np| {
            let category = np.category.as_deref().filter(|c| !c.is_empty());
            format!(
                r#"<tr class="slide-in"><td><div class="fw-bold text-primary">{}</div>{}</td><td><span class="badge" style="background: {}; color: white;">{}</span></td><td>{}</td><td>{}</td><td class="fw-bold text-success">{}</td><td>{}</td><td>{}</td></tr>"#,
                escape_html(or_dash(np.name.as_deref())),
                subline(np.description.as_deref(), "text-muted small mt-1"),
                category_color(category),
                escape_html(category.unwrap_or("Lainnya")),
                status_badge(np.status.as_deref()),
                date_range_cell(np.start_date.as_deref(), np.end_date.as_deref()),
                format_currency(np.budget.unwrap_or(0.0)),
                progress_cell(np.progress, 8, "small fw-bold", ""),
                edit_delete_buttons(np.id)
            )
        })
        .collect()
}

// ========================
// Manpower
// ========================

pub fn manpower_rows(people: &[ManPower]) -> String {
    if people.is_empty() {
        return placeholder_row(6, "Belum ada manpower");
    }
    people
        .iter()
        .map(|person| {
            let availability = person.availability.unwrap_or(0.0);
            format!(
                r#"<tr class="slide-in"><td><div class="fw-bold text-primary">{}</div>{}</td><td>{}</td><td>{}</td><td class="small">{}</td><td>{}</td><td>{}</td></tr>"#,
                escape_html(or_dash(person.name.as_deref())),
                subline(person.email.as_deref(), "text-muted small"),
                escape_html(or_dash(person.position.as_deref())),
                escape_html(or_dash(person.department.as_deref())),
                escape_html(or_dash(person.skills.as_deref())),
                progress_cell(Some(availability), 6, "small", availability_bar_class(availability)),
                edit_delete_buttons(person.id)
            )
        })
        .collect()
}

pub fn assignments_rows(assignments: &[Assignment], projects: &[Project]) -> String {
    if assignments.is_empty() {
        return placeholder_row(5, "Belum ada assignment");
    }
    assignments
        .iter()
        .map(|a| {
            let target = assignment_target_label(a, projects).unwrap_or_else(|| "-".to_string());
            let status = a.status.as_deref().filter(|s| !s.is_empty()).unwrap_or("Active");
            let badge = if status == "Active" { "bg-success" } else { "bg-secondary" };
            format!(
                r#"<tr><td>{}</td><td>{}</td><td>{} jam/minggu</td><td><span class="badge {}">{}</span></td><td>{}</td></tr>"#,
                escape_html(&target),
                escape_html(or_dash(a.role.as_deref())),
                format_number(a.hours_per_week.unwrap_or(0.0)),
                badge,
                escape_html(status),
                delete_button(a.id)
            )
        })
        .collect()
}

// ========================
// Map
// ========================

pub fn location_popup_html(location: &Location) -> String {
    format!(
        r#"<div style="min-width: 200px;"><h6 style="margin: 0 0 5px 0; color: #006400;"><strong>{}</strong></h6><p style="margin: 0 0 5px 0; font-size: 12px;"><i class="fas fa-map-marker-alt"></i> {}</p><p style="margin: 0 0 5px 0; font-size: 12px;">Status: {}</p><p style="margin: 0; font-size: 12px;">Prioritas: {}</p></div>"#,
        escape_html(or_dash(location.name.as_deref())),
        escape_html(or_dash(location.location.as_deref())),
        status_badge(location.status.as_deref()),
        priority_badge(location.priority.as_deref())
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_project(id: u32, name: &str) -> Project {
        Project {
            id,
            name: Some(name.to_string()),
            status: Some("In Progress".to_string()),
            priority: Some("High".to_string()),
            budget: Some(1_500_000.0),
            progress: Some(40.0),
            ..Default::default()
        }
    }

    fn row_count(html: &str) -> usize {
        html.matches("<tr").count()
    }

    #[test]
    fn test_empty_tables_render_placeholder() {
        assert_eq!(
            priority_projects_rows(&[]),
            r#"<tr><td colspan="3" class="text-center text-muted">Tidak ada proyek prioritas</td></tr>"#
        );
        assert!(priority_tasks_rows(&[], &[]).contains(r#"colspan="6""#));
        assert!(projects_rows(&[]).contains("Belum ada proyek"));
        assert!(project_tasks_rows(&[]).contains("Belum ada task"));
        assert!(non_projects_rows(&[]).contains(r#"colspan="7""#));
        assert!(non_projects_rows(&[]).contains("Belum ada non-proyek"));
        assert!(manpower_rows(&[]).contains(r#"colspan="6""#));
        assert!(assignments_rows(&[], &[]).contains("Belum ada assignment"));
        for html in [projects_rows(&[]), manpower_rows(&[]), assignments_rows(&[], &[])] {
            assert_eq!(row_count(&html), 1);
        }
    }

    #[test]
    fn test_one_row_per_record() {
        let projects = vec![make_project(1, "Bendungan"), make_project(2, "Jembatan"), make_project(3, "Pelabuhan")];
        assert_eq!(row_count(&projects_rows(&projects)), 3);
        assert_eq!(row_count(&priority_projects_rows(&projects)), 3);

        let html = projects_rows(&projects);
        assert!(html.contains("status-in-progress"));
        assert!(html.contains("priority-high"));
        assert!(html.contains("Rp 1.500.000"));
        assert!(html.contains(r#"data-action="edit" data-id="2""#));
        assert!(html.contains(r#"data-action="delete" data-id="3""#));
    }

    #[test]
    fn test_missing_fields_render_defaults() {
        let html = projects_rows(&[Project { id: 9, ..Default::default() }]);
        assert!(html.contains(">-</div>"));
        assert!(html.contains("status-not-started"));
        assert!(html.contains(">Not Started<"));
        assert!(html.contains("priority-medium"));
        assert!(html.contains("Rp 0"));
        assert!(html.contains("width: 0%"));

        let np = non_projects_rows(&[NonProject { id: 1, ..Default::default() }]);
        assert!(np.contains(">Lainnya<"));
        assert!(np.contains("#6c757d"));
    }

    #[test]
    fn test_text_is_escaped() {
        let html = projects_rows(&[make_project(1, "<script>alert(1)</script>")]);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_priority_tasks_look_up_project_name() {
        let projects = vec![make_project(4, "Tol Trans Jawa")];
        let tasks = vec![
            Task { id: 1, project_id: Some(4), name: Some("Survey".into()), ..Default::default() },
            Task { id: 2, project_id: Some(99), ..Default::default() },
        ];
        let html = priority_tasks_rows(&tasks, &projects);
        assert_eq!(row_count(&html), 2);
        assert!(html.contains("Tol Trans Jawa"));
    }

    #[test]
    fn test_manpower_availability_colors() {
        assert_eq!(availability_bar_class(100.0), "bg-success");
        assert_eq!(availability_bar_class(80.0), "bg-warning");
        assert_eq!(availability_bar_class(50.0), "bg-danger");

        let people = vec![ManPower { id: 1, availability: Some(90.0), ..Default::default() }];
        assert!(manpower_rows(&people).contains("progress-bar bg-success"));
    }

    #[test]
    fn test_assignment_rows() {
        let projects = vec![make_project(1, "Bendungan")];
        let assignments = vec![
            Assignment { id: 1, project_id: Some(1), hours_per_week: Some(20.0), ..Default::default() },
            Assignment {
                id: 2,
                non_project_id: Some(5),
                status: Some("Completed".into()),
                ..Default::default()
            },
        ];
        let html = assignments_rows(&assignments, &projects);
        assert_eq!(row_count(&html), 2);
        assert!(html.contains("Proyek Bendungan"));
        assert!(html.contains("Non-Proyek 5"));
        assert!(html.contains("20 jam/minggu"));
        assert!(html.contains(r#"badge bg-success">Active"#));
        assert!(html.contains(r#"badge bg-secondary">Completed"#));
    }

    #[test]
    fn test_assignment_target_label_fallbacks() {
        let orphan = Assignment { id: 1, project_id: Some(42), ..Default::default() };
        assert_eq!(assignment_target_label(&orphan, &[]), Some("Proyek #42".to_string()));
        assert_eq!(assignment_target_label(&Assignment::default(), &[]), None);
    }

    #[test]
    fn test_project_info_variance() {
        let over = Project { budget: Some(100.0), actual_cost: Some(250.0), ..Default::default() };
        let html = project_info_html(&over);
        assert!(html.contains("text-danger"));
        assert!(html.contains("fa-arrow-down"));
        assert!(html.contains("Variance: Rp 150"));

        let under = Project { budget: Some(300.0), actual_cost: Some(100.0), ..Default::default() };
        assert!(project_info_html(&under).contains("text-success"));
    }

    #[test]
    fn test_row_action_parse() {
        assert_eq!(RowAction::parse("edit", "12"), Some(RowAction::Edit(12)));
        assert_eq!(RowAction::parse("delete", "3"), Some(RowAction::Delete(3)));
        assert_eq!(RowAction::parse("archive", "3"), None);
        assert_eq!(RowAction::parse("edit", "abc"), None);
    }

    #[test]
    fn test_location_popup() {
        let loc = Location {
            name: Some("Bendungan".into()),
            status: Some("On Track".into()),
            ..Default::default()
        };
        let html = location_popup_html(&loc);
        assert!(html.contains("status-on-track"));
        assert!(html.contains("priority-medium"));
    }
}
