//! Frontend Models
//!
//! Data structures matching backend JSON. The backend owns every record;
//! optional fields stay optional so partial rows still render.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit JSON `null` like a missing field
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub id: u32,
    pub name: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub budget: Option<f64>,
    pub actual_cost: Option<f64>,
    pub progress: Option<f64>,
    pub status: Option<String>,
    pub priority: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Task {
    pub id: u32,
    pub project_id: Option<u32>,
    pub non_project_id: Option<u32>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub pic: Option<String>,
    pub due_date: Option<String>,
    pub action_plan: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub progress: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NonProject {
    pub id: u32,
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub budget: Option<f64>,
    pub actual_cost: Option<f64>,
    pub progress: Option<f64>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ManPower {
    pub id: u32,
    pub name: Option<String>,
    pub email: Option<String>,
    pub position: Option<String>,
    pub department: Option<String>,
    pub skills: Option<String>,
    /// Weekly capacity in hours
    pub total_hours: Option<f64>,
    /// Percent, 0-100
    pub availability: Option<f64>,
}

/// Work allocation of one person to a project or a non-project
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Assignment {
    pub id: u32,
    pub manpower_id: Option<u32>,
    pub project_id: Option<u32>,
    pub non_project_id: Option<u32>,
    pub role: Option<String>,
    pub hours_per_week: Option<f64>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub status: Option<String>,
}

/// Map point for a located project
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    pub name: Option<String>,
    pub location: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub status: Option<String>,
    pub priority: Option<String>,
}

/// Planned vs actual progress per period
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SCurve {
    pub labels: Option<Vec<String>>,
    pub planned: Option<Vec<f64>>,
    pub actual: Option<Vec<f64>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Summary {
    #[serde(deserialize_with = "null_default")]
    pub total_projects: f64,
    #[serde(deserialize_with = "null_default")]
    pub total_non_projects: f64,
    #[serde(deserialize_with = "null_default")]
    pub total_manpower: f64,
    #[serde(deserialize_with = "null_default")]
    pub total_budget: f64,
    #[serde(deserialize_with = "null_default")]
    pub total_actual: f64,
    #[serde(deserialize_with = "null_default")]
    pub priority_projects: Vec<Project>,
    #[serde(deserialize_with = "null_default")]
    pub priority_tasks: Vec<Task>,
    #[serde(deserialize_with = "null_default")]
    pub locations: Vec<Location>,
    #[serde(deserialize_with = "null_default")]
    pub overall_s_curve: SCurve,
    #[serde(deserialize_with = "null_default")]
    pub status_distribution: BTreeMap<String, f64>,
    #[serde(deserialize_with = "null_default")]
    pub priority_distribution: BTreeMap<String, f64>,
    #[serde(deserialize_with = "null_default")]
    pub budget_variance: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_tolerates_missing_and_null_fields() {
        let summary: Summary = serde_json::from_str(
            r#"{"total_projects": 3, "locations": null, "status_distribution": {"Delayed": 1, "On Track": 2}}"#,
        )
        .unwrap();

        assert_eq!(summary.total_projects, 3.0);
        assert_eq!(summary.total_budget, 0.0);
        assert!(summary.locations.is_empty());
        assert!(summary.priority_projects.is_empty());
        assert_eq!(summary.overall_s_curve, SCurve::default());
        assert_eq!(summary.status_distribution.get("On Track"), Some(&2.0));
    }

    #[test]
    fn test_project_with_nulls_and_extra_fields() {
        let project: Project = serde_json::from_str(
            r#"{"id": 7, "name": "Jalan Tol", "latitude": null, "budget": 1500000, "created_at": "2024-01-01T00:00:00"}"#,
        )
        .unwrap();

        assert_eq!(project.id, 7);
        assert_eq!(project.name.as_deref(), Some("Jalan Tol"));
        assert_eq!(project.latitude, None);
        assert_eq!(project.budget, Some(1_500_000.0));
        assert_eq!(project.status, None);
    }

    #[test]
    fn test_assignment_with_single_target() {
        let assignment: Assignment = serde_json::from_str(
            r#"{"id": 1, "manpower_id": 2, "project_id": null, "non_project_id": 4, "hours_per_week": 12}"#,
        )
        .unwrap();

        assert_eq!(assignment.project_id, None);
        assert_eq!(assignment.non_project_id, Some(4));
        assert_eq!(assignment.hours_per_week, Some(12.0));
    }
}
