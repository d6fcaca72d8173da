//! Form State & Payloads
//!
//! Each modal edits a plain struct of raw input strings. Submission coerces
//! those strings into a typed JSON payload; numeric fields fall back to fixed
//! defaults when empty or unparseable.

use serde::Serialize;
use thiserror::Error;

use crate::format::{date_input_value, format_number};
use crate::models::{ManPower, NonProject, Project};

/// Whether the modal's primary button creates or updates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Create,
    Edit(u32),
}

impl FormMode {
    pub fn submit_label(self) -> &'static str {
        match self {
            FormMode::Create => "Simpan",
            FormMode::Edit(_) => "Update",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Silakan pilih target assignment (proyek atau non-proyek)")]
    MissingTarget,
}

// ========================
// Coercion
// ========================

/// Float with a literal fallback. Zero is kept as zero.
pub fn parse_float(raw: &str, fallback: f64) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(fallback)
}

/// Integer with a literal fallback; `12.7` truncates to `12`
pub fn parse_int(raw: &str, fallback: i64) -> i64 {
    let raw = raw.trim();
    raw.parse::<i64>()
        .ok()
        .or_else(|| raw.parse::<f64>().ok().filter(|v| v.is_finite()).map(|v| v.trunc() as i64))
        .unwrap_or(fallback)
}

/// Blank or invalid becomes `null`
pub fn parse_optional_float(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn number_input(value: Option<f64>) -> String {
    value.map(format_number).unwrap_or_default()
}

fn text_input(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn select_input(value: &Option<String>, default: &str) -> String {
    value
        .clone()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

pub const STATUSES: [&str; 5] = ["Not Started", "In Progress", "On Track", "Delayed", "Completed"];
pub const PRIORITIES: [&str; 4] = ["Low", "Medium", "High", "Critical"];
pub const ASSIGNMENT_STATUSES: [&str; 3] = ["Active", "On Hold", "Completed"];

// ========================
// Project
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectForm {
    pub name: String,
    pub description: String,
    pub location: String,
    pub latitude: String,
    pub longitude: String,
    pub start_date: String,
    pub end_date: String,
    pub budget: String,
    pub actual_cost: String,
    pub progress: String,
    pub status: String,
    pub priority: String,
}

impl Default for ProjectForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            location: String::new(),
            latitude: String::new(),
            longitude: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            budget: String::new(),
            actual_cost: String::new(),
            progress: String::new(),
            status: "Not Started".to_string(),
            priority: "Medium".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectPayload {
    pub name: String,
    pub description: String,
    pub location: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub start_date: String,
    pub end_date: String,
    pub budget: f64,
    pub actual_cost: f64,
    pub progress: f64,
    pub status: String,
    pub priority: String,
}

impl ProjectForm {
    pub fn from_record(project: &Project) -> Self {
        let defaults = Self::default();
        Self {
            name: text_input(&project.name),
            description: text_input(&project.description),
            location: text_input(&project.location),
            latitude: number_input(project.latitude),
            longitude: number_input(project.longitude),
            start_date: date_input_value(project.start_date.as_deref()),
            end_date: date_input_value(project.end_date.as_deref()),
            budget: number_input(project.budget),
            actual_cost: number_input(project.actual_cost),
            progress: number_input(project.progress),
            status: select_input(&project.status, &defaults.status),
            priority: select_input(&project.priority, &defaults.priority),
        }
    }

    pub fn to_payload(&self) -> ProjectPayload {
        ProjectPayload {
            name: self.name.clone(),
            description: self.description.clone(),
            location: self.location.clone(),
            latitude: parse_optional_float(&self.latitude),
            longitude: parse_optional_float(&self.longitude),
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
            budget: parse_float(&self.budget, 0.0),
            actual_cost: parse_float(&self.actual_cost, 0.0),
            progress: parse_float(&self.progress, 0.0),
            status: self.status.clone(),
            priority: self.priority.clone(),
        }
    }
}

// ========================
// Task
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct TaskForm {
    pub name: String,
    pub description: String,
    pub pic: String,
    pub due_date: String,
    pub action_plan: String,
    pub status: String,
    pub priority: String,
}

impl Default for TaskForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            pic: String::new(),
            due_date: String::new(),
            action_plan: String::new(),
            status: "Not Started".to_string(),
            priority: "Medium".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskPayload {
    pub project_id: u32,
    pub name: String,
    pub description: String,
    pub pic: String,
    pub due_date: String,
    pub action_plan: String,
    pub status: String,
    pub priority: String,
    pub progress: f64,
}

impl TaskForm {
    /// New tasks always start at 0 % progress
    pub fn to_payload(&self, project_id: u32) -> TaskPayload {
        TaskPayload {
            project_id,
            name: self.name.clone(),
            description: self.description.clone(),
            pic: self.pic.clone(),
            due_date: self.due_date.clone(),
            action_plan: self.action_plan.clone(),
            status: self.status.clone(),
            priority: self.priority.clone(),
            progress: 0.0,
        }
    }
}

// ========================
// Non-Project
// ========================

pub const NON_PROJECT_CATEGORIES: [&str; 5] = ["Internal", "Meeting", "Training", "Maintenance", "Lainnya"];

#[derive(Debug, Clone, PartialEq)]
pub struct NonProjectForm {
    pub name: String,
    pub category: String,
    pub description: String,
    pub status: String,
    pub start_date: String,
    pub end_date: String,
    pub budget: String,
    pub actual_cost: String,
    pub progress: String,
}

impl Default for NonProjectForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: "Internal".to_string(),
            description: String::new(),
            status: "Not Started".to_string(),
            start_date: String::new(),
            end_date: String::new(),
            budget: String::new(),
            actual_cost: String::new(),
            progress: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NonProjectPayload {
    pub name: String,
    pub category: String,
    pub description: String,
    pub status: String,
    pub start_date: String,
    pub end_date: String,
    pub budget: f64,
    pub actual_cost: f64,
    pub progress: f64,
}

impl NonProjectForm {
    pub fn from_record(np: &NonProject) -> Self {
        let defaults = Self::default();
        Self {
            name: text_input(&np.name),
            category: select_input(&np.category, &defaults.category),
            description: text_input(&np.description),
            status: select_input(&np.status, &defaults.status),
            start_date: date_input_value(np.start_date.as_deref()),
            end_date: date_input_value(np.end_date.as_deref()),
            budget: number_input(np.budget),
            actual_cost: number_input(np.actual_cost),
            progress: number_input(np.progress),
        }
    }

    pub fn to_payload(&self) -> NonProjectPayload {
        NonProjectPayload {
            name: self.name.clone(),
            category: self.category.clone(),
            description: self.description.clone(),
            status: self.status.clone(),
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
            budget: parse_float(&self.budget, 0.0),
            actual_cost: parse_float(&self.actual_cost, 0.0),
            progress: parse_float(&self.progress, 0.0),
        }
    }
}

// ========================
// Manpower
// ========================

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ManPowerForm {
    pub name: String,
    pub email: String,
    pub position: String,
    pub department: String,
    pub skills: String,
    pub total_hours: String,
    pub availability: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManPowerPayload {
    pub name: String,
    pub email: String,
    pub position: String,
    pub department: String,
    pub skills: String,
    pub total_hours: i64,
    pub availability: f64,
}

impl ManPowerForm {
    pub fn from_record(person: &ManPower) -> Self {
        Self {
            name: text_input(&person.name),
            email: text_input(&person.email),
            position: text_input(&person.position),
            department: text_input(&person.department),
            skills: text_input(&person.skills),
            total_hours: number_input(person.total_hours),
            availability: number_input(person.availability),
        }
    }

    pub fn to_payload(&self) -> ManPowerPayload {
        ManPowerPayload {
            name: self.name.clone(),
            email: self.email.clone(),
            position: self.position.clone(),
            department: self.department.clone(),
            skills: self.skills.clone(),
            total_hours: parse_int(&self.total_hours, 40),
            availability: parse_float(&self.availability, 100.0),
        }
    }
}

// ========================
// Assignment
// ========================

/// The one thing an assignment points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentTarget {
    Project(u32),
    NonProject(u32),
}

pub const TARGET_PROJECT: &str = "project";
pub const TARGET_NON_PROJECT: &str = "non_project";

#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentForm {
    /// `project`, `non_project` or empty. Never sent to the backend.
    pub target_type: String,
    pub project_id: String,
    pub non_project_id: String,
    pub role: String,
    pub hours_per_week: String,
    pub start_date: String,
    pub end_date: String,
    pub status: String,
}

impl Default for AssignmentForm {
    fn default() -> Self {
        Self {
            target_type: String::new(),
            project_id: String::new(),
            non_project_id: String::new(),
            role: String::new(),
            hours_per_week: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            status: "Active".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignmentPayload {
    pub manpower_id: u32,
    pub project_id: Option<u32>,
    pub non_project_id: Option<u32>,
    pub role: String,
    pub hours_per_week: i64,
    pub start_date: String,
    pub end_date: String,
    pub status: String,
}

impl AssignmentForm {
    pub fn shows_project_select(&self) -> bool {
        self.target_type == TARGET_PROJECT
    }

    pub fn shows_non_project_select(&self) -> bool {
        self.target_type == TARGET_NON_PROJECT
    }

    pub fn target(&self) -> Result<AssignmentTarget, FormError> {
        let parse_id = |raw: &str| raw.trim().parse::<u32>().map_err(|_| FormError::MissingTarget);
        match self.target_type.as_str() {
            TARGET_PROJECT => parse_id(&self.project_id).map(AssignmentTarget::Project),
            TARGET_NON_PROJECT => parse_id(&self.non_project_id).map(AssignmentTarget::NonProject),
            _ => Err(FormError::MissingTarget),
        }
    }

    /// The foreign key not matching the target type is always `null`
    pub fn to_payload(&self, manpower_id: u32) -> Result<AssignmentPayload, FormError> {
        let (project_id, non_project_id) = match self.target()? {
            AssignmentTarget::Project(id) => (Some(id), None),
            AssignmentTarget::NonProject(id) => (None, Some(id)),
        };
        Ok(AssignmentPayload {
            manpower_id,
            project_id,
            non_project_id,
            role: self.role.clone(),
            hours_per_week: parse_int(&self.hours_per_week, 0),
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
            status: self.status.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_mode_labels() {
        assert_eq!(FormMode::default(), FormMode::Create);
        assert_eq!(FormMode::Create.submit_label(), "Simpan");
        assert_eq!(FormMode::Edit(3).submit_label(), "Update");
    }

    #[test]
    fn test_numeric_fallbacks() {
        assert_eq!(parse_float("", 0.0), 0.0);
        assert_eq!(parse_float("abc", 100.0), 100.0);
        assert_eq!(parse_float(" 12.5 ", 0.0), 12.5);
        assert_eq!(parse_float("0", 100.0), 0.0);
        assert_eq!(parse_int("", 40), 40);
        assert_eq!(parse_int("37.9", 40), 37);
        assert_eq!(parse_int("x", 0), 0);
        assert_eq!(parse_optional_float(""), None);
        assert_eq!(parse_optional_float("-6.2"), Some(-6.2));
    }

    #[test]
    fn test_project_payload_defaults() {
        let form = ProjectForm {
            name: "Bendungan".into(),
            budget: "lots".into(),
            latitude: "-6.2".into(),
            ..Default::default()
        };
        let payload = form.to_payload();
        assert_eq!(payload.budget, 0.0);
        assert_eq!(payload.actual_cost, 0.0);
        assert_eq!(payload.progress, 0.0);
        assert_eq!(payload.latitude, Some(-6.2));
        assert_eq!(payload.longitude, None);

        let json = serde_json::to_value(&payload).unwrap();
        assert!(json["longitude"].is_null());
    }

    #[test]
    fn test_project_form_from_record() {
        let project = Project {
            id: 1,
            name: Some("Tol".into()),
            start_date: Some("2024-03-01T00:00:00".into()),
            budget: Some(2_000_000.0),
            status: None,
            ..Default::default()
        };
        let form = ProjectForm::from_record(&project);
        assert_eq!(form.start_date, "2024-03-01");
        assert_eq!(form.budget, "2000000");
        assert_eq!(form.latitude, "");
        assert_eq!(form.status, "Not Started");
    }

    #[test]
    fn test_manpower_payload_defaults() {
        let payload = ManPowerForm::default().to_payload();
        assert_eq!(payload.total_hours, 40);
        assert_eq!(payload.availability, 100.0);
    }

    #[test]
    fn test_task_payload_starts_at_zero() {
        let form = TaskForm {
            name: "Survey lokasi".into(),
            ..Default::default()
        };
        let payload = form.to_payload(8);
        assert_eq!(payload.project_id, 8);
        assert_eq!(payload.progress, 0.0);
    }

    #[test]
    fn test_assignment_project_target_nulls_non_project() {
        let form = AssignmentForm {
            target_type: TARGET_PROJECT.into(),
            project_id: "3".into(),
            non_project_id: "9".into(),
            hours_per_week: "16".into(),
            ..Default::default()
        };
        let payload = form.to_payload(5).unwrap();
        assert_eq!(payload.project_id, Some(3));
        assert_eq!(payload.non_project_id, None);
        assert_eq!(payload.manpower_id, 5);
        assert_eq!(payload.hours_per_week, 16);

        let json = serde_json::to_value(&payload).unwrap();
        assert!(json["non_project_id"].is_null());
        assert!(json.get("target_type").is_none());
    }

    #[test]
    fn test_assignment_non_project_target_nulls_project() {
        let form = AssignmentForm {
            target_type: TARGET_NON_PROJECT.into(),
            project_id: "3".into(),
            non_project_id: "9".into(),
            ..Default::default()
        };
        let payload = form.to_payload(5).unwrap();
        assert_eq!(payload.project_id, None);
        assert_eq!(payload.non_project_id, Some(9));
        assert_eq!(payload.hours_per_week, 0);
    }

    #[test]
    fn test_assignment_without_target_is_rejected() {
        assert_eq!(AssignmentForm::default().to_payload(1), Err(FormError::MissingTarget));
        let form = AssignmentForm {
            target_type: TARGET_PROJECT.into(),
            ..Default::default()
        };
        assert_eq!(form.target(), Err(FormError::MissingTarget));
        assert!(form.shows_project_select());
        assert!(!form.shows_non_project_select());
    }
}
