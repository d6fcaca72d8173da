//! UI Components
//!
//! Panels, modal forms and the small building blocks they share.

mod fields;
mod modal;
mod table_body;
mod tab_bar;
mod toast;
mod summary_panel;
mod projects_panel;
mod non_projects_panel;
mod manpower_panel;
mod project_form;
mod task_form;
mod non_project_form;
mod manpower_form;
mod assignment_form;

pub use fields::FieldBinding;
pub use manpower_panel::ManpowerPanel;
pub use non_projects_panel::NonProjectsPanel;
pub use projects_panel::ProjectsPanel;
pub use summary_panel::SummaryPanel;
pub use tab_bar::{switch_tab, TabBar};
pub use toast::{ToastAlert, ToastContext};
