//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Collections are
//! replaced wholesale on every load; the backend stays authoritative.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::ProjectDetail;
use crate::models::{Assignment, ManPower, NonProject, Project, Summary};
use crate::tabs::{Tab, TabState, TabTransition};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Which panel is visible
    pub tabs: TabState,
    /// Last `/api/summary` response
    pub summary: Summary,
    /// Cached projects, also used for name lookups
    pub projects: Vec<Project>,
    pub non_projects: Vec<NonProject>,
    pub manpower: Vec<ManPower>,
    /// Project picked in the projects tab selector
    pub selected_project: Option<u32>,
    pub project_detail: Option<ProjectDetail>,
    /// Person picked in the manpower tab selector
    pub selected_manpower: Option<u32>,
    /// Assignments of the selected person
    pub assignments: Vec<Assignment>,
    /// Leaflet could not be initialised
    pub map_failed: bool,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

/// Activate a tab; exactly one stays active
pub fn store_switch_tab(store: &AppStore, tab: Tab) -> TabTransition {
    let mut transition = None;
    store.tabs().update(|tabs| transition = Some(tabs.switch(tab)));
    transition.unwrap_or(TabTransition {
        deactivated: tab,
        activated: tab,
    })
}

pub fn store_active_tab(store: &AppStore) -> Tab {
    store.tabs().with_untracked(|tabs| tabs.active())
}

/// Change the selected project; clearing it drops the loaded detail
pub fn store_select_project(store: &AppStore, id: Option<u32>) {
    store.selected_project().set(id);
    if id.is_none() {
        store.project_detail().set(None);
    }
}

/// Change the selected person; clearing it drops their assignments
pub fn store_select_manpower(store: &AppStore, id: Option<u32>) {
    store.selected_manpower().set(id);
    if id.is_none() {
        store.assignments().set(Vec::new());
    }
}

// ========================
// Selection Rules
// ========================

/// What a list reload means for the current selector value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// Still listed; reload its detail
    Keep(u32),
    /// Its record is gone; clear the selection and its detail
    Clear,
    /// Nothing was selected
    Empty,
}

pub fn reconcile_selection(selected: Option<u32>, listed: impl IntoIterator<Item = u32>) -> SelectionOutcome {
    match selected {
        None => SelectionOutcome::Empty,
        Some(id) if listed.into_iter().any(|listed_id| listed_id == id) => SelectionOutcome::Keep(id),
        Some(_) => SelectionOutcome::Clear,
    }
}

/// Whether a detail fetched for `requested` may still be shown
pub fn still_selected(current: Option<u32>, requested: u32) -> bool {
    current == Some(requested)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reload_keeps_listed_selection() {
        assert_eq!(reconcile_selection(Some(3), [1, 2, 3]), SelectionOutcome::Keep(3));
    }

    #[test]
    fn test_reload_clears_vanished_selection() {
        assert_eq!(reconcile_selection(Some(3), [1, 2]), SelectionOutcome::Clear);
        assert_eq!(reconcile_selection(Some(3), []), SelectionOutcome::Clear);
    }

    #[test]
    fn test_reload_without_selection() {
        assert_eq!(reconcile_selection(None, [1, 2]), SelectionOutcome::Empty);
    }

    #[test]
    fn test_stale_detail_is_dropped() {
        assert!(still_selected(Some(7), 7));
        assert!(!still_selected(Some(8), 7));
        assert!(!still_selected(None, 7));
    }
}
