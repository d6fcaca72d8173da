//! Tab State
//!
//! Exactly one of the four dashboard panels is active at a time.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Summary,
    Projects,
    NonProjects,
    Manpower,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Summary, Tab::Projects, Tab::NonProjects, Tab::Manpower];

    pub fn slug(self) -> &'static str {
        match self {
            Tab::Summary => "summary",
            Tab::Projects => "projects",
            Tab::NonProjects => "non-projects",
            Tab::Manpower => "manpower",
        }
    }

    /// DOM id of the panel, `<slug>-tab`
    pub fn panel_id(self) -> String {
        format!("{}-tab", self.slug())
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Summary => "Summary",
            Tab::Projects => "Proyek",
            Tab::NonProjects => "Non-Proyek",
            Tab::Manpower => "Man Power",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Tab::Summary => "fas fa-chart-pie",
            Tab::Projects => "fas fa-project-diagram",
            Tab::NonProjects => "fas fa-tasks",
            Tab::Manpower => "fas fa-users",
        }
    }
}

/// Result of a tab switch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabTransition {
    pub deactivated: Tab,
    pub activated: Tab,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TabState {
    active: Tab,
}

impl TabState {
    pub fn active(&self) -> Tab {
        self.active
    }

    pub fn is_active(&self, tab: Tab) -> bool {
        self.active == tab
    }

    /// Activate `tab`. Switching to the already active tab still counts as a
    /// transition so its loader runs again.
    pub fn switch(&mut self, tab: Tab) -> TabTransition {
        let deactivated = self.active;
        self.active = tab;
        TabTransition {
            deactivated,
            activated: tab,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_tab_is_summary() {
        assert_eq!(TabState::default().active(), Tab::Summary);
    }

    #[test]
    fn test_switch_leaves_exactly_one_active() {
        let mut state = TabState::default();
        for target in [Tab::Manpower, Tab::Projects, Tab::Projects, Tab::NonProjects, Tab::Summary] {
            let transition = state.switch(target);
            assert_eq!(transition.activated, target);
            let active: Vec<Tab> = Tab::ALL.into_iter().filter(|t| state.is_active(*t)).collect();
            assert_eq!(active, vec![target]);
        }
    }

    #[test]
    fn test_switch_reports_previous_tab() {
        let mut state = TabState::default();
        let transition = state.switch(Tab::NonProjects);
        assert_eq!(transition.deactivated, Tab::Summary);
    }

    #[test]
    fn test_panel_ids_follow_slugs() {
        assert_eq!(Tab::NonProjects.panel_id(), "non-projects-tab");
        let ids: Vec<String> = Tab::ALL.into_iter().map(Tab::panel_id).collect();
        assert_eq!(ids, vec!["summary-tab", "projects-tab", "non-projects-tab", "manpower-tab"]);
    }
}
