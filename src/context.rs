//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;
use leptos_chartjs::ChartRegistry;

use crate::api::ApiClient;
use crate::charts::ChartRegistryHandle;
use crate::components::ToastContext;
use crate::config::DashboardConfig;
use crate::map::MapView;
use crate::store::{AppState, AppStore};
use crate::workload::WorkloadRuns;

/// App-wide handles; all fields are arena handles so the context is `Copy`
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    pub toast: ToastContext,
    /// Live Chart.js instances keyed by chart
    pub charts: ChartRegistryHandle,
    /// Leaflet map, created once after mount
    pub map: StoredValue<Option<MapView>, LocalStorage>,
    /// Latest team workload fan-out
    pub workload_runs: StoredValue<WorkloadRuns>,
    api: StoredValue<ApiClient>,
}

impl AppContext {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            store: AppStore::new(AppState::default()),
            toast: ToastContext::new(),
            charts: ChartRegistry::shared(),
            map: StoredValue::new_local(None),
            workload_runs: StoredValue::new(WorkloadRuns::default()),
            api: StoredValue::new(ApiClient::new(config.api_base_url.clone())),
        }
    }

    pub fn api(&self) -> ApiClient {
        self.api.get_value()
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
