//! Dashboard Configuration
//!
//! Values detected once at startup from the page location, plus fixed timings.

use std::time::Duration;

/// Backend used when the page is served from a development host
pub const DEV_API_BASE_URL: &str = "http://localhost:5000";

pub const REFRESH_INTERVAL: Duration = Duration::from_secs(30);
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(250);
pub const STARTUP_REDRAW_DELAY: Duration = Duration::from_millis(100);
pub const TOAST_LIFETIME: Duration = Duration::from_secs(5);

/// Max concurrent assignment requests while building the workload chart
pub const WORKLOAD_CONCURRENCY: usize = 4;

/// Indonesia
pub const MAP_CENTER: (f64, f64) = (-2.5489, 118.0149);
pub const MAP_ZOOM: u8 = 5;
pub const MAP_FIT_PADDING: u32 = 50;
pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_ATTRIBUTION: &str = "© OpenStreetMap contributors";
pub const TILE_MAX_ZOOM: u8 = 18;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Prefix for every `/api/...` path. Empty means same origin.
    pub api_base_url: String,
}

impl DashboardConfig {
    /// Detect from `window.location.hostname`
    pub fn detect() -> Self {
        let host = web_sys::window()
            .and_then(|w| w.location().hostname().ok())
            .unwrap_or_default();
        Self::for_host(&host)
    }

    pub fn for_host(host: &str) -> Self {
        let api_base_url = match host {
            "localhost" | "127.0.0.1" => DEV_API_BASE_URL.to_string(),
            _ => String::new(),
        };
        Self { api_base_url }
    }
}
