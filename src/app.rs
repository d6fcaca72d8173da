//! Project Dashboard App
//!
//! Root component: provides the app context, renders the tab bar and the
//! four panels, and owns the page-level timers (auto-refresh, resize debounce).

use gloo_timers::callback::{Interval, Timeout};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::charts::redraw_all;
use crate::components::{
    switch_tab, ManpowerPanel, NonProjectsPanel, ProjectsPanel, SummaryPanel, TabBar, ToastAlert,
};
use crate::config::{DashboardConfig, REFRESH_INTERVAL, RESIZE_DEBOUNCE, STARTUP_REDRAW_DELAY};
use crate::context::AppContext;
use crate::loaders::load_all_data;
use crate::map::{MapView, MAP_ELEMENT_ID};
use crate::store::AppStateStoreFields;
use crate::tabs::Tab;

#[component]
pub fn App() -> impl IntoView {
    let config = DashboardConfig::detect();
    log::info!("[app] backend: {:?}", config.api_base_url);

    let ctx = AppContext::new(&config);
    provide_context(ctx);

    // Runs once the panels are in the DOM
    Effect::new(move |_| {
        match MapView::init(MAP_ELEMENT_ID) {
            Ok(map) => ctx.map.set_value(Some(map)),
            Err(e) => {
                log::error!("[app] map init failed: {}", e);
                ctx.store.map_failed().set(true);
            }
        }
        switch_tab(ctx, Tab::Summary);

        let charts = ctx.charts;
        Timeout::new(STARTUP_REDRAW_DELAY.as_millis() as u32, move || redraw_all(charts)).forget();
    });

    // Auto-refresh of the active tab
    let refresh = StoredValue::new_local(Some(Interval::new(REFRESH_INTERVAL.as_millis() as u32, move || {
        log::debug!("[app] auto-refresh");
        spawn_local(load_all_data(ctx));
    })));

    // Debounced resize; replacing the pending timeout cancels it
    let pending_resize = StoredValue::new_local(None::<Timeout>);
    let charts = ctx.charts;
    let resize = window_event_listener(leptos::ev::resize, move |_| {
        let timeout = Timeout::new(RESIZE_DEBOUNCE.as_millis() as u32, move || redraw_all(charts));
        pending_resize.set_value(Some(timeout));
    });

    on_cleanup(move || {
        let _ = refresh.try_update_value(|interval| interval.take());
        let _ = pending_resize.try_update_value(|timeout| timeout.take());
        resize.remove();
        let _ = charts.try_update_value(|registry| registry.clear());
    });

    view! {
        <nav class="navbar navbar-dark bg-success mb-4">
            <div class="container-fluid">
                <span class="navbar-brand mb-0 h1">
                    <i class="fas fa-hard-hat me-2"></i>"Dashboard Proyek"
                </span>
            </div>
        </nav>
        <main class="container-fluid">
            <TabBar />
            <div class="tab-content">
                <SummaryPanel />
                <ProjectsPanel />
                <NonProjectsPanel />
                <ManpowerPanel />
            </div>
        </main>
        <ToastAlert ctx=ctx.toast />
    }
}
