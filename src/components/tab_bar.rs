//! Tab Bar Component
//!
//! Navigation pills for the four dashboard panels.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::STARTUP_REDRAW_DELAY;
use crate::context::{use_app_context, AppContext};
use crate::loaders::load_tab;
use crate::store::{store_switch_tab, AppStateStoreFields};
use crate::tabs::Tab;

/// Activate `tab`, then load its data
pub fn switch_tab(ctx: AppContext, tab: Tab) {
    let transition = store_switch_tab(&ctx.store, tab);
    log::debug!("[tabs] {:?} -> {:?}", transition.deactivated, transition.activated);

    if tab == Tab::Summary {
        // leaflet measured the hidden container as zero-sized
        let map = ctx.map;
        Timeout::new(STARTUP_REDRAW_DELAY.as_millis() as u32, move || {
            let _ = map.try_with_value(|map| {
                if let Some(map) = map {
                    map.refresh_size();
                }
            });
        })
        .forget();
    }
    spawn_local(load_tab(ctx, tab));
}

#[component]
pub fn TabBar() -> impl IntoView {
    let ctx = use_app_context();
    let tabs = ctx.store.tabs();

    view! {
        <ul class="nav nav-tabs mb-4" role="tablist">
            {Tab::ALL
                .iter()
                .map(|&tab| {
                    let is_active = move || tabs.with(|t| t.is_active(tab));
                    view! {
                        <li class="nav-item" role="presentation">
                            <button
                                class="nav-link"
                                class:active=is_active
                                type="button"
                                role="tab"
                                aria-controls=tab.panel_id()
                                on:click=move |_| switch_tab(ctx, tab)
                            >
                                <i class=format!("{} me-1", tab.icon())></i>
                                {tab.label()}
                            </button>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
