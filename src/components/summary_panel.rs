//! Summary Panel
//!
//! Totals cards, project map, overall S-curve, status doughnut and the two
//! priority tables.

use leptos::prelude::*;

use crate::charts::ChartKey;
use crate::context::use_app_context;
use crate::format::{format_currency, format_number};
use crate::map::MAP_ELEMENT_ID;
use crate::store::AppStateStoreFields;
use crate::tables::{priority_projects_rows, priority_tasks_rows};
use crate::tabs::Tab;

#[component]
fn SummaryCard(
    id: &'static str,
    title: &'static str,
    icon: &'static str,
    #[prop(into)] value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="col-md-3 mb-3">
            <div class="card summary-card h-100">
                <div class="card-body d-flex align-items-center">
                    <i class=format!("fas {} fa-2x text-primary me-3", icon)></i>
                    <div>
                        <div class="text-muted small">{title}</div>
                        <div class="h4 mb-0" id=id>{move || value.get()}</div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn SummaryPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let summary = store.summary();
    let active = move || store.tabs().with(|t| t.is_active(Tab::Summary));

    let priority_projects = move || summary.with(|s| priority_projects_rows(&s.priority_projects));
    let priority_tasks = move || {
        summary.with(|s| store.projects().with(|projects| priority_tasks_rows(&s.priority_tasks, projects)))
    };

    view! {
        <div id=Tab::Summary.panel_id() class="tab-pane" style:display=move || if active() { "block" } else { "none" }>
            <div class="row">
                <SummaryCard
                    id="total-projects"
                    title="Total Proyek"
                    icon="fa-project-diagram"
                    value=Signal::derive(move || summary.with(|s| format_number(s.total_projects)))
                />
                <SummaryCard
                    id="total-non-projects"
                    title="Total Non-Proyek"
                    icon="fa-tasks"
                    value=Signal::derive(move || summary.with(|s| format_number(s.total_non_projects)))
                />
                <SummaryCard
                    id="total-budget"
                    title="Total Budget"
                    icon="fa-wallet"
                    value=Signal::derive(move || summary.with(|s| format_currency(s.total_budget)))
                />
                <SummaryCard
                    id="total-actual"
                    title="Total Actual"
                    icon="fa-money-bill-wave"
                    value=Signal::derive(move || summary.with(|s| format_currency(s.total_actual)))
                />
            </div>

            <div class="row">
                <div class="col-lg-8 mb-4">
                    <div class="card h-100">
                        <div class="card-header"><i class="fas fa-map-marked-alt me-2"></i>"Peta Lokasi Proyek"</div>
                        <div class="card-body p-0">
                            <Show
                                when=move || store.map_failed().get()
                                fallback=|| view! { <div id=MAP_ELEMENT_ID class="map-container"></div> }
                            >
                                <div class="map-container d-flex align-items-center justify-content-center">
                                    <div class="text-center text-muted">
                                        <i class="fas fa-exclamation-triangle fa-2x mb-2"></i>
                                        <div>"Gagal memuat peta"</div>
                                        <small>"Periksa koneksi internet atau library Leaflet"</small>
                                    </div>
                                </div>
                            </Show>
                        </div>
                    </div>
                </div>
                <div class="col-lg-4 mb-4">
                    <div class="card h-100">
                        <div class="card-header"><i class="fas fa-chart-pie me-2"></i>"Distribusi Status"</div>
                        <div class="card-body chart-container">
                            <canvas id=ChartKey::StatusDistribution.canvas_id()></canvas>
                        </div>
                    </div>
                </div>
            </div>

            <div class="row">
                <div class="col-12 mb-4">
                    <div class="card">
                        <div class="card-header"><i class="fas fa-chart-line me-2"></i>"Kurva S Keseluruhan"</div>
                        <div class="card-body chart-container">
                            <canvas id=ChartKey::OverallSCurve.canvas_id()></canvas>
                        </div>
                    </div>
                </div>
            </div>

            <div class="row">
                <div class="col-lg-5 mb-4">
                    <div class="card h-100">
                        <div class="card-header"><i class="fas fa-star me-2"></i>"Proyek Prioritas"</div>
                        <div class="card-body table-responsive">
                            <table class="table table-hover mb-0">
                                <thead><tr><th>"Proyek"</th><th>"Deadline"</th><th>"Status"</th></tr></thead>
                                <tbody id="priority-projects" inner_html=priority_projects></tbody>
                            </table>
                        </div>
                    </div>
                </div>
                <div class="col-lg-7 mb-4">
                    <div class="card h-100">
                        <div class="card-header"><i class="fas fa-exclamation-circle me-2"></i>"Task Prioritas"</div>
                        <div class="card-body table-responsive">
                            <table class="table table-hover mb-0">
                                <thead>
                                    <tr>
                                        <th>"Proyek"</th>
                                        <th>"Task"</th>
                                        <th>"PIC"</th>
                                        <th>"Due Date"</th>
                                        <th>"Status"</th>
                                        <th>"Progress"</th>
                                    </tr>
                                </thead>
                                <tbody id="priority-tasks" inner_html=priority_tasks></tbody>
                            </table>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
