//! Projects Panel
//!
//! Projects table, project selector and the detail section of the selected
//! project (info card, S-curve, budget deviation, tasks).

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::modal::ModalState;
use super::project_form::ProjectFormModal;
use super::table_body::TableBody;
use super::task_form::TaskFormModal;
use crate::actions::{perform_delete, DeleteTarget};
use crate::charts::ChartKey;
use crate::context::use_app_context;
use crate::forms::{ProjectForm, TaskForm};
use crate::loaders::load_project_details;
use crate::store::{store_select_project, AppStateStoreFields};
use crate::tables::{project_info_html, project_tasks_rows, projects_rows, RowAction};
use crate::tabs::Tab;

#[component]
pub fn ProjectsPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let active = move || store.tabs().with(|t| t.is_active(Tab::Projects));

    let project_modal = ModalState::<ProjectForm>::new();
    let task_modal = ModalState::<TaskForm>::new();

    let on_select = move |ev: web_sys::Event| {
        let id = event_target_value(&ev).parse::<u32>().ok();
        store_select_project(&store, id);
        spawn_local(load_project_details(ctx));
    };

    let on_project_action = move |action: RowAction| match action {
        RowAction::Edit(id) => spawn_local(async move {
            match ctx.api().get_project(id).await {
                Ok(project) => project_modal.open_edit(id, ProjectForm::from_record(&project)),
                Err(e) => {
                    log::error!("[projects] load project {} failed: {}", id, e);
                    ctx.toast.error(e.user_message("Gagal memuat data proyek"));
                }
            }
        }),
        RowAction::Delete(id) => perform_delete(ctx, DeleteTarget::Project, id),
    };

    let on_task_action = move |action: RowAction| {
        if let RowAction::Delete(id) = action {
            perform_delete(ctx, DeleteTarget::Task, id);
        }
    };

    let open_task_modal = move |_: web_sys::MouseEvent| {
        if store.selected_project().get_untracked().is_none() {
            ctx.toast.warning("Silakan pilih proyek terlebih dahulu");
            return;
        }
        task_modal.open_create();
    };

    let detail = store.project_detail();
    let info_html = move || detail.with(|d| d.as_ref().map(|d| project_info_html(&d.project)).unwrap_or_default());
    let tasks_html = move || detail.with(|d| project_tasks_rows(d.as_ref().map(|d| d.tasks.as_slice()).unwrap_or(&[])));
    let detail_title = move || {
        detail.with(|d| {
            d.as_ref()
                .and_then(|d| d.project.name.clone())
                .unwrap_or_else(|| "Detail Proyek".to_string())
        })
    };

    view! {
        <div id=Tab::Projects.panel_id() class="tab-pane" style:display=move || if active() { "block" } else { "none" }>
            <div class="card mb-4">
                <div class="card-header d-flex justify-content-between align-items-center">
                    <span><i class="fas fa-project-diagram me-2"></i>"Daftar Proyek"</span>
                    <button class="btn btn-primary btn-sm" on:click=move |_| project_modal.open_create()>
                        <i class="fas fa-plus me-1"></i>"Tambah Proyek"
                    </button>
                </div>
                <div class="card-body table-responsive">
                    <table class="table table-hover mb-0">
                        <thead>
                            <tr>
                                <th>"Nama Proyek"</th>
                                <th>"Status"</th>
                                <th>"Prioritas"</th>
                                <th>"Tanggal"</th>
                                <th>"Budget"</th>
                                <th>"Progress"</th>
                                <th>"Aksi"</th>
                            </tr>
                        </thead>
                        <TableBody
                            rows=Signal::derive(move || store.projects().with(|p| projects_rows(p)))
                            on_action=on_project_action
                        />
                    </table>
                </div>
            </div>

            <div class="card mb-4">
                <div class="card-body">
                    <label class="form-label fw-bold" for="project-select">"Pilih Proyek"</label>
                    <select id="project-select" class="form-select" on:change=on_select>
                        <option value="" selected=move || store.selected_project().get().is_none()>"Pilih Proyek..."</option>
                        {move || {
                            let selected = store.selected_project().get();
                            store
                                .projects()
                                .get()
                                .into_iter()
                                .map(|p| {
                                    let name = p.name.unwrap_or_else(|| "-".to_string());
                                    view! { <option value=p.id.to_string() selected=selected == Some(p.id)>{name}</option> }
                                })
                                .collect_view()
                        }}
                    </select>
                </div>
            </div>

            <Show when=move || store.selected_project().get().is_some()>
                <div id="project-details-section">
                    <div class="row">
                        <div class="col-lg-4 mb-4">
                            <div class="card h-100">
                                <div class="card-header"><i class="fas fa-info-circle me-2"></i>{detail_title}</div>
                                <div class="card-body" id="project-info-details" inner_html=info_html></div>
                            </div>
                        </div>
                        <div class="col-lg-8 mb-4">
                            <div class="card h-100">
                                <div class="card-header"><i class="fas fa-chart-line me-2"></i>"Kurva S Proyek"</div>
                                <div class="card-body chart-container">
                                    <canvas id=ChartKey::ProjectSCurve.canvas_id()></canvas>
                                </div>
                            </div>
                        </div>
                    </div>
                    <div class="row">
                        <div class="col-lg-4 mb-4">
                            <div class="card h-100">
                                <div class="card-header"><i class="fas fa-balance-scale me-2"></i>"Deviasi Budget"</div>
                                <div class="card-body chart-container">
                                    <canvas id=ChartKey::ProjectDeviation.canvas_id()></canvas>
                                </div>
                            </div>
                        </div>
                        <div class="col-lg-8 mb-4">
                            <div class="card h-100">
                                <div class="card-header d-flex justify-content-between align-items-center">
                                    <span><i class="fas fa-tasks me-2"></i>"Task Proyek"</span>
                                    <button class="btn btn-primary btn-sm" on:click=open_task_modal>
                                        <i class="fas fa-plus me-1"></i>"Tambah Task"
                                    </button>
                                </div>
                                <div class="card-body table-responsive">
                                    <table class="table table-hover mb-0">
                                        <thead>
                                            <tr>
                                                <th>"Task"</th>
                                                <th>"PIC"</th>
                                                <th>"Due Date"</th>
                                                <th>"Action Plan"</th>
                                                <th>"Status"</th>
                                                <th>"Aksi"</th>
                                            </tr>
                                        </thead>
                                        <TableBody rows=Signal::derive(tasks_html) on_action=on_task_action />
                                    </table>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </Show>

            <ProjectFormModal state=project_modal />
            <TaskFormModal state=task_modal />
        </div>
    }
}
