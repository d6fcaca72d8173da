//! Manpower Panel
//!
//! People table, team workload chart, person selector and the selected
//! person's assignments with their distribution chart.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::assignment_form::AssignmentFormModal;
use super::manpower_form::ManPowerFormModal;
use super::modal::ModalState;
use super::table_body::TableBody;
use crate::actions::{perform_delete, DeleteTarget};
use crate::charts::ChartKey;
use crate::context::use_app_context;
use crate::forms::{AssignmentForm, ManPowerForm};
use crate::loaders::load_manpower_details;
use crate::store::{store_select_manpower, AppStateStoreFields};
use crate::tables::{assignments_rows, manpower_rows, RowAction};
use crate::tabs::Tab;

fn person_option_label(name: Option<&str>, position: Option<&str>) -> String {
    format!("{} - {}", name.unwrap_or("-"), position.unwrap_or("-"))
}

#[component]
pub fn ManpowerPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let active = move || store.tabs().with(|t| t.is_active(Tab::Manpower));

    let person_modal = ModalState::<ManPowerForm>::new();
    let assignment_modal = ModalState::<AssignmentForm>::new();

    let on_select = move |ev: web_sys::Event| {
        let id = event_target_value(&ev).parse::<u32>().ok();
        store_select_manpower(&store, id);
        spawn_local(load_manpower_details(ctx));
    };

    let on_person_action = move |action: RowAction| match action {
        RowAction::Edit(id) => spawn_local(async move {
            match ctx.api().get_manpower(id).await {
                Ok(person) => person_modal.open_edit(id, ManPowerForm::from_record(&person)),
                Err(e) => {
                    log::error!("[manpower] load {} failed: {}", id, e);
                    ctx.toast.error(e.user_message("Gagal memuat data man power"));
                }
            }
        }),
        RowAction::Delete(id) => perform_delete(ctx, DeleteTarget::ManPower, id),
    };

    let on_assignment_action = move |action: RowAction| {
        if let RowAction::Delete(id) = action {
            perform_delete(ctx, DeleteTarget::Assignment, id);
        }
    };

    let open_assignment_modal = move |_: web_sys::MouseEvent| {
        if store.selected_manpower().get_untracked().is_none() {
            ctx.toast.warning("Silakan pilih man power terlebih dahulu");
            return;
        }
        assignment_modal.open_create();
    };

    let no_assignments = move || store.assignments().with(|a| a.is_empty());
    let assignments_html = move || {
        store
            .assignments()
            .with(|a| store.projects().with(|projects| assignments_rows(a, projects)))
    };

    view! {
        <div id=Tab::Manpower.panel_id() class="tab-pane" style:display=move || if active() { "block" } else { "none" }>
            <div class="row">
                <div class="col-lg-7 mb-4">
                    <div class="card h-100">
                        <div class="card-header d-flex justify-content-between align-items-center">
                            <span><i class="fas fa-users me-2"></i>"Daftar Man Power"</span>
                            <button class="btn btn-primary btn-sm" on:click=move |_| person_modal.open_create()>
                                <i class="fas fa-plus me-1"></i>"Tambah Man Power"
                            </button>
                        </div>
                        <div class="card-body table-responsive">
                            <table class="table table-hover mb-0">
                                <thead>
                                    <tr>
                                        <th>"Nama"</th>
                                        <th>"Posisi"</th>
                                        <th>"Departemen"</th>
                                        <th>"Skills"</th>
                                        <th>"Availability"</th>
                                        <th>"Aksi"</th>
                                    </tr>
                                </thead>
                                <TableBody
                                    rows=Signal::derive(move || store.manpower().with(|p| manpower_rows(p)))
                                    on_action=on_person_action
                                />
                            </table>
                        </div>
                    </div>
                </div>
                <div class="col-lg-5 mb-4">
                    <div class="card h-100">
                        <div class="card-header"><i class="fas fa-chart-bar me-2"></i>"Beban Kerja Tim"</div>
                        <div class="card-body chart-container">
                            <canvas id=ChartKey::TeamWorkload.canvas_id()></canvas>
                        </div>
                    </div>
                </div>
            </div>

            <div class="card mb-4">
                <div class="card-body">
                    <label class="form-label fw-bold" for="manpower-select">"Pilih Man Power"</label>
                    <select id="manpower-select" class="form-select" on:change=on_select>
                        <option value="" selected=move || store.selected_manpower().get().is_none()>"Pilih Man Power..."</option>
                        {move || {
                            let selected = store.selected_manpower().get();
                            store
                                .manpower()
                                .get()
                                .into_iter()
                                .map(|p| {
                                    let label = person_option_label(p.name.as_deref(), p.position.as_deref());
                                    view! { <option value=p.id.to_string() selected=selected == Some(p.id)>{label}</option> }
                                })
                                .collect_view()
                        }}
                    </select>
                </div>
            </div>

            <Show when=move || store.selected_manpower().get().is_some()>
                <div id="manpower-details-section" class="row">
                    <div class="col-lg-4 mb-4">
                        <div class="card h-100">
                            <div class="card-header"><i class="fas fa-chart-pie me-2"></i>"Distribusi Proyek"</div>
                            <div class="card-body chart-container">
                                <canvas
                                    id=ChartKey::ManpowerDistribution.canvas_id()
                                    style:display=move || if no_assignments() { "none" } else { "block" }
                                ></canvas>
                                <Show when=no_assignments>
                                    <p class="text-muted text-center py-4">"Tidak ada assignment"</p>
                                </Show>
                            </div>
                        </div>
                    </div>
                    <div class="col-lg-8 mb-4">
                        <div class="card h-100">
                            <div class="card-header d-flex justify-content-between align-items-center">
                                <span><i class="fas fa-clipboard-list me-2"></i>"Assignment"</span>
                                <button class="btn btn-primary btn-sm" on:click=open_assignment_modal>
                                    <i class="fas fa-plus me-1"></i>"Tambah Assignment"
                                </button>
                            </div>
                            <div class="card-body table-responsive">
                                <table class="table table-hover mb-0">
                                    <thead>
                                        <tr>
                                            <th>"Target"</th>
                                            <th>"Role"</th>
                                            <th>"Jam"</th>
                                            <th>"Status"</th>
                                            <th>"Aksi"</th>
                                        </tr>
                                    </thead>
                                    <TableBody rows=Signal::derive(assignments_html) on_action=on_assignment_action />
                                </table>
                            </div>
                        </div>
                    </div>
                </div>
            </Show>

            <ManPowerFormModal state=person_modal />
            <AssignmentFormModal state=assignment_modal />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_option_label() {
        assert_eq!(person_option_label(Some("Budi"), Some("Engineer")), "Budi - Engineer");
        assert_eq!(person_option_label(None, None), "- - -");
    }
}
