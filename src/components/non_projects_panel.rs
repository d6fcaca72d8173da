//! Non-Projects Panel

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::modal::ModalState;
use super::non_project_form::NonProjectFormModal;
use super::table_body::TableBody;
use crate::actions::{perform_delete, DeleteTarget};
use crate::context::use_app_context;
use crate::forms::NonProjectForm;
use crate::store::AppStateStoreFields;
use crate::tables::{non_projects_rows, RowAction};
use crate::tabs::Tab;

#[component]
pub fn NonProjectsPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let active = move || store.tabs().with(|t| t.is_active(Tab::NonProjects));
    let modal = ModalState::<NonProjectForm>::new();

    let on_action = move |action: RowAction| match action {
        RowAction::Edit(id) => spawn_local(async move {
            match ctx.api().get_non_project(id).await {
                Ok(np) => modal.open_edit(id, NonProjectForm::from_record(&np)),
                Err(e) => {
                    log::error!("[non-projects] load {} failed: {}", id, e);
                    ctx.toast.error(e.user_message("Gagal memuat data non-proyek"));
                }
            }
        }),
        RowAction::Delete(id) => perform_delete(ctx, DeleteTarget::NonProject, id),
    };

    view! {
        <div id=Tab::NonProjects.panel_id() class="tab-pane" style:display=move || if active() { "block" } else { "none" }>
            <div class="card">
                <div class="card-header d-flex justify-content-between align-items-center">
                    <span><i class="fas fa-tasks me-2"></i>"Daftar Non-Proyek"</span>
                    <button class="btn btn-primary btn-sm" on:click=move |_| modal.open_create()>
                        <i class="fas fa-plus me-1"></i>"Tambah"
                    </button>
                </div>
                <div class="card-body table-responsive">
                    <table class="table table-hover mb-0">
                        <thead>
                            <tr>
                                <th>"Nama"</th>
                                <th>"Kategori"</th>
                                <th>"Status"</th>
                                <th>"Tanggal"</th>
                                <th>"Budget"</th>
                                <th>"Progress"</th>
                                <th>"Aksi"</th>
                            </tr>
                        </thead>
                        <TableBody
                            rows=Signal::derive(move || store.non_projects().with(|np| non_projects_rows(np)))
                            on_action=on_action
                        />
                    </table>
                </div>
            </div>
            <NonProjectFormModal state=modal />
        </div>
    }
}
