//! Non-Project Form Modal

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::fields::{bind, plain_options, InputField, SelectField, TextAreaField};
use super::modal::{Modal, ModalFooter, ModalState};
use crate::context::use_app_context;
use crate::forms::{FormMode, NonProjectForm, NON_PROJECT_CATEGORIES, STATUSES};
use crate::loaders::load_non_projects;

#[component]
pub fn NonProjectFormModal(state: ModalState<NonProjectForm>) -> impl IntoView {
    let ctx = use_app_context();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let payload = state.form.with_untracked(|f| f.to_payload());
        let mode = state.mode.get_untracked();

        spawn_local(async move {
            let api = ctx.api();
            let (result, done, failed) = match mode {
                FormMode::Create => (
                    api.create_non_project(&payload).await,
                    "Non-proyek berhasil ditambahkan!",
                    "Gagal menambahkan non-proyek",
                ),
                FormMode::Edit(id) => (
                    api.update_non_project(id, &payload).await,
                    "Non-proyek berhasil diupdate!",
                    "Gagal mengupdate non-proyek",
                ),
            };
            match result {
                Ok(()) => {
                    state.close();
                    ctx.toast.success(done);
                    load_non_projects(ctx).await;
                }
                Err(e) => {
                    log::error!("[non-projects] save failed: {}", e);
                    ctx.toast.error(e.user_message(failed));
                }
            }
        });
    };

    let form = state.form;
    view! {
        <Modal title="Non-Proyek" open=state.open on_close=state.close_callback() large=true>
            <form id="nonProjectForm" on:submit=submit>
                <div class="modal-body">
                    <div class="row">
                        <div class="col-md-8">
                            <InputField label="Nama" binding=bind!(form, name) required=true />
                        </div>
                        <div class="col-md-4">
                            <SelectField
                                label="Kategori"
                                binding=bind!(form, category)
                                options=plain_options(&NON_PROJECT_CATEGORIES)
                            />
                        </div>
                    </div>
                    <TextAreaField label="Deskripsi" binding=bind!(form, description) />
                    <div class="row">
                        <div class="col-md-4">
                            <SelectField label="Status" binding=bind!(form, status) options=plain_options(&STATUSES) />
                        </div>
                        <div class="col-md-4">
                            <InputField label="Tanggal Mulai" binding=bind!(form, start_date) kind="date" />
                        </div>
                        <div class="col-md-4">
                            <InputField label="Tanggal Selesai" binding=bind!(form, end_date) kind="date" />
                        </div>
                    </div>
                    <div class="row">
                        <div class="col-md-4">
                            <InputField label="Budget" binding=bind!(form, budget) kind="number" step="any" />
                        </div>
                        <div class="col-md-4">
                            <InputField label="Actual Cost" binding=bind!(form, actual_cost) kind="number" step="any" />
                        </div>
                        <div class="col-md-4">
                            <InputField label="Progress (%)" binding=bind!(form, progress) kind="number" step="any" />
                        </div>
                    </div>
                </div>
                <ModalFooter mode=state.mode on_cancel=state.close_callback() />
            </form>
        </Modal>
    }
}
