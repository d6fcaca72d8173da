//! Project Form Modal
//!
//! Create or update a project. Success reloads the active tab.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::fields::{bind, plain_options, InputField, SelectField, TextAreaField};
use super::modal::{Modal, ModalFooter, ModalState};
use crate::context::use_app_context;
use crate::forms::{FormMode, ProjectForm, PRIORITIES, STATUSES};
use crate::loaders::load_all_data;

#[component]
pub fn ProjectFormModal(state: ModalState<ProjectForm>) -> impl IntoView {
    let ctx = use_app_context();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let payload = state.form.with_untracked(|f| f.to_payload());
        let mode = state.mode.get_untracked();

        spawn_local(async move {
            let api = ctx.api();
            let (result, done, failed) = match mode {
                FormMode::Create => (
                    api.create_project(&payload).await,
                    "Proyek berhasil ditambahkan!",
                    "Gagal menambahkan proyek",
                ),
                FormMode::Edit(id) => (
                    api.update_project(id, &payload).await,
                    "Proyek berhasil diupdate!",
                    "Gagal mengupdate proyek",
                ),
            };
            match result {
                Ok(()) => {
                    state.close();
                    ctx.toast.success(done);
                    load_all_data(ctx).await;
                }
                Err(e) => {
                    log::error!("[projects] save failed: {}", e);
                    ctx.toast.error(e.user_message(failed));
                }
            }
        });
    };

    let form = state.form;
    view! {
        <Modal title="Proyek" open=state.open on_close=state.close_callback() large=true>
            <form id="projectForm" on:submit=submit>
                <div class="modal-body">
                    <InputField label="Nama Proyek" binding=bind!(form, name) required=true />
                    <TextAreaField label="Deskripsi" binding=bind!(form, description) />
                    <InputField label="Lokasi" binding=bind!(form, location) />
                    <div class="row">
                        <div class="col-md-6">
                            <InputField label="Latitude" binding=bind!(form, latitude) kind="number" step="any" />
                        </div>
                        <div class="col-md-6">
                            <InputField label="Longitude" binding=bind!(form, longitude) kind="number" step="any" />
                        </div>
                    </div>
                    <div class="row">
                        <div class="col-md-6">
                            <InputField label="Tanggal Mulai" binding=bind!(form, start_date) kind="date" />
                        </div>
                        <div class="col-md-6">
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
                    <div class="row">
                        <div class="col-md-6">
                            <SelectField label="Status" binding=bind!(form, status) options=plain_options(&STATUSES) />
                        </div>
                        <div class="col-md-6">
                            <SelectField label="Prioritas" binding=bind!(form, priority) options=plain_options(&PRIORITIES) />
                        </div>
                    </div>
                </div>
                <ModalFooter mode=state.mode on_cancel=state.close_callback() />
            </form>
        </Modal>
    }
}
