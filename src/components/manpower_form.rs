//! Man Power Form Modal

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::fields::{bind, InputField};
use super::modal::{Modal, ModalFooter, ModalState};
use crate::context::use_app_context;
use crate::forms::{FormMode, ManPowerForm};
use crate::loaders::load_manpower;

#[component]
pub fn ManPowerFormModal(state: ModalState<ManPowerForm>) -> impl IntoView {
    let ctx = use_app_context();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let payload = state.form.with_untracked(|f| f.to_payload());
        let mode = state.mode.get_untracked();

        spawn_local(async move {
            let api = ctx.api();
            let (result, done, failed) = match mode {
                FormMode::Create => (
                    api.create_manpower(&payload).await,
                    "Man Power berhasil ditambahkan!",
                    "Gagal menambahkan man power",
                ),
                FormMode::Edit(id) => (
                    api.update_manpower(id, &payload).await,
                    "Man Power berhasil diupdate!",
                    "Gagal mengupdate man power",
                ),
            };
            match result {
                Ok(()) => {
                    state.close();
                    ctx.toast.success(done);
                    load_manpower(ctx).await;
                }
                Err(e) => {
                    log::error!("[manpower] save failed: {}", e);
                    ctx.toast.error(e.user_message(failed));
                }
            }
        });
    };

    let form = state.form;
    view! {
        <Modal title="Man Power" open=state.open on_close=state.close_callback()>
            <form id="manPowerForm" on:submit=submit>
                <div class="modal-body">
                    <InputField label="Nama" binding=bind!(form, name) required=true />
                    <InputField label="Email" binding=bind!(form, email) kind="email" />
                    <div class="row">
                        <div class="col-md-6">
                            <InputField label="Posisi" binding=bind!(form, position) />
                        </div>
                        <div class="col-md-6">
                            <InputField label="Departemen" binding=bind!(form, department) />
                        </div>
                    </div>
                    <InputField label="Skills" binding=bind!(form, skills) placeholder="Pisahkan dengan koma" />
                    <div class="row">
                        <div class="col-md-6">
                            <InputField label="Total Jam / Minggu" binding=bind!(form, total_hours) kind="number" placeholder="40" />
                        </div>
                        <div class="col-md-6">
                            <InputField label="Availability (%)" binding=bind!(form, availability) kind="number" step="any" placeholder="100" />
                        </div>
                    </div>
                </div>
                <ModalFooter mode=state.mode on_cancel=state.close_callback() />
            </form>
        </Modal>
    }
}
