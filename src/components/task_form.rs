//! Task Form Modal
//!
//! Adds a task to the selected project. Tasks have no update endpoint.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::fields::{bind, plain_options, InputField, SelectField, TextAreaField};
use super::modal::{Modal, ModalFooter, ModalState};
use crate::context::use_app_context;
use crate::forms::{TaskForm, PRIORITIES, STATUSES};
use crate::loaders::load_project_details;
use crate::store::AppStateStoreFields;

#[component]
pub fn TaskFormModal(state: ModalState<TaskForm>) -> impl IntoView {
    let ctx = use_app_context();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(project_id) = ctx.store.selected_project().get_untracked() else {
            ctx.toast.warning("Silakan pilih proyek terlebih dahulu");
            return;
        };
        let payload = state.form.with_untracked(|f| f.to_payload(project_id));

        spawn_local(async move {
            match ctx.api().create_task(&payload).await {
                Ok(()) => {
                    state.close();
                    ctx.toast.success("Task berhasil ditambahkan!");
                    load_project_details(ctx).await;
                }
                Err(e) => {
                    log::error!("[tasks] create failed: {}", e);
                    ctx.toast.error(e.user_message("Gagal menambahkan task"));
                }
            }
        });
    };

    let form = state.form;
    view! {
        <Modal title="Tambah Task" open=state.open on_close=state.close_callback()>
            <form id="taskForm" on:submit=submit>
                <div class="modal-body">
                    <InputField label="Nama Task" binding=bind!(form, name) required=true />
                    <TextAreaField label="Deskripsi" binding=bind!(form, description) rows=2 />
                    <div class="row">
                        <div class="col-md-6">
                            <InputField label="PIC" binding=bind!(form, pic) />
                        </div>
                        <div class="col-md-6">
                            <InputField label="Due Date" binding=bind!(form, due_date) kind="date" />
                        </div>
                    </div>
                    <TextAreaField label="Action Plan" binding=bind!(form, action_plan) rows=2 />
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
