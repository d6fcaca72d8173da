//! Assignment Form Modal
//!
//! Assigns the selected person to exactly one project or non-project. The
//! target type select only decides which id select is shown and which id is
//! sent; it is never part of the payload.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::fields::{bind, plain_options, InputField, SelectField};
use super::modal::{Modal, ModalFooter, ModalState};
use crate::context::use_app_context;
use crate::forms::{AssignmentForm, ASSIGNMENT_STATUSES, TARGET_NON_PROJECT, TARGET_PROJECT};
use crate::loaders::load_manpower_details;
use crate::models::{NonProject, Project};
use crate::store::AppStateStoreFields;

fn target_type_options() -> Vec<(String, String)> {
    vec![
        (TARGET_PROJECT.to_string(), "Proyek".to_string()),
        (TARGET_NON_PROJECT.to_string(), "Non-Proyek".to_string()),
    ]
}

fn project_options(projects: &[Project]) -> Vec<(String, String)> {
    projects
        .iter()
        .map(|p| (p.id.to_string(), p.name.clone().unwrap_or_else(|| "-".to_string())))
        .collect()
}

fn non_project_options(non_projects: &[NonProject]) -> Vec<(String, String)> {
    non_projects
        .iter()
        .map(|np| (np.id.to_string(), np.name.clone().unwrap_or_else(|| "-".to_string())))
        .collect()
}

#[component]
pub fn AssignmentFormModal(state: ModalState<AssignmentForm>) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(manpower_id) = store.selected_manpower().get_untracked() else {
            ctx.toast.warning("Silakan pilih man power terlebih dahulu");
            return;
        };
        let payload = match state.form.with_untracked(|f| f.to_payload(manpower_id)) {
            Ok(payload) => payload,
            Err(e) => {
                ctx.toast.warning(e.to_string());
                return;
            }
        };

        spawn_local(async move {
            match ctx.api().create_assignment(&payload).await {
                Ok(()) => {
                    state.close();
                    ctx.toast.success("Assignment berhasil ditambahkan!");
                    load_manpower_details(ctx).await;
                }
                Err(e) => {
                    log::error!("[assignments] create failed: {}", e);
                    ctx.toast.error(e.user_message("Gagal menambahkan assignment"));
                }
            }
        });
    };

    let form = state.form;
    let shows_project = move || form.with(|f| f.shows_project_select());
    let shows_non_project = move || form.with(|f| f.shows_non_project_select());

    view! {
        <Modal title="Tambah Assignment" open=state.open on_close=state.close_callback()>
            <form id="assignmentForm" on:submit=submit>
                <div class="modal-body">
                    <SelectField
                        label="Tipe Target"
                        binding=bind!(form, target_type)
                        options=target_type_options()
                        placeholder="-- Pilih Tipe --"
                        required=true
                    />
                    <div id="projectSelection" style:display=move || if shows_project() { "block" } else { "none" }>
                        <SelectField
                            label="Proyek"
                            binding=bind!(form, project_id)
                            options=Signal::derive(move || store.projects().with(|p| project_options(p)))
                            placeholder="-- Pilih Proyek --"
                        />
                    </div>
                    <div id="nonProjectSelection" style:display=move || if shows_non_project() { "block" } else { "none" }>
                        <SelectField
                            label="Non-Proyek"
                            binding=bind!(form, non_project_id)
                            options=Signal::derive(move || store.non_projects().with(|np| non_project_options(np)))
                            placeholder="-- Pilih Non-Proyek --"
                        />
                    </div>
                    <div class="row">
                        <div class="col-md-6">
                            <InputField label="Role" binding=bind!(form, role) />
                        </div>
                        <div class="col-md-6">
                            <InputField label="Jam / Minggu" binding=bind!(form, hours_per_week) kind="number" />
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
                    <SelectField
                        label="Status"
                        binding=bind!(form, status)
                        options=plain_options(&ASSIGNMENT_STATUSES)
                    />
                </div>
                <ModalFooter mode=state.mode on_cancel=state.close_callback() />
            </form>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_options_use_payload_keys() {
        let values: Vec<String> = target_type_options().into_iter().map(|(v, _)| v).collect();
        assert_eq!(values, vec!["project", "non_project"]);
    }

    #[test]
    fn test_project_options_fall_back_to_dash() {
        let projects = vec![
            Project {
                id: 4,
                name: Some("Tol Trans Jawa".to_string()),
                ..Default::default()
            },
            Project {
                id: 9,
                ..Default::default()
            },
        ];
        assert_eq!(
            project_options(&projects),
            vec![
                ("4".to_string(), "Tol Trans Jawa".to_string()),
                ("9".to_string(), "-".to_string())
            ]
        );
    }
}
