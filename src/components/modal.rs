//! Modal Dialog
//!
//! Bootstrap modal markup driven by a signal instead of bootstrap.js.
//! `ModalState` pairs the visibility flag with the form and its mode.

use leptos::prelude::*;

use crate::forms::FormMode;

/// Open flag, create/edit mode and the raw form of one modal
pub struct ModalState<F: Send + Sync + 'static> {
    pub open: RwSignal<bool>,
    pub mode: RwSignal<FormMode>,
    pub form: RwSignal<F>,
}

impl<F: Send + Sync + 'static> Clone for ModalState<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: Send + Sync + 'static> Copy for ModalState<F> {}

impl<F: Default + Send + Sync + 'static> ModalState<F> {
    pub fn new() -> Self {
        Self {
            open: RwSignal::new(false),
            mode: RwSignal::new(FormMode::Create),
            form: RwSignal::new(F::default()),
        }
    }

    pub fn open_create(&self) {
        self.mode.set(FormMode::Create);
        self.form.set(F::default());
        self.open.set(true);
    }

    /// Pre-filled form whose submit updates record `id`
    pub fn open_edit(&self, id: u32, form: F) {
        self.mode.set(FormMode::Edit(id));
        self.form.set(form);
        self.open.set(true);
    }

    /// Hide and reset back to create mode
    pub fn close(&self) {
        self.open.set(false);
        self.mode.set(FormMode::Create);
        self.form.set(F::default());
    }

    pub fn close_callback(&self) -> Callback<()> {
        let state = *self;
        Callback::new(move |_| state.close())
    }
}

impl<F: Default + Send + Sync + 'static> Default for ModalState<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn Modal(
    title: &'static str,
    open: RwSignal<bool>,
    on_close: Callback<()>,
    #[prop(optional)] large: bool,
    children: Children,
) -> impl IntoView {
    let dialog_class = if large { "modal-dialog modal-lg" } else { "modal-dialog" };

    view! {
        <div
            class="modal fade"
            class:show=move || open.get()
            class:d-block=move || open.get()
            tabindex="-1"
            role="dialog"
            on:click=move |ev| {
                // backdrop click, not a click inside the dialog
                if ev.target() == ev.current_target() {
                    on_close.run(());
                }
            }
        >
            <div class=dialog_class>
                <div class="modal-content">
                    <div class="modal-header">
                        <h5 class="modal-title">{title}</h5>
                        <button type="button" class="btn-close" on:click=move |_| on_close.run(())></button>
                    </div>
                    {children()}
                </div>
            </div>
        </div>
        <Show when=move || open.get()>
            <div class="modal-backdrop fade show"></div>
        </Show>
    }
}

/// Cancel plus the mode-labelled submit button
#[component]
pub fn ModalFooter(mode: RwSignal<FormMode>, on_cancel: Callback<()>) -> impl IntoView {
    view! {
        <div class="modal-footer">
            <button type="button" class="btn btn-secondary" on:click=move |_| on_cancel.run(())>
                "Batal"
            </button>
            <button type="submit" class="btn btn-primary">
                {move || mode.get().submit_label()}
            </button>
        </div>
    }
}
