//! Table Body
//!
//! `<tbody>` whose rows come from a table renderer as one HTML string.
//! Clicks on row buttons are delegated here and decoded into `RowAction`.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::tables::RowAction;

/// Walk up from the click target to the nearest `[data-action]` button
fn row_action_from_event(ev: &web_sys::MouseEvent) -> Option<RowAction> {
    let target = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    let button = target.closest("[data-action]").ok()??;
    let action = button.get_attribute("data-action")?;
    let id = button.get_attribute("data-id")?;
    RowAction::parse(&action, &id)
}

#[component]
pub fn TableBody(
    #[prop(into)] rows: Signal<String>,
    #[prop(into)] on_action: Callback<RowAction>,
) -> impl IntoView {
    view! {
        <tbody
            inner_html=move || rows.get()
            on:click=move |ev| {
                if let Some(action) = row_action_from_event(&ev) {
                    log::debug!("[table] {:?}", action);
                    on_action.run(action);
                }
            }
        ></tbody>
    }
}
