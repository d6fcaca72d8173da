//! Form Field Components
//!
//! Labelled Bootstrap inputs bound to one `String` field of a form signal.

use leptos::prelude::*;

/// Read/write access to one string field of a form
#[derive(Clone, Copy)]
pub struct FieldBinding {
    pub get: Signal<String>,
    pub set: Callback<String>,
}

/// `bind!(state.form, name)` binds the `name` field of a `RwSignal<Form>`
macro_rules! bind {
    ($form:expr, $field:ident) => {{
        let form = $form;
        $crate::components::FieldBinding {
            get: Signal::derive(move || form.with(|f| f.$field.clone())),
            set: Callback::new(move |value: String| form.update(|f| f.$field = value)),
        }
    }};
}

pub(crate) use bind;

/// Fixed select options where value and label are the same
pub fn plain_options(values: &[&str]) -> Vec<(String, String)> {
    values.iter().map(|v| (v.to_string(), v.to_string())).collect()
}

#[component]
pub fn InputField(
    label: &'static str,
    binding: FieldBinding,
    #[prop(default = "text")] kind: &'static str,
    #[prop(optional)] required: bool,
    #[prop(optional)] step: Option<&'static str>,
    #[prop(optional)] placeholder: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="mb-3">
            <label class="form-label">{label}</label>
            <input
                type=kind
                class="form-control"
                required=required
                step=step
                placeholder=placeholder
                prop:value=move || binding.get.get()
                on:input=move |ev| binding.set.run(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn TextAreaField(
    label: &'static str,
    binding: FieldBinding,
    #[prop(default = 3)] rows: u32,
) -> impl IntoView {
    view! {
        <div class="mb-3">
            <label class="form-label">{label}</label>
            <textarea
                class="form-control"
                rows=rows
                prop:value=move || binding.get.get()
                on:input=move |ev| binding.set.run(event_target_value(&ev))
            ></textarea>
        </div>
    }
}

/// Select over `(value, label)` pairs; an optional empty-value placeholder comes first
#[component]
pub fn SelectField(
    label: &'static str,
    binding: FieldBinding,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    #[prop(optional)] placeholder: Option<&'static str>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div class="mb-3">
            <label class="form-label">{label}</label>
            <select
                class="form-select"
                required=required
                on:change=move |ev| binding.set.run(event_target_value(&ev))
            >
                {placeholder.map(|text| view! {
                    <option value="" selected=move || binding.get.get().is_empty()>{text}</option>
                })}
                {move || {
                    options
                        .get()
                        .into_iter()
                        .map(|(value, text)| {
                            let selected = binding.get.with(|current| *current == value);
                            view! { <option value=value selected=selected>{text}</option> }
                        })
                        .collect_view()
                }}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_options_repeat_value_as_label() {
        assert_eq!(
            plain_options(&["Low", "High"]),
            vec![
                ("Low".to_string(), "Low".to_string()),
                ("High".to_string(), "High".to_string())
            ]
        );
    }
}
