//! Toast Alert
//!
//! One floating Bootstrap alert at a time. A new alert replaces the current
//! one; each disappears after a fixed lifetime unless replaced earlier.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::config::TOAST_LIFETIME;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Danger,
    Warning,
}

impl ToastKind {
    fn alert_class(self) -> &'static str {
        match self {
            ToastKind::Success => "alert-success",
            ToastKind::Danger => "alert-danger",
            ToastKind::Warning => "alert-warning",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
}

#[derive(Clone, Copy)]
pub struct ToastContext {
    pub current: RwSignal<Option<Toast>>,
    next_id: StoredValue<u64>,
}

impl ToastContext {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            next_id: StoredValue::new(0),
        }
    }

    pub fn show(&self, message: impl Into<String>, kind: ToastKind) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        self.current.set(Some(Toast {
            id,
            message: message.into(),
            kind,
        }));

        let current = self.current;
        Timeout::new(TOAST_LIFETIME.as_millis() as u32, move || {
            // a newer toast may have replaced this one
            current.update(|toast| {
                if toast.as_ref().is_some_and(|t| t.id == id) {
                    *toast = None;
                }
            });
        })
        .forget();
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(message, ToastKind::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(message, ToastKind::Danger);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.show(message, ToastKind::Warning);
    }

    pub fn dismiss(&self) {
        self.current.set(None);
    }
}

impl Default for ToastContext {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn ToastAlert(ctx: ToastContext) -> impl IntoView {
    move || {
        ctx.current.get().map(|toast| {
            view! {
                <div
                    class=format!("alert {} alert-dismissible fade show position-fixed toast-alert", toast.kind.alert_class())
                    role="alert"
                >
                    {toast.message}
                    <button type="button" class="btn-close" on:click=move |_| ctx.dismiss()></button>
                </div>
            }
        })
    }
}
