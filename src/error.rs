//! API Errors

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Request never produced a response
    #[error("network error: {0}")]
    Network(String),
    /// Backend answered with a non-2xx status
    #[error("HTTP {status}: {}", message.as_deref().unwrap_or("no message"))]
    Status { status: u16, message: Option<String> },
    /// Response body did not match the expected shape
    #[error("decode error: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text for a toast. Only a backend-supplied `error` message is shown
    /// verbatim; everything else falls back to the localized operation text.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// Extract `error` from a `{"error": "..."}` response body
pub fn error_message_from_body(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.get("error")?.as_str().map(str::to_string)
}

/// Best-effort text for a value thrown by a browser API
pub fn js_error_message(value: &JsValue) -> String {
    let error_message = value.dyn_ref::<js_sys::Error>().map(|e| String::from(e.message()));
    thrown_text(value.as_string(), error_message).unwrap_or_else(|| format!("{:?}", value))
}

/// A thrown string wins over an `Error`'s message; blank text counts as none
fn thrown_text(thrown: Option<String>, error_message: Option<String>) -> Option<String> {
    thrown
        .filter(|t| !t.trim().is_empty())
        .or_else(|| error_message.filter(|t| !t.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thrown_text_prefers_string_then_error_message() {
        assert_eq!(
            thrown_text(Some("Failed to fetch".into()), Some("ignored".into())),
            Some("Failed to fetch".to_string())
        );
        assert_eq!(
            thrown_text(None, Some("Map container not found.".into())),
            Some("Map container not found.".to_string())
        );
        assert_eq!(thrown_text(Some("  ".into()), Some("TypeError".into())), Some("TypeError".to_string()));
        assert_eq!(thrown_text(None, Some(String::new())), None);
    }

    #[test]
    fn test_status_with_message_is_verbatim() {
        let err = ApiError::Status {
            status: 400,
            message: Some("Nama proyek wajib diisi".to_string()),
        };
        assert_eq!(err.user_message("Gagal menambahkan proyek"), "Nama proyek wajib diisi");
    }

    #[test]
    fn test_other_errors_use_fallback() {
        let fallback = "Gagal memuat data proyek";
        assert_eq!(ApiError::Network("offline".into()).user_message(fallback), fallback);
        assert_eq!(ApiError::Decode("eof".into()).user_message(fallback), fallback);
        let bare = ApiError::Status {
            status: 500,
            message: None,
        };
        assert_eq!(bare.user_message(fallback), fallback);
    }

    #[test]
    fn test_error_message_from_body() {
        assert_eq!(error_message_from_body(r#"{"error": "Project not found"}"#), Some("Project not found".to_string()));
        assert_eq!(error_message_from_body(r#"{"message": "x"}"#), None);
        assert_eq!(error_message_from_body("<html>502</html>"), None);
    }
}
