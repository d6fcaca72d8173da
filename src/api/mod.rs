//! REST API Client
//!
//! Thin async wrappers over `window.fetch`, organized by resource.

mod assignment;
mod manpower;
mod non_project;
mod project;
mod summary;
mod task;

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

use crate::error::{error_message_from_body, js_error_message, ApiError};

pub use project::ProjectDetail;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
}

/// Parse a successful response body
pub(crate) fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Error for a non-2xx response
pub(crate) fn status_error(status: u16, body: &str) -> ApiError {
    ApiError::Status {
        status,
        message: error_message_from_body(body),
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let body = self.send("GET", path, None).await?;
        decode_body(&body)
    }

    /// A JSON array; `null` reads as empty
    pub async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        let list: Option<Vec<T>> = self.get(path).await?;
        Ok(list.unwrap_or_default())
    }

    /// Mutations re-load afterwards, so the echoed record is not decoded
    pub async fn post<B: Serialize>(&self, path: &str, payload: &B) -> Result<(), ApiError> {
        let json = serde_json::to_string(payload).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.send("POST", path, Some(json)).await.map(|_| ())
    }

    pub async fn put<B: Serialize>(&self, path: &str, payload: &B) -> Result<(), ApiError> {
        let json = serde_json::to_string(payload).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.send("PUT", path, Some(json)).await.map(|_| ())
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send("DELETE", path, None).await.map(|_| ())
    }

    /// Issue the request and return the raw body of a 2xx response
    async fn send(&self, method: &str, path: &str, body: Option<String>) -> Result<String, ApiError> {
        let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;

        let opts = RequestInit::new();
        opts.set_method(method);
        opts.set_mode(RequestMode::Cors);

        let headers = Headers::new().map_err(|e| ApiError::Network(js_error_message(&e)))?;
        headers
            .set("Accept", "application/json")
            .map_err(|e| ApiError::Network(js_error_message(&e)))?;
        if let Some(body) = &body {
            headers
                .set("Content-Type", "application/json")
                .map_err(|e| ApiError::Network(js_error_message(&e)))?;
            opts.set_body(&JsValue::from_str(body));
        }
        opts.set_headers(&headers);

        let url = self.url(path);
        let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| ApiError::Network(js_error_message(&e)))?;

        let response_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| ApiError::Network(js_error_message(&e)))?;
        let response: Response = response_value
            .dyn_into()
            .map_err(|_| ApiError::Decode("fetch did not return a Response".to_string()))?;

        let text_promise = response.text().map_err(|e| ApiError::Decode(js_error_message(&e)))?;
        let text = JsFuture::from(text_promise)
            .await
            .map_err(|e| ApiError::Decode(js_error_message(&e)))?
            .as_string()
            .unwrap_or_default();

        if !response.ok() {
            return Err(status_error(response.status(), &text));
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Project;

    #[test]
    fn test_url_joins_base_and_path() {
        assert_eq!(ApiClient::new("http://localhost:5000").url("/api/summary"), "http://localhost:5000/api/summary");
        assert_eq!(ApiClient::new("").url("/api/projects/3"), "/api/projects/3");
    }

    #[test]
    fn test_decode_body() {
        let projects: Vec<Project> = decode_body(r#"[{"id": 1, "name": "A"}, {"id": 2}]"#).unwrap();
        assert_eq!(projects.len(), 2);

        let err = decode_body::<Vec<Project>>("<html>").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_status_error_carries_backend_message() {
        assert_eq!(
            status_error(404, r#"{"error": "Project not found"}"#),
            ApiError::Status {
                status: 404,
                message: Some("Project not found".to_string())
            }
        );
        assert_eq!(status_error(502, "Bad Gateway"), ApiError::Status { status: 502, message: None });
    }
}
