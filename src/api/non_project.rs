//! Non-Project Endpoints

use super::ApiClient;
use crate::error::ApiError;
use crate::forms::NonProjectPayload;
use crate::models::NonProject;

impl ApiClient {
    pub async fn list_non_projects(&self) -> Result<Vec<NonProject>, ApiError> {
        self.get_list("/api/non-projects").await
    }

    pub async fn get_non_project(&self, id: u32) -> Result<NonProject, ApiError> {
        self.get(&format!("/api/non-projects/{}", id)).await
    }

    pub async fn create_non_project(&self, payload: &NonProjectPayload) -> Result<(), ApiError> {
        self.post("/api/non-projects", payload).await
    }

    pub async fn update_non_project(&self, id: u32, payload: &NonProjectPayload) -> Result<(), ApiError> {
        self.put(&format!("/api/non-projects/{}", id), payload).await
    }
}
