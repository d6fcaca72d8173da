//! Manpower Endpoints

use super::ApiClient;
use crate::error::ApiError;
use crate::forms::ManPowerPayload;
use crate::models::{Assignment, ManPower};

impl ApiClient {
    pub async fn list_manpower(&self) -> Result<Vec<ManPower>, ApiError> {
        self.get_list("/api/manpower").await
    }

    pub async fn get_manpower(&self, id: u32) -> Result<ManPower, ApiError> {
        self.get(&format!("/api/manpower/{}", id)).await
    }

    pub async fn manpower_assignments(&self, id: u32) -> Result<Vec<Assignment>, ApiError> {
        self.get_list(&format!("/api/manpower/{}/assignments", id)).await
    }

    pub async fn create_manpower(&self, payload: &ManPowerPayload) -> Result<(), ApiError> {
        self.post("/api/manpower", payload).await
    }

    pub async fn update_manpower(&self, id: u32, payload: &ManPowerPayload) -> Result<(), ApiError> {
        self.put(&format!("/api/manpower/{}", id), payload).await
    }
}
