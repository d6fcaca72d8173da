//! Task Endpoints

use super::ApiClient;
use crate::error::ApiError;
use crate::forms::TaskPayload;

impl ApiClient {
    pub async fn create_task(&self, payload: &TaskPayload) -> Result<(), ApiError> {
        self.post("/api/tasks", payload).await
    }
}
