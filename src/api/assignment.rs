//! Assignment Endpoints

use super::ApiClient;
use crate::error::ApiError;
use crate::forms::AssignmentPayload;

impl ApiClient {
    pub async fn create_assignment(&self, payload: &AssignmentPayload) -> Result<(), ApiError> {
        self.post("/api/assignments", payload).await
    }
}
