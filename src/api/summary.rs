//! Summary Endpoint

use super::ApiClient;
use crate::error::ApiError;
use crate::models::Summary;

impl ApiClient {
    pub async fn summary(&self) -> Result<Summary, ApiError> {
        let summary: Option<Summary> = self.get("/api/summary").await?;
        Ok(summary.unwrap_or_default())
    }
}
