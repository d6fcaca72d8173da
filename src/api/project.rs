//! Project Endpoints

use super::ApiClient;
use crate::error::ApiError;
use crate::forms::ProjectPayload;
use crate::models::{Project, SCurve, Task};

/// Everything the project detail section shows
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDetail {
    pub project: Project,
    pub s_curve: SCurve,
    pub tasks: Vec<Task>,
}

impl ApiClient {
    pub async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        self.get_list("/api/projects").await
    }

    pub async fn get_project(&self, id: u32) -> Result<Project, ApiError> {
        self.get(&format!("/api/projects/{}", id)).await
    }

    pub async fn project_s_curve(&self, id: u32) -> Result<SCurve, ApiError> {
        let curve: Option<SCurve> = self.get(&format!("/api/projects/{}/s-curve", id)).await?;
        Ok(curve.unwrap_or_default())
    }

    pub async fn project_tasks(&self, id: u32) -> Result<Vec<Task>, ApiError> {
        self.get_list(&format!("/api/projects/{}/tasks", id)).await
    }

    /// Record, curve and tasks fetched concurrently; any failure fails all
    pub async fn project_detail(&self, id: u32) -> Result<ProjectDetail, ApiError> {
        let (project, s_curve, tasks) =
            futures::try_join!(self.get_project(id), self.project_s_curve(id), self.project_tasks(id))?;
        Ok(ProjectDetail {
            project,
            s_curve,
            tasks,
        })
    }

    pub async fn create_project(&self, payload: &ProjectPayload) -> Result<(), ApiError> {
        self.post("/api/projects", payload).await
    }

    pub async fn update_project(&self, id: u32, payload: &ProjectPayload) -> Result<(), ApiError> {
        self.put(&format!("/api/projects/{}", id), payload).await
    }
}
