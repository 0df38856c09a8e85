//! Project endpoints (`/projects`).

use shared::models::{Project, ProjectCreate, ProjectUpdate};

use crate::error::ClientResult;
use crate::request::RequestDescriptor;
use crate::response::ErrorCopy;

use super::ConsensusClient;

impl ConsensusClient {
    /// Projects the current user owns or is a member of
    pub async fn projects(&self) -> ClientResult<Vec<Project>> {
        self.call(RequestDescriptor::get("/projects"), ErrorCopy::GENERIC)
            .await
    }

    pub async fn project(&self, project_id: i64) -> ClientResult<Project> {
        self.call(
            RequestDescriptor::get(format!("/projects/{project_id}")),
            ErrorCopy::GENERIC,
        )
        .await
    }

    pub async fn create_project(&self, payload: &ProjectCreate) -> ClientResult<Project> {
        let descriptor = RequestDescriptor::post("/projects").json(payload)?;
        self.call(descriptor, ErrorCopy::GENERIC).await
    }

    pub async fn update_project(
        &self,
        project_id: i64,
        payload: &ProjectUpdate,
    ) -> ClientResult<Project> {
        let descriptor = RequestDescriptor::put(format!("/projects/{project_id}")).json(payload)?;
        self.call(descriptor, ErrorCopy::GENERIC).await
    }

    pub async fn delete_project(&self, project_id: i64) -> ClientResult<()> {
        self.call(
            RequestDescriptor::delete(format!("/projects/{project_id}")),
            ErrorCopy::GENERIC,
        )
        .await
    }
}
