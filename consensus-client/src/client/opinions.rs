//! Opinion endpoints (`/projects/:id/opinions`).

use shared::models::{Opinion, OpinionCreate};

use crate::error::ClientResult;
use crate::request::RequestDescriptor;
use crate::response::ErrorCopy;

use super::ConsensusClient;

impl ConsensusClient {
    pub async fn opinions(&self, project_id: i64) -> ClientResult<Vec<Opinion>> {
        self.call(
            RequestDescriptor::get(format!("/projects/{project_id}/opinions")),
            ErrorCopy::GENERIC,
        )
        .await
    }

    /// Submits the current user's opinion, replacing any earlier one
    pub async fn create_or_update_opinion(
        &self,
        project_id: i64,
        opinion: &OpinionCreate,
    ) -> ClientResult<Opinion> {
        let descriptor =
            RequestDescriptor::post(format!("/projects/{project_id}/opinions")).json(opinion)?;
        self.call(descriptor, ErrorCopy::GENERIC).await
    }

    /// Withdraws the current user's opinion
    pub async fn delete_opinion(&self, project_id: i64) -> ClientResult<()> {
        self.call(
            RequestDescriptor::delete(format!("/projects/{project_id}/opinions")),
            ErrorCopy::GENERIC,
        )
        .await
    }
}
