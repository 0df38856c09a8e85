//! Project member endpoints.

use shared::models::Member;

use crate::error::ClientResult;
use crate::request::RequestDescriptor;
use crate::response::ErrorCopy;

use super::ConsensusClient;

impl ConsensusClient {
    pub async fn members(&self, project_id: i64) -> ClientResult<Vec<Member>> {
        self.call(
            RequestDescriptor::get(format!("/projects/{project_id}/members")),
            ErrorCopy::GENERIC,
        )
        .await
    }

    pub async fn remove_member(&self, project_id: i64, user_id: i64) -> ClientResult<()> {
        self.call(
            RequestDescriptor::delete(format!("/projects/{project_id}/members/{user_id}")),
            ErrorCopy::GENERIC,
        )
        .await
    }
}
