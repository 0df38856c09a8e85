//! Invitation endpoints.

use shared::models::{InviteRequest, Invitation};

use crate::error::ClientResult;
use crate::request::RequestDescriptor;
use crate::response::ErrorCopy;

use super::ConsensusClient;

impl ConsensusClient {
    /// Invites an expert by e-mail (`POST /projects/:id/invite`)
    pub async fn invite_expert(&self, project_id: i64, email: &str) -> ClientResult<Invitation> {
        let descriptor = RequestDescriptor::post(format!("/projects/{project_id}/invite")).json(
            &InviteRequest {
                email: email.to_string(),
            },
        )?;
        self.call(descriptor, ErrorCopy::GENERIC).await
    }

    /// Invitations addressed to the current user
    pub async fn invitations(&self) -> ClientResult<Vec<Invitation>> {
        self.call(RequestDescriptor::get("/invitations"), ErrorCopy::GENERIC)
            .await
    }

    pub async fn accept_invitation(&self, invitation_id: i64) -> ClientResult<Invitation> {
        self.call(
            RequestDescriptor::post(format!("/invitations/{invitation_id}/accept")),
            ErrorCopy::GENERIC,
        )
        .await
    }

    /// 204 on success
    pub async fn decline_invitation(&self, invitation_id: i64) -> ClientResult<()> {
        self.call(
            RequestDescriptor::post(format!("/invitations/{invitation_id}/decline")),
            ErrorCopy::GENERIC,
        )
        .await
    }
}
