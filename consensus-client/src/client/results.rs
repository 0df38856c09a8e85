//! Result endpoint.

use shared::models::CalculationResult;

use crate::error::{ClientError, ClientResult};
use crate::request::RequestDescriptor;
use crate::response::ErrorCopy;

use super::ConsensusClient;

impl ConsensusClient {
    /// Aggregated consensus result of a project.
    ///
    /// A failure response (e.g. not enough opinions yet) is an expected
    /// state and yields `Ok(None)`. Transport and decode failures still
    /// propagate.
    pub async fn result(&self, project_id: i64) -> ClientResult<Option<CalculationResult>> {
        let descriptor = RequestDescriptor::get(format!("/projects/{project_id}/result"));
        match self.call(descriptor, ErrorCopy::GENERIC).await {
            Ok(result) => Ok(Some(result)),
            Err(ClientError::Http { status, message }) => {
                tracing::debug!(project_id, status, %message, "No result available");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}
