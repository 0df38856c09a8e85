//! Current-user endpoints (`/users/me`).

use std::path::Path;

use shared::client::PasswordChange;
use shared::models::{User, UserUpdate};

use crate::error::ClientResult;
use crate::request::{MultipartForm, RequestDescriptor};
use crate::response::ErrorCopy;

use super::ConsensusClient;

/// Multipart field carrying the photo
const PHOTO_FIELD: &str = "file";

/// Profile photo to upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoUpload {
    pub file_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

impl PhotoUpload {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        data: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            data,
        }
    }

    /// Read a photo from disk, guessing the content type from its extension.
    pub async fn from_path(path: impl AsRef<Path>) -> ClientResult<Self> {
        let path = path.as_ref();
        let data = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "photo".to_string());
        let content_type = mime_guess::from_path(path)
            .first_or_octet_stream()
            .essence_str()
            .to_string();
        Ok(Self {
            file_name,
            content_type,
            data,
        })
    }

    fn into_form(self) -> ClientResult<MultipartForm> {
        MultipartForm::new().file(PHOTO_FIELD, self.file_name, &self.content_type, self.data)
    }
}

impl ConsensusClient {
    /// `GET /users/me`
    pub async fn current_user(&self) -> ClientResult<User> {
        self.call(RequestDescriptor::get("/users/me"), ErrorCopy::GENERIC)
            .await
    }

    /// `PUT /users/me`
    pub async fn update_current_user(&self, update: &UserUpdate) -> ClientResult<User> {
        let descriptor = RequestDescriptor::put("/users/me").json(update)?;
        self.call(descriptor, ErrorCopy::GENERIC).await
    }

    /// `PUT /users/me/password`, 204 on success
    pub async fn change_password(&self, change: &PasswordChange) -> ClientResult<()> {
        let descriptor = RequestDescriptor::put("/users/me/password").json(change)?;
        self.call(descriptor, ErrorCopy::GENERIC).await
    }

    /// `DELETE /users/me`, 204 on success. Clears the stored credential.
    pub async fn delete_account(&self) -> ClientResult<()> {
        self.call::<()>(RequestDescriptor::delete("/users/me"), ErrorCopy::GENERIC)
            .await?;
        self.tokens.set(None);
        tracing::info!("Account deleted, session cleared");
        Ok(())
    }

    /// `POST /users/me/photo`, multipart
    pub async fn upload_photo(&self, photo: PhotoUpload) -> ClientResult<User> {
        let descriptor = RequestDescriptor::post("/users/me/photo").multipart(photo.into_form()?);
        self.call(descriptor, ErrorCopy::UPLOAD).await
    }

    /// `DELETE /users/me/photo`, 204 on success
    pub async fn delete_photo(&self) -> ClientResult<()> {
        self.call(RequestDescriptor::delete("/users/me/photo"), ErrorCopy::GENERIC)
            .await
    }
}
