use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::AdminSession;
use crate::modules::project::application::domain::entities::MediaType;
use crate::modules::uploads::application::domain::storage_path::{
    derive_storage_path, UploadFolder,
};
use crate::modules::uploads::application::ports::incoming::use_cases::{
    UploadMediaCommand, UploadMediaError, UploadMediaUseCase, UploadedMedia,
};
use crate::modules::uploads::application::ports::outgoing::ObjectStorage;
use crate::shared::clock::Clock;

pub struct UploadMediaService<S>
where
    S: ObjectStorage,
{
    storage: Arc<S>,
    clock: Arc<dyn Clock>,
}

impl<S> UploadMediaService<S>
where
    S: ObjectStorage,
{
    pub fn new(storage: Arc<S>, clock: Arc<dyn Clock>) -> Self {
        Self { storage, clock }
    }
}

#[async_trait]
impl<S> UploadMediaUseCase for UploadMediaService<S>
where
    S: ObjectStorage + 'static,
{
    async fn upload(
        &self,
        session: &AdminSession,
        command: UploadMediaCommand,
    ) -> Result<UploadedMedia, UploadMediaError> {
        let file_name = command.file_name.trim();
        if file_name.is_empty() {
            return Err(UploadMediaError::MissingFileName);
        }
        if command.bytes.is_empty() {
            return Err(UploadMediaError::EmptyFile);
        }

        let path = derive_storage_path(command.folder, file_name, self.clock.now_millis());
        let media_type = MediaType::from_content_type(&command.content_type);
        let size = command.bytes.len();

        let url = self
            .storage
            .upload(&path, command.bytes, &command.content_type)
            .await?;

        info!(
            path = %path,
            size,
            operator = %session.email(),
            "Media uploaded"
        );

        Ok(UploadedMedia {
            path,
            url,
            media_type,
        })
    }

    async fn delete(&self, session: &AdminSession, path: &str) -> Result<(), UploadMediaError> {
        if UploadFolder::of_path(path).is_none() {
            return Err(UploadMediaError::UnmanagedPath);
        }

        self.storage.delete(path).await?;

        info!(path = %path, operator = %session.email(), "Media deleted");
        Ok(())
    }
}
