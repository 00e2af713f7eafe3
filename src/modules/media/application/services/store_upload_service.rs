use async_trait::async_trait;
use chrono::Utc;

use crate::media::application::ports::incoming::use_cases::{
    StoreUploadCommand, StoreUploadError, StoreUploadUseCase,
};
use crate::media::application::ports::outgoing::ObjectStorage;

/// Stores uploads under `{kind}-{timestamp_ms}.{extension}`, so repeated
/// uploads of the same kind never overwrite each other within the same
/// millisecond resolution the original names carried.
#[derive(Debug, Clone)]
pub struct StoreUploadService<S>
where
    S: ObjectStorage + Send + Sync,
{
    storage: S,
}

impl<S> StoreUploadService<S>
where
    S: ObjectStorage + Send + Sync,
{
    pub fn new(storage: S) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl<S> StoreUploadUseCase for StoreUploadService<S>
where
    S: ObjectStorage + Send + Sync,
{
    async fn execute(&self, command: StoreUploadCommand) -> Result<String, StoreUploadError> {
        let object_name = format!(
            "{}-{}.{}",
            command.kind().as_str(),
            Utc::now().timestamp_millis(),
            command.extension()
        );

        let content_type = command.content_type().to_string();

        self.storage
            .put_object(&object_name, &content_type, command.into_bytes())
            .await
            .map_err(|e| StoreUploadError::StorageError(e.to_string()))
    }
}
