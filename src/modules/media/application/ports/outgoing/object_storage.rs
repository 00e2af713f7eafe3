use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ObjectStorageError {
    #[error("Access to the storage bucket was denied")]
    AccessDenied,

    #[error("Storage bucket does not exist")]
    BucketNotFound,

    #[error("Storage client configuration is invalid")]
    Configuration,

    #[error("Storage provider is unavailable")]
    Infrastructure,
}

/// Outgoing port for the public object store.
///
/// Objects are world-readable once written; the returned URL needs no
/// signing and never expires.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Write `bytes` under `object_name` and return the public URL.
    async fn put_object(
        &self,
        object_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, ObjectStorageError>;
}
