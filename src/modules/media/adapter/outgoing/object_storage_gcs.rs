use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::OnceCell;

use crate::media::application::ports::outgoing::{ObjectStorage, ObjectStorageError};

/// Objects land in a public bucket; the URL is stable and unsigned.
fn public_object_url(bucket: &str, object_name: &str) -> String {
    format!("https://storage.googleapis.com/{}/{}", bucket, object_name)
}

fn map_upload_error(msg: &str) -> ObjectStorageError {
    let m = msg.to_lowercase();

    if m.contains("permission") || m.contains("forbidden") || m.contains("denied") {
        ObjectStorageError::AccessDenied
    } else if m.contains("bucket") && (m.contains("not found") || m.contains("404")) {
        ObjectStorageError::BucketNotFound
    } else if m.contains("invalid") || m.contains("config") || m.contains("configuration") {
        ObjectStorageError::Configuration
    } else {
        ObjectStorageError::Infrastructure
    }
}

/// Internal seam to make the adapter testable without mocking
/// google-cloud-storage types.
///
/// Tests implement this trait with a fake client.
#[async_trait]
trait GcsClient: Send + Sync {
    async fn upload_object_bytes(
        &self,
        bucket: &str,
        object_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<(), String>;
}

#[cfg(test)]
struct ArcGcsClient(Arc<dyn GcsClient>);

#[cfg(test)]
#[async_trait]
impl GcsClient for ArcGcsClient {
    async fn upload_object_bytes(
        &self,
        bucket: &str,
        object_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<(), String> {
        self.0
            .upload_object_bytes(bucket, object_name, content_type, bytes)
            .await
    }
}

/// Production adapter: implements the ObjectStorage port over Google
/// Cloud Storage. The client is initialized lazily on first use so
/// startup does not depend on credentials being reachable.
#[derive(Clone)]
pub struct GcsObjectStorage {
    client: Arc<OnceCell<Box<dyn GcsClient>>>,
    bucket: String,
}

impl GcsObjectStorage {
    pub fn new(bucket: String) -> Self {
        Self {
            client: Arc::new(OnceCell::new()),
            bucket,
        }
    }

    async fn get_client(&self) -> Result<&dyn GcsClient, Box<dyn std::error::Error + Send + Sync>> {
        self.client
            .get_or_try_init(|| async {
                let real_client = RealGcsClient::new().await?;
                Ok(Box::new(real_client) as Box<dyn GcsClient>)
            })
            .await
            .map(|boxed| &**boxed)
    }

    /// Test-friendly constructor with a pre-initialized client.
    #[cfg(test)]
    fn with_client(client: Arc<dyn GcsClient>, bucket: &str) -> Self {
        let once = OnceCell::new();
        let _ = once.set(Box::new(ArcGcsClient(client)) as Box<dyn GcsClient>);

        Self {
            client: Arc::new(once),
            bucket: bucket.to_string(),
        }
    }
}

#[async_trait]
impl ObjectStorage for GcsObjectStorage {
    async fn put_object(
        &self,
        object_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, ObjectStorageError> {
        let client = self
            .get_client()
            .await
            .map_err(|_| ObjectStorageError::Infrastructure)?;

        client
            .upload_object_bytes(&self.bucket, object_name, content_type, bytes)
            .await
            .map_err(|e| map_upload_error(&e))?;

        Ok(public_object_url(&self.bucket, object_name))
    }
}

// ============================================================================
// Real Google Cloud Storage client (google-cloud-storage)
// ============================================================================

struct RealGcsClient {
    client: google_cloud_storage::client::Client,
}

impl RealGcsClient {
    async fn new() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        tracing::info!("Initializing GCS client...");

        let config = google_cloud_storage::client::ClientConfig::default()
            .with_auth()
            .await
            .map_err(|e| {
                tracing::error!("Failed to build GCS client config: {:?}", e);
                e
            })?;

        tracing::info!("GCS client created");

        Ok(Self {
            client: google_cloud_storage::client::Client::new(config),
        })
    }
}

#[async_trait]
impl GcsClient for RealGcsClient {
    async fn upload_object_bytes(
        &self,
        bucket: &str,
        object_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<(), String> {
        use google_cloud_storage::http::objects::upload::{Media, UploadObjectRequest, UploadType};

        let upload_type = UploadType::Simple(Media {
            name: object_name.to_string().into(),
            content_type: content_type.to_string().into(),
            content_length: Some(bytes.len() as u64),
        });

        self.client
            .upload_object(
                &UploadObjectRequest {
                    bucket: bucket.to_string(),
                    ..Default::default()
                },
                bytes,
                &upload_type,
            )
            .await
            .map_err(|e| e.to_string())?;

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
