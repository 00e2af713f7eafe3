use async_trait::async_trait;
use serde::{Deserialize, Serialize};

//
// ──────────────────────────────────────────────────────────
// Upload kind
// ──────────────────────────────────────────────────────────
//

/// What the uploaded file is for. The kind prefixes the stored object
/// name, so a photo and a resume never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadKind {
    Photo,
    Resume,
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("Unknown upload type: {0}")]
pub struct UnknownUploadKind(pub String);

impl std::str::FromStr for UploadKind {
    type Err = UnknownUploadKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "photo" => Ok(UploadKind::Photo),
            "resume" => Ok(UploadKind::Resume),
            other => Err(UnknownUploadKind(other.to_string())),
        }
    }
}

impl UploadKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            UploadKind::Photo => "photo",
            UploadKind::Resume => "resume",
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Store Upload Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct StoreUploadCommand {
    kind: UploadKind,
    file_name: String,
    content_type: String,
    bytes: Vec<u8>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreUploadCommandError {
    #[error("No file provided")]
    MissingFile,
}

impl StoreUploadCommand {
    /// No content validation here: whatever bytes arrive are stored as-is.
    /// Only an empty upload is rejected.
    pub fn new(
        kind: UploadKind,
        file_name: String,
        content_type: String,
        bytes: Vec<u8>,
    ) -> Result<Self, StoreUploadCommandError> {
        if bytes.is_empty() {
            return Err(StoreUploadCommandError::MissingFile);
        }

        Ok(Self {
            kind,
            file_name,
            content_type,
            bytes,
        })
    }

    pub fn kind(&self) -> UploadKind {
        self.kind
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Extension of the original file name, `bin` when it has none.
    pub fn extension(&self) -> &str {
        self.file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .filter(|ext| !ext.is_empty())
            .unwrap_or("bin")
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreUploadError {
    #[error("Storage provider error: {0}")]
    StorageError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

/// Store an uploaded file publicly and return its public URL.
#[async_trait]
pub trait StoreUploadUseCase: Send + Sync {
    async fn execute(&self, command: StoreUploadCommand) -> Result<String, StoreUploadError>;
}
