use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A visitor-submitted message. Append-only: once stored, a message is
/// never updated or removed by any exposed operation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ContactMessage {
    /// Unix epoch milliseconds at submission; doubles as the identifier.
    pub id: i64,

    pub name: String,

    pub email: String,

    pub message: String,

    /// Submission instant, RFC 3339.
    pub timestamp: String,
}
