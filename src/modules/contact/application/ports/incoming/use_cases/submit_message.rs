use async_trait::async_trait;

use crate::contact::domain::entities::ContactMessage;

//
// ──────────────────────────────────────────────────────────
// Submit Message Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct SubmitMessageCommand {
    name: String,
    email: String,
    message: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmitMessageCommandError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

impl SubmitMessageCommand {
    /// All three fields must be present and non-blank. No format
    /// validation beyond that; the store accepts whatever the visitor
    /// typed.
    pub fn new(
        name: String,
        email: String,
        message: String,
    ) -> Result<Self, SubmitMessageCommandError> {
        let name = name.trim();
        let email = email.trim();
        let message = message.trim();

        if name.is_empty() {
            return Err(SubmitMessageCommandError::MissingField("name"));
        }
        if email.is_empty() {
            return Err(SubmitMessageCommandError::MissingField("email"));
        }
        if message.is_empty() {
            return Err(SubmitMessageCommandError::MissingField("message"));
        }

        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmitMessageError {
    #[error("Storage error: {0}")]
    StorageError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait SubmitMessageUseCase: Send + Sync {
    async fn execute(
        &self,
        command: SubmitMessageCommand,
    ) -> Result<ContactMessage, SubmitMessageError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_trims_and_keeps_all_fields() {
        let cmd = SubmitMessageCommand::new(
            "  A  ".to_string(),
            "a@x.com".to_string(),
            "hi".to_string(),
        )
        .unwrap();

        assert_eq!(cmd.name(), "A");
        assert_eq!(cmd.email(), "a@x.com");
        assert_eq!(cmd.message(), "hi");
    }

    #[test]
    fn missing_name_is_rejected() {
        let err = SubmitMessageCommand::new(
            String::new(),
            "a@x.com".to_string(),
            "hi".to_string(),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            SubmitMessageCommandError::MissingField("name")
        ));
    }

    #[test]
    fn blank_email_is_rejected() {
        let err =
            SubmitMessageCommand::new("A".to_string(), "   ".to_string(), "hi".to_string())
                .unwrap_err();

        assert!(matches!(
            err,
            SubmitMessageCommandError::MissingField("email")
        ));
    }

    #[test]
    fn missing_message_is_rejected() {
        let err =
            SubmitMessageCommand::new("A".to_string(), "a@x.com".to_string(), String::new())
                .unwrap_err();

        assert!(matches!(
            err,
            SubmitMessageCommandError::MissingField("message")
        ));
    }
}
