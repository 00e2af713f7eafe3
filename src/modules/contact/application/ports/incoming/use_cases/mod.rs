mod list_messages;
mod submit_message;

pub use list_messages::{ListMessagesError, ListMessagesUseCase};
pub use submit_message::{
    SubmitMessageCommand, SubmitMessageCommandError, SubmitMessageError, SubmitMessageUseCase,
};
