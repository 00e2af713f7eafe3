mod get_messages;
mod submit_message;

// Glob re-exports so the OpenAPI macro can resolve the handlers here.
pub use get_messages::*;
pub use submit_message::*;
