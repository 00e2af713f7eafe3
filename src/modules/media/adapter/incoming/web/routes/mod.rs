mod upload_file;

// Glob re-export so the OpenAPI macro can resolve the handler here.
pub use upload_file::*;
