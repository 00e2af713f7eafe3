mod store_upload;

pub use store_upload::{
    StoreUploadCommand, StoreUploadCommandError, StoreUploadError, StoreUploadUseCase,
    UnknownUploadKind, UploadKind,
};
