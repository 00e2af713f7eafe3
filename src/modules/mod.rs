pub mod contact;
pub mod media;
pub mod portfolio;
