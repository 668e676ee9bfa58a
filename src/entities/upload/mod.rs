//! Image upload

pub mod handlers;

pub use handlers::{IMAGE_FIELD, ImageSummary};
