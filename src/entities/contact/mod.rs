//! Contact form with transport metadata

pub mod handlers;
pub mod model;

pub use model::{ADS_COOKIE, ContactForm, ContactReply};
