use crate::impl_validated_model;
use serde::{Deserialize, Serialize};

/// Cookie read alongside the contact form
pub const ADS_COOKIE: &str = "ads";

/// Urlencoded body of `POST /contact`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

impl_validated_model!(
    ContactForm,
    "contact_form",
    {
        first_name: String [required, string_length(1, 20)],
        last_name: String [required, string_length(1, 20)],
        email: String [required, email],
        message: String [required, min_length(20)],
    }
);

/// Echo of the out-of-band values that came with a contact request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactReply {
    pub user_agent: Option<String>,
    pub ads: Option<String>,
}
