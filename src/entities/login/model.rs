use crate::impl_validated_model;
use serde::{Deserialize, Serialize};

/// Fixed message of a successful login
pub const LOGIN_MESSAGE: &str = "Login Succesfully!";

/// Urlencoded credentials of `POST /login`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl_validated_model!(
    LoginForm,
    "login_form",
    {
        username: String [required, string_length(1, 20)],
        password: String [required],
    }
);

/// Login response; the password has no field here
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginOut {
    pub username: String,
    pub message: String,
}

impl LoginOut {
    pub fn succeeded(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            message: LOGIN_MESSAGE.to_string(),
        }
    }
}
