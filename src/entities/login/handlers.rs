use super::model::{LoginForm, LoginOut};
use crate::core::validation::ValidatedForm;
use axum::Json;

/// Build the login response from submitted credentials
pub fn authenticate(form: LoginForm) -> LoginOut {
    LoginOut::succeeded(form.username)
}

/// `POST /login`
pub async fn login(ValidatedForm(form): ValidatedForm<LoginForm>) -> Json<LoginOut> {
    tracing::debug!(username = %form.username, "login");
    Json(authenticate(form))
}
