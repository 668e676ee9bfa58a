//! Login: form credentials echoed back without the secret

pub mod handlers;
pub mod model;

pub use model::{LOGIN_MESSAGE, LoginForm, LoginOut};
