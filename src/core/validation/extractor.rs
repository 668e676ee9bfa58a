//! Axum extractors for validated models
//!
//! Each extractor reads one request source (JSON body, query string, urlencoded
//! form or path segments) into a raw JSON object, runs the model's validation
//! and only then deserializes the typed value. Handlers behind these extractors
//! never see invalid input.

use crate::core::error::{ApiError, RequestError, ValidationError};
use axum::{
    Form, Json,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::{StatusCode, request::Parts},
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Trait for models that support validation
///
/// This is implemented by the `impl_validated_model!` macro for flat models,
/// and by hand for composite ones.
pub trait ValidatableModel: DeserializeOwned {
    /// Validate a raw input, returning the coerced value on success
    fn validate_raw(raw: Value) -> Result<Value, ValidationError>;

    /// Validate then deserialize into the typed model
    fn from_raw(raw: Value) -> Result<Self, ValidationError> {
        let validated = Self::validate_raw(raw)?;
        serde_json::from_value(validated).map_err(|e| ValidationError::InvalidBody {
            message: e.to_string(),
        })
    }
}

/// Map a framework rejection onto the crate error, keeping 413 distinct
pub(crate) fn rejection_error(status: StatusCode, message: String) -> ApiError {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        RequestError::PayloadTooLarge { message }.into()
    } else {
        ValidationError::InvalidBody { message }.into()
    }
}

fn string_map_to_value(map: HashMap<String, String>) -> Value {
    Value::Object(
        map.into_iter()
            .map(|(k, v)| (k, Value::String(v)))
            .collect::<Map<String, Value>>(),
    )
}

/// JSON body extractor
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn create_person(
///     Validated(person): Validated<Person>,
/// ) -> (StatusCode, Json<PersonOut>) {
///     // person is already validated
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Validated<T>(pub T);

impl<S, T> FromRequest<S> for Validated<T>
where
    S: Send + Sync,
    T: ValidatableModel + Send,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let payload = json_input(req, state).await?;
        Ok(Validated(T::from_raw(payload)?))
    }
}

/// Query string extractor
#[derive(Debug, Clone)]
pub struct ValidatedQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    S: Send + Sync,
    T: ValidatableModel + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params): Query<HashMap<String, String>> =
            Query::from_request_parts(parts, state)
                .await
                .map_err(|e| rejection_error(e.status(), e.body_text()))?;

        Ok(ValidatedQuery(T::from_raw(string_map_to_value(params))?))
    }
}

/// Urlencoded form extractor
#[derive(Debug, Clone)]
pub struct ValidatedForm<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedForm<T>
where
    S: Send + Sync,
    T: ValidatableModel + Send,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(fields): Form<HashMap<String, String>> = Form::from_request(req, state)
            .await
            .map_err(|e| rejection_error(e.status(), e.body_text()))?;

        Ok(ValidatedForm(T::from_raw(string_map_to_value(fields))?))
    }
}

/// Path segment extractor
#[derive(Debug, Clone)]
pub struct ValidatedPath<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidatedPath<T>
where
    S: Send + Sync,
    T: ValidatableModel + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let segments = path_input(parts, state).await?;
        Ok(ValidatedPath(T::from_raw(segments)?))
    }
}

/// Path segments and JSON body validated together
///
/// Both sources are checked before rejecting, so a single 422 lists the
/// violations of the path followed by those of the body.
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn update_person(
///     ValidatedPathJson(path, body): ValidatedPathJson<PersonIdPath, UpdatePersonBody>,
/// ) -> ApiResult<Json<IndexMap<String, Value>>> {
///     // path and body are both valid
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ValidatedPathJson<P, B>(pub P, pub B);

impl<S, P, B> FromRequest<S> for ValidatedPathJson<P, B>
where
    S: Send + Sync,
    P: ValidatableModel + Send,
    B: ValidatableModel + Send,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (mut parts, body) = req.into_parts();
        let segments = path_input(&mut parts, state).await?;
        let payload = json_input(Request::from_parts(parts, body), state).await?;

        match (P::from_raw(segments), B::from_raw(payload)) {
            (Ok(path), Ok(body)) => Ok(ValidatedPathJson(path, body)),
            (Err(path_err), Err(body_err)) => Err(path_err.merge(body_err).into()),
            (Err(err), Ok(_)) | (Ok(_), Err(err)) => Err(err.into()),
        }
    }
}

async fn json_input<S: Send + Sync>(req: Request, state: &S) -> Result<Value, ApiError> {
    let Json(payload): Json<Value> = Json::from_request(req, state)
        .await
        .map_err(|e| rejection_error(e.status(), e.body_text()))?;
    Ok(payload)
}

async fn path_input<S: Send + Sync>(parts: &mut Parts, state: &S) -> Result<Value, ApiError> {
    let Path(segments): Path<HashMap<String, String>> = Path::from_request_parts(parts, state)
        .await
        .map_err(|e| rejection_error(e.status(), e.body_text()))?;
    Ok(string_map_to_value(segments))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_map_to_value() {
        let mut map = HashMap::new();
        map.insert("age".to_string(), "25".to_string());
        assert_eq!(string_map_to_value(map), json!({"age": "25"}));
    }

    #[test]
    fn test_rejection_error_keeps_payload_too_large() {
        let err = rejection_error(StatusCode::PAYLOAD_TOO_LARGE, "too big".to_string());
        assert_eq!(err.status_code(), StatusCode::PAYLOAD_TOO_LARGE);

        let err = rejection_error(StatusCode::UNSUPPORTED_MEDIA_TYPE, "no type".to_string());
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
