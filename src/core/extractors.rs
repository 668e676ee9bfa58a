//! Axum extractors for out-of-band request data
//!
//! This module provides helpers that read:
//! - transport metadata (headers and cookies) that is not part of a validated payload
//! - uploaded files from multipart bodies

use axum::body::Bytes;
use axum::extract::Multipart;
use axum::extract::multipart::MultipartError;
use axum::http::{HeaderMap, header};
use cookie::Cookie;

use crate::core::error::{
    ApiError, ApiResult, FieldValidationError, RequestError, ValidationError,
};

/// Read a header as text; `None` when absent
pub fn header_value(headers: &HeaderMap, name: &str) -> ApiResult<Option<String>> {
    match headers.get(name) {
        None => Ok(None),
        Some(value) => value
            .to_str()
            .map(|s| Some(s.to_string()))
            .map_err(|_| {
                RequestError::InvalidHeader {
                    header: name.to_string(),
                }
                .into()
            }),
    }
}

/// Read a cookie from every `Cookie` header of the request
///
/// The first occurrence wins; malformed pairs are skipped.
pub fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|raw| Cookie::split_parse(raw))
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == name)
        .map(|cookie| cookie.value_trimmed().to_string())
}

/// A file part read from a multipart body
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Client-declared file name
    pub filename: Option<String>,
    /// Client-declared content type
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl UploadedFile {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Read the part named `field` from a multipart body
    ///
    /// Other parts are skipped. A body without the part is reported as a
    /// missing field, like any other required input.
    pub async fn from_multipart(multipart: &mut Multipart, field: &str) -> ApiResult<Self> {
        while let Some(part) = multipart.next_field().await.map_err(multipart_error)? {
            if part.name() != Some(field) {
                continue;
            }
            let filename = part.file_name().map(str::to_string);
            let content_type = part.content_type().map(str::to_string);
            let bytes = part.bytes().await.map_err(multipart_error)?;
            return Ok(Self {
                filename,
                content_type,
                bytes,
            });
        }

        Err(ValidationError::FieldErrors(vec![FieldValidationError::missing(field)]).into())
    }
}

fn multipart_error(err: MultipartError) -> ApiError {
    let status = err.status();
    let message = err.body_text();
    if status == axum::http::StatusCode::PAYLOAD_TOO_LARGE {
        RequestError::PayloadTooLarge { message }.into()
    } else {
        ValidationError::InvalidBody { message }.into()
    }
}
