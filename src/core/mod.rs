//! Core module containing the validation engine, extractors and error types

pub mod error;
pub mod extractors;
pub mod validation;

pub use error::{
    ApiError, ApiResult, ErrorResponse, FieldValidationError, PersonError, RequestError,
    ValidationError,
};
pub use extractors::{UploadedFile, cookie_value, header_value};
pub use validation::{
    FieldKind, ModelSchema, ValidatableModel, Validated, ValidatedForm, ValidatedPath,
    ValidatedQuery,
};
