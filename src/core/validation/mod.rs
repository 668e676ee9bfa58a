//! Validation system
//!
//! This module provides a declarative approach to validating request input
//! before it reaches the handlers. Models declare their schema with the
//! `impl_validated_model!` macro; the extractors run it.

pub mod config;
pub mod extractor;
pub mod validators;

pub use config::{FieldKind, FieldSpec, ModelSchema};
pub use extractor::{
    ValidatableModel, Validated, ValidatedForm, ValidatedPath, ValidatedPathJson, ValidatedQuery,
};
