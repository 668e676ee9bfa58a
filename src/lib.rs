//! # person-api
//!
//! A small HTTP service around one in-memory "Person" resource, built to show
//! declarative request validation on top of axum.
//!
//! ## Features
//!
//! - **Declarative schemas**: each model declares its field constraints with
//!   [`impl_validated_model!`]; one generic engine enforces them all
//! - **Complete error reports**: every violated field of an input is reported
//!   at once, with the rule that failed and the offending value
//! - **Every request source**: JSON bodies, query strings, path segments,
//!   urlencoded forms, headers, cookies and multipart uploads
//! - **Safe projections**: `PersonOut` has no password field, so it cannot leak
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use person_api::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     ServerBuilder::new()
//!         .with_config(AppConfig::from_env()?)
//!         .serve()
//!         .await
//! }
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod server;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Validation ===
    pub use crate::core::validation::{
        FieldKind, ModelSchema, ValidatableModel, Validated, ValidatedForm, ValidatedPath,
        ValidatedPathJson, ValidatedQuery,
    };

    // === Errors ===
    pub use crate::core::error::{
        ApiError, ApiResult, FieldValidationError, PersonError, RequestError, ValidationError,
    };

    // === Macros ===
    pub use crate::impl_validated_model;

    // === Models ===
    pub use crate::entities::contact::{ContactForm, ContactReply};
    pub use crate::entities::location::Location;
    pub use crate::entities::login::{LoginForm, LoginOut};
    pub use crate::entities::person::{
        HairColor, PERSONS, Person, PersonBase, PersonDetailQuery, PersonIdPath, PersonOut,
        PersonRegistry, UpdatePersonBody,
    };
    pub use crate::entities::upload::ImageSummary;

    // === Config ===
    pub use crate::config::{AppConfig, ConfigError};

    // === Server ===
    pub use crate::server::ServerBuilder;

    // === External dependencies ===
    pub use serde::{Deserialize, Serialize};
}
