//! Server module for building HTTP servers
//!
//! This module provides a `ServerBuilder` that registers:
//! - the person, login, contact and upload routes
//! - health check routes
//! - request tracing and the upload size cap

pub mod builder;
pub mod exposure;
pub mod router;

pub use builder::ServerBuilder;
pub use exposure::RestExposure;
