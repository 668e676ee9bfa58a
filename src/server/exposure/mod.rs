//! API exposure modules
//!
//! Each exposure consumes the application configuration and produces a Router
//! for its protocol. REST is the only one.

pub mod rest;

pub use rest::RestExposure;
