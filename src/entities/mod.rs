//! Entities exposed by the service and the macros that declare their schemas

pub mod macros;

pub mod contact;
pub mod location;
pub mod login;
pub mod person;
pub mod upload;
