//! Location entity

pub mod model;

pub use model::Location;
