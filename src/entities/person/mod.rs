//! Person entity: models, the id registry and HTTP handlers

pub mod handlers;
pub mod model;
pub mod registry;

pub use model::{
    HairColor, NAME_PATTERN, Person, PersonBase, PersonDetailQuery, PersonIdPath, PersonOut,
    UpdatePersonBody,
};
pub use registry::{PERSONS, PersonRegistry};
