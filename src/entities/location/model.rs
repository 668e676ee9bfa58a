use crate::impl_validated_model;
use serde::{Deserialize, Serialize};

/// Where a person lives
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub state: String,
    pub country: String,
}

impl_validated_model!(
    Location,
    "location",
    {
        city: String [required, min_length(1)],
        state: String [required, min_length(1)],
        country: String [required, min_length(1)],
    }
);
