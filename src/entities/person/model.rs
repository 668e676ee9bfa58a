//! Person models and the request shapes that carry them

use crate::core::error::{FieldValidationError, ValidationError};
use crate::core::validation::ValidatableModel;
use crate::entities::location::Location;
use crate::impl_validated_model;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Human name: one to four capitalized words separated by single spaces
pub const NAME_PATTERN: &str = r"^[A-Z][a-z]+( [A-Z][a-z]+){0,3}$";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HairColor {
    White,
    Brown,
    Black,
    Blonde,
    Red,
}

impl HairColor {
    pub const ALL: [HairColor; 5] = [
        HairColor::White,
        HairColor::Brown,
        HairColor::Black,
        HairColor::Blonde,
        HairColor::Red,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HairColor::White => "white",
            HairColor::Brown => "brown",
            HairColor::Black => "black",
            HairColor::Blonde => "blonde",
            HairColor::Red => "red",
        }
    }
}

impl fmt::Display for HairColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HairColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HairColor::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown hair color: {}", s))
    }
}

/// Public fields shared by every person representation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonBase {
    pub first_name: String,
    pub last_name: String,
    pub age: u8,
    #[serde(default)]
    pub hair_color: Option<HairColor>,
    #[serde(default)]
    pub is_married: Option<bool>,
}

impl_validated_model!(
    PersonBase,
    "person_base",
    {
        first_name: String [required, string_length(1, 50)],
        last_name: String [required, string_length(1, 50)],
        age: Integer [required, positive, max_value(115.0)],
        hair_color: String [optional, in_list_of(HairColor::ALL)],
        is_married: Boolean [optional],
    }
);

/// A person as submitted by a client, secret included
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    #[serde(flatten)]
    pub base: PersonBase,
    pub password: String,
}

impl_validated_model!(
    Person,
    "person",
    extends PersonBase,
    {
        password: String [required, min_length(8)],
    }
);

/// Response projection of a person: never carries the password
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonOut {
    #[serde(flatten)]
    pub base: PersonBase,
}

impl From<Person> for PersonOut {
    fn from(person: Person) -> Self {
        Self { base: person.base }
    }
}

/// Query string of `GET /person/detail`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PersonDetailQuery {
    #[serde(default)]
    pub name: Option<String>,
    /// Mandatory but kept as text, never parsed
    pub age: String,
}

impl_validated_model!(
    PersonDetailQuery,
    "person_detail_query",
    {
        name: String [optional, string_length(1, 50), pattern(NAME_PATTERN)],
        age: String [required],
    }
);

/// Path of the person routes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PersonIdPath {
    pub person_id: u64,
}

impl_validated_model!(
    PersonIdPath,
    "person_id_path",
    {
        person_id: Integer [required, positive],
    }
);

/// Body of `PUT /person/{person_id}`: two independently validated models
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UpdatePersonBody {
    pub person: Person,
    pub location: Location,
}

impl ValidatableModel for UpdatePersonBody {
    fn validate_raw(raw: Value) -> Result<Value, ValidationError> {
        let mut body = match raw {
            Value::Object(map) => map,
            other => {
                return Err(ValidationError::FieldErrors(vec![
                    FieldValidationError::violated(
                        "body",
                        "type",
                        "'body' must be an object",
                        &other,
                    ),
                ]));
            }
        };

        let parts = [
            ("person", Person::schema()),
            ("location", Location::schema()),
        ];

        let mut output = Map::new();
        let mut errors = Vec::new();
        for (key, schema) in parts {
            match body.remove(key) {
                None | Some(Value::Null) => errors.push(FieldValidationError::missing(key)),
                Some(part) => match schema.validate_at(Some(key), part) {
                    Ok(value) => {
                        output.insert(key.to_string(), value);
                    }
                    Err(mut violations) => errors.append(&mut violations),
                },
            }
        }

        if errors.is_empty() {
            Ok(Value::Object(output))
        } else {
            Err(ValidationError::FieldErrors(errors))
        }
    }
}
