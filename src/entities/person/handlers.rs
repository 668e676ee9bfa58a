//! HTTP handlers for person operations
//!
//! Each route has a pure function doing the data assembly and a thin async
//! wrapper that unwraps the validated extractors.

use super::model::{Person, PersonDetailQuery, PersonIdPath, PersonOut, UpdatePersonBody};
use super::registry::PERSONS;
use crate::core::error::{ApiError, ApiResult, PersonError};
use crate::core::validation::{
    ModelSchema, Validated, ValidatedPath, ValidatedPathJson, ValidatedQuery,
};
use crate::entities::location::Location;
use axum::{Json, http::StatusCode};
use indexmap::IndexMap;
use serde_json::Value;

/// Marker returned for ids present in the registry
pub const EXISTS_MARKER: &str = "It exists";

/// Map the (possibly absent) name to the age; an absent name is keyed `null`
pub fn person_detail(query: PersonDetailQuery) -> IndexMap<String, String> {
    let key = query.name.unwrap_or_else(|| "null".to_string());
    IndexMap::from([(key, query.age)])
}

/// Look an id up in the registry
pub fn find_person(person_id: u64) -> ApiResult<IndexMap<String, &'static str>> {
    if !PERSONS.contains(person_id) {
        return Err(PersonError::NotFound { person_id }.into());
    }
    Ok(IndexMap::from([(person_id.to_string(), EXISTS_MARKER)]))
}

/// Field-wise union of a person and a location, location winning on collisions
///
/// The password is part of the union.
pub fn merge_update(person: &Person, location: &Location) -> ApiResult<IndexMap<String, Value>> {
    let mut merged = ordered_fields(Person::schema(), to_value(person)?);
    merged.extend(ordered_fields(Location::schema(), to_value(location)?));
    Ok(merged)
}

fn to_value<T: serde::Serialize>(model: &T) -> ApiResult<Value> {
    serde_json::to_value(model).map_err(|e| ApiError::Internal(e.to_string()))
}

/// Lay out a serialized model in schema declaration order
fn ordered_fields(schema: &ModelSchema, value: Value) -> IndexMap<String, Value> {
    let Value::Object(mut map) = value else {
        return IndexMap::new();
    };
    schema
        .fields()
        .iter()
        .map(|field| {
            let value = map.remove(field.name()).unwrap_or(Value::Null);
            (field.name().to_string(), value)
        })
        .collect()
}

/// `POST /person/new`
pub async fn create_person(
    Validated(person): Validated<Person>,
) -> (StatusCode, Json<PersonOut>) {
    tracing::debug!(first_name = %person.base.first_name, "person created");
    (StatusCode::CREATED, Json(PersonOut::from(person)))
}

/// `GET /person/detail`
pub async fn show_person_by_query(
    ValidatedQuery(query): ValidatedQuery<PersonDetailQuery>,
) -> Json<IndexMap<String, String>> {
    Json(person_detail(query))
}

/// `GET /person/detail/{person_id}`
pub async fn show_person_by_path(
    ValidatedPath(path): ValidatedPath<PersonIdPath>,
) -> ApiResult<Json<IndexMap<String, &'static str>>> {
    let found = find_person(path.person_id)?;
    tracing::debug!(person_id = path.person_id, "person found");
    Ok(Json(found))
}

/// `PUT /person/{person_id}`
pub async fn update_person(
    ValidatedPathJson(path, body): ValidatedPathJson<PersonIdPath, UpdatePersonBody>,
) -> ApiResult<Json<IndexMap<String, Value>>> {
    tracing::debug!(person_id = path.person_id, "person updated");
    Ok(Json(merge_update(&body.person, &body.location)?))
}
