//! Route table of the service

use crate::entities::contact::handlers::contact;
use crate::entities::login::handlers::login;
use crate::entities::person::handlers::{
    create_person, show_person_by_path, show_person_by_query, update_person,
};
use crate::entities::upload::handlers::post_image;
use axum::{
    Json, Router,
    routing::{get, post, put},
};
use serde_json::{Value, json};

/// Constant greeting of the root route
pub fn greeting() -> Value {
    json!({ "Hello": "world" })
}

/// `GET /`
pub async fn home() -> Json<Value> {
    Json(greeting())
}

/// Build the API routes
///
/// - GET  /                           - Greeting
/// - POST /person/new                 - Create a person (201, password stripped)
/// - GET  /person/detail              - Show a person from query parameters
/// - GET  /person/detail/{person_id}  - Check a person id against the registry
/// - PUT  /person/{person_id}         - Merge a person and a location
/// - POST /login                      - Form login
/// - POST /contact                    - Contact form with User-Agent and `ads` cookie
/// - POST /post-image                 - Multipart image upload
pub fn build_api_routes() -> Router {
    Router::new()
        .route("/", get(home))
        .route("/person/new", post(create_person))
        .route("/person/detail", get(show_person_by_query))
        .route("/person/detail/{person_id}", get(show_person_by_path))
        .route("/person/{person_id}", put(update_person))
        .route("/login", post(login))
        .route("/contact", post(contact))
        .route("/post-image", post(post_image))
}
