//! End-to-end tests simulating a client of the person API
//!
//! These tests drive the full router (extractors, validation, handlers and
//! error rendering) through `axum-test`.

use axum::http::{HeaderName, HeaderValue, StatusCode, header};
use axum_test::TestServer;
use axum_test::multipart::{MultipartForm, Part};
use person_api::prelude::*;
use serde_json::{Value, json};

// =============================================================================
// Helpers
// =============================================================================

fn create_test_server() -> TestServer {
    create_test_server_with(AppConfig::default())
}

fn create_test_server_with(config: AppConfig) -> TestServer {
    let app = ServerBuilder::new()
        .with_config(config)
        .build()
        .expect("Failed to build router");
    TestServer::try_new(app).expect("Failed to create test server")
}

fn valid_person() -> Value {
    json!({
        "first_name": "Rocio",
        "last_name": "Garcia",
        "age": 30,
        "hair_color": "blonde",
        "is_married": true,
        "password": "supersecret"
    })
}

fn valid_location() -> Value {
    json!({
        "city": "Guadalajara",
        "state": "Jalisco",
        "country": "Mexico"
    })
}

fn violated(body: &Value) -> Vec<(String, String)> {
    body["details"]["fields"]
        .as_array()
        .expect("validation errors list their fields")
        .iter()
        .map(|f| {
            (
                f["field"].as_str().unwrap_or_default().to_string(),
                f["constraint"].as_str().unwrap_or_default().to_string(),
            )
        })
        .collect()
}

fn pair(field: &str, constraint: &str) -> (String, String) {
    (field.to_string(), constraint.to_string())
}

// =============================================================================
// Home & Health
// =============================================================================

mod home_tests {
    use super::*;

    #[tokio::test]
    async fn test_home_greeting() {
        let server = create_test_server();

        let response = server.get("/").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body, json!({"Hello": "world"}));
    }

    #[tokio::test]
    async fn test_health_endpoints() {
        let server = create_test_server();

        for path in ["/health", "/healthz"] {
            let response = server.get(path).await;
            response.assert_status_ok();
            let body: Value = response.json();
            assert_eq!(body["status"], "ok");
            assert_eq!(body["service"], "person-api");
        }
    }
}

// =============================================================================
// POST /person/new
// =============================================================================

mod create_person_tests {
    use super::*;

    #[tokio::test]
    async fn test_create_person_returns_projection() {
        let server = create_test_server();

        let response = server.post("/person/new").json(&valid_person()).await;
        response.assert_status(StatusCode::CREATED);

        let body: Value = response.json();
        assert_eq!(
            body,
            json!({
                "first_name": "Rocio",
                "last_name": "Garcia",
                "age": 30,
                "hair_color": "blonde",
                "is_married": true
            })
        );
        assert!(body.get("password").is_none());
    }

    #[tokio::test]
    async fn test_create_person_optional_fields_are_null() {
        let server = create_test_server();

        let response = server
            .post("/person/new")
            .json(&json!({
                "first_name": "Rocio",
                "last_name": "Garcia",
                "age": 30,
                "password": "supersecret"
            }))
            .await;
        response.assert_status(StatusCode::CREATED);

        let body: Value = response.json();
        assert_eq!(body["hair_color"], Value::Null);
        assert_eq!(body["is_married"], Value::Null);
    }

    #[tokio::test]
    async fn test_create_person_age_out_of_range() {
        let server = create_test_server();

        for age in [0, 116] {
            let mut person = valid_person();
            person["age"] = json!(age);

            let response = server.post("/person/new").json(&person).await;
            response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

            let body: Value = response.json();
            assert_eq!(body["code"], "VALIDATION_ERROR");
            let fields = violated(&body);
            assert_eq!(fields.len(), 1);
            assert_eq!(fields[0].0, "age");
        }
    }

    #[tokio::test]
    async fn test_create_person_unknown_hair_color() {
        let server = create_test_server();

        let mut person = valid_person();
        person["hair_color"] = json!("purple");

        let response = server.post("/person/new").json(&person).await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            violated(&response.json()),
            vec![pair("hair_color", "in_list")]
        );
    }

    #[tokio::test]
    async fn test_create_person_reports_every_violation() {
        let server = create_test_server();

        let response = server
            .post("/person/new")
            .json(&json!({
                "first_name": "",
                "age": "old",
                "is_married": "perhaps",
                "password": "123"
            }))
            .await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

        let body: Value = response.json();
        assert_eq!(
            violated(&body),
            vec![
                pair("first_name", "string_length"),
                pair("last_name", "missing"),
                pair("age", "type"),
                pair("is_married", "type"),
                pair("password", "min_length"),
            ]
        );
        assert_eq!(body["details"]["fields"][0]["value"], "");
    }

    #[tokio::test]
    async fn test_create_person_malformed_json() {
        let server = create_test_server();

        let response = server
            .post("/person/new")
            .content_type("application/json")
            .bytes("{not json".into())
            .await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

        let body: Value = response.json();
        assert_eq!(body["code"], "INVALID_BODY");
    }
}

// =============================================================================
// GET /person/detail
// =============================================================================

mod person_detail_tests {
    use super::*;

    #[tokio::test]
    async fn test_detail_maps_name_to_age() {
        let server = create_test_server();

        let response = server.get("/person/detail?name=Rocio%20Garcia&age=25").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body, json!({"Rocio Garcia": "25"}));
    }

    #[tokio::test]
    async fn test_detail_without_name() {
        let server = create_test_server();

        let response = server.get("/person/detail?age=twenty").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body, json!({"null": "twenty"}));
    }

    #[tokio::test]
    async fn test_detail_requires_age() {
        let server = create_test_server();

        let response = server.get("/person/detail?name=Rocio").await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(violated(&response.json()), vec![pair("age", "missing")]);
    }

    #[tokio::test]
    async fn test_detail_rejects_bad_names() {
        let server = create_test_server();

        for name in ["rocio", "Rocio1", "Juan%20Carlos%20De%20La%20Cruz"] {
            let response = server
                .get(&format!("/person/detail?name={}&age=25", name))
                .await;
            response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
            assert_eq!(violated(&response.json()), vec![pair("name", "pattern")]);
        }
    }

    #[tokio::test]
    async fn test_detail_accepts_four_words() {
        let server = create_test_server();

        let response = server
            .get("/person/detail?name=Juan%20Carlos%20De%20La&age=40")
            .await;
        response.assert_status_ok();
    }
}

// =============================================================================
// GET /person/detail/{person_id}
// =============================================================================

mod person_lookup_tests {
    use super::*;

    #[tokio::test]
    async fn test_known_person() {
        let server = create_test_server();

        let response = server.get("/person/detail/3").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body, json!({"3": "It exists"}));
    }

    #[tokio::test]
    async fn test_unknown_person_is_404() {
        let server = create_test_server();

        let response = server.get("/person/detail/99").await;
        response.assert_status_not_found();

        let body: Value = response.json();
        assert_eq!(body["code"], "PERSON_NOT_FOUND");
        assert_eq!(body["message"], "This person doesn't exist");
        assert_eq!(body["details"]["person_id"], 99);
    }

    #[tokio::test]
    async fn test_non_positive_id_is_rejected() {
        let server = create_test_server();

        let response = server.get("/person/detail/0").await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            violated(&response.json()),
            vec![pair("person_id", "positive")]
        );

        let response = server.get("/person/detail/abc").await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(violated(&response.json()), vec![pair("person_id", "type")]);
    }
}

// =============================================================================
// PUT /person/{person_id}
// =============================================================================

mod update_person_tests {
    use super::*;

    #[tokio::test]
    async fn test_update_returns_union() {
        let server = create_test_server();

        let response = server
            .put("/person/123")
            .json(&json!({
                "person": valid_person(),
                "location": valid_location()
            }))
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(
            body,
            json!({
                "first_name": "Rocio",
                "last_name": "Garcia",
                "age": 30,
                "hair_color": "blonde",
                "is_married": true,
                "password": "supersecret",
                "city": "Guadalajara",
                "state": "Jalisco",
                "country": "Mexico"
            })
        );
    }

    #[tokio::test]
    async fn test_update_validates_both_parts() {
        let server = create_test_server();

        let mut person = valid_person();
        person["age"] = json!(200);

        let response = server
            .put("/person/1")
            .json(&json!({
                "person": person,
                "location": {"city": "Lima", "state": "Lima"}
            }))
            .await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            violated(&response.json()),
            vec![
                pair("person.age", "max_value"),
                pair("location.country", "missing"),
            ]
        );
    }

    #[tokio::test]
    async fn test_update_reports_path_and_body_together() {
        let server = create_test_server();

        let response = server
            .put("/person/0")
            .json(&json!({
                "person": {
                    "first_name": "",
                    "last_name": "X",
                    "age": 500,
                    "password": "x"
                },
                "location": {}
            }))
            .await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            violated(&response.json()),
            vec![
                pair("person_id", "positive"),
                pair("person.first_name", "string_length"),
                pair("person.age", "max_value"),
                pair("person.password", "min_length"),
                pair("location.city", "missing"),
                pair("location.state", "missing"),
                pair("location.country", "missing"),
            ]
        );
    }

    #[tokio::test]
    async fn test_update_rejects_invalid_id() {
        let server = create_test_server();

        let response = server
            .put("/person/-4")
            .json(&json!({
                "person": valid_person(),
                "location": valid_location()
            }))
            .await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            violated(&response.json()),
            vec![pair("person_id", "positive")]
        );
    }
}

// =============================================================================
// POST /login
// =============================================================================

mod login_tests {
    use super::*;

    #[tokio::test]
    async fn test_login_echoes_username() {
        let server = create_test_server();

        let response = server
            .post("/login")
            .form(&[("username", "miguelsf"), ("password", "anypassword12")])
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(
            body,
            json!({"username": "miguelsf", "message": "Login Succesfully!"})
        );
        assert!(!response.text().contains("anypassword12"));
    }

    #[tokio::test]
    async fn test_login_requires_password() {
        let server = create_test_server();

        let response = server
            .post("/login")
            .form(&[("username", "miguelsf")])
            .await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(violated(&response.json()), vec![pair("password", "missing")]);
    }

    #[tokio::test]
    async fn test_login_rejects_json_body() {
        let server = create_test_server();

        let response = server
            .post("/login")
            .json(&json!({"username": "miguelsf", "password": "anypassword12"}))
            .await;
        assert!(response.status_code().is_client_error());
    }
}

// =============================================================================
// POST /contact
// =============================================================================

mod contact_tests {
    use super::*;

    fn contact_form() -> Vec<(&'static str, &'static str)> {
        vec![
            ("first_name", "Rocio"),
            ("last_name", "Garcia"),
            ("email", "rocio@example.com"),
            ("message", "I would like to know more about the API."),
        ]
    }

    #[tokio::test]
    async fn test_contact_echoes_metadata() {
        let server = create_test_server();

        let response = server
            .post("/contact")
            .add_header(header::USER_AGENT, HeaderValue::from_static("person-api-tests"))
            .add_header(header::COOKIE, HeaderValue::from_static("ads=campaign-7"))
            .form(&contact_form())
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(
            body,
            json!({"user_agent": "person-api-tests", "ads": "campaign-7"})
        );
    }

    #[tokio::test]
    async fn test_contact_quoted_cookie_first_wins() {
        let server = create_test_server();

        let response = server
            .post("/contact")
            .add_header(header::COOKIE, HeaderValue::from_static("ads=\"a=b\"; ads=second"))
            .form(&contact_form())
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body, json!({"user_agent": null, "ads": "a=b"}));
    }

    #[tokio::test]
    async fn test_contact_without_cookie() {
        let server = create_test_server();

        let response = server
            .post("/contact")
            .add_header(
                HeaderName::from_static("user-agent"),
                HeaderValue::from_static("curl/8.0"),
            )
            .form(&contact_form())
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["ads"], Value::Null);
    }

    #[tokio::test]
    async fn test_contact_validation() {
        let server = create_test_server();

        let response = server
            .post("/contact")
            .form(&[
                ("first_name", "A name that is far too long"),
                ("last_name", "Garcia"),
                ("email", "not-an-email"),
                ("message", "short"),
            ])
            .await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            violated(&response.json()),
            vec![
                pair("first_name", "string_length"),
                pair("email", "email"),
                pair("message", "min_length"),
            ]
        );
    }
}

// =============================================================================
// POST /post-image
// =============================================================================

mod upload_tests {
    use super::*;

    #[tokio::test]
    async fn test_post_image_reports_metadata() {
        let server = create_test_server();

        let image = Part::bytes(vec![7u8; 3072])
            .file_name("avatar.png")
            .mime_type("image/png");
        let form = MultipartForm::new().add_part("image", image);

        let response = server.post("/post-image").multipart(form).await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["filename"], "avatar.png");
        assert_eq!(body["format"], "image/png");
        assert_eq!(body["size_bytes"], 3072);
        assert_eq!(body["size_kb"], 3.0);
    }

    #[tokio::test]
    async fn test_post_image_rejects_non_multipart_body() {
        let server = create_test_server();

        let response = server
            .post("/post-image")
            .json(&json!({"image": "not a file"}))
            .await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

        let body: Value = response.json();
        assert_eq!(body["code"], "INVALID_BODY");
    }

    #[tokio::test]
    async fn test_post_image_requires_image_part() {
        let server = create_test_server();

        let form = MultipartForm::new().add_text("caption", "no file here");

        let response = server.post("/post-image").multipart(form).await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(violated(&response.json()), vec![pair("image", "missing")]);
    }

    #[tokio::test]
    async fn test_post_image_over_limit_is_rejected() {
        let mut config = AppConfig::default();
        config.uploads.max_bytes = 1024;
        let server = create_test_server_with(config);

        let image = Part::bytes(vec![0u8; 8192])
            .file_name("big.png")
            .mime_type("image/png");
        let form = MultipartForm::new().add_part("image", image);

        let response = server.post("/post-image").multipart(form).await;
        assert!(response.status_code().is_client_error());
    }

    #[tokio::test]
    async fn test_json_body_over_limit_is_413() {
        let mut config = AppConfig::default();
        config.uploads.max_bytes = 64;
        let server = create_test_server_with(config);

        let mut person = valid_person();
        person["first_name"] = json!("A".repeat(200));

        let response = server.post("/person/new").json(&person).await;
        response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);

        let body: Value = response.json();
        assert_eq!(body["code"], "PAYLOAD_TOO_LARGE");
    }
}
