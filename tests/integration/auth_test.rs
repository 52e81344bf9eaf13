// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{auth, create_test_app, PASSWORD};
use axum::http::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn test_register_login_and_fetch_me() {
    let app = create_test_app().await;
    let (user_id, token) = app
        .register_and_login("founder@Example.ORG", "Acme Legal")
        .await;

    let response = app
        .server
        .get("/auth/users/me")
        .add_header("Authorization", auth(&token))
        .await;

    response.assert_status_ok();
    let me = response.json::<Value>();
    assert_eq!(me["id"].as_i64(), Some(user_id));
    assert_eq!(me["email"], "founder@example.org");
    assert_eq!(me["organization_type"], "LS");
    assert_eq!(me["is_staff"], false);
    assert!(me.get("password_hash").is_none());
}

#[tokio::test]
async fn test_register_rejects_mismatched_passwords() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/auth/users")
        .json(&json!({
            "email": "a@example.org",
            "password": PASSWORD,
            "re_password": "Different-Passw0rd",
            "organization_name": "Acme"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("The two password fields didn't match."));
}

#[tokio::test]
async fn test_register_duplicate_email_conflicts() {
    let app = create_test_app().await;
    app.register_and_login("dup@example.org", "First").await;

    let response = app
        .server
        .post("/auth/users")
        .json(&json!({
            "email": "dup@EXAMPLE.org",
            "password": PASSWORD,
            "re_password": PASSWORD,
            "organization_name": "Second"
        }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_login_with_wrong_password_fails() {
    let app = create_test_app().await;
    app.register_and_login("user@example.org", "Acme").await;

    let response = app
        .server
        .post("/auth/token/login")
        .json(&json!({ "email": "user@example.org", "password": "not-the-password" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["error"],
        "Unable to log in with provided credentials."
    );
}

#[tokio::test]
async fn test_logout_revokes_token() {
    let app = create_test_app().await;
    let (_, token) = app.register_and_login("out@example.org", "Acme").await;

    let response = app
        .server
        .post("/auth/token/logout")
        .add_header("Authorization", auth(&token))
        .await;
    response.assert_status(StatusCode::NO_CONTENT);

    let response = app
        .server
        .get("/auth/users/me")
        .add_header("Authorization", auth(&token))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(response.json::<Value>()["error"], "Invalid token.");
}

#[tokio::test]
async fn test_me_requires_credentials() {
    let app = create_test_app().await;

    let response = app.server.get("/auth/users/me").await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.json::<Value>()["error"],
        "Authentication credentials were not provided."
    );
}

#[tokio::test]
async fn test_update_me_changes_profile_fields() {
    let app = create_test_app().await;
    let (_, token) = app.register_and_login("me@example.org", "Acme").await;

    let response = app
        .server
        .patch("/auth/users/me")
        .add_header("Authorization", auth(&token))
        .json(&json!({ "organization_name": "Acme Holdings", "whatsapp_number": "+2348000000" }))
        .await;

    response.assert_status_ok();
    let me = response.json::<Value>();
    assert_eq!(me["organization_name"], "Acme Holdings");
    assert_eq!(me["whatsapp_number"], "+2348000000");
}
