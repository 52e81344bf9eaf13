// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{auth, create_test_app};
use axum::http::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn test_admin_routes_reject_members_and_anonymous() {
    let app = create_test_app().await;
    let (_, token) = app.register_and_login("member@example.org", "Acme").await;

    for path in ["/admin/notifications", "/admin/users", "/admin/pending"] {
        let response = app
            .server
            .get(path)
            .add_header("Authorization", auth(&token))
            .await;
        response.assert_status(StatusCode::FORBIDDEN);

        let response = app.server.get(path).await;
        response.assert_status(StatusCode::UNAUTHORIZED);
    }
}

#[tokio::test]
async fn test_notifications_mark_read_filter_and_delete() {
    let app = create_test_app().await;
    let (_, token) = app.register_and_login("owner@example.org", "Acme").await;
    app.create_profile(&token, "Ikeja").await;

    let response = app
        .server
        .get("/admin/notifications")
        .add_header("Authorization", auth(&app.admin_token))
        .await;
    let notification = response.json::<Value>()["results"][0].clone();
    assert_eq!(notification["is_read"], false);
    let id = notification["id"].as_i64().unwrap();

    let response = app
        .server
        .patch(&format!("/admin/notifications/{}", id))
        .add_header("Authorization", auth(&app.admin_token))
        .json(&json!({ "is_read": true }))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["is_read"], true);

    let response = app
        .server
        .get("/admin/notifications")
        .add_query_param("is_read", "false")
        .add_header("Authorization", auth(&app.admin_token))
        .await;
    assert_eq!(response.json::<Value>()["count"], 0);

    let response = app
        .server
        .delete(&format!("/admin/notifications/{}", id))
        .add_header("Authorization", auth(&app.admin_token))
        .await;
    response.assert_status(StatusCode::NO_CONTENT);

    let response = app
        .server
        .get(&format!("/admin/notifications/{}", id))
        .add_header("Authorization", auth(&app.admin_token))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_deactivated_user_loses_access() {
    let app = create_test_app().await;
    let (user_id, token) = app.register_and_login("member@example.org", "Acme").await;

    let response = app
        .server
        .patch(&format!("/admin/users/{}", user_id))
        .add_header("Authorization", auth(&app.admin_token))
        .json(&json!({ "is_active": false }))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["is_active"], false);

    let response = app
        .server
        .get("/auth/users/me")
        .add_header("Authorization", auth(&token))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);

    let response = app
        .server
        .post("/auth/token/login")
        .json(&json!({ "email": "member@example.org", "password": super::helpers::PASSWORD }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_admin_cannot_deactivate_self() {
    let app = create_test_app().await;
    let me = app
        .server
        .get("/auth/users/me")
        .add_header("Authorization", auth(&app.admin_token))
        .await
        .json::<Value>();

    let response = app
        .server
        .patch(&format!("/admin/users/{}", me["id"]))
        .add_header("Authorization", auth(&app.admin_token))
        .json(&json!({ "is_active": false }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_user_list_search() {
    let app = create_test_app().await;
    app.register_and_login("alpha@example.org", "Alpha Works").await;
    app.register_and_login("beta@example.org", "Beta Foods").await;

    let response = app
        .server
        .get("/admin/users")
        .add_query_param("search", "Beta")
        .add_header("Authorization", auth(&app.admin_token))
        .await;

    response.assert_status_ok();
    let page = response.json::<Value>();
    assert_eq!(page["count"], 1);
    assert_eq!(page["results"][0]["email"], "beta@example.org");
}
