// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{auth, create_test_app, ADMIN_EMAIL};
use axum::http::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn test_program_create_starts_pending_and_notifies_admins() {
    let app = create_test_app().await;
    let (_, token, profile_id) = app.approved_member("owner@example.org", "Acme").await;
    app.mailer.clear();

    let program_id = app.create_program(&token, profile_id, "Growth Lab").await;

    let response = app
        .server
        .get(&format!("/api/programs/{}", program_id))
        .add_header("Authorization", auth(&token))
        .await;
    response.assert_status_ok();
    let program = response.json::<Value>();
    assert_eq!(program["is_approved"], false);
    assert_eq!(program["profile"].as_i64(), Some(profile_id));
    assert_eq!(program["start_date"], "2025-01-06");

    let admin_mail = app.mailer.sent_to(ADMIN_EMAIL);
    assert_eq!(admin_mail.len(), 1);
    assert_eq!(admin_mail[0].subject, "Program created: Growth Lab");

    // Hidden from the public until approved
    let response = app
        .server
        .get(&format!("/api/programs/{}", program_id))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_program_for_someone_elses_profile_is_forbidden() {
    let app = create_test_app().await;
    let (_, _, profile_id) = app.approved_member("owner@example.org", "Acme").await;
    let (_, intruder) = app.register_and_login("other@example.org", "Other").await;

    let response = app
        .server
        .post("/api/programs")
        .add_header("Authorization", auth(&intruder))
        .json(&json!({
            "profile": profile_id,
            "title": "Borrowed",
            "description": "Not mine",
            "target_audience": "Anyone",
            "start_date": "2025-01-01",
            "end_date": "2025-02-01"
        }))
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_program_for_unknown_profile_is_invalid() {
    let app = create_test_app().await;
    let (_, token) = app.register_and_login("owner@example.org", "Acme").await;

    let response = app
        .server
        .post("/api/programs")
        .add_header("Authorization", auth(&token))
        .json(&json!({
            "profile": 9999,
            "title": "Ghost",
            "description": "No profile",
            "target_audience": "Anyone",
            "start_date": "2025-01-01",
            "end_date": "2025-02-01"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["error"],
        "Invalid pk \"9999\" - object does not exist."
    );
}

#[tokio::test]
async fn test_program_end_before_start_is_rejected() {
    let app = create_test_app().await;
    let (_, token, profile_id) = app.approved_member("owner@example.org", "Acme").await;

    let response = app
        .server
        .post("/api/programs")
        .add_header("Authorization", auth(&token))
        .json(&json!({
            "profile": profile_id,
            "title": "Backwards",
            "description": "Ends early",
            "target_audience": "Anyone",
            "start_date": "2025-05-01",
            "end_date": "2025-04-01"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_approved_programs_listed_and_filtered_by_title() {
    let app = create_test_app().await;
    let (_, token, profile_id) = app.approved_member("owner@example.org", "Acme").await;
    let first = app.create_program(&token, profile_id, "Growth Lab").await;
    let second = app.create_program(&token, profile_id, "Export Clinic").await;
    app.approve("programs", &[first, second]).await;

    let response = app.server.get("/api/programs").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["count"], 2);

    let response = app
        .server
        .get("/api/programs")
        .add_query_param("title", "Export Clinic")
        .await;
    response.assert_status_ok();
    let page = response.json::<Value>();
    assert_eq!(page["count"], 1);
    assert_eq!(page["results"][0]["id"].as_i64(), Some(second));
}

#[tokio::test]
async fn test_program_patch_by_owner() {
    let app = create_test_app().await;
    let (_, token, profile_id) = app.approved_member("owner@example.org", "Acme").await;
    let program_id = app.create_program(&token, profile_id, "Growth Lab").await;

    let response = app
        .server
        .patch(&format!("/api/programs/{}", program_id))
        .add_header("Authorization", auth(&token))
        .json(&json!({ "funding": false, "end_date": "2025-06-30" }))
        .await;

    response.assert_status_ok();
    let program = response.json::<Value>();
    assert_eq!(program["funding"], false);
    assert_eq!(program["end_date"], "2025-06-30");
    assert_eq!(program["title"], "Growth Lab");
}

#[tokio::test]
async fn test_pending_program_visible_only_to_owner_and_staff() {
    let app = create_test_app().await;
    let (_, owner, profile_id) = app.approved_member("owner@example.org", "Acme").await;
    let (_, other) = app.register_and_login("other@example.org", "Other").await;
    let program_id = app.create_program(&owner, profile_id, "Growth Lab").await;

    // Anonymous
    let response = app.server.get("/api/programs").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["count"], 0);
    app.server
        .get(&format!("/api/programs/{}", program_id))
        .await
        .assert_status(StatusCode::NOT_FOUND);

    // Another member
    let response = app
        .server
        .get("/api/programs")
        .add_header("Authorization", auth(&other))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["count"], 0);
    app.server
        .get(&format!("/api/programs/{}", program_id))
        .add_header("Authorization", auth(&other))
        .await
        .assert_status(StatusCode::NOT_FOUND);

    // Owner
    let response = app
        .server
        .get("/api/programs")
        .add_header("Authorization", auth(&owner))
        .await;
    response.assert_status_ok();
    let page = response.json::<Value>();
    assert_eq!(page["count"], 1);
    assert_eq!(page["results"][0]["id"].as_i64(), Some(program_id));

    // Staff
    let response = app
        .server
        .get("/api/programs")
        .add_header("Authorization", auth(&app.admin_token))
        .await;
    response.assert_status_ok();
    let page = response.json::<Value>();
    assert_eq!(page["count"], 1);
    assert_eq!(page["results"][0]["is_approved"], false);
}

#[tokio::test]
async fn test_programs_ordered_by_several_keys() {
    let app = create_test_app().await;
    let (_, token, profile_id) = app.approved_member("owner@example.org", "Acme").await;

    let mut ids = Vec::new();
    for (title, start, end) in [
        ("Spring", "2025-01-01", "2025-04-30"),
        ("Summer", "2025-02-01", "2025-06-30"),
        ("Autumn", "2025-03-01", "2025-06-30"),
    ] {
        let response = app
            .server
            .post("/api/programs")
            .add_header("Authorization", auth(&token))
            .json(&json!({
                "profile": profile_id,
                "title": title,
                "description": "Cohort",
                "target_audience": "Founders",
                "start_date": start,
                "end_date": end
            }))
            .await;
        response.assert_status(StatusCode::CREATED);
        ids.push(response.json::<Value>()["id"].as_i64().unwrap());
    }
    app.approve("programs", &ids).await;

    let titles = |page: &Value| -> Vec<String> {
        page["results"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["title"].as_str().unwrap().to_string())
            .collect()
    };

    let response = app.server.get("/api/programs").await;
    response.assert_status_ok();
    assert_eq!(titles(&response.json::<Value>()), ["Spring", "Summer", "Autumn"]);

    let response = app
        .server
        .get("/api/programs")
        .add_query_param("ordering", "-end_date,start_date")
        .await;
    response.assert_status_ok();
    assert_eq!(titles(&response.json::<Value>()), ["Summer", "Autumn", "Spring"]);

    let response = app
        .server
        .get("/api/programs")
        .add_query_param("ordering", "-end_date,-start_date")
        .await;
    response.assert_status_ok();
    assert_eq!(titles(&response.json::<Value>()), ["Autumn", "Summer", "Spring"]);
}

#[tokio::test]
async fn test_program_is_approved_is_read_only() {
    let app = create_test_app().await;
    let (_, token, profile_id) = app.approved_member("owner@example.org", "Acme").await;

    let response = app
        .server
        .post("/api/programs")
        .add_header("Authorization", auth(&token))
        .json(&json!({
            "profile": profile_id,
            "title": "Self Approved",
            "description": "Cohort",
            "target_audience": "Founders",
            "start_date": "2025-01-01",
            "end_date": "2025-02-01",
            "is_approved": true
        }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let program = response.json::<Value>();
    assert_eq!(program["is_approved"], false);
    let program_id = program["id"].as_i64().unwrap();

    let response = app
        .server
        .patch(&format!("/api/programs/{}", program_id))
        .add_header("Authorization", auth(&token))
        .json(&json!({ "is_approved": true }))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["is_approved"], false);

    app.server
        .get(&format!("/api/programs/{}", program_id))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
