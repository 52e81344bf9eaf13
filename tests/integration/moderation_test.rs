// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{auth, create_test_app, ADMIN_EMAIL};
use axum::http::StatusCode;
use sea_orm::ConnectionTrait;
use serde_json::{json, Value};

#[tokio::test]
async fn test_approving_profiles_emails_owners_and_logs_notification() {
    let app = create_test_app().await;
    let (_, token) = app.register_and_login("owner@example.org", "Acme").await;
    let profile_id = app.create_profile(&token, "Ikeja").await;
    app.mailer.clear();

    let outcome = app.approve("profiles", &[profile_id]).await;

    assert_eq!(
        outcome["message"],
        "1 profiles were approved and users were notified."
    );
    assert_eq!(outcome["updated"], 1);
    assert!(outcome["failed_emails"].as_array().unwrap().is_empty());
    assert!(outcome["failed_notifications"].as_array().unwrap().is_empty());

    let owner_mail = app.mailer.sent_to("owner@example.org");
    assert_eq!(owner_mail.len(), 1);
    assert_eq!(owner_mail[0].subject, "Profile Approved");

    let admin_mail = app.mailer.sent_to(ADMIN_EMAIL);
    assert_eq!(admin_mail.len(), 1);
    assert_eq!(admin_mail[0].subject, "Profile approved: Acme");

    let response = app
        .server
        .get("/admin/notifications")
        .add_header("Authorization", auth(&app.admin_token))
        .await;
    response.assert_status_ok();
    let page = response.json::<Value>();
    // created + approved, newest first
    assert_eq!(page["count"], 2);
    assert_eq!(page["results"][0]["title"], "Profile approved: Acme");
    assert_eq!(page["results"][1]["title"], "Profile created: Acme");
}

#[tokio::test]
async fn test_rejecting_program_sends_reason() {
    let app = create_test_app().await;
    let (_, token, profile_id) = app.approved_member("owner@example.org", "Acme").await;
    let program_id = app.create_program(&token, profile_id, "Growth Lab").await;
    app.mailer.clear();

    let response = app
        .server
        .post("/admin/programs/reject")
        .add_header("Authorization", auth(&app.admin_token))
        .json(&json!({ "ids": [program_id], "reason": "Missing schedule" }))
        .await;

    response.assert_status_ok();
    let outcome = response.json::<Value>();
    assert_eq!(
        outcome["message"],
        "1 programs were rejected and owners were notified."
    );

    let owner_mail = app.mailer.sent_to("owner@example.org");
    assert_eq!(owner_mail.len(), 1);
    assert_eq!(owner_mail[0].subject, "Program Rejected");
    assert!(owner_mail[0].body.contains("Reason: Missing schedule"));
}

#[tokio::test]
async fn test_failed_owner_email_is_reported() {
    let app = create_test_app().await;
    let (_, token) = app.register_and_login("owner@example.org", "Acme").await;
    let profile_id = app.create_profile(&token, "Ikeja").await;
    app.mailer.fail_for("owner@example.org");

    let outcome = app.approve("profiles", &[profile_id]).await;

    assert_eq!(outcome["updated"], 1);
    assert_eq!(outcome["failed_emails"], json!(["owner@example.org"]));

    // Approval still went through
    let response = app
        .server
        .get(&format!("/api/profiles/{}", profile_id))
        .await;
    response.assert_status_ok();
}

#[tokio::test]
async fn test_members_cannot_moderate() {
    let app = create_test_app().await;
    let (_, token) = app.register_and_login("owner@example.org", "Acme").await;
    let profile_id = app.create_profile(&token, "Ikeja").await;

    let response = app
        .server
        .post("/admin/profiles/approve")
        .add_header("Authorization", auth(&token))
        .json(&json!({ "ids": [profile_id] }))
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_empty_id_list_is_rejected() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/admin/profiles/approve")
        .add_header("Authorization", auth(&app.admin_token))
        .json(&json!({ "ids": [] }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_pending_counts() {
    let app = create_test_app().await;
    let (_, token, profile_id) = app.approved_member("owner@example.org", "Acme").await;
    app.create_program(&token, profile_id, "Growth Lab").await;
    let (_, other) = app.register_and_login("other@example.org", "Other").await;
    app.create_profile(&other, "Kano").await;

    let response = app
        .server
        .get("/admin/pending")
        .add_header("Authorization", auth(&app.admin_token))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({ "profiles": 1, "programs": 1 })
    );
}

#[tokio::test]
async fn test_notification_store_failure_does_not_stop_the_batch() {
    let app = create_test_app().await;
    let (_, first) = app.register_and_login("first@example.org", "First").await;
    let (_, second) = app.register_and_login("second@example.org", "Second").await;
    let first_id = app.create_profile(&first, "Ikeja").await;
    let second_id = app.create_profile(&second, "Yaba").await;
    app.mailer.clear();

    app.db
        .execute_unprepared("DROP TABLE admin_notifications")
        .await
        .unwrap();

    let outcome = app.approve("profiles", &[first_id, second_id]).await;

    assert_eq!(outcome["updated"], 2);
    assert!(outcome["failed_emails"].as_array().unwrap().is_empty());
    let mut failed: Vec<i64> = outcome["failed_notifications"]
        .as_array()
        .unwrap()
        .iter()
        .map(|id| id.as_i64().unwrap())
        .collect();
    failed.sort();
    assert_eq!(failed, vec![first_id, second_id]);

    // Both owners heard back
    assert_eq!(app.mailer.sent_to("first@example.org").len(), 1);
    assert_eq!(app.mailer.sent_to("second@example.org").len(), 1);

    for id in [first_id, second_id] {
        app.server
            .get(&format!("/api/profiles/{}", id))
            .await
            .assert_status_ok();
    }
}
