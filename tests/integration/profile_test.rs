// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{auth, create_test_app};
use axum::http::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn test_pending_profile_is_hidden_from_anonymous_callers() {
    let app = create_test_app().await;
    let (_, token) = app.register_and_login("owner@example.org", "Acme").await;
    let profile_id = app.create_profile(&token, "Ikeja").await;

    let response = app.server.get("/api/profiles").await;
    response.assert_status_ok();
    let page = response.json::<Value>();
    assert_eq!(page["count"], 0);
    assert!(page["results"].as_array().unwrap().is_empty());

    let response = app
        .server
        .get(&format!("/api/profiles/{}", profile_id))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);

    // The owner still sees it
    let response = app
        .server
        .get(&format!("/api/profiles/{}", profile_id))
        .add_header("Authorization", auth(&token))
        .await;
    response.assert_status_ok();
    let profile = response.json::<Value>();
    assert_eq!(profile["is_approved"], false);
    assert_eq!(profile["user"]["organization_name"], "Acme");
}

#[tokio::test]
async fn test_approved_profile_is_public() {
    let app = create_test_app().await;
    let (_, _, profile_id) = app.approved_member("owner@example.org", "Acme").await;

    let response = app.server.get("/api/profiles").await;

    response.assert_status_ok();
    let page = response.json::<Value>();
    assert_eq!(page["count"], 1);
    assert_eq!(page["next"], Value::Null);
    assert_eq!(page["previous"], Value::Null);
    assert_eq!(page["results"][0]["id"].as_i64(), Some(profile_id));
    assert_eq!(page["results"][0]["is_approved"], true);
}

#[tokio::test]
async fn test_second_profile_for_same_user_conflicts() {
    let app = create_test_app().await;
    let (_, token) = app.register_and_login("owner@example.org", "Acme").await;
    app.create_profile(&token, "Ikeja").await;

    let response = app
        .server
        .post("/api/profiles")
        .add_header("Authorization", auth(&token))
        .json(&json!({ "city": "Yaba" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(
        response.json::<Value>()["error"],
        "A profile already exists for this user."
    );
}

#[tokio::test]
async fn test_anonymous_cannot_create_profile() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/api/profiles")
        .json(&json!({ "city": "Yaba" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_profile_description_length_is_validated() {
    let app = create_test_app().await;
    let (_, token) = app.register_and_login("owner@example.org", "Acme").await;

    let response = app
        .server
        .post("/api/profiles")
        .add_header("Authorization", auth(&token))
        .json(&json!({ "description": "x".repeat(301) }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_other_member_cannot_edit_profile() {
    let app = create_test_app().await;
    let (_, _, profile_id) = app.approved_member("owner@example.org", "Acme").await;
    let (_, intruder) = app.register_and_login("other@example.org", "Other").await;

    let response = app
        .server
        .patch(&format!("/api/profiles/{}", profile_id))
        .add_header("Authorization", auth(&intruder))
        .json(&json!({ "city": "Abuja" }))
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_owner_patch_keeps_other_fields_and_notifies_admins() {
    let app = create_test_app().await;
    let (_, token, profile_id) = app.approved_member("owner@example.org", "Acme").await;
    app.mailer.clear();

    let response = app
        .server
        .patch(&format!("/api/profiles/{}", profile_id))
        .add_header("Authorization", auth(&token))
        .json(&json!({ "city": "Lekki" }))
        .await;

    response.assert_status_ok();
    let profile = response.json::<Value>();
    assert_eq!(profile["city"], "Lekki");
    assert_eq!(profile["state"], "Lagos");
    assert_eq!(profile["is_approved"], true);

    let admin_mail = app.mailer.sent_to(super::helpers::ADMIN_EMAIL);
    assert_eq!(admin_mail.len(), 1);
    assert_eq!(admin_mail[0].subject, "Profile updated: Acme");
}

#[tokio::test]
async fn test_profiles_filter_by_city() {
    let app = create_test_app().await;
    let (_, first) = app.register_and_login("one@example.org", "One").await;
    let (_, second) = app.register_and_login("two@example.org", "Two").await;
    let first_id = app.create_profile(&first, "Ikeja").await;
    let second_id = app.create_profile(&second, "Kano").await;
    app.approve("profiles", &[first_id, second_id]).await;

    let response = app
        .server
        .get("/api/profiles")
        .add_query_param("city", "Kano")
        .await;

    response.assert_status_ok();
    let page = response.json::<Value>();
    assert_eq!(page["count"], 1);
    assert_eq!(page["results"][0]["id"].as_i64(), Some(second_id));
}

#[tokio::test]
async fn test_page_past_the_end_is_invalid() {
    let app = create_test_app().await;

    let response = app
        .server
        .get("/api/profiles")
        .add_query_param("page", "3")
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["error"], "Invalid page.");
}

#[tokio::test]
async fn test_pagination_links_keep_filters() {
    let app = create_test_app().await;
    let mut ids = Vec::new();
    for n in 0..3 {
        let (_, token) = app
            .register_and_login(&format!("m{}@example.org", n), &format!("Org {}", n))
            .await;
        ids.push(app.create_profile(&token, "Ikeja").await);
    }
    app.approve("profiles", &ids).await;

    let response = app
        .server
        .get("/api/profiles")
        .add_query_param("city", "Ikeja")
        .add_query_param("page_size", "2")
        .await;

    response.assert_status_ok();
    let page = response.json::<Value>();
    assert_eq!(page["count"], 3);
    assert_eq!(page["results"].as_array().unwrap().len(), 2);
    let next = page["next"].as_str().unwrap();
    assert!(next.starts_with("/api/profiles?"));
    assert!(next.contains("city=Ikeja"));
    assert!(next.contains("page=2"));
    assert_eq!(page["previous"], Value::Null);
}

#[tokio::test]
async fn test_owner_can_delete_profile() {
    let app = create_test_app().await;
    let (_, token) = app.register_and_login("owner@example.org", "Acme").await;
    let profile_id = app.create_profile(&token, "Ikeja").await;

    let response = app
        .server
        .delete(&format!("/api/profiles/{}", profile_id))
        .add_header("Authorization", auth(&token))
        .await;
    response.assert_status(StatusCode::NO_CONTENT);

    let response = app
        .server
        .get(&format!("/api/profiles/{}", profile_id))
        .add_header("Authorization", auth(&app.admin_token))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_huge_page_number_is_invalid() {
    let app = create_test_app().await;
    app.approved_member("owner@example.org", "Acme").await;

    let response = app
        .server
        .get("/api/profiles")
        .add_query_param("page", "18446744073709551615")
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["error"], "Invalid page.");
}

#[tokio::test]
async fn test_staff_list_includes_pending_profiles() {
    let app = create_test_app().await;
    app.approved_member("approved@example.org", "Approved Org").await;
    let (_, token) = app.register_and_login("pending@example.org", "Pending Org").await;
    let pending_id = app.create_profile(&token, "Yaba").await;

    let response = app.server.get("/api/profiles").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["count"], 1);

    let response = app
        .server
        .get("/api/profiles")
        .add_header("Authorization", auth(&app.admin_token))
        .await;
    response.assert_status_ok();
    let page = response.json::<Value>();
    assert_eq!(page["count"], 2);
    let pending: Vec<&Value> = page["results"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|p| p["id"].as_i64() == Some(pending_id))
        .collect();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0]["is_approved"], false);
}

#[tokio::test]
async fn test_profiles_ordered_by_organization_type() {
    let app = create_test_app().await;
    let mut ids = Vec::new();
    for (email, organization, kind) in [
        ("mc@example.org", "Mid Council", "MC"),
        ("fms@example.org", "Zeta Capital", "FMS"),
        ("ls@example.org", "Alpha Legal", "LS"),
    ] {
        let (_, token) = app.register_with_type(email, organization, kind).await;
        ids.push(app.create_profile(&token, "Ikeja").await);
    }
    app.approve("profiles", &ids).await;

    let types = |page: &Value| -> Vec<String> {
        page["results"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["user"]["organization_type"].as_str().unwrap().to_string())
            .collect()
    };

    // Default is organization name
    let response = app.server.get("/api/profiles").await;
    response.assert_status_ok();
    assert_eq!(types(&response.json::<Value>()), ["LS", "MC", "FMS"]);

    let response = app
        .server
        .get("/api/profiles")
        .add_query_param("ordering", "organization_type")
        .await;
    response.assert_status_ok();
    assert_eq!(types(&response.json::<Value>()), ["FMS", "LS", "MC"]);

    let response = app
        .server
        .get("/api/profiles")
        .add_query_param("ordering", "-organization_type")
        .await;
    response.assert_status_ok();
    assert_eq!(types(&response.json::<Value>()), ["MC", "LS", "FMS"]);
}

#[tokio::test]
async fn test_is_approved_cannot_be_set_by_owner() {
    let app = create_test_app().await;
    let (_, token) = app.register_and_login("owner@example.org", "Acme").await;

    let response = app
        .server
        .post("/api/profiles")
        .add_header("Authorization", auth(&token))
        .json(&json!({
            "country": "Nigeria",
            "state": "Lagos",
            "city": "Ikeja",
            "company_email": "desk@example.org",
            "description": "Support for small businesses",
            "is_approved": true
        }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let profile = response.json::<Value>();
    assert_eq!(profile["is_approved"], false);
    let profile_id = profile["id"].as_i64().unwrap();

    let response = app
        .server
        .patch(&format!("/api/profiles/{}", profile_id))
        .add_header("Authorization", auth(&token))
        .json(&json!({ "is_approved": true, "city": "Yaba" }))
        .await;
    response.assert_status_ok();
    let profile = response.json::<Value>();
    assert_eq!(profile["is_approved"], false);
    assert_eq!(profile["city"], "Yaba");

    // Still hidden from the public
    let response = app
        .server
        .get(&format!("/api/profiles/{}", profile_id))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}
