// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{auth, create_test_app};
use axum::http::StatusCode;
use serde_json::{json, Value};

async fn rate(
    app: &super::helpers::TestApp,
    token: &str,
    profile_id: i64,
    score: i32,
) -> axum_test::TestResponse {
    app.server
        .post("/api/ratings")
        .add_header("Authorization", auth(token))
        .json(&json!({ "rated_profile": profile_id, "rating": score, "comment": "Helpful" }))
        .await
}

async fn profile_rating(app: &super::helpers::TestApp, profile_id: i64) -> Value {
    let response = app
        .server
        .get(&format!("/api/profiles/{}", profile_id))
        .await;
    response.assert_status_ok();
    response.json::<Value>()["rating"].clone()
}

#[tokio::test]
async fn test_ratings_update_profile_average() {
    let app = create_test_app().await;
    let (owner_id, _, profile_id) = app.approved_member("owner@example.org", "Acme").await;
    let (_, first) = app.register_and_login("r1@example.org", "Rater One").await;
    let (_, second) = app.register_and_login("r2@example.org", "Rater Two").await;
    let (_, third) = app.register_and_login("r3@example.org", "Rater Three").await;

    assert_eq!(profile_rating(&app, profile_id).await, Value::Null);

    let response = rate(&app, &first, profile_id, 5).await;
    response.assert_status(StatusCode::CREATED);
    let rating = response.json::<Value>();
    assert_eq!(rating["rated_user"].as_i64(), Some(owner_id));

    rate(&app, &second, profile_id, 4)
        .await
        .assert_status(StatusCode::CREATED);
    rate(&app, &third, profile_id, 4)
        .await
        .assert_status(StatusCode::CREATED);

    // (5 + 4 + 4) / 3 rounded to one decimal
    assert_eq!(profile_rating(&app, profile_id).await, json!(4.3));
}

#[tokio::test]
async fn test_second_rating_from_same_member_conflicts() {
    let app = create_test_app().await;
    let (_, _, profile_id) = app.approved_member("owner@example.org", "Acme").await;
    let (_, rater) = app.register_and_login("rater@example.org", "Rater").await;

    rate(&app, &rater, profile_id, 3)
        .await
        .assert_status(StatusCode::CREATED);
    let response = rate(&app, &rater, profile_id, 5).await;

    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(
        response.json::<Value>()["error"],
        "You have already rated this organization."
    );
}

#[tokio::test]
async fn test_self_rating_is_rejected() {
    let app = create_test_app().await;
    let (_, token, profile_id) = app.approved_member("owner@example.org", "Acme").await;

    let response = rate(&app, &token, profile_id, 5).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["error"],
        "You cannot rate your own profile."
    );
}

#[tokio::test]
async fn test_rating_out_of_range_is_rejected() {
    let app = create_test_app().await;
    let (_, _, profile_id) = app.approved_member("owner@example.org", "Acme").await;
    let (_, rater) = app.register_and_login("rater@example.org", "Rater").await;

    let response = rate(&app, &rater, profile_id, 6).await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_deleting_rating_recomputes_average() {
    let app = create_test_app().await;
    let (_, _, profile_id) = app.approved_member("owner@example.org", "Acme").await;
    let (_, first) = app.register_and_login("r1@example.org", "Rater One").await;
    let (_, second) = app.register_and_login("r2@example.org", "Rater Two").await;

    let rating_id = rate(&app, &first, profile_id, 1).await.json::<Value>()["id"]
        .as_i64()
        .unwrap();
    rate(&app, &second, profile_id, 5)
        .await
        .assert_status(StatusCode::CREATED);
    assert_eq!(profile_rating(&app, profile_id).await, json!(3.0));

    // Only the author may remove it
    let response = app
        .server
        .delete(&format!("/api/ratings/{}", rating_id))
        .add_header("Authorization", auth(&second))
        .await;
    response.assert_status(StatusCode::FORBIDDEN);

    let response = app
        .server
        .delete(&format!("/api/ratings/{}", rating_id))
        .add_header("Authorization", auth(&first))
        .await;
    response.assert_status(StatusCode::NO_CONTENT);
    assert_eq!(profile_rating(&app, profile_id).await, json!(5.0));
}

#[tokio::test]
async fn test_ratings_hidden_once_profile_is_rejected() {
    let app = create_test_app().await;
    let (_, _, profile_id) = app.approved_member("owner@example.org", "Acme").await;
    let (_, rater) = app.register_and_login("rater@example.org", "Rater").await;

    let response = rate(&app, &rater, profile_id, 4).await;
    response.assert_status(StatusCode::CREATED);
    let rating_id = response.json::<Value>()["id"].as_i64().unwrap();

    let response = app.server.get("/api/ratings").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["count"], 1);

    app.server
        .post("/admin/profiles/reject")
        .add_header("Authorization", auth(&app.admin_token))
        .json(&json!({ "ids": [profile_id] }))
        .await
        .assert_status_ok();

    let response = app.server.get("/api/ratings").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["count"], 0);
    app.server
        .get(&format!("/api/ratings/{}", rating_id))
        .await
        .assert_status(StatusCode::NOT_FOUND);

    // Staff still see it
    app.server
        .get(&format!("/api/ratings/{}", rating_id))
        .add_header("Authorization", auth(&app.admin_token))
        .await
        .assert_status_ok();
}
