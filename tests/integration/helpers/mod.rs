// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use axum_test::TestServer;
use eso_directory::application::container::AppServices;
use eso_directory::config::settings::{DatabaseSettings, PaginationSettings};
use eso_directory::domain::services::mailer::{EmailMessage, Mailer};
use eso_directory::infrastructure::database::connection;
use eso_directory::presentation::routes;
use eso_directory::utils::errors::MailError;
use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

pub const ADMIN_EMAIL: &str = "admin@eso.test";
pub const PASSWORD: &str = "Sturdy-Passw0rd-91";

/// 记录所有邮件的发送器，可以让指定收件人发送失败
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<EmailMessage>>,
    failing: Mutex<Vec<String>>,
}

impl RecordingMailer {
    pub fn sent(&self) -> Vec<EmailMessage> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_to(&self, address: &str) -> Vec<EmailMessage> {
        self.sent()
            .into_iter()
            .filter(|m| m.to.iter().any(|to| to == address))
            .collect()
    }

    pub fn fail_for(&self, address: &str) {
        self.failing.lock().unwrap().push(address.to_string());
    }

    pub fn clear(&self) {
        self.sent.lock().unwrap().clear();
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, message: &EmailMessage) -> Result<(), MailError> {
        let failing = self.failing.lock().unwrap();
        if message.to.iter().any(|to| failing.contains(to)) {
            return Err(MailError::Transport("connection refused".to_string()));
        }
        drop(failing);
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}

#[allow(dead_code)]
pub struct TestApp {
    pub server: TestServer,
    pub db: Arc<DatabaseConnection>,
    pub mailer: Arc<RecordingMailer>,
    pub services: AppServices,
    pub admin_token: String,
}

pub fn auth(token: &str) -> String {
    format!("Token {}", token)
}

pub async fn create_test_app() -> TestApp {
    let db_settings = DatabaseSettings {
        url: "sqlite::memory:".to_string(),
        max_connections: Some(1),
        min_connections: Some(1),
        connect_timeout: None,
        idle_timeout: None,
    };
    let db = Arc::new(
        connection::create_pool(&db_settings)
            .await
            .expect("Failed to open in-memory database"),
    );
    Migrator::up(db.as_ref(), None).await.unwrap();

    let mailer = Arc::new(RecordingMailer::default());
    let services = AppServices::new(db.clone(), mailer.clone());
    services
        .accounts
        .ensure_superuser(ADMIN_EMAIL, PASSWORD)
        .await
        .unwrap();

    let pagination = PaginationSettings {
        default_page_size: 10,
        max_page_size: 50,
    };
    let server = TestServer::new(routes::routes(services.clone(), pagination)).unwrap();

    let mut app = TestApp {
        server,
        db,
        mailer,
        services,
        admin_token: String::new(),
    };
    app.admin_token = app.login(ADMIN_EMAIL).await;
    app
}

impl TestApp {
    pub async fn login(&self, email: &str) -> String {
        let response = self
            .server
            .post("/auth/token/login")
            .json(&json!({ "email": email, "password": PASSWORD }))
            .await;
        response.assert_status_ok();
        response.json::<Value>()["auth_token"]
            .as_str()
            .expect("auth_token should be a string")
            .to_string()
    }

    /// 注册并登录，返回 (用户 id, 令牌)
    pub async fn register_and_login(&self, email: &str, organization: &str) -> (i64, String) {
        self.register_with_type(email, organization, "LS").await
    }

    pub async fn register_with_type(
        &self,
        email: &str,
        organization: &str,
        organization_type: &str,
    ) -> (i64, String) {
        let response = self
            .server
            .post("/auth/users")
            .json(&json!({
                "email": email,
                "password": PASSWORD,
                "re_password": PASSWORD,
                "first_name": "Ada",
                "last_name": "Obi",
                "organization_name": organization,
                "organization_type": organization_type
            }))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);
        let id = response.json::<Value>()["id"].as_i64().unwrap();
        (id, self.login(email).await)
    }

    /// 创建档案，返回档案 id
    pub async fn create_profile(&self, token: &str, city: &str) -> i64 {
        let response = self
            .server
            .post("/api/profiles")
            .add_header("Authorization", auth(token))
            .json(&json!({
                "country": "Nigeria",
                "state": "Lagos",
                "city": city,
                "company_email": "desk@example.org",
                "description": "Support for small businesses"
            }))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);
        response.json::<Value>()["id"].as_i64().unwrap()
    }

    pub async fn approve(&self, kind: &str, ids: &[i64]) -> Value {
        let response = self
            .server
            .post(&format!("/admin/{}/approve", kind))
            .add_header("Authorization", auth(&self.admin_token))
            .json(&json!({ "ids": ids }))
            .await;
        response.assert_status_ok();
        response.json::<Value>()
    }

    /// 注册用户并创建一个已审核的档案，返回 (用户 id, 令牌, 档案 id)
    pub async fn approved_member(&self, email: &str, organization: &str) -> (i64, String, i64) {
        let (user_id, token) = self.register_and_login(email, organization).await;
        let profile_id = self.create_profile(&token, "Ikeja").await;
        self.approve("profiles", &[profile_id]).await;
        (user_id, token, profile_id)
    }

    pub async fn create_program(&self, token: &str, profile_id: i64, title: &str) -> i64 {
        let response = self
            .server
            .post("/api/programs")
            .add_header("Authorization", auth(token))
            .json(&json!({
                "profile": profile_id,
                "title": title,
                "description": "Twelve week accelerator",
                "target_audience": "Early stage founders",
                "start_date": "2025-01-06",
                "end_date": "2025-03-28",
                "funding": true
            }))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);
        response.json::<Value>()["id"].as_i64().unwrap()
    }
}
