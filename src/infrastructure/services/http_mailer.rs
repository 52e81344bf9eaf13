// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::services::mailer::{EmailMessage, Mailer};
use crate::utils::errors::MailError;
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

/// 发往邮件中继的请求体
#[derive(Debug, Serialize)]
struct RelayPayload<'a> {
    from: &'a str,
    to: &'a [String],
    subject: &'a str,
    text: &'a str,
}

/// 通过 HTTP 邮件中继发送邮件
pub struct HttpMailer {
    /// HTTP 客户端
    client: reqwest::Client,
    relay_url: String,
    api_key: Option<String>,
    from_address: String,
}

impl HttpMailer {
    /// 创建新的 HTTP 邮件发送器
    pub fn new(
        relay_url: String,
        api_key: Option<String>,
        from_address: String,
        timeout: Duration,
    ) -> Result<Self, MailError> {
        url::Url::parse(&relay_url)
            .map_err(|e| MailError::Misconfigured(format!("invalid relay url: {}", e)))?;

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| MailError::Misconfigured(e.to_string()))?;

        Ok(Self {
            client,
            relay_url,
            api_key,
            from_address,
        })
    }
}

#[async_trait]
impl Mailer for HttpMailer {
    async fn send(&self, message: &EmailMessage) -> Result<(), MailError> {
        let payload = RelayPayload {
            from: &self.from_address,
            to: &message.to,
            subject: &message.subject,
            text: &message.body,
        };

        let mut request = self.client.post(&self.relay_url).json(&payload);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| MailError::Transport(e.to_string()))?;

        if response.status().is_success() {
            debug!(to = ?message.to, subject = %message.subject, "Email handed to relay");
            Ok(())
        } else {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            Err(MailError::Rejected { status, body })
        }
    }
}
