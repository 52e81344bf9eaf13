// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::services::mailer::{EmailMessage, Mailer};
use crate::utils::errors::MailError;
use async_trait::async_trait;
use tracing::info;

/// 只把邮件写入日志的发送器，开发环境默认使用
#[derive(Debug, Clone)]
pub struct LogMailer {
    from_address: String,
}

impl LogMailer {
    pub fn new(from_address: String) -> Self {
        Self { from_address }
    }
}

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, message: &EmailMessage) -> Result<(), MailError> {
        info!(
            from = %self.from_address,
            to = ?message.to,
            subject = %message.subject,
            body = %message.body,
            "Email (log backend)"
        );
        Ok(())
    }
}
