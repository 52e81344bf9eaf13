// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::utils::errors::MailError;
use async_trait::async_trait;
use serde::Serialize;

/// 待发送的邮件
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailMessage {
    /// 收件人列表
    pub to: Vec<String>,
    pub subject: String,
    pub body: String,
}

impl EmailMessage {
    pub fn new(to: impl Into<String>, subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            to: vec![to.into()],
            subject: subject.into(),
            body: body.into(),
        }
    }
}

/// 邮件发送特质
///
/// 定义邮件投递的核心接口，具体传输方式由基础设施层实现
#[async_trait]
pub trait Mailer: Send + Sync {
    /// 发送邮件
    ///
    /// # 参数
    ///
    /// * `message` - 待发送的邮件
    ///
    /// # 返回值
    ///
    /// * `Ok(())` - 发送成功
    /// * `Err(MailError)` - 发送失败
    async fn send(&self, message: &EmailMessage) -> Result<(), MailError>;
}
