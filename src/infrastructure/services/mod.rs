// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施服务模块
///
/// 提供邮件发送的具体实现
pub mod http_mailer;
pub mod log_mailer;

use crate::config::settings::{EmailBackend, EmailSettings};
use crate::domain::services::mailer::Mailer;
use crate::utils::errors::MailError;
use http_mailer::HttpMailer;
use log_mailer::LogMailer;
use std::sync::Arc;
use std::time::Duration;

/// 根据配置构建邮件发送器
pub fn build_mailer(settings: &EmailSettings) -> Result<Arc<dyn Mailer>, MailError> {
    match settings.backend {
        EmailBackend::Log => Ok(Arc::new(LogMailer::new(settings.from_address.clone()))),
        EmailBackend::Http => {
            let relay_url = settings.relay_url.clone().ok_or_else(|| {
                MailError::Misconfigured("email.relay_url is required for the http backend".into())
            })?;
            Ok(Arc::new(HttpMailer::new(
                relay_url,
                settings.relay_api_key.clone(),
                settings.from_address.clone(),
                Duration::from_secs(settings.timeout_secs),
            )?))
        }
    }
}
