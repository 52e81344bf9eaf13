// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::notification::NotificationFilter;
use crate::domain::services::moderation_service::ModerationOutcome;
use serde::{Deserialize, Serialize};

/// 批量审核请求体
#[derive(Debug, Deserialize)]
pub struct ModerationRequest {
    pub ids: Vec<i32>,
    /// 拒绝原因，只在拒绝时使用
    pub reason: Option<String>,
}

/// 批量审核响应
#[derive(Debug, Serialize)]
pub struct ModerationResponse {
    pub message: String,
    pub updated: usize,
    pub failed_emails: Vec<String>,
    pub failed_notifications: Vec<i32>,
}

impl From<ModerationOutcome> for ModerationResponse {
    fn from(outcome: ModerationOutcome) -> Self {
        Self {
            message: outcome.message,
            updated: outcome.updated,
            failed_emails: outcome.failed_emails,
            failed_notifications: outcome.failed_notifications,
        }
    }
}

/// 通知列表查询参数
#[derive(Debug, Default, Deserialize)]
pub struct NotificationListQuery {
    pub is_read: Option<bool>,
    pub search: Option<String>,
}

impl From<NotificationListQuery> for NotificationFilter {
    fn from(query: NotificationListQuery) -> Self {
        Self {
            is_read: query.is_read,
            search: query.search,
        }
    }
}

/// 标记通知已读或未读
#[derive(Debug, Deserialize)]
pub struct NotificationPatchRequest {
    pub is_read: bool,
}
