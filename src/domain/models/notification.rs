// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 管理后台通知
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminNotification {
    pub id: i32,
    pub title: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub is_read: bool,
}

/// 通知列表过滤条件
#[derive(Debug, Clone, Default)]
pub struct NotificationFilter {
    pub is_read: Option<bool>,
    /// 在标题和正文中搜索
    pub search: Option<String>,
}

/// 受审核内容的种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Profile,
    Program,
}

impl ContentKind {
    /// 小写名称，例如 `profile`
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Profile => "profile",
            ContentKind::Program => "program",
        }
    }

    /// 首字母大写名称，例如 `Profile`
    pub fn title(&self) -> &'static str {
        match self {
            ContentKind::Profile => "Profile",
            ContentKind::Program => "Program",
        }
    }

    /// 复数形式，用于批量操作的提示信息
    pub fn plural(&self) -> &'static str {
        match self {
            ContentKind::Profile => "profiles",
            ContentKind::Program => "programs",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 触发管理员通知的动作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationAction {
    Created,
    Updated,
    Approved,
    Rejected,
}

impl NotificationAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationAction::Created => "created",
            NotificationAction::Updated => "updated",
            NotificationAction::Approved => "approved",
            NotificationAction::Rejected => "rejected",
        }
    }
}

impl fmt::Display for NotificationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 通知中描述的对象
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationSubject {
    Profile { organization_name: String },
    Program { title: String },
}

impl NotificationSubject {
    pub fn kind(&self) -> ContentKind {
        match self {
            NotificationSubject::Profile { .. } => ContentKind::Profile,
            NotificationSubject::Program { .. } => ContentKind::Program,
        }
    }

    /// 邮件主题，同时作为后台通知的标题
    pub fn subject_line(&self, action: NotificationAction) -> String {
        match self {
            NotificationSubject::Profile { organization_name } => {
                format!("Profile {}: {}", action, organization_name)
            }
            NotificationSubject::Program { title } => format!("Program {}: {}", action, title),
        }
    }

    /// 邮件正文，同时作为后台通知的内容
    pub fn message(&self, action: NotificationAction) -> String {
        match self {
            NotificationSubject::Profile { organization_name } => format!(
                "A profile has been {}:\nOrganization: {}",
                action, organization_name
            ),
            NotificationSubject::Program { title } => {
                format!("A program has been {}:\nTitle: {}", action, title)
            }
        }
    }
}
