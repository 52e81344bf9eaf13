// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::notification::{
    AdminNotification, ContentKind, NotificationAction, NotificationFilter, NotificationSubject,
};
use crate::domain::models::page::PageRequest;
use crate::domain::repositories::notification_repository::NotificationRepository;
use crate::domain::repositories::user_repository::UserRepository;
use crate::domain::services::mailer::{EmailMessage, Mailer};
use crate::domain::services::visibility::Caller;
use crate::utils::errors::{DomainError, MailError};
use std::sync::Arc;
use tracing::{info, warn};

/// 拒绝时未提供原因使用的默认说明
pub const DEFAULT_REJECTION_REASON: &str = "Your submission did not meet our current requirements.";

/// 审核通过时发给所有者的邮件
pub fn approval_email(to: &str, kind: ContentKind) -> EmailMessage {
    let body = match kind {
        ContentKind::Profile => "Your profile has been approved. Welcome to our platform!",
        ContentKind::Program => {
            "Your program has been approved and is now visible on the platform!"
        }
    };
    EmailMessage::new(to, format!("{} Approved", kind.title()), body)
}

/// 审核拒绝时发给所有者的邮件
pub fn rejection_email(to: &str, kind: ContentKind, reason: Option<&str>) -> EmailMessage {
    let reason = reason
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .unwrap_or(DEFAULT_REJECTION_REASON);
    EmailMessage::new(
        to,
        format!("{} Rejected", kind.title()),
        format!("Your {} has been rejected.\nReason: {}", kind, reason),
    )
}

/// 通知服务
///
/// 负责管理员通知（邮件 + 后台记录）以及发给内容所有者的审核结果邮件
pub struct NotificationService {
    users: Arc<dyn UserRepository>,
    notifications: Arc<dyn NotificationRepository>,
    mailer: Arc<dyn Mailer>,
}

impl NotificationService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        notifications: Arc<dyn NotificationRepository>,
        mailer: Arc<dyn Mailer>,
    ) -> Self {
        Self {
            users,
            notifications,
            mailer,
        }
    }

    /// 通知所有管理员
    ///
    /// 给每位管理员发送邮件，发送失败只记录日志；随后写入一条后台通知
    pub async fn notify_admins(
        &self,
        action: NotificationAction,
        subject: &NotificationSubject,
    ) -> Result<AdminNotification, DomainError> {
        let title = subject.subject_line(action);
        let message = subject.message(action);

        let staff = self.users.list_staff().await?;
        for admin in &staff {
            let email = EmailMessage::new(admin.email.clone(), title.clone(), message.clone());
            if let Err(e) = self.mailer.send(&email).await {
                warn!(
                    admin = %admin.email,
                    error = %e,
                    "Failed to deliver admin notification email"
                );
            }
        }

        let record = self.notifications.create(&title, &message).await?;

        metrics::counter!(
            "eso_admin_notifications_total",
            "kind" => subject.kind().as_str(),
            "action" => action.as_str()
        )
        .increment(1);
        info!(
            notification_id = record.id,
            recipients = staff.len(),
            "{}",
            title
        );

        Ok(record)
    }

    /// 通知所有者其内容已审核通过
    pub async fn send_approval_email(&self, to: &str, kind: ContentKind) -> Result<(), MailError> {
        self.mailer.send(&approval_email(to, kind)).await
    }

    /// 通知所有者其内容被拒绝
    pub async fn send_rejection_email(
        &self,
        to: &str,
        kind: ContentKind,
        reason: Option<&str>,
    ) -> Result<(), MailError> {
        self.mailer.send(&rejection_email(to, kind, reason)).await
    }

    /// 分页查询后台通知，仅管理员
    pub async fn list(
        &self,
        caller: Caller,
        filter: &NotificationFilter,
        page: PageRequest,
    ) -> Result<(Vec<AdminNotification>, u64), DomainError> {
        caller.require_staff()?;
        Ok(self.notifications.list(filter, page).await?)
    }

    pub async fn get(&self, caller: Caller, id: i32) -> Result<AdminNotification, DomainError> {
        caller.require_staff()?;
        self.notifications
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound)
    }

    /// 标记已读或未读
    pub async fn mark_read(
        &self,
        caller: Caller,
        id: i32,
        is_read: bool,
    ) -> Result<AdminNotification, DomainError> {
        caller.require_staff()?;
        Ok(self.notifications.set_read(id, is_read).await?)
    }

    pub async fn delete(&self, caller: Caller, id: i32) -> Result<(), DomainError> {
        caller.require_staff()?;
        Ok(self.notifications.delete(id).await?)
    }
}
