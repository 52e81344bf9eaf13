// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::notification::{ContentKind, NotificationAction};
use crate::domain::repositories::profile_repository::ProfileRepository;
use crate::domain::repositories::program_repository::ProgramRepository;
use crate::domain::services::notification_service::NotificationService;
use crate::domain::services::visibility::{Caller, VisibilityScope};
use crate::domain::services::{profile_service, program_service};
use crate::utils::errors::DomainError;
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info};

/// 审核决定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Reject,
}

impl Decision {
    fn action(self) -> NotificationAction {
        match self {
            Decision::Approve => NotificationAction::Approved,
            Decision::Reject => NotificationAction::Rejected,
        }
    }
}

/// 批量审核结果
#[derive(Debug, Clone, Serialize)]
pub struct ModerationOutcome {
    pub kind: ContentKind,
    /// 实际更新的条数
    pub updated: usize,
    /// 所有者邮件发送失败的地址
    pub failed_emails: Vec<String>,
    /// 管理员通知未能记录的条目 ID
    pub failed_notifications: Vec<i32>,
    pub message: String,
}

/// 待审核数量
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PendingCounts {
    pub profiles: u64,
    pub programs: u64,
}

/// 汇总消息，例如 `3 profiles were approved and users were notified.`
pub fn summary_message(kind: ContentKind, decision: Decision, count: usize) -> String {
    let recipients = match kind {
        ContentKind::Profile => "users",
        ContentKind::Program => "owners",
    };
    format!(
        "{} {} were {} and {} were notified.",
        count,
        kind.plural(),
        decision.action(),
        recipients
    )
}

/// 审核服务
///
/// 批量修改审核状态，通知所有者和全部管理员
pub struct ModerationService {
    profiles: Arc<dyn ProfileRepository>,
    programs: Arc<dyn ProgramRepository>,
    notifier: Arc<NotificationService>,
}

impl ModerationService {
    pub fn new(
        profiles: Arc<dyn ProfileRepository>,
        programs: Arc<dyn ProgramRepository>,
        notifier: Arc<NotificationService>,
    ) -> Self {
        Self {
            profiles,
            programs,
            notifier,
        }
    }

    pub async fn approve(
        &self,
        caller: Caller,
        kind: ContentKind,
        ids: &[i32],
    ) -> Result<ModerationOutcome, DomainError> {
        self.moderate(caller, kind, ids, Decision::Approve, None)
            .await
    }

    pub async fn reject(
        &self,
        caller: Caller,
        kind: ContentKind,
        ids: &[i32],
        reason: Option<&str>,
    ) -> Result<ModerationOutcome, DomainError> {
        self.moderate(caller, kind, ids, Decision::Reject, reason)
            .await
    }

    /// 管理员查询待审核数量
    pub async fn pending_counts(&self, caller: Caller) -> Result<PendingCounts, DomainError> {
        caller.require_staff()?;
        Ok(PendingCounts {
            profiles: self.profiles.count_pending().await?,
            programs: self.programs.count_pending().await?,
        })
    }

    async fn moderate(
        &self,
        caller: Caller,
        kind: ContentKind,
        ids: &[i32],
        decision: Decision,
        reason: Option<&str>,
    ) -> Result<ModerationOutcome, DomainError> {
        let staff_id = caller.require_staff()?;
        if ids.is_empty() {
            return Err(DomainError::Validation(
                "ids must contain at least one id".to_string(),
            ));
        }

        let approved = decision == Decision::Approve;
        let action = decision.action();
        let mut failed_emails = Vec::new();
        let mut failed_notifications = Vec::new();

        // (item id, owner email, notification subject) per updated item
        let items = match kind {
            ContentKind::Profile => self
                .profiles
                .set_approved(ids, approved)
                .await?
                .into_iter()
                .map(|p| {
                    let subject = profile_service::subject_of(&p);
                    (p.profile.id, p.user.email, subject)
                })
                .collect::<Vec<_>>(),
            ContentKind::Program => {
                let programs = self.programs.set_approved(ids, approved).await?;
                let mut items = Vec::with_capacity(programs.len());
                for program in &programs {
                    let owner = self
                        .profiles
                        .find(program.profile, VisibilityScope::Everything)
                        .await?
                        .ok_or(DomainError::NotFound)?;
                    items.push((
                        program.id,
                        owner.user.email,
                        program_service::subject_of(program),
                    ));
                }
                items
            }
        };

        for (id, owner_email, subject) in &items {
            let sent = match decision {
                Decision::Approve => self.notifier.send_approval_email(owner_email, kind).await,
                Decision::Reject => {
                    self.notifier
                        .send_rejection_email(owner_email, kind, reason)
                        .await
                }
            };
            if let Err(e) = sent {
                error!(
                    owner = %owner_email,
                    kind = %kind,
                    error = %e,
                    "Failed to send moderation email to owner"
                );
                failed_emails.push(owner_email.clone());
            }
            if let Err(e) = self.notifier.notify_admins(action, subject).await {
                error!(
                    id = *id,
                    kind = %kind,
                    error = %e,
                    "Failed to record admin notification"
                );
                failed_notifications.push(*id);
            }
        }

        metrics::counter!(
            "eso_moderation_actions_total",
            "kind" => kind.as_str(),
            "action" => action.as_str()
        )
        .increment(items.len() as u64);

        let message = summary_message(kind, decision, items.len());
        info!(
            staff_id,
            requested = ids.len(),
            updated = items.len(),
            "{}",
            message
        );

        Ok(ModerationOutcome {
            kind,
            updated: items.len(),
            failed_emails,
            failed_notifications,
            message,
        })
    }
}
