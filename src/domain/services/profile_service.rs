// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::notification::{NotificationAction, NotificationSubject};
use crate::domain::models::page::PageRequest;
use crate::domain::models::profile::{ProfileFields, ProfileFilter, ProfileWithOwner};
use crate::domain::repositories::profile_repository::ProfileRepository;
use crate::domain::services::notification_service::NotificationService;
use crate::domain::services::visibility::Caller;
use crate::utils::errors::{DomainError, RepositoryError};
use std::sync::Arc;
use tracing::info;

/// 档案服务
pub struct ProfileService {
    profiles: Arc<dyn ProfileRepository>,
    notifier: Arc<NotificationService>,
}

impl ProfileService {
    pub fn new(profiles: Arc<dyn ProfileRepository>, notifier: Arc<NotificationService>) -> Self {
        Self { profiles, notifier }
    }

    pub async fn list(
        &self,
        caller: Caller,
        filter: &ProfileFilter,
        page: PageRequest,
    ) -> Result<(Vec<ProfileWithOwner>, u64), DomainError> {
        Ok(self.profiles.list(filter, caller.scope(), page).await?)
    }

    /// 按ID获取，调用者不可见时返回 `NotFound`
    pub async fn get(&self, caller: Caller, id: i32) -> Result<ProfileWithOwner, DomainError> {
        self.profiles
            .find(id, caller.scope())
            .await?
            .ok_or(DomainError::NotFound)
    }

    /// 为调用者创建档案并通知管理员
    ///
    /// 每个用户最多一个档案
    pub async fn create(
        &self,
        caller: Caller,
        fields: ProfileFields,
    ) -> Result<ProfileWithOwner, DomainError> {
        let user_id = caller.require_authenticated()?;
        if self.profiles.find_by_user(user_id).await?.is_some() {
            return Err(already_has_profile());
        }

        let created = self
            .profiles
            .create(user_id, &fields)
            .await
            .map_err(|e| match e {
                RepositoryError::AlreadyExists(_) => already_has_profile(),
                other => other.into(),
            })?;

        info!(profile_id = created.profile.id, user_id, "Profile created");
        self.notifier
            .notify_admins(NotificationAction::Created, &subject_of(&created))
            .await?;
        Ok(created)
    }

    /// 修改档案，`partial` 为真时只覆盖提供了的字段
    pub async fn update(
        &self,
        caller: Caller,
        id: i32,
        fields: ProfileFields,
        partial: bool,
    ) -> Result<ProfileWithOwner, DomainError> {
        caller.require_authenticated()?;
        let current = self.get(caller, id).await?;
        if !caller.can_modify(current.profile.user_id) {
            return Err(DomainError::Forbidden);
        }

        let mut profile = current.profile;
        if partial {
            fields.merge_onto(&mut profile);
        } else {
            fields.replace_on(&mut profile);
        }

        let updated = self.profiles.update(&profile).await?;
        self.notifier
            .notify_admins(NotificationAction::Updated, &subject_of(&updated))
            .await?;
        Ok(updated)
    }

    pub async fn delete(&self, caller: Caller, id: i32) -> Result<(), DomainError> {
        caller.require_authenticated()?;
        let current = self.get(caller, id).await?;
        if !caller.can_modify(current.profile.user_id) {
            return Err(DomainError::Forbidden);
        }
        self.profiles.delete(id).await?;
        info!(profile_id = id, "Profile deleted");
        Ok(())
    }
}

fn already_has_profile() -> DomainError {
    DomainError::Conflict("A profile already exists for this user.".to_string())
}

pub(crate) fn subject_of(profile: &ProfileWithOwner) -> NotificationSubject {
    NotificationSubject::Profile {
        organization_name: profile.user.organization_name.clone(),
    }
}
