// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::page::PageRequest;
use crate::domain::models::social_link::{Platform, SocialLink};
use crate::domain::repositories::profile_repository::ProfileRepository;
use crate::domain::repositories::social_link_repository::SocialLinkRepository;
use crate::domain::services::program_service::missing_profile;
use crate::domain::services::visibility::{Caller, VisibilityScope};
use crate::utils::errors::DomainError;
use std::sync::Arc;

/// 社交链接的修改
#[derive(Debug, Clone, Default)]
pub struct SocialLinkChanges {
    pub profile: Option<i32>,
    pub platform: Option<Platform>,
    pub url: Option<String>,
}

/// 社交链接服务
///
/// 链接的所有者即所属档案的所有者
pub struct SocialLinkService {
    links: Arc<dyn SocialLinkRepository>,
    profiles: Arc<dyn ProfileRepository>,
}

impl SocialLinkService {
    pub fn new(links: Arc<dyn SocialLinkRepository>, profiles: Arc<dyn ProfileRepository>) -> Self {
        Self { links, profiles }
    }

    pub async fn list(
        &self,
        caller: Caller,
        profile_id: Option<i32>,
        page: PageRequest,
    ) -> Result<(Vec<SocialLink>, u64), DomainError> {
        Ok(self.links.list(profile_id, caller.scope(), page).await?)
    }

    pub async fn get(&self, caller: Caller, id: i32) -> Result<SocialLink, DomainError> {
        self.links
            .find(id, caller.scope())
            .await?
            .ok_or(DomainError::NotFound)
    }

    pub async fn create(
        &self,
        caller: Caller,
        profile_id: i32,
        platform: Platform,
        url: &str,
    ) -> Result<SocialLink, DomainError> {
        caller.require_authenticated()?;
        self.check_profile_writable(caller, profile_id).await?;
        Ok(self.links.create(profile_id, platform, url).await?)
    }

    pub async fn update(
        &self,
        caller: Caller,
        id: i32,
        changes: SocialLinkChanges,
    ) -> Result<SocialLink, DomainError> {
        caller.require_authenticated()?;
        let mut link = self.get(caller, id).await?;
        self.check_owner(caller, link.profile).await?;

        if let Some(profile_id) = changes.profile.filter(|p| *p != link.profile) {
            self.check_profile_writable(caller, profile_id).await?;
            link.profile = profile_id;
        }
        if let Some(platform) = changes.platform {
            link.platform = platform;
        }
        if let Some(url) = changes.url {
            link.url = url;
        }
        Ok(self.links.update(&link).await?)
    }

    pub async fn delete(&self, caller: Caller, id: i32) -> Result<(), DomainError> {
        caller.require_authenticated()?;
        let link = self.get(caller, id).await?;
        self.check_owner(caller, link.profile).await?;
        Ok(self.links.delete(id).await?)
    }

    async fn check_profile_writable(
        &self,
        caller: Caller,
        profile_id: i32,
    ) -> Result<(), DomainError> {
        let profile = self
            .profiles
            .find(profile_id, caller.scope())
            .await?
            .ok_or_else(|| missing_profile(profile_id))?;
        if !caller.can_modify(profile.profile.user_id) {
            return Err(DomainError::Forbidden);
        }
        Ok(())
    }

    async fn check_owner(&self, caller: Caller, profile_id: i32) -> Result<(), DomainError> {
        let owner = self
            .profiles
            .find(profile_id, VisibilityScope::Everything)
            .await?
            .map(|p| p.profile.user_id)
            .ok_or(DomainError::NotFound)?;
        if !caller.can_modify(owner) {
            return Err(DomainError::Forbidden);
        }
        Ok(())
    }
}
