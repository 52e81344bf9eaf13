// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::page::PageRequest;
use crate::domain::models::social_link::{Platform, SocialLink};
use crate::domain::services::visibility::VisibilityScope;
use crate::utils::errors::RepositoryError;
use async_trait::async_trait;

/// 社交链接仓库特质
///
/// 可见范围沿用所属档案的可见范围
#[async_trait]
pub trait SocialLinkRepository: Send + Sync {
    async fn create(
        &self,
        profile_id: i32,
        platform: Platform,
        url: &str,
    ) -> Result<SocialLink, RepositoryError>;
    async fn find(
        &self,
        id: i32,
        scope: VisibilityScope,
    ) -> Result<Option<SocialLink>, RepositoryError>;
    async fn list(
        &self,
        profile_id: Option<i32>,
        scope: VisibilityScope,
        page: PageRequest,
    ) -> Result<(Vec<SocialLink>, u64), RepositoryError>;
    async fn update(&self, link: &SocialLink) -> Result<SocialLink, RepositoryError>;
    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
}
