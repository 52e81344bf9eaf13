// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::page::PageRequest;
use crate::domain::models::profile::{Profile, ProfileFields, ProfileFilter, ProfileWithOwner};
use crate::domain::services::visibility::VisibilityScope;
use crate::utils::errors::RepositoryError;
use async_trait::async_trait;

/// 档案仓库特质
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// 为用户创建档案，新档案总是未审核状态
    async fn create(
        &self,
        user_id: i32,
        fields: &ProfileFields,
    ) -> Result<ProfileWithOwner, RepositoryError>;
    /// 在可见范围内按ID查找
    async fn find(
        &self,
        id: i32,
        scope: VisibilityScope,
    ) -> Result<Option<ProfileWithOwner>, RepositoryError>;
    /// 查找用户的档案
    async fn find_by_user(&self, user_id: i32) -> Result<Option<Profile>, RepositoryError>;
    /// 在可见范围内分页查询
    async fn list(
        &self,
        filter: &ProfileFilter,
        scope: VisibilityScope,
        page: PageRequest,
    ) -> Result<(Vec<ProfileWithOwner>, u64), RepositoryError>;
    /// 保存可编辑字段，不修改审核状态与评分
    async fn update(&self, profile: &Profile) -> Result<ProfileWithOwner, RepositoryError>;
    /// 删除档案
    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
    /// 批量设置审核状态，返回实际存在的档案
    async fn set_approved(
        &self,
        ids: &[i32],
        approved: bool,
    ) -> Result<Vec<ProfileWithOwner>, RepositoryError>;
    /// 写入派生评分
    async fn set_rating(&self, id: i32, rating: Option<f64>) -> Result<(), RepositoryError>;
    /// 待审核数量
    async fn count_pending(&self) -> Result<u64, RepositoryError>;
}
