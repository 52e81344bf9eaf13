// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::page::PageRequest;
use crate::domain::models::rating::{NewRating, Rating, RatingFilter};
use crate::domain::services::visibility::VisibilityScope;
use crate::utils::errors::RepositoryError;
use async_trait::async_trait;

/// 评分仓库特质
///
/// 可见范围沿用被评分档案的可见范围
#[async_trait]
pub trait RatingRepository: Send + Sync {
    /// 创建评分，重复评分返回 `AlreadyExists`
    async fn create(&self, rating: &NewRating) -> Result<Rating, RepositoryError>;
    async fn find(
        &self,
        id: i32,
        scope: VisibilityScope,
    ) -> Result<Option<Rating>, RepositoryError>;
    async fn list(
        &self,
        filter: &RatingFilter,
        scope: VisibilityScope,
        page: PageRequest,
    ) -> Result<(Vec<Rating>, u64), RepositoryError>;
    /// 更新分数和评论
    async fn update(&self, rating: &Rating) -> Result<Rating, RepositoryError>;
    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
    /// 档案收到的全部分数
    async fn scores_for_profile(&self, profile_id: i32) -> Result<Vec<i32>, RepositoryError>;
}
