// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::page::PageRequest;
use crate::domain::models::profile::average_rating;
use crate::domain::models::rating::{NewRating, Rating, RatingFilter, MAX_SCORE, MIN_SCORE};
use crate::domain::repositories::profile_repository::ProfileRepository;
use crate::domain::repositories::rating_repository::RatingRepository;
use crate::domain::services::program_service::missing_profile;
use crate::domain::services::visibility::Caller;
use crate::utils::errors::{DomainError, RepositoryError};
use std::sync::Arc;
use tracing::debug;

/// 检查分数范围
pub fn check_score(score: i32) -> Result<(), DomainError> {
    if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
        return Err(DomainError::Validation(format!(
            "Ensure rating is between {} and {}.",
            MIN_SCORE, MAX_SCORE
        )));
    }
    Ok(())
}

/// 评分服务
///
/// 每次评分变化后重新计算被评档案的平均分
pub struct RatingService {
    ratings: Arc<dyn RatingRepository>,
    profiles: Arc<dyn ProfileRepository>,
}

impl RatingService {
    pub fn new(ratings: Arc<dyn RatingRepository>, profiles: Arc<dyn ProfileRepository>) -> Self {
        Self { ratings, profiles }
    }

    pub async fn list(
        &self,
        caller: Caller,
        filter: &RatingFilter,
        page: PageRequest,
    ) -> Result<(Vec<Rating>, u64), DomainError> {
        Ok(self.ratings.list(filter, caller.scope(), page).await?)
    }

    pub async fn get(&self, caller: Caller, id: i32) -> Result<Rating, DomainError> {
        self.ratings
            .find(id, caller.scope())
            .await?
            .ok_or(DomainError::NotFound)
    }

    /// 以调用者身份给档案评分
    pub async fn create(
        &self,
        caller: Caller,
        rated_profile: i32,
        score: i32,
        comment: Option<String>,
    ) -> Result<Rating, DomainError> {
        let rated_by = caller.require_authenticated()?;
        check_score(score)?;

        let profile = self
            .profiles
            .find(rated_profile, caller.scope())
            .await?
            .ok_or_else(|| missing_profile(rated_profile))?;
        if profile.profile.user_id == rated_by {
            return Err(DomainError::Validation(
                "You cannot rate your own profile.".to_string(),
            ));
        }

        let rating = self
            .ratings
            .create(&NewRating {
                rated_user: profile.profile.user_id,
                rated_profile,
                rated_by,
                rating: score,
                comment,
            })
            .await
            .map_err(|e| match e {
                RepositoryError::AlreadyExists(_) => DomainError::Conflict(
                    "You have already rated this organization.".to_string(),
                ),
                other => other.into(),
            })?;

        self.refresh_profile_rating(rated_profile).await?;
        Ok(rating)
    }

    /// 修改分数或评论，只有作者或管理员可以修改
    pub async fn update(
        &self,
        caller: Caller,
        id: i32,
        score: Option<i32>,
        comment: Option<String>,
    ) -> Result<Rating, DomainError> {
        caller.require_authenticated()?;
        let mut rating = self.get(caller, id).await?;
        if !caller.can_modify(rating.rated_by) {
            return Err(DomainError::Forbidden);
        }
        if let Some(score) = score {
            check_score(score)?;
            rating.rating = score;
        }
        if comment.is_some() {
            rating.comment = comment;
        }

        let updated = self.ratings.update(&rating).await?;
        self.refresh_profile_rating(updated.rated_profile).await?;
        Ok(updated)
    }

    pub async fn delete(&self, caller: Caller, id: i32) -> Result<(), DomainError> {
        caller.require_authenticated()?;
        let rating = self.get(caller, id).await?;
        if !caller.can_modify(rating.rated_by) {
            return Err(DomainError::Forbidden);
        }
        self.ratings.delete(id).await?;
        self.refresh_profile_rating(rating.rated_profile).await
    }

    async fn refresh_profile_rating(&self, profile_id: i32) -> Result<(), DomainError> {
        let scores = self.ratings.scores_for_profile(profile_id).await?;
        let average = average_rating(&scores);
        self.profiles.set_rating(profile_id, average).await?;
        debug!(profile_id, ?average, count = scores.len(), "Profile rating refreshed");
        Ok(())
    }
}
