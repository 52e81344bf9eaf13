// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::scope::child_of_profile_condition;
use crate::domain::models::page::PageRequest;
use crate::domain::models::rating::{NewRating, Rating, RatingFilter};
use crate::domain::repositories::rating_repository::RatingRepository;
use crate::domain::services::visibility::VisibilityScope;
use crate::infrastructure::database::entities::rating;
use crate::utils::errors::RepositoryError;
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::*;
use std::sync::Arc;

/// 评分仓库实现
#[derive(Clone)]
pub struct RatingRepoImpl {
    db: Arc<DatabaseConnection>,
}

impl RatingRepoImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RatingRepository for RatingRepoImpl {
    async fn create(&self, new_rating: &NewRating) -> Result<Rating, RepositoryError> {
        let model = rating::ActiveModel {
            rated_user_id: Set(new_rating.rated_user),
            rated_profile_id: Set(new_rating.rated_profile),
            rated_by_id: Set(new_rating.rated_by),
            rating: Set(new_rating.rating),
            comment: Set(new_rating.comment.clone()),
            created_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };
        Ok(model.insert(self.db.as_ref()).await?.into())
    }

    async fn find(
        &self,
        id: i32,
        scope: VisibilityScope,
    ) -> Result<Option<Rating>, RepositoryError> {
        let model = rating::Entity::find_by_id(id)
            .filter(child_of_profile_condition(
                rating::Column::RatedProfileId,
                scope,
            ))
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn list(
        &self,
        filter: &RatingFilter,
        scope: VisibilityScope,
        page: PageRequest,
    ) -> Result<(Vec<Rating>, u64), RepositoryError> {
        let mut query = rating::Entity::find().filter(child_of_profile_condition(
            rating::Column::RatedProfileId,
            scope,
        ));
        if let Some(profile_id) = filter.rated_profile {
            query = query.filter(rating::Column::RatedProfileId.eq(profile_id));
        }
        if let Some(author) = filter.rated_by {
            query = query.filter(rating::Column::RatedById.eq(author));
        }

        let total = query.clone().count(self.db.as_ref()).await?;
        let ratings = query
            .order_by_desc(rating::Column::CreatedAt)
            .order_by_desc(rating::Column::Id)
            .offset(page.offset())
            .limit(page.limit())
            .all(self.db.as_ref())
            .await?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok((ratings, total))
    }

    async fn update(&self, updated: &Rating) -> Result<Rating, RepositoryError> {
        let model = rating::ActiveModel {
            id: Unchanged(updated.id),
            rating: Set(updated.rating),
            comment: Set(updated.comment.clone()),
            ..Default::default()
        };
        Ok(model.update(self.db.as_ref()).await?.into())
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let result = rating::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await?;
        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn scores_for_profile(&self, profile_id: i32) -> Result<Vec<i32>, RepositoryError> {
        Ok(rating::Entity::find()
            .select_only()
            .column(rating::Column::Rating)
            .filter(rating::Column::RatedProfileId.eq(profile_id))
            .into_tuple::<i32>()
            .all(self.db.as_ref())
            .await?)
    }
}

impl From<rating::Model> for Rating {
    fn from(model: rating::Model) -> Self {
        Self {
            id: model.id,
            rated_user: model.rated_user_id,
            rated_profile: model.rated_profile_id,
            rated_by: model.rated_by_id,
            rating: model.rating,
            comment: model.comment,
            created_at: model.created_at.into(),
        }
    }
}
