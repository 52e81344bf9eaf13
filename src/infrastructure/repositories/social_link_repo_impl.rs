// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::scope::child_of_profile_condition;
use crate::domain::models::page::PageRequest;
use crate::domain::models::social_link::{Platform, SocialLink};
use crate::domain::repositories::social_link_repository::SocialLinkRepository;
use crate::domain::services::visibility::VisibilityScope;
use crate::infrastructure::database::entities::social_link;
use crate::utils::errors::RepositoryError;
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;

/// 社交链接仓库实现
#[derive(Clone)]
pub struct SocialLinkRepoImpl {
    db: Arc<DatabaseConnection>,
}

impl SocialLinkRepoImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SocialLinkRepository for SocialLinkRepoImpl {
    async fn create(
        &self,
        profile_id: i32,
        platform: Platform,
        url: &str,
    ) -> Result<SocialLink, RepositoryError> {
        let model = social_link::ActiveModel {
            profile_id: Set(profile_id),
            platform: Set(platform.as_str().to_string()),
            url: Set(url.to_string()),
            ..Default::default()
        };
        SocialLink::try_from(model.insert(self.db.as_ref()).await?)
    }

    async fn find(
        &self,
        id: i32,
        scope: VisibilityScope,
    ) -> Result<Option<SocialLink>, RepositoryError> {
        social_link::Entity::find_by_id(id)
            .filter(child_of_profile_condition(
                social_link::Column::ProfileId,
                scope,
            ))
            .one(self.db.as_ref())
            .await?
            .map(SocialLink::try_from)
            .transpose()
    }

    async fn list(
        &self,
        profile_id: Option<i32>,
        scope: VisibilityScope,
        page: PageRequest,
    ) -> Result<(Vec<SocialLink>, u64), RepositoryError> {
        let mut query = social_link::Entity::find().filter(child_of_profile_condition(
            social_link::Column::ProfileId,
            scope,
        ));
        if let Some(profile_id) = profile_id {
            query = query.filter(social_link::Column::ProfileId.eq(profile_id));
        }

        let total = query.clone().count(self.db.as_ref()).await?;
        let links = query
            .order_by_asc(social_link::Column::Id)
            .offset(page.offset())
            .limit(page.limit())
            .all(self.db.as_ref())
            .await?
            .into_iter()
            .map(SocialLink::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((links, total))
    }

    async fn update(&self, link: &SocialLink) -> Result<SocialLink, RepositoryError> {
        let model = social_link::ActiveModel {
            id: Unchanged(link.id),
            profile_id: Set(link.profile),
            platform: Set(link.platform.as_str().to_string()),
            url: Set(link.url.clone()),
        };
        SocialLink::try_from(model.update(self.db.as_ref()).await?)
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let result = social_link::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await?;
        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

impl TryFrom<social_link::Model> for SocialLink {
    type Error = RepositoryError;

    fn try_from(model: social_link::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            profile: model.profile_id,
            platform: model.platform.parse().map_err(RepositoryError::Corrupt)?,
            url: model.url,
        })
    }
}
