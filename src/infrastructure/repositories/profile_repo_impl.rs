// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::scope::profile_condition;
use crate::domain::models::page::PageRequest;
use crate::domain::models::profile::{
    Profile, ProfileFields, ProfileFilter, ProfileOrdering, ProfileWithOwner,
};
use crate::domain::models::user::User;
use crate::domain::repositories::profile_repository::ProfileRepository;
use crate::domain::services::visibility::VisibilityScope;
use crate::infrastructure::database::entities::{profile, user};
use crate::utils::errors::RepositoryError;
use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::*;
use std::sync::Arc;

/// 档案仓库实现
#[derive(Clone)]
pub struct ProfileRepoImpl {
    db: Arc<DatabaseConnection>,
}

impl ProfileRepoImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn with_owner(
        &self,
        condition: Condition,
    ) -> Result<Option<ProfileWithOwner>, RepositoryError> {
        profile::Entity::find()
            .filter(condition)
            .find_also_related(user::Entity)
            .one(self.db.as_ref())
            .await?
            .map(join_owner)
            .transpose()
    }
}

#[async_trait]
impl ProfileRepository for ProfileRepoImpl {
    async fn create(
        &self,
        user_id: i32,
        fields: &ProfileFields,
    ) -> Result<ProfileWithOwner, RepositoryError> {
        let model = profile::ActiveModel {
            user_id: Set(user_id),
            country: Set(fields.country.clone()),
            state: Set(fields.state.clone()),
            city: Set(fields.city.clone()),
            address: Set(fields.address.clone()),
            company_email: Set(fields.company_email.clone()),
            company_phone: Set(fields.company_phone.clone()),
            company_website: Set(fields.company_website.clone()),
            description: Set(fields.description.clone()),
            rating: Set(None),
            is_approved: Set(false),
            ..Default::default()
        };
        let created = model.insert(self.db.as_ref()).await?;

        self.with_owner(Condition::all().add(profile::Column::Id.eq(created.id)))
            .await?
            .ok_or(RepositoryError::NotFound)
    }

    async fn find(
        &self,
        id: i32,
        scope: VisibilityScope,
    ) -> Result<Option<ProfileWithOwner>, RepositoryError> {
        self.with_owner(
            Condition::all()
                .add(profile::Column::Id.eq(id))
                .add(profile_condition(scope)),
        )
        .await
    }

    async fn find_by_user(&self, user_id: i32) -> Result<Option<Profile>, RepositoryError> {
        let model = profile::Entity::find()
            .filter(profile::Column::UserId.eq(user_id))
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn list(
        &self,
        filter: &ProfileFilter,
        scope: VisibilityScope,
        page: PageRequest,
    ) -> Result<(Vec<ProfileWithOwner>, u64), RepositoryError> {
        let mut condition = Condition::all().add(profile_condition(scope));
        if let Some(state) = &filter.state {
            condition = condition.add(profile::Column::State.eq(state.as_str()));
        }
        if let Some(city) = &filter.city {
            condition = condition.add(profile::Column::City.eq(city.as_str()));
        }

        let query = profile::Entity::find().filter(condition);
        let total = query.clone().count(self.db.as_ref()).await?;

        let joined = query.find_also_related(user::Entity);
        let ordered = match filter.ordering {
            ProfileOrdering::OrganizationName => {
                joined.order_by_asc(user::Column::OrganizationName)
            }
            ProfileOrdering::OrganizationType => {
                joined.order_by_asc(user::Column::OrganizationType)
            }
            ProfileOrdering::OrganizationTypeDesc => {
                joined.order_by_desc(user::Column::OrganizationType)
            }
        };

        let rows = ordered
            .order_by_asc(profile::Column::Id)
            .offset(page.offset())
            .limit(page.limit())
            .all(self.db.as_ref())
            .await?
            .into_iter()
            .map(join_owner)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((rows, total))
    }

    async fn update(&self, updated: &Profile) -> Result<ProfileWithOwner, RepositoryError> {
        let mut model = profile::Entity::find_by_id(updated.id)
            .one(self.db.as_ref())
            .await?
            .ok_or(RepositoryError::NotFound)?
            .into_active_model();
        model.country = Set(updated.country.clone());
        model.state = Set(updated.state.clone());
        model.city = Set(updated.city.clone());
        model.address = Set(updated.address.clone());
        model.company_email = Set(updated.company_email.clone());
        model.company_phone = Set(updated.company_phone.clone());
        model.company_website = Set(updated.company_website.clone());
        model.description = Set(updated.description.clone());
        model.update(self.db.as_ref()).await?;

        self.with_owner(Condition::all().add(profile::Column::Id.eq(updated.id)))
            .await?
            .ok_or(RepositoryError::NotFound)
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let result = profile::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await?;
        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn set_approved(
        &self,
        ids: &[i32],
        approved: bool,
    ) -> Result<Vec<ProfileWithOwner>, RepositoryError> {
        profile::Entity::update_many()
            .col_expr(profile::Column::IsApproved, Expr::value(approved))
            .filter(profile::Column::Id.is_in(ids.to_vec()))
            .exec(self.db.as_ref())
            .await?;

        profile::Entity::find()
            .filter(profile::Column::Id.is_in(ids.to_vec()))
            .find_also_related(user::Entity)
            .order_by_asc(profile::Column::Id)
            .all(self.db.as_ref())
            .await?
            .into_iter()
            .map(join_owner)
            .collect()
    }

    async fn set_rating(&self, id: i32, rating: Option<f64>) -> Result<(), RepositoryError> {
        profile::Entity::update_many()
            .col_expr(profile::Column::Rating, Expr::value(rating))
            .filter(profile::Column::Id.eq(id))
            .exec(self.db.as_ref())
            .await?;
        Ok(())
    }

    async fn count_pending(&self) -> Result<u64, RepositoryError> {
        Ok(profile::Entity::find()
            .filter(profile::Column::IsApproved.eq(false))
            .count(self.db.as_ref())
            .await?)
    }
}

fn join_owner(
    (profile, owner): (profile::Model, Option<user::Model>),
) -> Result<ProfileWithOwner, RepositoryError> {
    let owner = owner.ok_or_else(|| {
        RepositoryError::Corrupt(format!("profile {} has no owner", profile.id))
    })?;
    Ok(ProfileWithOwner {
        profile: profile.into(),
        user: User::try_from(owner)?,
    })
}

impl From<profile::Model> for Profile {
    fn from(model: profile::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            country: model.country,
            state: model.state,
            city: model.city,
            address: model.address,
            company_email: model.company_email,
            company_phone: model.company_phone,
            company_website: model.company_website,
            description: model.description,
            rating: model.rating,
            is_approved: model.is_approved,
        }
    }
}
