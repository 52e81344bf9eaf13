// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::page::PageRequest;
use crate::domain::models::user::{NewUser, User, UserQuery};
use crate::domain::repositories::user_repository::{TokenRepository, UserRepository};
use crate::infrastructure::database::entities::{auth_token, user};
use crate::utils::errors::RepositoryError;
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::*;
use std::sync::Arc;

/// 用户仓库实现
#[derive(Clone)]
pub struct UserRepoImpl {
    db: Arc<DatabaseConnection>,
}

impl UserRepoImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn model(&self, id: i32) -> Result<user::Model, RepositoryError> {
        user::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .ok_or(RepositoryError::NotFound)
    }
}

#[async_trait]
impl UserRepository for UserRepoImpl {
    async fn create(&self, new_user: &NewUser) -> Result<User, RepositoryError> {
        let model = user::ActiveModel {
            email: Set(new_user.email.clone()),
            password_hash: Set(new_user.password_hash.clone()),
            first_name: Set(new_user.first_name.clone()),
            last_name: Set(new_user.last_name.clone()),
            organization_name: Set(new_user.organization_name.clone()),
            organization_type: Set(new_user.organization_type.map(|t| t.code().to_string())),
            whatsapp_number: Set(new_user.whatsapp_number.clone()),
            is_active: Set(true),
            is_staff: Set(new_user.is_staff),
            is_superuser: Set(new_user.is_superuser),
            date_joined: Set(Utc::now().fixed_offset()),
            last_login: Set(None),
            ..Default::default()
        };

        let created = model.insert(self.db.as_ref()).await?;
        User::try_from(created)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepositoryError> {
        user::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .map(User::try_from)
            .transpose()
    }

    async fn find_credentials(
        &self,
        email: &str,
    ) -> Result<Option<(User, String)>, RepositoryError> {
        let Some(model) = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(self.db.as_ref())
            .await?
        else {
            return Ok(None);
        };

        let hash = model.password_hash.clone();
        Ok(Some((User::try_from(model)?, hash)))
    }

    async fn list_staff(&self) -> Result<Vec<User>, RepositoryError> {
        user::Entity::find()
            .filter(user::Column::IsStaff.eq(true))
            .filter(user::Column::IsActive.eq(true))
            .order_by_asc(user::Column::Id)
            .all(self.db.as_ref())
            .await?
            .into_iter()
            .map(User::try_from)
            .collect()
    }

    async fn list(
        &self,
        query: &UserQuery,
        page: PageRequest,
    ) -> Result<(Vec<User>, u64), RepositoryError> {
        let mut select = user::Entity::find();
        if let Some(is_active) = query.is_active {
            select = select.filter(user::Column::IsActive.eq(is_active));
        }
        if let Some(is_staff) = query.is_staff {
            select = select.filter(user::Column::IsStaff.eq(is_staff));
        }
        if let Some(term) = query.search.as_deref().filter(|s| !s.is_empty()) {
            select = select.filter(
                Condition::any()
                    .add(user::Column::Email.contains(term))
                    .add(user::Column::OrganizationName.contains(term)),
            );
        }

        let total = select.clone().count(self.db.as_ref()).await?;
        let users = select
            .order_by_asc(user::Column::Email)
            .offset(page.offset())
            .limit(page.limit())
            .all(self.db.as_ref())
            .await?
            .into_iter()
            .map(User::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((users, total))
    }

    async fn update(&self, updated: &User) -> Result<User, RepositoryError> {
        let mut model = self.model(updated.id).await?.into_active_model();
        model.first_name = Set(updated.first_name.clone());
        model.last_name = Set(updated.last_name.clone());
        model.organization_name = Set(updated.organization_name.clone());
        model.organization_type = Set(updated.organization_type.map(|t| t.code().to_string()));
        model.whatsapp_number = Set(updated.whatsapp_number.clone());
        model.is_active = Set(updated.is_active);
        model.is_staff = Set(updated.is_staff);

        let saved = model.update(self.db.as_ref()).await?;
        User::try_from(saved)
    }

    async fn touch_last_login(&self, id: i32) -> Result<(), RepositoryError> {
        let mut model = self.model(id).await?.into_active_model();
        model.last_login = Set(Some(Utc::now().fixed_offset()));
        model.update(self.db.as_ref()).await?;
        Ok(())
    }
}

impl TryFrom<user::Model> for User {
    type Error = RepositoryError;

    fn try_from(model: user::Model) -> Result<Self, Self::Error> {
        let organization_type = model
            .organization_type
            .as_deref()
            .map(str::parse)
            .transpose()
            .map_err(RepositoryError::Corrupt)?;

        Ok(Self {
            id: model.id,
            email: model.email,
            first_name: model.first_name,
            last_name: model.last_name,
            organization_name: model.organization_name,
            organization_type,
            whatsapp_number: model.whatsapp_number,
            is_active: model.is_active,
            is_staff: model.is_staff,
            is_superuser: model.is_superuser,
            date_joined: model.date_joined.into(),
            last_login: model.last_login.map(Into::into),
        })
    }
}

/// 令牌仓库实现
#[derive(Clone)]
pub struct TokenRepoImpl {
    db: Arc<DatabaseConnection>,
}

impl TokenRepoImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TokenRepository for TokenRepoImpl {
    async fn replace(&self, user_id: i32, digest: &str) -> Result<(), RepositoryError> {
        let txn = self.db.begin().await?;
        auth_token::Entity::delete_many()
            .filter(auth_token::Column::UserId.eq(user_id))
            .exec(&txn)
            .await?;
        auth_token::ActiveModel {
            digest: Set(digest.to_string()),
            user_id: Set(user_id),
            created_at: Set(Utc::now().fixed_offset()),
        }
        .insert(&txn)
        .await?;
        txn.commit().await?;
        Ok(())
    }

    async fn find_user_id(&self, digest: &str) -> Result<Option<i32>, RepositoryError> {
        let token = auth_token::Entity::find_by_id(digest.to_string())
            .one(self.db.as_ref())
            .await?;
        Ok(token.map(|t| t.user_id))
    }

    async fn revoke(&self, user_id: i32) -> Result<(), RepositoryError> {
        auth_token::Entity::delete_many()
            .filter(auth_token::Column::UserId.eq(user_id))
            .exec(self.db.as_ref())
            .await?;
        Ok(())
    }
}
