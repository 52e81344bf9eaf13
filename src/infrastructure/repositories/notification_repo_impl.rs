// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::notification::{AdminNotification, NotificationFilter};
use crate::domain::models::page::PageRequest;
use crate::domain::repositories::notification_repository::NotificationRepository;
use crate::infrastructure::database::entities::admin_notification;
use crate::utils::errors::RepositoryError;
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::*;
use std::sync::Arc;

/// 管理员通知仓库实现
#[derive(Clone)]
pub struct NotificationRepoImpl {
    db: Arc<DatabaseConnection>,
}

impl NotificationRepoImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl NotificationRepository for NotificationRepoImpl {
    async fn create(
        &self,
        title: &str,
        message: &str,
    ) -> Result<AdminNotification, RepositoryError> {
        let model = admin_notification::ActiveModel {
            title: Set(title.to_string()),
            message: Set(message.to_string()),
            created_at: Set(Utc::now().fixed_offset()),
            is_read: Set(false),
            ..Default::default()
        };
        Ok(model.insert(self.db.as_ref()).await?.into())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<AdminNotification>, RepositoryError> {
        let model = admin_notification::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn list(
        &self,
        filter: &NotificationFilter,
        page: PageRequest,
    ) -> Result<(Vec<AdminNotification>, u64), RepositoryError> {
        let mut query = admin_notification::Entity::find();
        if let Some(is_read) = filter.is_read {
            query = query.filter(admin_notification::Column::IsRead.eq(is_read));
        }
        if let Some(term) = filter.search.as_deref().filter(|s| !s.is_empty()) {
            query = query.filter(
                Condition::any()
                    .add(admin_notification::Column::Title.contains(term))
                    .add(admin_notification::Column::Message.contains(term)),
            );
        }

        let total = query.clone().count(self.db.as_ref()).await?;
        let notifications = query
            .order_by_desc(admin_notification::Column::CreatedAt)
            .order_by_desc(admin_notification::Column::Id)
            .offset(page.offset())
            .limit(page.limit())
            .all(self.db.as_ref())
            .await?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok((notifications, total))
    }

    async fn set_read(
        &self,
        id: i32,
        is_read: bool,
    ) -> Result<AdminNotification, RepositoryError> {
        let mut model = admin_notification::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .ok_or(RepositoryError::NotFound)?
            .into_active_model();
        model.is_read = Set(is_read);
        Ok(model.update(self.db.as_ref()).await?.into())
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let result = admin_notification::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await?;
        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

impl From<admin_notification::Model> for AdminNotification {
    fn from(model: admin_notification::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            message: model.message,
            created_at: model.created_at.into(),
            is_read: model.is_read,
        }
    }
}
