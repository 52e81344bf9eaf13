// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::notification::{AdminNotification, NotificationFilter};
use crate::domain::models::page::PageRequest;
use crate::utils::errors::RepositoryError;
use async_trait::async_trait;

/// 管理后台通知仓库特质
#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// 追加一条通知
    async fn create(&self, title: &str, message: &str)
        -> Result<AdminNotification, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<AdminNotification>, RepositoryError>;
    /// 按创建时间倒序分页查询
    async fn list(
        &self,
        filter: &NotificationFilter,
        page: PageRequest,
    ) -> Result<(Vec<AdminNotification>, u64), RepositoryError>;
    async fn set_read(&self, id: i32, is_read: bool)
        -> Result<AdminNotification, RepositoryError>;
    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
}
