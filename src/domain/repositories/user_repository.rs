// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::page::PageRequest;
use crate::domain::models::user::{NewUser, User, UserQuery};
use crate::utils::errors::RepositoryError;
use async_trait::async_trait;

/// 用户仓库特质
///
/// 定义用户和登录令牌的数据访问接口
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 创建用户
    async fn create(&self, user: &NewUser) -> Result<User, RepositoryError>;
    /// 根据ID查找用户
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepositoryError>;
    /// 根据邮箱查找用户及其密码哈希
    async fn find_credentials(
        &self,
        email: &str,
    ) -> Result<Option<(User, String)>, RepositoryError>;
    /// 所有管理员
    async fn list_staff(&self) -> Result<Vec<User>, RepositoryError>;
    /// 分页查询用户
    async fn list(
        &self,
        query: &UserQuery,
        page: PageRequest,
    ) -> Result<(Vec<User>, u64), RepositoryError>;
    /// 更新用户资料和权限标志
    async fn update(&self, user: &User) -> Result<User, RepositoryError>;
    /// 记录最近登录时间
    async fn touch_last_login(&self, id: i32) -> Result<(), RepositoryError>;
}

/// 登录令牌仓库特质
///
/// 只保存令牌摘要，每个用户最多一个令牌
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// 为用户保存令牌摘要，替换已有令牌
    async fn replace(&self, user_id: i32, digest: &str) -> Result<(), RepositoryError>;
    /// 根据摘要查找用户ID
    async fn find_user_id(&self, digest: &str) -> Result<Option<i32>, RepositoryError>;
    /// 删除用户的令牌
    async fn revoke(&self, user_id: i32) -> Result<(), RepositoryError>;
}
