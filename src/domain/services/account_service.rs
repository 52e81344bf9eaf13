// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::page::PageRequest;
use crate::domain::models::user::{normalize_email, NewUser, OrganizationType, User, UserQuery};
use crate::domain::repositories::user_repository::{TokenRepository, UserRepository};
use crate::domain::services::password::{check_password_strength, hash_password, verify_password};
use crate::domain::services::visibility::Caller;
use crate::utils::errors::{DomainError, RepositoryError};
use sha2::{Digest, Sha256};
use std::sync::Arc;
use tracing::{info, warn};

/// 注册请求
#[derive(Debug, Clone)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub re_password: String,
    pub first_name: String,
    pub last_name: String,
    pub organization_name: String,
    pub organization_type: Option<OrganizationType>,
    pub whatsapp_number: Option<String>,
}

/// 用户自己可修改的资料
#[derive(Debug, Clone, Default)]
pub struct AccountChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub organization_name: Option<String>,
    pub organization_type: Option<OrganizationType>,
    pub whatsapp_number: Option<String>,
}

/// 管理员可修改的账号标志
#[derive(Debug, Clone, Copy, Default)]
pub struct AccountFlags {
    pub is_active: Option<bool>,
    pub is_staff: Option<bool>,
}

/// 生成新的登录令牌（40 位十六进制）
pub fn generate_token() -> String {
    let bytes: [u8; 20] = rand::random();
    hex::encode(bytes)
}

/// 令牌摘要，数据库中只保存摘要
pub fn token_digest(token: &str) -> String {
    hex::encode(Sha256::digest(token.as_bytes()))
}

/// 账号服务
///
/// 处理注册、登录、令牌认证以及管理员对账号的维护
pub struct AccountService {
    users: Arc<dyn UserRepository>,
    tokens: Arc<dyn TokenRepository>,
}

impl AccountService {
    pub fn new(users: Arc<dyn UserRepository>, tokens: Arc<dyn TokenRepository>) -> Self {
        Self { users, tokens }
    }

    /// 注册新账号
    pub async fn register(&self, registration: Registration) -> Result<User, DomainError> {
        if registration.password != registration.re_password {
            return Err(DomainError::Validation(
                "The two password fields didn't match.".to_string(),
            ));
        }
        let problems = check_password_strength(&registration.password);
        if !problems.is_empty() {
            return Err(DomainError::Validation(problems.join(" ")));
        }

        let password_hash = hash_password(&registration.password)
            .map_err(|e| DomainError::Validation(e.to_string()))?;

        let new_user = NewUser {
            email: normalize_email(&registration.email),
            password_hash,
            first_name: registration.first_name,
            last_name: registration.last_name,
            organization_name: registration.organization_name,
            organization_type: registration.organization_type,
            whatsapp_number: registration.whatsapp_number,
            is_staff: false,
            is_superuser: false,
        };

        let user = self.users.create(&new_user).await.map_err(|e| match e {
            RepositoryError::AlreadyExists(_) => {
                DomainError::Conflict("user with this email already exists.".to_string())
            }
            other => other.into(),
        })?;

        info!(user_id = user.id, "Registered new account");
        Ok(user)
    }

    /// 邮箱密码登录，返回新令牌
    ///
    /// 每次登录都会替换该用户之前的令牌
    pub async fn login(&self, email: &str, password: &str) -> Result<(String, User), DomainError> {
        let invalid =
            || DomainError::Validation("Unable to log in with provided credentials.".to_string());

        let (user, hash) = self
            .users
            .find_credentials(&normalize_email(email))
            .await?
            .ok_or_else(invalid)?;

        let matches = verify_password(&hash, password).unwrap_or_else(|e| {
            warn!(user_id = user.id, error = %e, "Stored password hash is unreadable");
            false
        });
        if !matches || !user.is_active {
            return Err(invalid());
        }

        let token = generate_token();
        self.tokens.replace(user.id, &token_digest(&token)).await?;
        self.users.touch_last_login(user.id).await?;

        info!(user_id = user.id, "User logged in");
        Ok((token, user))
    }

    /// 注销，删除用户的令牌
    pub async fn logout(&self, caller: Caller) -> Result<(), DomainError> {
        let user_id = caller.require_authenticated()?;
        self.tokens.revoke(user_id).await?;
        Ok(())
    }

    /// 根据令牌识别用户
    pub async fn authenticate(&self, token: &str) -> Result<User, DomainError> {
        let user_id = self
            .tokens
            .find_user_id(&token_digest(token))
            .await?
            .ok_or(DomainError::InvalidToken)?;

        match self.users.find_by_id(user_id).await? {
            Some(user) if user.is_active => Ok(user),
            _ => Err(DomainError::InvalidToken),
        }
    }

    /// 当前登录用户
    pub async fn me(&self, caller: Caller) -> Result<User, DomainError> {
        let user_id = caller.require_authenticated()?;
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::NotFound)
    }

    /// 修改当前用户的资料
    pub async fn update_me(
        &self,
        caller: Caller,
        changes: AccountChanges,
    ) -> Result<User, DomainError> {
        let mut user = self.me(caller).await?;
        if let Some(first_name) = changes.first_name {
            user.first_name = first_name;
        }
        if let Some(last_name) = changes.last_name {
            user.last_name = last_name;
        }
        if let Some(organization_name) = changes.organization_name {
            user.organization_name = organization_name;
        }
        if changes.organization_type.is_some() {
            user.organization_type = changes.organization_type;
        }
        if changes.whatsapp_number.is_some() {
            user.whatsapp_number = changes.whatsapp_number;
        }
        Ok(self.users.update(&user).await?)
    }

    /// 分页查询账号，仅管理员
    pub async fn list_users(
        &self,
        caller: Caller,
        query: &UserQuery,
        page: PageRequest,
    ) -> Result<(Vec<User>, u64), DomainError> {
        caller.require_staff()?;
        Ok(self.users.list(query, page).await?)
    }

    pub async fn get_user(&self, caller: Caller, id: i32) -> Result<User, DomainError> {
        caller.require_staff()?;
        self.users.find_by_id(id).await?.ok_or(DomainError::NotFound)
    }

    /// 修改账号的启用与管理员标志，仅管理员
    ///
    /// 管理员不能停用或降级自己
    pub async fn set_flags(
        &self,
        caller: Caller,
        id: i32,
        flags: AccountFlags,
    ) -> Result<User, DomainError> {
        let staff_id = caller.require_staff()?;
        if staff_id == id && (flags.is_active == Some(false) || flags.is_staff == Some(false)) {
            return Err(DomainError::Validation(
                "You cannot deactivate or demote your own account.".to_string(),
            ));
        }

        let mut user = self.users.find_by_id(id).await?.ok_or(DomainError::NotFound)?;
        if let Some(is_active) = flags.is_active {
            user.is_active = is_active;
        }
        if let Some(is_staff) = flags.is_staff {
            user.is_staff = is_staff;
        }
        let user = self.users.update(&user).await?;
        if !user.is_active {
            self.tokens.revoke(user.id).await?;
        }

        info!(
            user_id = user.id,
            changed_by = staff_id,
            is_active = user.is_active,
            is_staff = user.is_staff,
            "Account flags updated"
        );
        Ok(user)
    }

    /// 确保存在超级管理员账号，已存在时不做修改
    ///
    /// # 返回值
    ///
    /// * `Ok(true)` - 新建了账号
    /// * `Ok(false)` - 账号已存在
    pub async fn ensure_superuser(&self, email: &str, password: &str) -> Result<bool, DomainError> {
        let email = normalize_email(email);
        if self.users.find_credentials(&email).await?.is_some() {
            return Ok(false);
        }

        let password_hash =
            hash_password(password).map_err(|e| DomainError::Validation(e.to_string()))?;
        let user = self
            .users
            .create(&NewUser {
                email,
                password_hash,
                first_name: String::new(),
                last_name: String::new(),
                organization_name: String::new(),
                organization_type: None,
                whatsapp_number: None,
                is_staff: true,
                is_superuser: true,
            })
            .await?;

        info!(user_id = user.id, "Created bootstrap superuser");
        Ok(true)
    }
}
