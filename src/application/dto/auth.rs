// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::user::{OrganizationType, UserQuery};
use crate::domain::services::account_service::{AccountChanges, AccountFlags, Registration};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 注册请求
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Enter a valid email address."))]
    pub email: String,
    pub password: String,
    pub re_password: String,
    #[serde(default)]
    #[validate(length(max = 150))]
    pub first_name: String,
    #[serde(default)]
    #[validate(length(max = 150))]
    pub last_name: String,
    #[validate(length(min = 1, max = 255))]
    pub organization_name: String,
    pub organization_type: Option<OrganizationType>,
    #[validate(length(max = 15))]
    pub whatsapp_number: Option<String>,
}

impl From<RegisterRequest> for Registration {
    fn from(req: RegisterRequest) -> Self {
        Self {
            email: req.email,
            password: req.password,
            re_password: req.re_password,
            first_name: req.first_name,
            last_name: req.last_name,
            organization_name: req.organization_name,
            organization_type: req.organization_type,
            whatsapp_number: req.whatsapp_number,
        }
    }
}

/// 登录请求
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// 登录成功返回的令牌
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub auth_token: String,
}

/// 修改当前用户资料
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateMeRequest {
    #[validate(length(max = 150))]
    pub first_name: Option<String>,
    #[validate(length(max = 150))]
    pub last_name: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub organization_name: Option<String>,
    pub organization_type: Option<OrganizationType>,
    #[validate(length(max = 15))]
    pub whatsapp_number: Option<String>,
}

impl From<UpdateMeRequest> for AccountChanges {
    fn from(req: UpdateMeRequest) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            organization_name: req.organization_name,
            organization_type: req.organization_type,
            whatsapp_number: req.whatsapp_number,
        }
    }
}

/// 管理员修改账号标志
#[derive(Debug, Default, Deserialize)]
pub struct UserFlagsRequest {
    pub is_active: Option<bool>,
    pub is_staff: Option<bool>,
}

impl From<UserFlagsRequest> for AccountFlags {
    fn from(req: UserFlagsRequest) -> Self {
        Self {
            is_active: req.is_active,
            is_staff: req.is_staff,
        }
    }
}

/// 账号列表过滤参数
#[derive(Debug, Default, Deserialize)]
pub struct UserListQuery {
    pub is_active: Option<bool>,
    pub is_staff: Option<bool>,
    pub search: Option<String>,
}

impl From<UserListQuery> for UserQuery {
    fn from(query: UserListQuery) -> Self {
        Self {
            is_active: query.is_active,
            is_staff: query.is_staff,
            search: query.search,
        }
    }
}
