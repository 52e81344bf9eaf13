// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::auth::{LoginRequest, RegisterRequest, TokenResponse, UpdateMeRequest};
use crate::application::dto::validated;
use crate::domain::models::user::User;
use crate::domain::services::account_service::AccountService;
use crate::presentation::errors::AppError;
use crate::presentation::extractors::caller::CurrentCaller;
use axum::{http::StatusCode, Extension, Json};
use std::sync::Arc;

/// 注册新账号
pub async fn register(
    Extension(accounts): Extension<Arc<AccountService>>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<User>), AppError> {
    let request = validated(request)?;
    let user = accounts.register(request.into()).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// 邮箱密码登录，返回令牌
pub async fn login(
    Extension(accounts): Extension<Arc<AccountService>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let (auth_token, _user) = accounts.login(&request.email, &request.password).await?;
    Ok(Json(TokenResponse { auth_token }))
}

pub async fn logout(
    CurrentCaller(caller): CurrentCaller,
    Extension(accounts): Extension<Arc<AccountService>>,
) -> Result<StatusCode, AppError> {
    accounts.logout(caller).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn me(
    CurrentCaller(caller): CurrentCaller,
    Extension(accounts): Extension<Arc<AccountService>>,
) -> Result<Json<User>, AppError> {
    Ok(Json(accounts.me(caller).await?))
}

pub async fn update_me(
    CurrentCaller(caller): CurrentCaller,
    Extension(accounts): Extension<Arc<AccountService>>,
    Json(request): Json<UpdateMeRequest>,
) -> Result<Json<User>, AppError> {
    let request = validated(request)?;
    Ok(Json(accounts.update_me(caller, request.into()).await?))
}
