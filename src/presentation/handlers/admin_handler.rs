// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::page_response;
use crate::application::dto::admin::{
    ModerationRequest, ModerationResponse, NotificationListQuery, NotificationPatchRequest,
};
use crate::application::dto::auth::{UserFlagsRequest, UserListQuery};
use crate::application::dto::pagination::{PageQuery, Paginated};
use crate::config::settings::PaginationSettings;
use crate::domain::models::notification::{AdminNotification, ContentKind};
use crate::domain::models::user::User;
use crate::domain::services::account_service::AccountService;
use crate::domain::services::moderation_service::{ModerationService, PendingCounts};
use crate::domain::services::notification_service::NotificationService;
use crate::presentation::errors::AppError;
use crate::presentation::extractors::caller::CurrentCaller;
use axum::extract::{OriginalUri, Path, Query};
use axum::{http::StatusCode, Extension, Json};
use std::sync::Arc;

pub async fn approve_profiles(
    CurrentCaller(caller): CurrentCaller,
    Extension(service): Extension<Arc<ModerationService>>,
    Json(request): Json<ModerationRequest>,
) -> Result<Json<ModerationResponse>, AppError> {
    let outcome = service
        .approve(caller, ContentKind::Profile, &request.ids)
        .await?;
    Ok(Json(outcome.into()))
}

pub async fn reject_profiles(
    CurrentCaller(caller): CurrentCaller,
    Extension(service): Extension<Arc<ModerationService>>,
    Json(request): Json<ModerationRequest>,
) -> Result<Json<ModerationResponse>, AppError> {
    let outcome = service
        .reject(
            caller,
            ContentKind::Profile,
            &request.ids,
            request.reason.as_deref(),
        )
        .await?;
    Ok(Json(outcome.into()))
}

pub async fn approve_programs(
    CurrentCaller(caller): CurrentCaller,
    Extension(service): Extension<Arc<ModerationService>>,
    Json(request): Json<ModerationRequest>,
) -> Result<Json<ModerationResponse>, AppError> {
    let outcome = service
        .approve(caller, ContentKind::Program, &request.ids)
        .await?;
    Ok(Json(outcome.into()))
}

pub async fn reject_programs(
    CurrentCaller(caller): CurrentCaller,
    Extension(service): Extension<Arc<ModerationService>>,
    Json(request): Json<ModerationRequest>,
) -> Result<Json<ModerationResponse>, AppError> {
    let outcome = service
        .reject(
            caller,
            ContentKind::Program,
            &request.ids,
            request.reason.as_deref(),
        )
        .await?;
    Ok(Json(outcome.into()))
}

/// 待审核的档案与项目数量
pub async fn pending(
    CurrentCaller(caller): CurrentCaller,
    Extension(service): Extension<Arc<ModerationService>>,
) -> Result<Json<PendingCounts>, AppError> {
    Ok(Json(service.pending_counts(caller).await?))
}

/// 后台通知列表，最新的在前
pub async fn list_notifications(
    CurrentCaller(caller): CurrentCaller,
    Extension(service): Extension<Arc<NotificationService>>,
    Extension(pagination): Extension<Arc<PaginationSettings>>,
    OriginalUri(uri): OriginalUri,
    Query(page): Query<PageQuery>,
    Query(query): Query<NotificationListQuery>,
) -> Result<Json<Paginated<AdminNotification>>, AppError> {
    let page = page.resolve(&pagination)?;
    let (notifications, total) = service.list(caller, &query.into(), page).await?;
    page_response(notifications, total, page, &uri)
}

pub async fn get_notification(
    CurrentCaller(caller): CurrentCaller,
    Extension(service): Extension<Arc<NotificationService>>,
    Path(id): Path<i32>,
) -> Result<Json<AdminNotification>, AppError> {
    Ok(Json(service.get(caller, id).await?))
}

pub async fn patch_notification(
    CurrentCaller(caller): CurrentCaller,
    Extension(service): Extension<Arc<NotificationService>>,
    Path(id): Path<i32>,
    Json(request): Json<NotificationPatchRequest>,
) -> Result<Json<AdminNotification>, AppError> {
    Ok(Json(service.mark_read(caller, id, request.is_read).await?))
}

pub async fn delete_notification(
    CurrentCaller(caller): CurrentCaller,
    Extension(service): Extension<Arc<NotificationService>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    service.delete(caller, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// 账号列表，支持 `is_active`、`is_staff` 与 `search`
pub async fn list_users(
    CurrentCaller(caller): CurrentCaller,
    Extension(accounts): Extension<Arc<AccountService>>,
    Extension(pagination): Extension<Arc<PaginationSettings>>,
    OriginalUri(uri): OriginalUri,
    Query(page): Query<PageQuery>,
    Query(query): Query<UserListQuery>,
) -> Result<Json<Paginated<User>>, AppError> {
    let page = page.resolve(&pagination)?;
    let (users, total) = accounts.list_users(caller, &query.into(), page).await?;
    page_response(users, total, page, &uri)
}

pub async fn get_user(
    CurrentCaller(caller): CurrentCaller,
    Extension(accounts): Extension<Arc<AccountService>>,
    Path(id): Path<i32>,
) -> Result<Json<User>, AppError> {
    Ok(Json(accounts.get_user(caller, id).await?))
}

/// 启用、停用账号或修改管理员标志
pub async fn patch_user(
    CurrentCaller(caller): CurrentCaller,
    Extension(accounts): Extension<Arc<AccountService>>,
    Path(id): Path<i32>,
    Json(request): Json<UserFlagsRequest>,
) -> Result<Json<User>, AppError> {
    Ok(Json(accounts.set_flags(caller, id, request.into()).await?))
}
