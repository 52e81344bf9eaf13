// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::page_response;
use crate::application::dto::pagination::{PageQuery, Paginated};
use crate::application::dto::profile::{ProfileListQuery, ProfileRequest};
use crate::application::dto::validated;
use crate::config::settings::PaginationSettings;
use crate::domain::models::profile::ProfileWithOwner;
use crate::domain::services::profile_service::ProfileService;
use crate::presentation::errors::AppError;
use crate::presentation::extractors::caller::CurrentCaller;
use axum::extract::{OriginalUri, Path, Query};
use axum::{http::StatusCode, Extension, Json};
use std::sync::Arc;

/// 档案列表，支持 `state`、`city` 过滤与 `ordering` 排序
pub async fn list_profiles(
    CurrentCaller(caller): CurrentCaller,
    Extension(service): Extension<Arc<ProfileService>>,
    Extension(pagination): Extension<Arc<PaginationSettings>>,
    OriginalUri(uri): OriginalUri,
    Query(page): Query<PageQuery>,
    Query(query): Query<ProfileListQuery>,
) -> Result<Json<Paginated<ProfileWithOwner>>, AppError> {
    let page = page.resolve(&pagination)?;
    let (profiles, total) = service.list(caller, &query.into(), page).await?;
    page_response(profiles, total, page, &uri)
}

pub async fn get_profile(
    CurrentCaller(caller): CurrentCaller,
    Extension(service): Extension<Arc<ProfileService>>,
    Path(id): Path<i32>,
) -> Result<Json<ProfileWithOwner>, AppError> {
    Ok(Json(service.get(caller, id).await?))
}

/// 为当前用户创建档案
pub async fn create_profile(
    CurrentCaller(caller): CurrentCaller,
    Extension(service): Extension<Arc<ProfileService>>,
    Json(request): Json<ProfileRequest>,
) -> Result<(StatusCode, Json<ProfileWithOwner>), AppError> {
    let request = validated(request)?;
    let profile = service.create(caller, request.into()).await?;
    Ok((StatusCode::CREATED, Json(profile)))
}

pub async fn replace_profile(
    CurrentCaller(caller): CurrentCaller,
    Extension(service): Extension<Arc<ProfileService>>,
    Path(id): Path<i32>,
    Json(request): Json<ProfileRequest>,
) -> Result<Json<ProfileWithOwner>, AppError> {
    let request = validated(request)?;
    Ok(Json(service.update(caller, id, request.into(), false).await?))
}

pub async fn patch_profile(
    CurrentCaller(caller): CurrentCaller,
    Extension(service): Extension<Arc<ProfileService>>,
    Path(id): Path<i32>,
    Json(request): Json<ProfileRequest>,
) -> Result<Json<ProfileWithOwner>, AppError> {
    let request = validated(request)?;
    Ok(Json(service.update(caller, id, request.into(), true).await?))
}

pub async fn delete_profile(
    CurrentCaller(caller): CurrentCaller,
    Extension(service): Extension<Arc<ProfileService>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    service.delete(caller, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
