// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::page_response;
use crate::application::dto::pagination::{PageQuery, Paginated};
use crate::application::dto::social_link::{
    SocialLinkListQuery, SocialLinkPatchRequest, SocialLinkRequest,
};
use crate::application::dto::validated;
use crate::config::settings::PaginationSettings;
use crate::domain::models::social_link::SocialLink;
use crate::domain::services::social_link_service::{SocialLinkChanges, SocialLinkService};
use crate::presentation::errors::AppError;
use crate::presentation::extractors::caller::CurrentCaller;
use axum::extract::{OriginalUri, Path, Query};
use axum::{http::StatusCode, Extension, Json};
use std::sync::Arc;

pub async fn list_social_links(
    CurrentCaller(caller): CurrentCaller,
    Extension(service): Extension<Arc<SocialLinkService>>,
    Extension(pagination): Extension<Arc<PaginationSettings>>,
    OriginalUri(uri): OriginalUri,
    Query(page): Query<PageQuery>,
    Query(query): Query<SocialLinkListQuery>,
) -> Result<Json<Paginated<SocialLink>>, AppError> {
    let page = page.resolve(&pagination)?;
    let (links, total) = service.list(caller, query.profile, page).await?;
    page_response(links, total, page, &uri)
}

pub async fn get_social_link(
    CurrentCaller(caller): CurrentCaller,
    Extension(service): Extension<Arc<SocialLinkService>>,
    Path(id): Path<i32>,
) -> Result<Json<SocialLink>, AppError> {
    Ok(Json(service.get(caller, id).await?))
}

pub async fn create_social_link(
    CurrentCaller(caller): CurrentCaller,
    Extension(service): Extension<Arc<SocialLinkService>>,
    Json(request): Json<SocialLinkRequest>,
) -> Result<(StatusCode, Json<SocialLink>), AppError> {
    let request = validated(request)?;
    let platform = request.platform()?;
    let link = service
        .create(caller, request.profile, platform, &request.url)
        .await?;
    Ok((StatusCode::CREATED, Json(link)))
}

/// 整体替换社交链接，所有字段必填
pub async fn replace_social_link(
    CurrentCaller(caller): CurrentCaller,
    Extension(service): Extension<Arc<SocialLinkService>>,
    Path(id): Path<i32>,
    Json(request): Json<SocialLinkRequest>,
) -> Result<Json<SocialLink>, AppError> {
    let request = validated(request)?;
    let changes = SocialLinkChanges {
        profile: Some(request.profile),
        platform: Some(request.platform()?),
        url: Some(request.url),
    };
    Ok(Json(service.update(caller, id, changes).await?))
}

/// 部分修改社交链接
pub async fn update_social_link(
    CurrentCaller(caller): CurrentCaller,
    Extension(service): Extension<Arc<SocialLinkService>>,
    Path(id): Path<i32>,
    Json(request): Json<SocialLinkPatchRequest>,
) -> Result<Json<SocialLink>, AppError> {
    let changes: SocialLinkChanges = validated(request)?.try_into()?;
    Ok(Json(service.update(caller, id, changes).await?))
}

pub async fn delete_social_link(
    CurrentCaller(caller): CurrentCaller,
    Extension(service): Extension<Arc<SocialLinkService>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    service.delete(caller, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
