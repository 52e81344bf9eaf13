// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::page_response;
use crate::application::dto::pagination::{PageQuery, Paginated};
use crate::application::dto::rating::{RatingListQuery, RatingPatchRequest, RatingRequest};
use crate::application::dto::validated;
use crate::config::settings::PaginationSettings;
use crate::domain::models::rating::Rating;
use crate::domain::services::rating_service::RatingService;
use crate::presentation::errors::AppError;
use crate::presentation::extractors::caller::CurrentCaller;
use axum::extract::{OriginalUri, Path, Query};
use axum::{http::StatusCode, Extension, Json};
use std::sync::Arc;

pub async fn list_ratings(
    CurrentCaller(caller): CurrentCaller,
    Extension(service): Extension<Arc<RatingService>>,
    Extension(pagination): Extension<Arc<PaginationSettings>>,
    OriginalUri(uri): OriginalUri,
    Query(page): Query<PageQuery>,
    Query(query): Query<RatingListQuery>,
) -> Result<Json<Paginated<Rating>>, AppError> {
    let page = page.resolve(&pagination)?;
    let (ratings, total) = service.list(caller, &query.into(), page).await?;
    page_response(ratings, total, page, &uri)
}

pub async fn get_rating(
    CurrentCaller(caller): CurrentCaller,
    Extension(service): Extension<Arc<RatingService>>,
    Path(id): Path<i32>,
) -> Result<Json<Rating>, AppError> {
    Ok(Json(service.get(caller, id).await?))
}

/// 以当前用户身份评分
pub async fn create_rating(
    CurrentCaller(caller): CurrentCaller,
    Extension(service): Extension<Arc<RatingService>>,
    Json(request): Json<RatingRequest>,
) -> Result<(StatusCode, Json<Rating>), AppError> {
    let request = validated(request)?;
    let rating = service
        .create(caller, request.rated_profile, request.rating, request.comment)
        .await?;
    Ok((StatusCode::CREATED, Json(rating)))
}

pub async fn update_rating(
    CurrentCaller(caller): CurrentCaller,
    Extension(service): Extension<Arc<RatingService>>,
    Path(id): Path<i32>,
    Json(request): Json<RatingPatchRequest>,
) -> Result<Json<Rating>, AppError> {
    let request = validated(request)?;
    Ok(Json(
        service
            .update(caller, id, request.rating, request.comment)
            .await?,
    ))
}

pub async fn delete_rating(
    CurrentCaller(caller): CurrentCaller,
    Extension(service): Extension<Arc<RatingService>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    service.delete(caller, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
