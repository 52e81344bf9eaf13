// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::page_response;
use crate::application::dto::pagination::{PageQuery, Paginated};
use crate::application::dto::program::{ProgramListQuery, ProgramPatchRequest, ProgramRequest};
use crate::application::dto::validated;
use crate::config::settings::PaginationSettings;
use crate::domain::models::program::Program;
use crate::domain::services::program_service::ProgramService;
use crate::presentation::errors::AppError;
use crate::presentation::extractors::caller::CurrentCaller;
use axum::extract::{OriginalUri, Path, Query};
use axum::{http::StatusCode, Extension, Json};
use std::sync::Arc;

/// 项目列表，支持 `title` 过滤与 `ordering=[-]start_date,[-]end_date`
pub async fn list_programs(
    CurrentCaller(caller): CurrentCaller,
    Extension(service): Extension<Arc<ProgramService>>,
    Extension(pagination): Extension<Arc<PaginationSettings>>,
    OriginalUri(uri): OriginalUri,
    Query(page): Query<PageQuery>,
    Query(query): Query<ProgramListQuery>,
) -> Result<Json<Paginated<Program>>, AppError> {
    let page = page.resolve(&pagination)?;
    let (programs, total) = service.list(caller, &query.into(), page).await?;
    page_response(programs, total, page, &uri)
}

pub async fn get_program(
    CurrentCaller(caller): CurrentCaller,
    Extension(service): Extension<Arc<ProgramService>>,
    Path(id): Path<i32>,
) -> Result<Json<Program>, AppError> {
    Ok(Json(service.get(caller, id).await?))
}

pub async fn create_program(
    CurrentCaller(caller): CurrentCaller,
    Extension(service): Extension<Arc<ProgramService>>,
    Json(request): Json<ProgramRequest>,
) -> Result<(StatusCode, Json<Program>), AppError> {
    let request = validated(request)?;
    let program = service.create(caller, request.into()).await?;
    Ok((StatusCode::CREATED, Json(program)))
}

pub async fn replace_program(
    CurrentCaller(caller): CurrentCaller,
    Extension(service): Extension<Arc<ProgramService>>,
    Path(id): Path<i32>,
    Json(request): Json<ProgramRequest>,
) -> Result<Json<Program>, AppError> {
    let request = validated(request)?;
    Ok(Json(service.update(caller, id, request.into()).await?))
}

pub async fn patch_program(
    CurrentCaller(caller): CurrentCaller,
    Extension(service): Extension<Arc<ProgramService>>,
    Path(id): Path<i32>,
    Json(request): Json<ProgramPatchRequest>,
) -> Result<Json<Program>, AppError> {
    let request = validated(request)?;
    Ok(Json(service.update(caller, id, request.into()).await?))
}

pub async fn delete_program(
    CurrentCaller(caller): CurrentCaller,
    Extension(service): Extension<Arc<ProgramService>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    service.delete(caller, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
