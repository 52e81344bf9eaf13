// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 请求处理器模块
///
/// 每个处理器从请求中取出调用者和参数，交给对应的领域服务
pub mod admin_handler;
pub mod auth_handler;
pub mod profile_handler;
pub mod program_handler;
pub mod rating_handler;
pub mod social_link_handler;

use crate::application::dto::pagination::Paginated;
use crate::domain::models::page::PageRequest;
use crate::presentation::errors::AppError;
use crate::utils::errors::DomainError;
use axum::http::Uri;
use axum::Json;

/// 组装分页响应，页码超出范围时返回 404
pub(crate) fn page_response<T>(
    results: Vec<T>,
    total: u64,
    page: PageRequest,
    uri: &Uri,
) -> Result<Json<Paginated<T>>, AppError> {
    if page.is_out_of_range(total) {
        return Err(DomainError::InvalidPage.into());
    }
    Ok(Json(Paginated::new(
        results,
        total,
        page,
        uri.path(),
        uri.query(),
    )))
}
