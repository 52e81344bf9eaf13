// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据传输对象模块
///
/// 定义 HTTP 请求体与查询参数，以及它们到领域类型的转换
pub mod admin;
pub mod auth;
pub mod pagination;
pub mod profile;
pub mod program;
pub mod rating;
pub mod social_link;

use crate::utils::errors::DomainError;
use validator::Validate;

/// 校验请求体，失败时转换为领域校验错误
pub fn validated<T: Validate>(dto: T) -> Result<T, DomainError> {
    dto.validate()
        .map_err(|errors| DomainError::Validation(errors.to_string()))?;
    Ok(dto)
}
