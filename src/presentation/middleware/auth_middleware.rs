// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::services::account_service::AccountService;
use crate::domain::services::visibility::Caller;
use crate::presentation::errors::AppError;
use crate::utils::errors::DomainError;
use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use tracing::debug;

/// Authorization 头的解析结果
#[derive(Debug, PartialEq, Eq)]
enum Credentials {
    /// 没有可识别的凭证
    Missing,
    /// 认证方案正确但格式错误
    Malformed,
    Token(String),
}

/// 解析 `Token <key>` 或 `Bearer <key>`，方案名不区分大小写
///
/// 其他认证方案按未登录处理
fn parse_credentials(headers: &HeaderMap) -> Credentials {
    let Some(value) = headers.get(header::AUTHORIZATION) else {
        return Credentials::Missing;
    };
    let Ok(value) = value.to_str() else {
        return Credentials::Malformed;
    };

    let mut parts = value.split_whitespace();
    let scheme = parts.next().unwrap_or_default();
    if !scheme.eq_ignore_ascii_case("token") && !scheme.eq_ignore_ascii_case("bearer") {
        return Credentials::Missing;
    }
    match (parts.next(), parts.next()) {
        (Some(key), None) => Credentials::Token(key.to_string()),
        _ => Credentials::Malformed,
    }
}

/// 认证中间件
///
/// 识别请求的调用者并写入请求扩展，没有凭证的请求以匿名身份继续
///
/// # 参数
///
/// * `accounts` - 账号服务
/// * `req` - HTTP请求
/// * `next` - 下一个中间件
///
/// # 返回值
///
/// * `Ok(Response)` - 后续处理的响应
/// * `Err(AppError)` - 令牌无效或用户已停用时返回 401
pub async fn auth_middleware(
    State(accounts): State<Arc<AccountService>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let caller = match parse_credentials(req.headers()) {
        Credentials::Missing => Caller::Anonymous,
        Credentials::Malformed => return Err(DomainError::InvalidToken.into()),
        Credentials::Token(key) => {
            let user = accounts.authenticate(&key).await?;
            debug!(user_id = user.id, "Authenticated request");
            req.extensions_mut().insert(user.clone());
            Caller::from_user(&user)
        }
    };

    req.extensions_mut().insert(caller);
    Ok(next.run(req).await)
}
