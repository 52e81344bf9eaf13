// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 中间件模块
///
/// 认证中间件解析 `Authorization` 头并把调用者写入请求扩展
pub mod auth_middleware;
