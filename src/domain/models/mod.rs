// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 用户（user）：以邮箱登录的 ESO 账号
/// - 档案（profile）：组织的公开档案，需要审核
/// - 项目（program）：档案名下的项目，单独审核
/// - 社交链接（social_link）与评分（rating）
/// - 管理后台通知（notification）
/// - 分页请求（page）
pub mod notification;
pub mod page;
pub mod profile;
pub mod program;
pub mod rating;
pub mod social_link;
pub mod user;
