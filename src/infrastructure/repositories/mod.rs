// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库实现模块
///
/// 基于 SeaORM 实现领域层定义的仓库接口
pub mod notification_repo_impl;
pub mod profile_repo_impl;
pub mod program_repo_impl;
pub mod rating_repo_impl;
mod scope;
pub mod social_link_repo_impl;
pub mod user_repo_impl;
