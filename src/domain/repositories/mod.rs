// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 该模块定义了领域层的仓库接口，遵循依赖倒置原则。
/// 具体实现由基础设施层提供。
///
/// 包含的仓库接口：
/// - 用户与令牌仓库（user_repository）
/// - 档案仓库（profile_repository）与项目仓库（program_repository）
/// - 社交链接仓库（social_link_repository）与评分仓库（rating_repository）
/// - 管理员通知仓库（notification_repository）
pub mod notification_repository;
pub mod profile_repository;
pub mod program_repository;
pub mod rating_repository;
pub mod social_link_repository;
pub mod user_repository;
