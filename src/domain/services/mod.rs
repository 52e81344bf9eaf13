// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 该模块包含目录服务的业务规则，协调仓库与邮件发送完成业务操作。
///
/// 包含的服务：
/// - 可见性（visibility）：调用者身份与查询可见范围
/// - 账号服务（account_service）：注册、登录、令牌认证和账号维护
/// - 档案服务（profile_service）与项目服务（program_service）
/// - 社交链接服务（social_link_service）与评分服务（rating_service）
/// - 审核服务（moderation_service）：批量审核并通知相关人员
/// - 通知服务（notification_service）：管理员通知和审核结果邮件
pub mod account_service;
pub mod mailer;
pub mod moderation_service;
pub mod notification_service;
pub mod password;
pub mod profile_service;
pub mod program_service;
pub mod rating_service;
pub mod social_link_service;
pub mod visibility;
