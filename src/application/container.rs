// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::services::account_service::AccountService;
use crate::domain::services::mailer::Mailer;
use crate::domain::services::moderation_service::ModerationService;
use crate::domain::services::notification_service::NotificationService;
use crate::domain::services::profile_service::ProfileService;
use crate::domain::services::program_service::ProgramService;
use crate::domain::services::rating_service::RatingService;
use crate::domain::services::social_link_service::SocialLinkService;
use crate::infrastructure::repositories::notification_repo_impl::NotificationRepoImpl;
use crate::infrastructure::repositories::profile_repo_impl::ProfileRepoImpl;
use crate::infrastructure::repositories::program_repo_impl::ProgramRepoImpl;
use crate::infrastructure::repositories::rating_repo_impl::RatingRepoImpl;
use crate::infrastructure::repositories::social_link_repo_impl::SocialLinkRepoImpl;
use crate::infrastructure::repositories::user_repo_impl::{TokenRepoImpl, UserRepoImpl};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// 应用服务集合
///
/// 把仓库实现和邮件发送器装配成领域服务，供路由层注入
#[derive(Clone)]
pub struct AppServices {
    pub accounts: Arc<AccountService>,
    pub profiles: Arc<ProfileService>,
    pub programs: Arc<ProgramService>,
    pub social_links: Arc<SocialLinkService>,
    pub ratings: Arc<RatingService>,
    pub moderation: Arc<ModerationService>,
    pub notifications: Arc<NotificationService>,
}

impl AppServices {
    /// 创建服务集合
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    /// * `mailer` - 邮件发送器
    pub fn new(db: Arc<DatabaseConnection>, mailer: Arc<dyn Mailer>) -> Self {
        let users = Arc::new(UserRepoImpl::new(db.clone()));
        let tokens = Arc::new(TokenRepoImpl::new(db.clone()));
        let profile_repo = Arc::new(ProfileRepoImpl::new(db.clone()));
        let program_repo = Arc::new(ProgramRepoImpl::new(db.clone()));
        let link_repo = Arc::new(SocialLinkRepoImpl::new(db.clone()));
        let rating_repo = Arc::new(RatingRepoImpl::new(db.clone()));
        let notification_repo = Arc::new(NotificationRepoImpl::new(db));

        let notifications = Arc::new(NotificationService::new(
            users.clone(),
            notification_repo,
            mailer,
        ));

        Self {
            accounts: Arc::new(AccountService::new(users, tokens)),
            profiles: Arc::new(ProfileService::new(
                profile_repo.clone(),
                notifications.clone(),
            )),
            programs: Arc::new(ProgramService::new(
                program_repo.clone(),
                profile_repo.clone(),
                notifications.clone(),
            )),
            social_links: Arc::new(SocialLinkService::new(link_repo, profile_repo.clone())),
            ratings: Arc::new(RatingService::new(rating_repo, profile_repo.clone())),
            moderation: Arc::new(ModerationService::new(
                profile_repo,
                program_repo,
                notifications.clone(),
            )),
            notifications,
        }
    }
}
