// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::container::AppServices;
use crate::config::settings::PaginationSettings;
use crate::presentation::handlers::{
    admin_handler, auth_handler, profile_handler, program_handler, rating_handler,
    social_link_handler,
};
use crate::presentation::middleware::auth_middleware::auth_middleware;
use axum::{
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;

/// 创建应用路由
///
/// # 参数
///
/// * `services` - 装配好的领域服务
/// * `pagination` - 分页配置
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes(services: AppServices, pagination: PaginationSettings) -> Router {
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/version", get(version));

    let api_routes = Router::new()
        .route(
            "/api/profiles",
            get(profile_handler::list_profiles).post(profile_handler::create_profile),
        )
        .route(
            "/api/profiles/{id}",
            get(profile_handler::get_profile)
                .put(profile_handler::replace_profile)
                .patch(profile_handler::patch_profile)
                .delete(profile_handler::delete_profile),
        )
        .route(
            "/api/programs",
            get(program_handler::list_programs).post(program_handler::create_program),
        )
        .route(
            "/api/programs/{id}",
            get(program_handler::get_program)
                .put(program_handler::replace_program)
                .patch(program_handler::patch_program)
                .delete(program_handler::delete_program),
        )
        .route(
            "/api/social-links",
            get(social_link_handler::list_social_links)
                .post(social_link_handler::create_social_link),
        )
        .route(
            "/api/social-links/{id}",
            get(social_link_handler::get_social_link)
                .put(social_link_handler::replace_social_link)
                .patch(social_link_handler::update_social_link)
                .delete(social_link_handler::delete_social_link),
        )
        .route(
            "/api/ratings",
            get(rating_handler::list_ratings).post(rating_handler::create_rating),
        )
        .route(
            "/api/ratings/{id}",
            get(rating_handler::get_rating)
                .put(rating_handler::update_rating)
                .patch(rating_handler::update_rating)
                .delete(rating_handler::delete_rating),
        );

    let auth_routes = Router::new()
        .route("/auth/users", post(auth_handler::register))
        .route(
            "/auth/users/me",
            get(auth_handler::me).patch(auth_handler::update_me),
        )
        .route("/auth/token/login", post(auth_handler::login))
        .route("/auth/token/logout", post(auth_handler::logout));

    let admin_routes = Router::new()
        .route(
            "/admin/profiles/approve",
            post(admin_handler::approve_profiles),
        )
        .route("/admin/profiles/reject", post(admin_handler::reject_profiles))
        .route(
            "/admin/programs/approve",
            post(admin_handler::approve_programs),
        )
        .route("/admin/programs/reject", post(admin_handler::reject_programs))
        .route("/admin/pending", get(admin_handler::pending))
        .route(
            "/admin/notifications",
            get(admin_handler::list_notifications),
        )
        .route(
            "/admin/notifications/{id}",
            get(admin_handler::get_notification)
                .patch(admin_handler::patch_notification)
                .delete(admin_handler::delete_notification),
        )
        .route("/admin/users", get(admin_handler::list_users))
        .route(
            "/admin/users/{id}",
            get(admin_handler::get_user).patch(admin_handler::patch_user),
        );

    let protected_routes = Router::new()
        .merge(api_routes)
        .merge(auth_routes)
        .merge(admin_routes)
        .layer(axum::middleware::from_fn_with_state(
            services.accounts.clone(),
            auth_middleware,
        ));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(Extension(services.accounts))
        .layer(Extension(services.profiles))
        .layer(Extension(services.programs))
        .layer(Extension(services.social_links))
        .layer(Extension(services.ratings))
        .layer(Extension(services.moderation))
        .layer(Extension(services.notifications))
        .layer(Extension(Arc::new(pagination)))
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
