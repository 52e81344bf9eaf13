// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use eso_directory::application::container::AppServices;
use eso_directory::config::settings::Settings;
use eso_directory::infrastructure::database::connection;
use eso_directory::infrastructure::metrics;
use eso_directory::infrastructure::services::build_mailer;
use eso_directory::presentation::routes;
use eso_directory::utils::telemetry;
use migration::{Migrator, MigratorTrait};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting eso-directory...");

    // 2. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");

    metrics::init_metrics(&settings.metrics);

    // 3. Connect to database
    let db = connection::create_pool(&settings.database).await?;
    let db = Arc::new(db);
    info!("Database connection established");

    info!("Running database migrations...");
    Migrator::up(db.as_ref(), None).await?;
    info!("Database migrations applied");

    // 4. Wire services
    let mailer = build_mailer(&settings.email)?;
    let services = AppServices::new(db.clone(), mailer);

    match (
        &settings.bootstrap.admin_email,
        &settings.bootstrap.admin_password,
    ) {
        (Some(email), Some(password)) => {
            services.accounts.ensure_superuser(email, password).await?;
        }
        (Some(_), None) | (None, Some(_)) => {
            warn!("Bootstrap admin needs both admin_email and admin_password, skipping");
        }
        (None, None) => {}
    }

    // 5. Start HTTP server
    let app = routes::routes(services, settings.pagination.clone())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
