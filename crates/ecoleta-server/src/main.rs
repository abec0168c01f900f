// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Ecoleta API server binary.
//!
//! Connects to PostgreSQL, runs migrations (schema and seeded items) and
//! serves the API until Ctrl+C or SIGTERM.

use std::{error::Error, sync::Arc};

use ecoleta_core::{ImageUrls, PointService};
use ecoleta_server::{Config, DiskImageStore, PgStore, app};
use sqlx::PgPool;
use tokio::{net::TcpListener, signal};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("ecoleta_server=debug,tower_http=debug"))
        )
        .init();

    let config = Config::from_env()?;

    info!("Connecting to database...");
    let pool = PgPool::connect(&config.database_url).await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let images = DiskImageStore::open(&config.upload_dir).await?;
    let service = PointService::new(
        PgStore::new(pool),
        images,
        ImageUrls::new(config.public_url.clone())
    );
    let router = app(Arc::new(service), &config.upload_dir, config.max_upload_bytes);

    let listener = TcpListener::bind(config.bind).await?;
    info!("Listening on http://{}", config.bind);
    info!("Swagger UI: {}/swagger-ui", config.public_url);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
