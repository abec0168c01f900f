// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Ecoleta REST backend.
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | GET | `/items` | [`handlers::items::list_items`] |
//! | GET | `/points` | [`handlers::points::list_points`] |
//! | GET | `/points/{id}` | [`handlers::points::get_point`] |
//! | POST | `/points` | [`handlers::points::create_point`] |
//! | GET | `/uploads/{file}` | Static files from the upload directory |
//! | GET | `/swagger-ui` | Swagger UI over [`openapi::ApiDoc`] |

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod form;
pub mod handlers;
pub mod openapi;
pub mod postgres;
pub mod storage;

use std::path::Path;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{Method, header::CONTENT_TYPE},
    routing::get
};
use ecoleta_core::{ImageStore, ItemRepository, PointRepository};
use handlers::{SharedService, items, points};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use config::Config;
pub use postgres::PgStore;
pub use storage::DiskImageStore;

/// Build the application router.
///
/// # Arguments
///
/// * `service` — Shared point service
/// * `upload_dir` — Directory served under `/uploads`
/// * `max_upload_bytes` — Request body limit, applies to image uploads
pub fn app<S, I>(
    service: SharedService<S, I>,
    upload_dir: impl AsRef<Path>,
    max_upload_bytes: usize
) -> Router
where
    S: ItemRepository + PointRepository + 'static,
    I: ImageStore + 'static
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/items", get(items::list_items::<S, I>))
        .route(
            "/points",
            get(points::list_points::<S, I>).post(points::create_point::<S, I>)
        )
        .route("/points/{id}", get(points::get_point::<S, I>))
        .nest_service("/uploads", ServeDir::new(upload_dir.as_ref()))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}
