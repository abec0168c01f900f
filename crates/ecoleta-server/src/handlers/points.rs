// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `GET /points`, `GET /points/{id}` and `POST /points`.

use axum::{
    Json,
    extract::{Multipart, Path, Query, State},
    http::StatusCode
};
use ecoleta_core::{
    CreatedPoint, ImageStore, ItemRepository, PointDetail, PointQuery, PointRepository,
    PointSummary, parse_point_id
};
use masterror::AppResult;

use super::SharedService;
use crate::{error::app_error, form::PointForm, openapi::CreatePointForm};

/// List points of a city accepting any of the given items.
///
/// Results are ordered by point id. An empty `items` selection returns an
/// empty list.
///
/// # Responses
///
/// - `200 OK` - Matching points
/// - `422 Unprocessable Entity` - Missing `city`/`uf` or non-numeric item id
/// - `500 Internal Server Error` - Database or server error
#[utoipa::path(
    get,
    path = "/points",
    tag = "Points",
    params(
        ("city" = String, Query, description = "City, exact match"),
        ("uf" = String, Query, description = "Two-letter state code, exact match"),
        ("items" = Option<String>, Query, description = "Item ids, comma-separated or repeated")
    ),
    responses(
        (status = 200, description = "Matching points", body = [PointSummary]),
        (status = 422, description = "Invalid query"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_points<S, I>(
    State(service): State<SharedService<S, I>>,
    Query(pairs): Query<Vec<(String, String)>>
) -> AppResult<Json<Vec<PointSummary>>>
where
    S: ItemRepository + PointRepository + 'static,
    I: ImageStore + 'static
{
    let filter = PointQuery::from_pairs(pairs)
        .into_filter()
        .map_err(app_error)?;
    let points = service.list_points(&filter).await.map_err(app_error)?;
    Ok(Json(points))
}

/// Get a point with the titles of the items it accepts.
///
/// # Responses
///
/// - `200 OK` - Point found
/// - `400 Bad Request` - Id is not an integer
/// - `404 Not Found` - Point not found
/// - `500 Internal Server Error` - Database or server error
#[utoipa::path(
    get,
    path = "/points/{id}",
    tag = "Points",
    params(("id" = i64, Path, description = "Point unique identifier")),
    responses(
        (status = 200, description = "Point found", body = PointDetail),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "Point not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_point<S, I>(
    State(service): State<SharedService<S, I>>,
    Path(raw_id): Path<String>
) -> AppResult<Json<PointDetail>>
where
    S: ItemRepository + PointRepository + 'static,
    I: ImageStore + 'static
{
    let id = parse_point_id(&raw_id).map_err(app_error)?;
    let detail = service.get_point(id).await.map_err(app_error)?;
    Ok(Json(detail))
}

/// Create a point from a multipart form with an `image` file.
///
/// # Responses
///
/// - `201 Created` - Point created
/// - `400 Bad Request` - Unreadable multipart body
/// - `422 Unprocessable Entity` - Missing or invalid field, missing image
/// - `500 Internal Server Error` - Database or server error
#[utoipa::path(
    post,
    path = "/points",
    tag = "Points",
    request_body(content = CreatePointForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Point created", body = CreatedPoint),
        (status = 400, description = "Malformed body"),
        (status = 422, description = "Validation failed"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_point<S, I>(
    State(service): State<SharedService<S, I>>,
    multipart: Multipart
) -> AppResult<(StatusCode, Json<CreatedPoint>)>
where
    S: ItemRepository + PointRepository + 'static,
    I: ImageStore + 'static
{
    let (payload, image) = PointForm::read(multipart).await?.into_parts()?;
    let created = service
        .create_point(payload, image)
        .await
        .map_err(app_error)?;
    Ok((StatusCode::CREATED, Json(created)))
}
