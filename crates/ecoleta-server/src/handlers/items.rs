// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `GET /items`.

use axum::{Json, extract::State};
use ecoleta_core::{ImageStore, ItemRepository, ItemView, PointRepository};
use masterror::AppResult;

use super::SharedService;
use crate::error::app_error;

/// List all item categories.
///
/// # Responses
///
/// - `200 OK` - Items with resolved image URLs
/// - `500 Internal Server Error` - Database or server error
#[utoipa::path(
    get,
    path = "/items",
    tag = "Items",
    responses(
        (status = 200, description = "All item categories", body = [ItemView]),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_items<S, I>(
    State(service): State<SharedService<S, I>>
) -> AppResult<Json<Vec<ItemView>>>
where
    S: ItemRepository + PointRepository + 'static,
    I: ImageStore + 'static
{
    let items = service.list_items().await.map_err(app_error)?;
    Ok(Json(items))
}
