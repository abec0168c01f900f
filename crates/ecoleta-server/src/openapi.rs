// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! OpenAPI document served at `/api-docs/openapi.json`.

use ecoleta_core::{CreatedPoint, ItemTitle, ItemView, PointDetail, PointSummary, PointView};
use utoipa::{OpenApi, ToSchema};

use crate::handlers::{items, points};

/// Multipart body of `POST /points`, for documentation only.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct CreatePointForm {
    name:      String,
    email:     String,
    /// Digits only, country and area code included.
    whatsapp:  String,
    latitude:  f64,
    longitude: f64,
    city:      String,
    /// Two-letter state code.
    uf:        String,
    /// Comma-separated item ids, e.g. `1,2`.
    items:     String,
    #[schema(value_type = String, format = Binary)]
    image:     Vec<u8>
}

/// OpenAPI document for the API.
#[derive(OpenApi)]
#[openapi(
    info(title = "Ecoleta API", version = "0.1.0"),
    paths(
        items::list_items,
        points::list_points,
        points::get_point,
        points::create_point,
    ),
    components(schemas(
        ItemView,
        PointSummary,
        PointView,
        ItemTitle,
        PointDetail,
        CreatedPoint,
        CreatePointForm
    )),
    tags(
        (name = "Items", description = "Collectible waste categories"),
        (name = "Points", description = "Collection points")
    )
)]
pub struct ApiDoc;
