// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Storage-independent repository interfaces.
//!
//! Every method is a single atomic operation against the store. Items are
//! read-only reference data; points are append-only.
//!
//! # Implementations
//!
//! - [`InMemoryStore`](crate::memory::InMemoryStore) — process-local tables
//! - `PgStore` in `ecoleta-server` — PostgreSQL via sqlx

use async_trait::async_trait;

use crate::{
    filter::{ItemIds, PointFilter},
    model::{InsertablePoint, Item, Point, PointId}
};

/// Read access to item categories.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Error type for repository operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// All items ordered by id.
    async fn list_items(&self) -> Result<Vec<Item>, Self::Error>;

    /// Items whose id is in `ids`, ordered by id. Unknown ids are skipped.
    async fn find_items_by_ids(&self, ids: &ItemIds) -> Result<Vec<Item>, Self::Error>;
}

/// Access to collection points and their item links.
#[async_trait]
pub trait PointRepository: Send + Sync {
    /// Error type for repository operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Points matching `filter`, each once, ordered by id.
    async fn find_by_city_and_items(&self, filter: &PointFilter)
    -> Result<Vec<Point>, Self::Error>;

    /// Point by id, `None` if absent.
    async fn find_by_id(&self, id: PointId) -> Result<Option<Point>, Self::Error>;

    /// Items linked to a point, ordered by item id.
    async fn items_of(&self, id: PointId) -> Result<Vec<Item>, Self::Error>;

    /// Insert a point and its links as one unit.
    ///
    /// Either both the point row and every link are written, or nothing is.
    async fn insert_with_links(
        &self,
        point: InsertablePoint,
        items: &ItemIds
    ) -> Result<Point, Self::Error>;
}
