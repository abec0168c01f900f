// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! PostgreSQL store.
//!
//! | Method | SQL Operation |
//! |--------|---------------|
//! | `list_items` | `SELECT ... FROM items ORDER BY id` |
//! | `find_items_by_ids` | `SELECT ... FROM items WHERE id = ANY($1)` |
//! | `find_by_city_and_items` | `SELECT DISTINCT ... JOIN point_items ... WHERE item_id = ANY($1)` |
//! | `find_by_id` | `SELECT ... FROM points WHERE id = $1` |
//! | `items_of` | `SELECT ... FROM items JOIN point_items ... WHERE point_id = $1` |
//! | `insert_with_links` | `INSERT INTO points ... RETURNING` + `INSERT INTO point_items ... UNNEST` in one transaction |

use async_trait::async_trait;
use ecoleta_core::{
    InsertablePoint, Item, ItemIds, ItemRepository, Point, PointFilter, PointId, PointRepository
};
use sqlx::{FromRow, PgPool};

const POINT_COLUMNS: &str = "p.id, p.image, p.name, p.email, p.whatsapp, p.latitude, p.longitude, p.city, p.uf";

/// Row of the `items` table.
#[derive(Debug, FromRow)]
struct ItemRow {
    id:    i64,
    title: String,
    image: String
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Self {
            id:    row.id,
            title: row.title,
            image: row.image
        }
    }
}

/// Row of the `points` table.
#[derive(Debug, FromRow)]
struct PointRow {
    id:        i64,
    image:     String,
    name:      String,
    email:     String,
    whatsapp:  String,
    latitude:  f64,
    longitude: f64,
    city:      String,
    uf:        String
}

impl From<PointRow> for Point {
    fn from(row: PointRow) -> Self {
        Self {
            id:        row.id,
            image:     row.image,
            name:      row.name,
            email:     row.email,
            whatsapp:  row.whatsapp,
            latitude:  row.latitude,
            longitude: row.longitude,
            city:      row.city,
            uf:        row.uf
        }
    }
}

/// Repository implementation over a [`PgPool`].
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool
}

impl PgStore {
    /// Wrap a connection pool.
    pub const fn new(pool: PgPool) -> Self {
        Self {
            pool
        }
    }

    /// Get reference to the underlying pool.
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl ItemRepository for PgStore {
    type Error = sqlx::Error;

    async fn list_items(&self) -> Result<Vec<Item>, Self::Error> {
        let rows: Vec<ItemRow> = sqlx::query_as("SELECT id, title, image FROM items ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Item::from).collect())
    }

    async fn find_items_by_ids(&self, ids: &ItemIds) -> Result<Vec<Item>, Self::Error> {
        let rows: Vec<ItemRow> =
            sqlx::query_as("SELECT id, title, image FROM items WHERE id = ANY($1) ORDER BY id")
                .bind(ids.to_vec())
                .fetch_all(&self.pool)
                .await?;
        Ok(rows.into_iter().map(Item::from).collect())
    }
}

#[async_trait]
impl PointRepository for PgStore {
    type Error = sqlx::Error;

    async fn find_by_city_and_items(
        &self,
        filter: &PointFilter
    ) -> Result<Vec<Point>, Self::Error> {
        let sql = format!(
            "SELECT DISTINCT {POINT_COLUMNS} FROM points p \
             JOIN point_items pi ON pi.point_id = p.id \
             WHERE pi.item_id = ANY($1) AND p.city = $2 AND p.uf = $3 \
             ORDER BY p.id"
        );
        let rows: Vec<PointRow> = sqlx::query_as(&sql)
            .bind(filter.items.to_vec())
            .bind(&filter.city)
            .bind(&filter.uf)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Point::from).collect())
    }

    async fn find_by_id(&self, id: PointId) -> Result<Option<Point>, Self::Error> {
        let sql = format!("SELECT {POINT_COLUMNS} FROM points p WHERE p.id = $1");
        let row: Option<PointRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Point::from))
    }

    async fn items_of(&self, id: PointId) -> Result<Vec<Item>, Self::Error> {
        let rows: Vec<ItemRow> = sqlx::query_as(
            "SELECT i.id, i.title, i.image FROM items i \
             JOIN point_items pi ON pi.item_id = i.id \
             WHERE pi.point_id = $1 ORDER BY i.id"
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Item::from).collect())
    }

    async fn insert_with_links(
        &self,
        point: InsertablePoint,
        items: &ItemIds
    ) -> Result<Point, Self::Error> {
        // Dropping `tx` before commit rolls back both inserts.
        let mut tx = self.pool.begin().await?;

        let row: PointRow = sqlx::query_as(
            "INSERT INTO points (image, name, email, whatsapp, latitude, longitude, city, uf) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING id, image, name, email, whatsapp, latitude, longitude, city, uf"
        )
        .bind(&point.image)
        .bind(&point.name)
        .bind(&point.email)
        .bind(&point.whatsapp)
        .bind(point.latitude)
        .bind(point.longitude)
        .bind(&point.city)
        .bind(&point.uf)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            "INSERT INTO point_items (point_id, item_id) SELECT $1, UNNEST($2::BIGINT[])"
        )
        .bind(row.id)
        .bind(items.to_vec())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::debug!(id = row.id, links = items.len(), "Inserted point with links");
        Ok(Point::from(row))
    }
}
