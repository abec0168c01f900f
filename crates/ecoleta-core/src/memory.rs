// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Process-local store and image store.
//!
//! Writers are serialized by a [`RwLock`]; [`insert_with_links`] checks every
//! link before writing so a failed insert changes nothing.
//!
//! [`insert_with_links`]: PointRepository::insert_with_links

use std::collections::BTreeMap;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::{
    filter::{ItemIds, PointFilter},
    image::{ImageStore, stored_name},
    model::{ImageUpload, InsertablePoint, Item, ItemId, Point, PointId, default_items},
    repository::{ItemRepository, PointRepository}
};

/// Errors raised by [`InMemoryStore`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MemoryError {
    /// A link referenced an item that does not exist.
    #[error("item {0} does not exist")]
    UnknownItem(ItemId),

    /// The point has no links to write.
    #[error("a point needs at least one item link")]
    NoLinks
}

#[derive(Debug, Default)]
struct Tables {
    items:  BTreeMap<ItemId, Item>,
    points: BTreeMap<PointId, Point>,
    links:  Vec<(PointId, ItemId)>,
    last:   PointId
}

impl Tables {
    fn linked(&self, point: PointId) -> Vec<ItemId> {
        self.links
            .iter()
            .filter(|(p, _)| *p == point)
            .map(|(_, item)| *item)
            .collect()
    }
}

/// In-memory implementation of both repositories.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>
}

impl InMemoryStore {
    /// Empty store without items.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with the given items.
    pub fn with_items(items: impl IntoIterator<Item = Item>) -> Self {
        let tables = Tables {
            items: items.into_iter().map(|item| (item.id, item)).collect(),
            ..Tables::default()
        };
        Self {
            tables: RwLock::new(tables)
        }
    }

    /// Store seeded with [`default_items`].
    pub fn seeded() -> Self {
        Self::with_items(default_items())
    }

    /// Number of stored points.
    pub async fn point_count(&self) -> usize {
        self.tables.read().await.points.len()
    }

    /// Number of point-item links.
    pub async fn link_count(&self) -> usize {
        self.tables.read().await.links.len()
    }
}

#[async_trait]
impl ItemRepository for InMemoryStore {
    type Error = MemoryError;

    async fn list_items(&self) -> Result<Vec<Item>, Self::Error> {
        Ok(self.tables.read().await.items.values().cloned().collect())
    }

    async fn find_items_by_ids(&self, ids: &ItemIds) -> Result<Vec<Item>, Self::Error> {
        let tables = self.tables.read().await;
        Ok(ids
            .iter()
            .filter_map(|id| tables.items.get(&id).cloned())
            .collect())
    }
}

#[async_trait]
impl PointRepository for InMemoryStore {
    type Error = MemoryError;

    async fn find_by_city_and_items(
        &self,
        filter: &PointFilter
    ) -> Result<Vec<Point>, Self::Error> {
        let tables = self.tables.read().await;
        Ok(tables
            .points
            .values()
            .filter(|point| filter.matches(point, &tables.linked(point.id)))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: PointId) -> Result<Option<Point>, Self::Error> {
        Ok(self.tables.read().await.points.get(&id).cloned())
    }

    async fn items_of(&self, id: PointId) -> Result<Vec<Item>, Self::Error> {
        let tables = self.tables.read().await;
        let mut items: Vec<Item> = tables
            .linked(id)
            .into_iter()
            .filter_map(|item| tables.items.get(&item).cloned())
            .collect();
        items.sort_by_key(|item| item.id);
        Ok(items)
    }

    async fn insert_with_links(
        &self,
        point: InsertablePoint,
        items: &ItemIds
    ) -> Result<Point, Self::Error> {
        let mut tables = self.tables.write().await;

        if items.is_empty() {
            return Err(MemoryError::NoLinks);
        }
        if let Some(unknown) = items.iter().find(|id| !tables.items.contains_key(id)) {
            return Err(MemoryError::UnknownItem(unknown));
        }

        tables.last += 1;
        let point = point.with_id(tables.last);
        tables.points.insert(point.id, point.clone());
        for item in items.iter() {
            tables.links.push((point.id, item));
        }

        Ok(point)
    }
}

/// Errors raised by [`MemoryImageStore`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MemoryImageError {
    /// No file is stored under this name.
    #[error("image {0} does not exist")]
    Missing(String)
}

/// In-memory image store keyed by stored name.
#[derive(Debug, Default)]
pub struct MemoryImageStore {
    files: RwLock<BTreeMap<String, Vec<u8>>>
}

impl MemoryImageStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a file with this stored name exists.
    pub async fn contains(&self, name: &str) -> bool {
        self.files.read().await.contains_key(name)
    }

    /// Number of stored files.
    pub async fn len(&self) -> usize {
        self.files.read().await.len()
    }

    /// `true` when no file is stored.
    pub async fn is_empty(&self) -> bool {
        self.files.read().await.is_empty()
    }
}

#[async_trait]
impl ImageStore for MemoryImageStore {
    type Error = MemoryImageError;

    async fn store(&self, upload: &ImageUpload) -> Result<String, Self::Error> {
        let name = stored_name(&upload.file_name);
        self.files
            .write()
            .await
            .insert(name.clone(), upload.bytes.clone());
        Ok(name)
    }

    async fn discard(&self, name: &str) -> Result<(), Self::Error> {
        self.files
            .write()
            .await
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| MemoryImageError::Missing(name.to_string()))
    }
}
