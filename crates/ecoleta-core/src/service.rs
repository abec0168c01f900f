// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Point query service.
//!
//! [`PointService`] answers the four API operations on top of a store that
//! implements [`ItemRepository`] and [`PointRepository`], and an
//! [`ImageStore`] for uploads:
//!
//! | Operation | Output |
//! |-----------|--------|
//! | [`list_items`](PointService::list_items) | `Vec<ItemView>` |
//! | [`list_points`](PointService::list_points) | `Vec<PointSummary>` |
//! | [`get_point`](PointService::get_point) | [`PointDetail`] |
//! | [`create_point`](PointService::create_point) | [`CreatedPoint`] |
//!
//! Views carry `image_url` resolved through [`ImageUrls`].

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::{
    error::{Error, Result},
    filter::{ItemIds, PointFilter},
    image::{ImageStore, ImageUrls},
    model::{ImageUpload, InsertablePoint, Item, ItemId, NewPoint, Point, PointId},
    repository::{ItemRepository, PointRepository}
};

/// Item as listed by `GET /items`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ItemView {
    /// Item id.
    pub id:        ItemId,
    /// Display title.
    pub title:     String,
    /// Public URL of the item icon.
    pub image_url: String
}

/// Point as listed by `GET /points`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PointSummary {
    /// Point id.
    pub id:        PointId,
    /// Point name.
    pub name:      String,
    /// Stored image file name.
    pub image:     String,
    /// Public URL of the image.
    pub image_url: String,
    /// Latitude in degrees.
    pub latitude:  f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// City name.
    pub city:      String,
    /// State code.
    pub uf:        String
}

/// Point fields returned by `GET /points/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PointView {
    /// Point id.
    pub id:        PointId,
    /// Point name.
    pub name:      String,
    /// Stored image file name.
    pub image:     String,
    /// Public URL of the image.
    pub image_url: String,
    /// Contact email.
    pub email:     String,
    /// WhatsApp number.
    pub whatsapp:  String,
    /// Latitude in degrees.
    pub latitude:  f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// City name.
    pub city:      String,
    /// State code.
    pub uf:        String
}

/// Title of an item a point accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ItemTitle {
    /// Item title.
    pub title: String
}

/// Body of `GET /points/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PointDetail {
    /// The point.
    pub point: PointView,
    /// Titles of linked items, ordered by item id.
    pub items: Vec<ItemTitle>
}

/// Body of a successful `POST /points`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreatedPoint {
    /// Assigned point id.
    pub id:        PointId,
    /// Point name.
    pub name:      String,
    /// Stored image file name.
    pub image:     String,
    /// Public URL of the image.
    pub image_url: String,
    /// Contact email.
    pub email:     String,
    /// WhatsApp number.
    pub whatsapp:  String,
    /// Latitude in degrees.
    pub latitude:  f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// City name.
    pub city:      String,
    /// State code.
    pub uf:        String,
    /// Linked item ids, ascending.
    pub items:     Vec<ItemId>
}

/// Query service over a point store and an image store.
#[derive(Debug)]
pub struct PointService<S, I> {
    store:  S,
    images: I,
    urls:   ImageUrls
}

impl<S, I> PointService<S, I>
where
    S: ItemRepository + PointRepository,
    I: ImageStore
{
    /// Assemble the service.
    pub fn new(store: S, images: I, urls: ImageUrls) -> Self {
        Self {
            store,
            images,
            urls
        }
    }

    /// Underlying point store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Underlying image store.
    pub fn images(&self) -> &I {
        &self.images
    }

    /// URL resolver for stored images.
    pub fn urls(&self) -> &ImageUrls {
        &self.urls
    }

    /// All item categories with resolved image URLs.
    pub async fn list_items(&self) -> Result<Vec<ItemView>> {
        let items = ItemRepository::list_items(&self.store)
            .await
            .map_err(Error::storage)?;

        Ok(items.into_iter().map(|item| self.item_view(item)).collect())
    }

    /// Points in `filter.city`/`filter.uf` linked to any of `filter.items`.
    ///
    /// An empty item set yields an empty list without touching the store.
    pub async fn list_points(&self, filter: &PointFilter) -> Result<Vec<PointSummary>> {
        if filter.items.is_empty() {
            debug!(city = %filter.city, uf = %filter.uf, "Empty item selection");
            return Ok(Vec::new());
        }

        let points = self
            .store
            .find_by_city_and_items(filter)
            .await
            .map_err(Error::storage)?;

        debug!(
            city = %filter.city,
            uf = %filter.uf,
            items = %filter.items.to_query_value(),
            found = points.len(),
            "Listed points"
        );

        Ok(points.into_iter().map(|p| self.summary(p)).collect())
    }

    /// One point with the titles of its linked items.
    pub async fn get_point(&self, id: PointId) -> Result<PointDetail> {
        let point = self
            .store
            .find_by_id(id)
            .await
            .map_err(Error::storage)?
            .ok_or(Error::NotFound(id))?;

        let items = self.store.items_of(id).await.map_err(Error::storage)?;

        Ok(PointDetail {
            point: self.point_view(point),
            items: items
                .into_iter()
                .map(|item| ItemTitle {
                    title: item.title
                })
                .collect()
        })
    }

    /// Validate, store the image, then insert the point with its links.
    ///
    /// If the insert fails the stored image is discarded, so a failed
    /// create leaves neither rows nor files behind.
    pub async fn create_point(
        &self,
        payload: NewPoint,
        image: Option<ImageUpload>
    ) -> Result<CreatedPoint> {
        payload.check()?;

        let image = image
            .filter(|upload| !upload.bytes.is_empty())
            .ok_or_else(|| Error::validation("image is required"))?;

        let requested: ItemIds = payload.items.iter().copied().collect();
        let known = self
            .store
            .find_items_by_ids(&requested)
            .await
            .map_err(Error::storage)?;
        if let Some(missing) = requested
            .iter()
            .find(|id| !known.iter().any(|item| item.id == *id))
        {
            return Err(Error::validation(format!("unknown item id {missing}")));
        }

        let stored = self.images.store(&image).await.map_err(Error::storage)?;
        let row = InsertablePoint::new(&payload, stored.clone());

        let point = match self.store.insert_with_links(row, &requested).await {
            Ok(point) => point,
            Err(err) => {
                if let Err(cleanup) = self.images.discard(&stored).await {
                    warn!(image = %stored, error = %cleanup, "Failed to discard orphan image");
                }
                return Err(Error::storage(err));
            }
        };

        info!(id = point.id, name = %point.name, city = %point.city, uf = %point.uf, "Point created");

        Ok(CreatedPoint {
            id:        point.id,
            image_url: self.urls.resolve(&point.image),
            name:      point.name,
            image:     point.image,
            email:     point.email,
            whatsapp:  point.whatsapp,
            latitude:  point.latitude,
            longitude: point.longitude,
            city:      point.city,
            uf:        point.uf,
            items:     requested.to_vec()
        })
    }

    fn item_view(&self, item: Item) -> ItemView {
        ItemView {
            image_url: self.urls.resolve(&item.image),
            id:        item.id,
            title:     item.title
        }
    }

    fn summary(&self, point: Point) -> PointSummary {
        PointSummary {
            image_url: self.urls.resolve(&point.image),
            id:        point.id,
            name:      point.name,
            image:     point.image,
            latitude:  point.latitude,
            longitude: point.longitude,
            city:      point.city,
            uf:        point.uf
        }
    }

    fn point_view(&self, point: Point) -> PointView {
        PointView {
            image_url: self.urls.resolve(&point.image),
            id:        point.id,
            name:      point.name,
            image:     point.image,
            email:     point.email,
            whatsapp:  point.whatsapp,
            latitude:  point.latitude,
            longitude: point.longitude,
            city:      point.city,
            uf:        point.uf
        }
    }
}
