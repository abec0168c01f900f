// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ecoleta_core::prelude::*;
//! ```

pub use crate::{
    CreatedPoint, Error, ImageStore, ImageUpload, ImageUrls, InMemoryStore, Item, ItemId,
    ItemIds, ItemRepository, ItemTitle, ItemView, MemoryImageStore, NewPoint, Point,
    PointDetail, PointFilter, PointId, PointQuery, PointRepository, PointService, PointSummary,
    PointView, async_trait
};
