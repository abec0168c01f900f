// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Domain core for Ecoleta, a waste-collection point finder.
//!
//! This crate holds everything the backend and the mobile client agree on:
//! entities, the filtered point lookup rules, repository interfaces and the
//! point query service.
//!
//! # Overview
//!
//! - [`Item`], [`Point`] — persisted entities
//! - [`ItemIds`], [`PointQuery`], [`PointFilter`] — filtered lookup inputs
//! - [`ItemRepository`], [`PointRepository`] — storage interfaces
//! - [`ImageStore`], [`ImageUrls`] — uploads and URL resolution
//! - [`PointService`] — list/detail/create operations and their views
//! - [`InMemoryStore`], [`MemoryImageStore`] — process-local implementations
//! - [`prelude`] — convenient re-exports
//!
//! # Usage
//!
//! ```rust
//! use ecoleta_core::prelude::*;
//!
//! let service = PointService::new(
//!     InMemoryStore::seeded(),
//!     MemoryImageStore::new(),
//!     ImageUrls::new("http://localhost:3333")
//! );
//! assert_eq!(
//!     service.urls().resolve("oleo.svg"),
//!     "http://localhost:3333/uploads/oleo.svg"
//! );
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod filter;
pub mod image;
pub mod memory;
pub mod model;
pub mod prelude;
pub mod repository;
pub mod service;

pub use async_trait::async_trait;
pub use error::{Error, Result};
pub use filter::{ItemIds, PointFilter, PointQuery};
pub use image::{ImageStore, ImageUrls};
pub use memory::{InMemoryStore, MemoryImageStore};
pub use model::{
    ImageUpload, InsertablePoint, Item, ItemId, NewPoint, Point, PointId, default_items,
    parse_point_id
};
pub use repository::{ItemRepository, PointRepository};
pub use service::{
    CreatedPoint, ItemTitle, ItemView, PointDetail, PointService, PointSummary, PointView
};
