// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! # ecoleta-mobile
//!
//! Client side of Ecoleta: the three app screens as state machines, an HTTP
//! client for the API and the platform seam for location, alerts and
//! contact hand-offs.
//!
//! | Screen | State | Driver |
//! |--------|-------|--------|
//! | Home | [`HomeState`] | none, synchronous |
//! | Points | [`PointsState`] | [`PointsScreen`] |
//! | Detail | [`DetailState`] | [`DetailScreen`] |
//!
//! ```
//! use ecoleta_mobile::{HomeState, Navigator, Route};
//!
//! let mut nav = Navigator::new();
//! let route = HomeState::new().set_uf("sp").set_city("Santos").submit();
//! nav.navigate(route);
//! assert!(matches!(nav.current(), Route::Points(p) if p.uf == "SP"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod api;
pub mod driver;
pub mod navigation;
pub mod platform;
pub mod screens;

pub use api::{ApiClient, Backend, ClientError};
pub use driver::{DetailScreen, PointsScreen};
pub use navigation::{Navigation, Navigator, PointsParams, Route};
pub use platform::{Coordinates, MailDraft, Permission, Platform};
pub use screens::{
    detail::{ContactAction, DetailState, DetailView, PointCard},
    home::HomeState,
    points::{FetchStatus, PointsEffect, PointsEvent, PointsState, PointsView}
};
