// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! HTTP handlers.
//!
//! Handlers are generic over the store `S` and the image store `I` so the
//! same router serves PostgreSQL in production and in-memory stores in
//! tests.

pub mod items;
pub mod points;

use std::sync::Arc;

use ecoleta_core::PointService;

/// Shared state handed to every handler.
pub type SharedService<S, I> = Arc<PointService<S, I>>;
