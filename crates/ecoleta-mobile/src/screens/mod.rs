// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Screen state machines.
//!
//! Each screen is an immutable state value, a pure `update` producing the
//! next state plus effects, and a pure `render` producing a view model.

pub mod detail;
pub mod home;
pub mod points;
