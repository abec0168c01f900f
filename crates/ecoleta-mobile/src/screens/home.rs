// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Landing screen: state and city entry.

use crate::navigation::{PointsParams, Route};

/// Maximum characters accepted by the state field.
pub const UF_MAX_CHARS: usize = 2;

/// Landing form contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HomeState {
    /// State code, at most two upper-case characters.
    pub uf:   String,
    /// City name.
    pub city: String
}

impl HomeState {
    /// Empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep at most two characters, upper-cased like the input's
    /// auto-capitalization.
    #[must_use]
    pub fn set_uf(self, text: &str) -> Self {
        Self {
            uf: text.chars().take(UF_MAX_CHARS).collect::<String>().to_uppercase(),
            ..self
        }
    }

    /// Store the city text unchanged.
    #[must_use]
    pub fn set_city(self, text: &str) -> Self {
        Self {
            city: text.to_string(),
            ..self
        }
    }

    /// Hand both fields to the listing screen as-is.
    pub fn submit(&self) -> Route {
        Route::Points(PointsParams::new(self.uf.clone(), self.city.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uf_is_capped_and_uppercased() {
        let state = HomeState::new().set_uf("spx");
        assert_eq!(state.uf, "SP");
    }

    #[test]
    fn city_is_free_text() {
        let state = HomeState::new().set_city("  São Paulo ");
        assert_eq!(state.city, "  São Paulo ");
    }

    #[test]
    fn submit_passes_fields_unvalidated() {
        let route = HomeState::new().set_uf("").set_city("").submit();
        assert_eq!(route, Route::Points(PointsParams::new("", "")));

        let route = HomeState::new().set_uf("pe").set_city("Recife").submit();
        assert_eq!(route, Route::Points(PointsParams::new("PE", "Recife")));
    }
}
