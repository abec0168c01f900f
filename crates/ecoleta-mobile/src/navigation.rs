// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Screen routes and the navigation stack.

use ecoleta_core::PointId;

/// Parameters handed from the landing screen to the listing screen.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PointsParams {
    /// State code.
    pub uf:   String,
    /// City name.
    pub city: String
}

impl PointsParams {
    /// Build parameters from state code and city.
    pub fn new(uf: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            uf:   uf.into(),
            city: city.into()
        }
    }
}

/// A screen with its parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Landing form.
    Home,
    /// Map of points in a city.
    Points(PointsParams),
    /// One point.
    Detail {
        /// Point to show.
        point_id: PointId
    }
}

/// Navigation request emitted by a screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Open a route on top of the current one.
    Push(Route),
    /// Return to the previous route.
    Back
}

/// Stack of routes; the root is never popped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    stack: Vec<Route>
}

impl Default for Navigator {
    fn default() -> Self {
        Self {
            stack: vec![Route::Home]
        }
    }
}

impl Navigator {
    /// Stack holding only [`Route::Home`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Route on top of the stack.
    pub fn current(&self) -> &Route {
        // The stack always holds the root.
        &self.stack[self.stack.len() - 1]
    }

    /// Number of routes on the stack.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Push a route.
    pub fn navigate(&mut self, route: Route) {
        self.stack.push(route);
    }

    /// Pop the current route. Returns `false` when already at the root.
    pub fn go_back(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    /// Apply a navigation request.
    pub fn apply(&mut self, request: Navigation) {
        match request {
            Navigation::Push(route) => self.navigate(route),
            Navigation::Back => {
                self.go_back();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_home() {
        assert_eq!(Navigator::new().current(), &Route::Home);
    }

    #[test]
    fn push_and_back() {
        let mut nav = Navigator::new();
        nav.apply(Navigation::Push(Route::Points(PointsParams::new("SP", "Santos"))));
        nav.apply(Navigation::Push(Route::Detail {
            point_id: 3
        }));
        assert_eq!(nav.depth(), 3);
        nav.apply(Navigation::Back);
        assert!(matches!(nav.current(), Route::Points(_)));
    }

    #[test]
    fn back_stops_at_root() {
        let mut nav = Navigator::new();
        assert!(!nav.go_back());
        assert_eq!(nav.depth(), 1);
    }
}
