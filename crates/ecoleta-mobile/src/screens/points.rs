// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Listing screen: map of points filtered by selected item categories.
//!
//! Three independent sources feed the screen: device location (map center),
//! the item list (category chips) and the point list (markers). The point
//! list is re-fetched on every category toggle; each fetch carries a
//! generation number and only the result of the latest generation is
//! applied.
//!
//! Point fetch status per toggle:
//!
//! ```text
//! Idle -> Fetching -> { Loaded | Empty | Failed }
//! ```

use ecoleta_core::{ItemId, ItemIds, ItemView, PointId, PointSummary};

use crate::{
    navigation::{PointsParams, Route},
    platform::Coordinates
};

/// Map zoom used around the device position.
pub const MAP_DELTA: f64 = 0.014;

/// Title of the alert shown when location access is refused.
pub const PERMISSION_ALERT_TITLE: &str = "Ooooops...";
/// Body of the alert shown when location access is refused.
pub const PERMISSION_ALERT_MESSAGE: &str = "Precisamos de sua permissão para obter a localização.";

/// Status of the point-list fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchStatus {
    /// No fetch issued yet.
    #[default]
    Idle,
    /// Request in flight.
    Fetching,
    /// Points received.
    Loaded,
    /// Request succeeded with no points.
    Empty,
    /// Request failed with the given message.
    Failed(String)
}

/// Listing screen state.
#[derive(Debug, Clone, PartialEq)]
pub struct PointsState {
    /// City and state from the landing screen.
    pub params:         PointsParams,
    /// Device position, once known.
    pub position:       Option<Coordinates>,
    /// Last location failure.
    pub location_error: Option<String>,
    /// Item categories.
    pub items:          Vec<ItemView>,
    /// Last item fetch failure.
    pub items_error:    Option<String>,
    /// Points of the newest applied fetch.
    pub points:         Vec<PointSummary>,
    /// Status of the newest point fetch.
    pub points_status:  FetchStatus,
    /// Selected item ids.
    pub selection:      ItemIds,
    /// Generation of the newest point fetch.
    pub generation:     u64
}

impl PointsState {
    /// Fresh state for the given city and state.
    pub fn new(params: PointsParams) -> Self {
        Self {
            params,
            position: None,
            location_error: None,
            items: Vec::new(),
            items_error: None,
            points: Vec::new(),
            points_status: FetchStatus::Idle,
            selection: ItemIds::new(),
            generation: 0
        }
    }
}

/// Inputs to the listing screen.
#[derive(Debug, Clone, PartialEq)]
pub enum PointsEvent {
    /// Screen opened.
    Mounted,
    /// Device position received.
    LocationResolved(Coordinates),
    /// Location access refused.
    LocationDenied,
    /// Position could not be read.
    LocationFailed(String),
    /// Item categories received.
    ItemsLoaded(Vec<ItemView>),
    /// Item fetch failed.
    ItemsFailed(String),
    /// Point fetch finished.
    PointsLoaded {
        /// Generation the fetch was issued with.
        generation: u64,
        /// Fetched points.
        points:     Vec<PointSummary>
    },
    /// Point fetch failed.
    PointsFailed {
        /// Generation the fetch was issued with.
        generation: u64,
        /// Failure message.
        message:    String
    },
    /// Category chip tapped.
    ToggleItem(ItemId),
    /// Map marker tapped.
    MarkerPressed(PointId),
    /// Back button tapped.
    Back
}

/// Work requested by [`update`].
#[derive(Debug, Clone, PartialEq)]
pub enum PointsEffect {
    /// Ask for location access and read the position.
    RequestLocation,
    /// Load item categories.
    FetchItems,
    /// Load points for the selection.
    FetchPoints {
        /// Generation to echo back with the result.
        generation: u64,
        /// City and state to query.
        params:     PointsParams,
        /// Selected item ids.
        selection:  ItemIds
    },
    /// Show a blocking alert.
    ShowAlert {
        /// Alert title.
        title:   String,
        /// Alert body.
        message: String
    },
    /// Open a route.
    Navigate(Route),
    /// Leave the screen.
    GoBack
}

fn fetch_points(state: &PointsState) -> PointsEffect {
    PointsEffect::FetchPoints {
        generation: state.generation,
        params:     state.params.clone(),
        selection:  state.selection.clone()
    }
}

/// Compute the next state and the effects to run.
pub fn update(state: PointsState, event: PointsEvent) -> (PointsState, Vec<PointsEffect>) {
    match event {
        PointsEvent::Mounted => {
            let next = PointsState {
                points_status: FetchStatus::Fetching,
                ..state
            };
            let effects = vec![
                PointsEffect::RequestLocation,
                PointsEffect::FetchItems,
                fetch_points(&next),
            ];
            (next, effects)
        }
        PointsEvent::LocationResolved(position) => (
            PointsState {
                position: Some(position),
                location_error: None,
                ..state
            },
            Vec::new()
        ),
        PointsEvent::LocationDenied => (
            state,
            vec![PointsEffect::ShowAlert {
                title:   PERMISSION_ALERT_TITLE.to_string(),
                message: PERMISSION_ALERT_MESSAGE.to_string()
            }]
        ),
        PointsEvent::LocationFailed(message) => (
            PointsState {
                location_error: Some(message),
                ..state
            },
            Vec::new()
        ),
        PointsEvent::ItemsLoaded(items) => (
            PointsState {
                items,
                items_error: None,
                ..state
            },
            Vec::new()
        ),
        PointsEvent::ItemsFailed(message) => (
            PointsState {
                items_error: Some(message),
                ..state
            },
            Vec::new()
        ),
        PointsEvent::PointsLoaded {
            generation,
            points
        } => {
            if generation != state.generation {
                tracing::debug!(generation, current = state.generation, "Dropping stale points");
                return (state, Vec::new());
            }
            let points_status = if points.is_empty() {
                FetchStatus::Empty
            } else {
                FetchStatus::Loaded
            };
            (
                PointsState {
                    points,
                    points_status,
                    ..state
                },
                Vec::new()
            )
        }
        PointsEvent::PointsFailed {
            generation,
            message
        } => {
            if generation != state.generation {
                return (state, Vec::new());
            }
            (
                PointsState {
                    points_status: FetchStatus::Failed(message),
                    ..state
                },
                Vec::new()
            )
        }
        PointsEvent::ToggleItem(id) => {
            let next = PointsState {
                selection: state.selection.toggled(id),
                generation: state.generation + 1,
                points_status: FetchStatus::Fetching,
                ..state
            };
            let effect = fetch_points(&next);
            (next, vec![effect])
        }
        PointsEvent::MarkerPressed(point_id) => (
            state,
            vec![PointsEffect::Navigate(Route::Detail {
                point_id
            })]
        ),
        PointsEvent::Back => (state, vec![PointsEffect::GoBack])
    }
}

/// Map marker for one point.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    /// Point the marker opens.
    pub point_id:    PointId,
    /// Point name.
    pub title:       String,
    /// Point image.
    pub image_url:   String,
    /// Marker position.
    pub coordinates: Coordinates
}

/// Map region and markers.
#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    /// Map center.
    pub center:          Coordinates,
    /// Visible latitude span.
    pub latitude_delta:  f64,
    /// Visible longitude span.
    pub longitude_delta: f64,
    /// One marker per point.
    pub markers:         Vec<Marker>
}

/// Category chip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemChip {
    /// Item id.
    pub id:        ItemId,
    /// Item title.
    pub title:     String,
    /// Item icon.
    pub image_url: String,
    /// Whether the item is in the selection.
    pub selected:  bool
}

/// Everything the listing screen draws.
#[derive(Debug, Clone, PartialEq)]
pub struct PointsView {
    /// Screen heading.
    pub title:       &'static str,
    /// Screen subheading.
    pub description: &'static str,
    /// `None` until the device position is known.
    pub map:         Option<MapView>,
    /// One chip per item category.
    pub chips:       Vec<ItemChip>,
    /// A point fetch is in flight.
    pub loading:     bool,
    /// Visible fetch failures.
    pub errors:      Vec<String>
}

/// Build the view model from state.
pub fn render(state: &PointsState) -> PointsView {
    let map = state.position.map(|center| MapView {
        center,
        latitude_delta: MAP_DELTA,
        longitude_delta: MAP_DELTA,
        markers: state
            .points
            .iter()
            .map(|point| Marker {
                point_id:    point.id,
                title:       point.name.clone(),
                image_url:   point.image_url.clone(),
                coordinates: Coordinates::new(point.latitude, point.longitude)
            })
            .collect()
    });

    let chips = state
        .items
        .iter()
        .map(|item| ItemChip {
            id:        item.id,
            title:     item.title.clone(),
            image_url: item.image_url.clone(),
            selected:  state.selection.contains(item.id)
        })
        .collect();

    let mut errors = Vec::new();
    if let Some(message) = &state.location_error {
        errors.push(format!("Localização indisponível: {message}"));
    }
    if let Some(message) = &state.items_error {
        errors.push(format!("Não foi possível carregar os itens: {message}"));
    }
    if let FetchStatus::Failed(message) = &state.points_status {
        errors.push(format!("Não foi possível carregar os pontos: {message}"));
    }

    PointsView {
        title: "Bem Vindo.",
        description: "Encontre no mapa um ponto de coleta.",
        map,
        chips,
        loading: state.points_status == FetchStatus::Fetching,
        errors
    }
}
