// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Effect runners for the screen state machines.
//!
//! A driver owns the screen state, runs the effects produced by `update` as
//! tokio tasks and feeds their outcomes back as events through an unbounded
//! channel. Only one point fetch is in flight at a time; a newer toggle
//! aborts the older request.

use std::sync::Arc;

use ecoleta_core::{PointDetail, PointId};
use tokio::{
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
    task::JoinHandle
};
use tracing::{debug, warn};

use crate::{
    api::Backend,
    navigation::{Navigation, PointsParams},
    platform::{Permission, Platform},
    screens::{
        detail::{self, ContactAction, DetailState, DetailView},
        points::{self, PointsEffect, PointsEvent, PointsState, PointsView}
    }
};

/// Listing screen bound to a backend and a platform.
pub struct PointsScreen<B, P> {
    backend:   Arc<B>,
    platform:  Arc<P>,
    state:     PointsState,
    events_tx: UnboundedSender<PointsEvent>,
    events_rx: UnboundedReceiver<PointsEvent>,
    /// Generation and task of the newest point fetch.
    in_flight: Option<(u64, JoinHandle<()>)>,
    tasks:     Vec<JoinHandle<()>>
}

impl<B, P> PointsScreen<B, P>
where
    B: Backend,
    P: Platform
{
    /// Create an unmounted screen for the given city and state.
    pub fn new(backend: Arc<B>, platform: Arc<P>, params: PointsParams) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            backend,
            platform,
            state: PointsState::new(params),
            events_tx,
            events_rx,
            in_flight: None,
            tasks: Vec::new()
        }
    }

    /// Current state.
    pub fn state(&self) -> &PointsState {
        &self.state
    }

    /// Current view model.
    pub fn view(&self) -> PointsView {
        points::render(&self.state)
    }

    /// Start location, item and point requests.
    pub fn mount(&mut self) -> Vec<Navigation> {
        self.dispatch(PointsEvent::Mounted)
    }

    /// Apply an event and run the resulting effects.
    ///
    /// Returns navigation requests for the host to apply.
    pub fn dispatch(&mut self, event: PointsEvent) -> Vec<Navigation> {
        let (state, effects) = points::update(self.state.clone(), event);
        self.state = state;
        effects
            .into_iter()
            .filter_map(|effect| self.run(effect))
            .collect()
    }

    /// Wait for the next task outcome and apply it.
    ///
    /// Returns `None` once no sender is left.
    pub async fn pump(&mut self) -> Option<Vec<Navigation>> {
        let event = self.events_rx.recv().await?;
        Some(self.dispatch(event))
    }

    fn run(&mut self, effect: PointsEffect) -> Option<Navigation> {
        match effect {
            PointsEffect::RequestLocation => {
                let platform = Arc::clone(&self.platform);
                let tx = self.events_tx.clone();
                self.spawn(async move {
                    let event = match platform.request_location_permission().await {
                        Permission::Denied => PointsEvent::LocationDenied,
                        Permission::Granted => match platform.current_position().await {
                            Ok(position) => PointsEvent::LocationResolved(position),
                            Err(e) => PointsEvent::LocationFailed(e.to_string())
                        }
                    };
                    let _ = tx.send(event);
                });
                None
            }
            PointsEffect::FetchItems => {
                let backend = Arc::clone(&self.backend);
                let tx = self.events_tx.clone();
                self.spawn(async move {
                    let event = match backend.items().await {
                        Ok(items) => PointsEvent::ItemsLoaded(items),
                        Err(e) => PointsEvent::ItemsFailed(e.to_string())
                    };
                    let _ = tx.send(event);
                });
                None
            }
            PointsEffect::FetchPoints {
                generation,
                params,
                selection
            } => {
                if let Some((previous, handle)) = self.in_flight.take() {
                    debug!(
                        previous,
                        generation,
                        selection = %selection.to_query_value(),
                        "Superseding point fetch"
                    );
                    handle.abort();
                }
                let backend = Arc::clone(&self.backend);
                let tx = self.events_tx.clone();
                let handle = tokio::spawn(async move {
                    let event = match backend.points(&params, &selection).await {
                        Ok(points) => PointsEvent::PointsLoaded {
                            generation,
                            points
                        },
                        Err(e) => PointsEvent::PointsFailed {
                            generation,
                            message: e.to_string()
                        }
                    };
                    let _ = tx.send(event);
                });
                self.in_flight = Some((generation, handle));
                None
            }
            PointsEffect::ShowAlert {
                title,
                message
            } => {
                self.platform.alert(&title, &message);
                None
            }
            PointsEffect::Navigate(route) => Some(Navigation::Push(route)),
            PointsEffect::GoBack => Some(Navigation::Back)
        }
    }

    fn spawn<F>(&mut self, fut: F)
    where
        F: Future<Output = ()> + Send + 'static
    {
        self.tasks.retain(|handle| !handle.is_finished());
        self.tasks.push(tokio::spawn(fut));
    }
}

impl<B, P> Drop for PointsScreen<B, P> {
    fn drop(&mut self) {
        if let Some((_, handle)) = self.in_flight.take() {
            handle.abort();
        }
        for handle in self.tasks.drain(..) {
            handle.abort();
        }
    }
}

/// Detail screen bound to a backend and a platform.
pub struct DetailScreen<B, P> {
    backend:  Arc<B>,
    platform: Arc<P>,
    point_id: PointId,
    state:    DetailState
}

impl<B, P> DetailScreen<B, P>
where
    B: Backend,
    P: Platform
{
    /// Create a screen for one point; call [`load`](Self::load) to fetch it.
    pub fn new(backend: Arc<B>, platform: Arc<P>, point_id: PointId) -> Self {
        Self {
            backend,
            platform,
            point_id,
            state: DetailState::Loading
        }
    }

    /// Current state.
    pub fn state(&self) -> &DetailState {
        &self.state
    }

    /// Current view model.
    pub fn view(&self) -> DetailView {
        detail::render(&self.state)
    }

    /// Fetch the point once.
    pub async fn load(&mut self) -> &DetailState {
        self.state = match self.backend.point(self.point_id).await {
            Ok(detail) => DetailState::Loaded(detail),
            Err(e) => {
                warn!(point_id = self.point_id, error = %e, "Failed to load point");
                DetailState::Failed(e.to_string())
            }
        };
        &self.state
    }

    /// Hand a contact request to the platform without awaiting it.
    ///
    /// Returns `None` while the point is not loaded.
    pub fn contact(&self, action: ContactAction) -> Option<JoinHandle<()>> {
        let PointDetail {
            point, ..
        } = self.state.detail()?;
        let platform = Arc::clone(&self.platform);
        let handle = match action {
            ContactAction::Email => {
                let draft = detail::mail_draft(point);
                tokio::spawn(async move {
                    if let Err(e) = platform.compose_mail(draft).await {
                        warn!(error = %e, "Mail composer failed");
                    }
                })
            }
            ContactAction::Whatsapp => {
                let link = detail::whatsapp_link(point);
                tokio::spawn(async move {
                    let result = match link {
                        Ok(url) => platform.open_url(url.as_str()).await,
                        Err(e) => Err(e)
                    };
                    if let Err(e) = result {
                        warn!(error = %e, "WhatsApp hand-off failed");
                    }
                })
            }
        };
        Some(handle)
    }

    /// Leave the screen.
    pub fn back(&self) -> Navigation {
        Navigation::Back
    }
}
