// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Screen drivers against fake backend and platform.

use std::{
    sync::{Arc, Mutex},
    time::Duration
};

use async_trait::async_trait;
use ecoleta_core::{ItemIds, ItemTitle, ItemView, PointDetail, PointId, PointSummary, PointView};
use ecoleta_mobile::{
    Backend, ClientError, ContactAction, Coordinates, DetailScreen, DetailState, DetailView,
    FetchStatus, MailDraft, Navigation, Permission, Platform, PointsEvent, PointsParams,
    PointsScreen, Route
};

struct FakeBackend;

fn summary(id: PointId) -> PointSummary {
    PointSummary {
        id,
        name: format!("Ponto {id}"),
        image: "p.png".into(),
        image_url: "http://api/uploads/p.png".into(),
        latitude: -23.5,
        longitude: -46.6,
        city: "São Paulo".into(),
        uf: "SP".into()
    }
}

#[async_trait]
impl Backend for FakeBackend {
    async fn items(&self) -> Result<Vec<ItemView>, ClientError> {
        Ok((1..=6)
            .map(|id| ItemView {
                id,
                title: format!("Item {id}"),
                image_url: format!("http://api/uploads/{id}.svg")
            })
            .collect())
    }

    /// One point per selected item; single-item selections answer slowly.
    async fn points(
        &self,
        _params: &PointsParams,
        selection: &ItemIds
    ) -> Result<Vec<PointSummary>, ClientError> {
        if selection.len() == 1 {
            tokio::time::sleep(Duration::from_millis(300)).await;
        }
        Ok(selection.iter().map(summary).collect())
    }

    async fn point(&self, id: PointId) -> Result<PointDetail, ClientError> {
        if id != 1 {
            return Err(ClientError::Status {
                status: 404,
                body:   "not found".into()
            });
        }
        Ok(PointDetail {
            point: PointView {
                id,
                name: "EcoPonto".into(),
                image: "p.png".into(),
                image_url: "http://api/uploads/p.png".into(),
                email: "a@b.com".into(),
                whatsapp: "5511999999999".into(),
                latitude: -23.5,
                longitude: -46.6,
                city: "São Paulo".into(),
                uf: "SP".into()
            },
            items: vec![ItemTitle {
                title: "Lâmpadas".into()
            }]
        })
    }
}

#[derive(Default)]
struct FakePlatform {
    deny:   bool,
    alerts: Mutex<Vec<(String, String)>>,
    mails:  Mutex<Vec<MailDraft>>,
    urls:   Mutex<Vec<String>>
}

#[async_trait]
impl Platform for FakePlatform {
    async fn request_location_permission(&self) -> Permission {
        if self.deny {
            Permission::Denied
        } else {
            Permission::Granted
        }
    }

    async fn current_position(&self) -> Result<Coordinates, ClientError> {
        Ok(Coordinates::new(-23.55, -46.63))
    }

    fn alert(&self, title: &str, message: &str) {
        self.alerts
            .lock()
            .unwrap()
            .push((title.to_string(), message.to_string()));
    }

    async fn compose_mail(&self, draft: MailDraft) -> Result<(), ClientError> {
        self.mails.lock().unwrap().push(draft);
        Ok(())
    }

    async fn open_url(&self, url: &str) -> Result<(), ClientError> {
        self.urls.lock().unwrap().push(url.to_string());
        Ok(())
    }
}

fn params() -> PointsParams {
    PointsParams::new("SP", "São Paulo")
}

async fn pump_until<P, F>(screen: &mut PointsScreen<FakeBackend, P>, done: F)
where
    P: Platform,
    F: Fn(&PointsScreen<FakeBackend, P>) -> bool
{
    tokio::time::timeout(Duration::from_secs(5), async {
        while !done(screen) {
            screen.pump().await.unwrap();
        }
    })
    .await
    .unwrap();
}

#[tokio::test]
async fn mount_loads_location_items_and_points() {
    let platform = Arc::new(FakePlatform::default());
    let mut screen = PointsScreen::new(Arc::new(FakeBackend), platform, params());
    assert!(screen.mount().is_empty());

    pump_until(&mut screen, |s| {
        let state = s.state();
        state.position.is_some() && !state.items.is_empty() && state.points_status != FetchStatus::Fetching
    })
    .await;

    let view = screen.view();
    assert_eq!(view.chips.len(), 6);
    assert_eq!(screen.state().points_status, FetchStatus::Empty);
    let map = view.map.unwrap();
    assert_eq!(map.center, Coordinates::new(-23.55, -46.63));
    assert!(map.markers.is_empty());
}

#[tokio::test]
async fn denied_permission_shows_alert_and_no_map() {
    let platform = Arc::new(FakePlatform {
        deny: true,
        ..FakePlatform::default()
    });
    let mut screen = PointsScreen::new(Arc::new(FakeBackend), Arc::clone(&platform), params());
    screen.mount();

    let alerts = Arc::clone(&platform);
    pump_until(&mut screen, move |_| !alerts.alerts.lock().unwrap().is_empty()).await;

    let alerts = platform.alerts.lock().unwrap().clone();
    assert_eq!(alerts[0].0, "Ooooops...");
    assert!(screen.view().map.is_none());
}

#[tokio::test]
async fn latest_toggle_wins() {
    let platform = Arc::new(FakePlatform::default());
    let mut screen = PointsScreen::new(Arc::new(FakeBackend), platform, params());

    screen.dispatch(PointsEvent::ToggleItem(1));
    screen.dispatch(PointsEvent::ToggleItem(2));

    pump_until(&mut screen, |s| s.state().points_status == FetchStatus::Loaded).await;

    let ids: Vec<PointId> = screen.state().points.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(screen.state().generation, 2);
}

#[tokio::test]
async fn toggling_back_clears_points() {
    let platform = Arc::new(FakePlatform::default());
    let mut screen = PointsScreen::new(Arc::new(FakeBackend), platform, params());

    screen.dispatch(PointsEvent::ToggleItem(3));
    screen.dispatch(PointsEvent::ToggleItem(3));

    pump_until(&mut screen, |s| s.state().points_status == FetchStatus::Empty).await;
    assert!(screen.state().selection.is_empty());
    assert!(screen.state().points.is_empty());
}

#[tokio::test]
async fn marker_and_back_produce_navigation() {
    let platform = Arc::new(FakePlatform::default());
    let mut screen = PointsScreen::new(Arc::new(FakeBackend), platform, params());

    assert_eq!(
        screen.dispatch(PointsEvent::MarkerPressed(1)),
        vec![Navigation::Push(Route::Detail {
            point_id: 1
        })]
    );
    assert_eq!(screen.dispatch(PointsEvent::Back), vec![Navigation::Back]);
}

#[tokio::test]
async fn detail_loads_and_hands_off_contacts() {
    let platform = Arc::new(FakePlatform::default());
    let mut screen = DetailScreen::new(Arc::new(FakeBackend), Arc::clone(&platform), 1);

    assert_eq!(screen.view(), DetailView::Loading);
    assert!(screen.contact(ContactAction::Email).is_none());

    screen.load().await;
    let view = screen.view();
    let card = view.card().unwrap();
    assert_eq!(card.name, "EcoPonto");
    assert_eq!(card.items, "Lâmpadas");
    assert_eq!(card.address, "São Paulo-SP");

    screen.contact(ContactAction::Email).unwrap().await.unwrap();
    screen.contact(ContactAction::Whatsapp).unwrap().await.unwrap();

    let mails = platform.mails.lock().unwrap().clone();
    assert_eq!(mails[0].recipients, vec!["a@b.com".to_string()]);
    let urls = platform.urls.lock().unwrap().clone();
    assert!(urls[0].starts_with("whatsapp://send?phone=5511999999999&text="));
    assert_eq!(screen.back(), Navigation::Back);
}

#[tokio::test]
async fn detail_failure_is_visible() {
    let platform = Arc::new(FakePlatform::default());
    let mut screen = DetailScreen::new(Arc::new(FakeBackend), platform, 42);

    let state = screen.load().await;
    assert!(matches!(state, DetailState::Failed(message) if message.contains("404")));
    match screen.view() {
        DetailView::Failed {
            message
        } => assert!(message.contains("404")),
        other => panic!("expected a visible error, got {other:?}")
    }
    assert!(screen.contact(ContactAction::Whatsapp).is_none());
}
