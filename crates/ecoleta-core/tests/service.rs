// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Point query service tests over the in-memory stores.

use ecoleta_core::{memory::MemoryError, prelude::*};

fn service() -> PointService<InMemoryStore, MemoryImageStore> {
    PointService::new(
        InMemoryStore::seeded(),
        MemoryImageStore::new(),
        ImageUrls::new("http://localhost:3333")
    )
}

fn payload(name: &str, city: &str, uf: &str, items: &[ItemId]) -> NewPoint {
    NewPoint {
        name:      name.into(),
        email:     "a@b.com".into(),
        whatsapp:  "5511999999999".into(),
        latitude:  -23.5,
        longitude: -46.6,
        city:      city.into(),
        uf:        uf.into(),
        items:     items.to_vec()
    }
}

fn image() -> Option<ImageUpload> {
    Some(ImageUpload::new("ponto.png", vec![0x89, 0x50, 0x4e, 0x47]).with_content_type("image/png"))
}

fn filter(city: &str, uf: &str, items: &[ItemId]) -> PointFilter {
    PointFilter::new(city, uf, items.iter().copied().collect())
}

#[tokio::test]
async fn list_items_resolves_urls() {
    let items = service().list_items().await.unwrap();
    assert_eq!(items.len(), 6);
    assert_eq!(items[0].title, "Lâmpadas");
    assert_eq!(items[0].image_url, "http://localhost:3333/uploads/lampadas.svg");
}

#[tokio::test]
async fn create_then_get_returns_linked_titles() {
    let svc = service();
    let created = svc
        .create_point(payload("EcoPonto", "São Paulo", "SP", &[1, 2]), image())
        .await
        .unwrap();

    assert_eq!(created.items, vec![1, 2]);
    assert!(created.image.ends_with("-ponto.png"));
    assert_eq!(
        created.image_url,
        format!("http://localhost:3333/uploads/{}", created.image)
    );

    let detail = svc.get_point(created.id).await.unwrap();
    assert_eq!(detail.point.name, "EcoPonto");
    assert_eq!(detail.point.email, "a@b.com");
    assert_eq!(detail.point.whatsapp, "5511999999999");
    let titles: Vec<_> = detail.items.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, vec!["Lâmpadas", "Pilhas e Baterias"]);
}

#[tokio::test]
async fn get_unknown_point_is_not_found() {
    let err = service().get_point(404).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn list_points_applies_intersection_rule() {
    let svc = service();
    let a = svc
        .create_point(payload("A", "São Paulo", "SP", &[1, 2]), image())
        .await
        .unwrap();
    let b = svc
        .create_point(payload("B", "São Paulo", "SP", &[3]), image())
        .await
        .unwrap();
    svc.create_point(payload("C", "Santos", "SP", &[1]), image())
        .await
        .unwrap();
    svc.create_point(payload("D", "São Paulo", "RJ", &[1]), image())
        .await
        .unwrap();

    let only_one = svc.list_points(&filter("São Paulo", "SP", &[1])).await.unwrap();
    assert_eq!(only_one.iter().map(|p| p.id).collect::<Vec<_>>(), vec![a.id]);

    let both = svc
        .list_points(&filter("São Paulo", "SP", &[2, 3]))
        .await
        .unwrap();
    assert_eq!(both.iter().map(|p| p.id).collect::<Vec<_>>(), vec![a.id, b.id]);

    let none = svc.list_points(&filter("São Paulo", "SP", &[6])).await.unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn list_points_returns_each_point_once() {
    let svc = service();
    svc.create_point(payload("A", "Recife", "PE", &[1, 2, 3]), image())
        .await
        .unwrap();

    let found = svc
        .list_points(&filter("Recife", "PE", &[1, 2, 3]))
        .await
        .unwrap();
    assert_eq!(found.len(), 1);
}

#[tokio::test]
async fn list_points_empty_selection_is_empty() {
    let svc = service();
    svc.create_point(payload("A", "Recife", "PE", &[1]), image())
        .await
        .unwrap();
    let found = svc.list_points(&filter("Recife", "PE", &[])).await.unwrap();
    assert!(found.is_empty());
}

#[tokio::test]
async fn list_points_city_is_case_sensitive() {
    let svc = service();
    svc.create_point(payload("A", "Recife", "PE", &[1]), image())
        .await
        .unwrap();
    let found = svc.list_points(&filter("recife", "PE", &[1])).await.unwrap();
    assert!(found.is_empty());
}

#[tokio::test]
async fn create_requires_image() {
    let svc = service();
    let err = svc
        .create_point(payload("A", "Recife", "PE", &[1]), None)
        .await
        .unwrap_err();
    assert!(err.is_validation());

    let empty = Some(ImageUpload::new("empty.png", Vec::new()));
    let err = svc
        .create_point(payload("A", "Recife", "PE", &[1]), empty)
        .await
        .unwrap_err();
    assert!(err.is_validation());
    assert_eq!(svc.store().point_count().await, 0);
}

#[tokio::test]
async fn create_rejects_unknown_item() {
    let svc = service();
    let err = svc
        .create_point(payload("A", "Recife", "PE", &[1, 77]), image())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("unknown item id 77"));
    assert!(svc.images().is_empty().await);
}

#[tokio::test]
async fn create_rejects_missing_fields() {
    let svc = service();
    let err = svc
        .create_point(payload("", "Recife", "PE", &[1]), image())
        .await
        .unwrap_err();
    assert!(err.is_validation());
    assert!(svc.images().is_empty().await);
}

#[tokio::test]
async fn create_rejects_nan_latitude_and_listing_stays_decodable() {
    let svc = service();
    svc.create_point(payload("Valid", "Recife", "PE", &[1]), image())
        .await
        .unwrap();

    let mut broken = payload("Broken", "Recife", "PE", &[1]);
    broken.latitude = f64::NAN;
    let err = svc.create_point(broken, image()).await.unwrap_err();
    assert!(err.is_validation());
    assert_eq!(svc.store().point_count().await, 1);
    assert_eq!(svc.images().len().await, 1);

    let listed = svc.list_points(&filter("Recife", "PE", &[1])).await.unwrap();
    let json = serde_json::to_string(&listed).unwrap();
    let decoded: Vec<PointSummary> = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded.len(), 1);
    assert_eq!(decoded[0].name, "Valid");
}

/// Store whose inserts always fail after validation has passed.
struct FailingInserts(InMemoryStore);

#[async_trait]
impl ItemRepository for FailingInserts {
    type Error = MemoryError;

    async fn list_items(&self) -> Result<Vec<Item>, Self::Error> {
        self.0.list_items().await
    }

    async fn find_items_by_ids(&self, ids: &ItemIds) -> Result<Vec<Item>, Self::Error> {
        self.0.find_items_by_ids(ids).await
    }
}

#[async_trait]
impl PointRepository for FailingInserts {
    type Error = MemoryError;

    async fn find_by_city_and_items(
        &self,
        filter: &PointFilter
    ) -> Result<Vec<Point>, Self::Error> {
        self.0.find_by_city_and_items(filter).await
    }

    async fn find_by_id(&self, id: PointId) -> Result<Option<Point>, Self::Error> {
        self.0.find_by_id(id).await
    }

    async fn items_of(&self, id: PointId) -> Result<Vec<Item>, Self::Error> {
        self.0.items_of(id).await
    }

    async fn insert_with_links(
        &self,
        _point: ecoleta_core::InsertablePoint,
        _items: &ItemIds
    ) -> Result<Point, Self::Error> {
        Err(MemoryError::NoLinks)
    }
}

#[tokio::test]
async fn failed_insert_discards_stored_image() {
    let svc = PointService::new(
        FailingInserts(InMemoryStore::seeded()),
        MemoryImageStore::new(),
        ImageUrls::new("http://localhost:3333")
    );

    let err = svc
        .create_point(payload("A", "Recife", "PE", &[1]), image())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Storage(_)));
    assert!(svc.images().is_empty().await);
    assert_eq!(svc.store().0.point_count().await, 0);
}
