// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Backend access for the screens.
//!
//! [`Backend`] is the seam the screen drivers depend on; [`ApiClient`] is the
//! HTTP implementation against the Ecoleta API.

use async_trait::async_trait;
use ecoleta_core::{ItemIds, ItemView, PointDetail, PointId, PointSummary};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::navigation::PointsParams;

/// Failures seen by the client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Base URL or endpoint path could not be built.
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    /// Transport or body decoding failure.
    #[error("network failure: {0}")]
    Network(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("server answered {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body as text.
        body:   String
    },

    /// The user refused location access.
    #[error("location permission denied")]
    PermissionDenied,

    /// The device could not provide a position.
    #[error("location unavailable: {0}")]
    Location(String)
}

/// Data sources used by the screens.
#[async_trait]
pub trait Backend: Send + Sync + 'static {
    /// All item categories.
    async fn items(&self) -> Result<Vec<ItemView>, ClientError>;

    /// Points of the screen's city accepting any of `selection`.
    async fn points(
        &self,
        params: &PointsParams,
        selection: &ItemIds
    ) -> Result<Vec<PointSummary>, ClientError>;

    /// One point with its item titles.
    async fn point(&self, id: PointId) -> Result<PointDetail, ClientError>;
}

/// HTTP client for the Ecoleta API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base: Url
}

impl ApiClient {
    /// # Arguments
    ///
    /// * `base_url` — API root, e.g. `http://192.168.0.10:3333`
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_client(Client::new(), base_url)
    }

    /// Use a preconfigured reqwest client.
    pub fn with_client(http: Client, base_url: &str) -> Result<Self, ClientError> {
        let mut base = Url::parse(base_url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self {
            http,
            base
        })
    }

    /// API root, always ending in `/`.
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Absolute URL of an API path relative to the base.
    pub fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base
            .join(path)
            .map_err(|e| ClientError::InvalidUrl(e.to_string()))
    }

    async fn get_json<T>(&self, url: Url, query: &[(&str, String)]) -> Result<T, ClientError>
    where
        T: DeserializeOwned
    {
        tracing::debug!(%url, "GET");
        let response = self.http.get(url).query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                status: status.as_u16(),
                body
            });
        }
        Ok(response.json().await?)
    }
}

/// Query pairs for `GET /points`; `items` is omitted when nothing is selected.
pub fn points_query(params: &PointsParams, selection: &ItemIds) -> Vec<(&'static str, String)> {
    let mut query = vec![("city", params.city.clone()), ("uf", params.uf.clone())];
    if !selection.is_empty() {
        query.push(("items", selection.to_query_value()));
    }
    query
}

#[async_trait]
impl Backend for ApiClient {
    async fn items(&self) -> Result<Vec<ItemView>, ClientError> {
        self.get_json(self.endpoint("items")?, &[]).await
    }

    async fn points(
        &self,
        params: &PointsParams,
        selection: &ItemIds
    ) -> Result<Vec<PointSummary>, ClientError> {
        let query = points_query(params, selection);
        self.get_json(self.endpoint("points")?, &query).await
    }

    async fn point(&self, id: PointId) -> Result<PointDetail, ClientError> {
        self.get_json(self.endpoint(&format!("points/{id}"))?, &[])
            .await
    }
}
