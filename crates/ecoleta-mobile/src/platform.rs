// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! OS capabilities the screens hand work to.
//!
//! Geolocation, alerts, the mail composer and URL dispatch are provided by
//! the host platform. Contact hand-offs are fire-and-forget: no delivery
//! confirmation is expected.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::api::ClientError;

/// A latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees.
    pub latitude:  f64,
    /// Longitude in degrees.
    pub longitude: f64
}

impl Coordinates {
    /// Build from latitude and longitude.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude
        }
    }
}

/// Outcome of a location permission prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// Access allowed.
    Granted,
    /// Access refused.
    Denied
}

/// Mail composer request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailDraft {
    /// Mail subject.
    pub subject:    String,
    /// Addresses to send to.
    pub recipients: Vec<String>
}

/// Host platform capabilities.
#[async_trait]
pub trait Platform: Send + Sync + 'static {
    /// Prompt for foreground location access.
    async fn request_location_permission(&self) -> Permission;

    /// Current device position.
    async fn current_position(&self) -> Result<Coordinates, ClientError>;

    /// Show a blocking alert.
    fn alert(&self, title: &str, message: &str);

    /// Open the mail composer.
    async fn compose_mail(&self, draft: MailDraft) -> Result<(), ClientError>;

    /// Dispatch a URL to whichever app handles its scheme.
    async fn open_url(&self, url: &str) -> Result<(), ClientError>;
}
