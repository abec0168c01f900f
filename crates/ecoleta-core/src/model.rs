// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Persisted entities and input payloads.
//!
//! | Type | Role |
//! |------|------|
//! | [`Item`] | Collectible waste category, pre-seeded reference data |
//! | [`Point`] | Collection point as stored |
//! | [`InsertablePoint`] | Point columns written on insert |
//! | [`NewPoint`] | Validated create payload |
//! | [`ImageUpload`] | Uploaded image bytes with its original name |

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{Error, Result};

/// Identifier of an [`Item`].
pub type ItemId = i64;

/// Identifier of a [`Point`].
pub type PointId = i64;

/// Collectible waste category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier.
    pub id:    ItemId,
    /// Display title.
    pub title: String,
    /// Stored image file name, resolved to a URL on output.
    pub image: String
}

/// Collection point as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Unique identifier.
    pub id:        PointId,
    /// Stored image file name.
    pub image:     String,
    /// Point name.
    pub name:      String,
    /// Contact email.
    pub email:     String,
    /// WhatsApp number, digits only.
    pub whatsapp:  String,
    /// Latitude in degrees.
    pub latitude:  f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// City name.
    pub city:      String,
    /// Two-letter state code.
    pub uf:        String
}

/// Point columns written on insert; the store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct InsertablePoint {
    /// Stored image file name.
    pub image:     String,
    /// Point name.
    pub name:      String,
    /// Contact email.
    pub email:     String,
    /// WhatsApp number.
    pub whatsapp:  String,
    /// Latitude in degrees.
    pub latitude:  f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// City name.
    pub city:      String,
    /// State code.
    pub uf:        String
}

impl InsertablePoint {
    /// Combine a validated payload with the stored image name.
    pub fn new(payload: &NewPoint, image: impl Into<String>) -> Self {
        Self {
            image:     image.into(),
            name:      payload.name.clone(),
            email:     payload.email.clone(),
            whatsapp:  payload.whatsapp.clone(),
            latitude:  payload.latitude,
            longitude: payload.longitude,
            city:      payload.city.clone(),
            uf:        payload.uf.clone()
        }
    }

    /// Attach the id assigned by the store.
    pub fn with_id(self, id: PointId) -> Point {
        Point {
            id,
            image: self.image,
            name: self.name,
            email: self.email,
            whatsapp: self.whatsapp,
            latitude: self.latitude,
            longitude: self.longitude,
            city: self.city,
            uf: self.uf
        }
    }
}

/// Create payload for a collection point.
///
/// Scalar checks run through [`Validate`]; [`NewPoint::check`] adds the
/// rules the derive cannot express.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct NewPoint {
    /// Point name.
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    /// Contact email.
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,

    /// WhatsApp number, digits only.
    #[validate(length(min = 8, max = 20, message = "whatsapp must have 8 to 20 digits"))]
    pub whatsapp: String,

    /// Latitude in degrees, finite.
    #[validate(range(min = -90.0, max = 90.0, message = "latitude out of range"))]
    pub latitude: f64,

    /// Longitude in degrees, finite.
    #[validate(range(min = -180.0, max = 180.0, message = "longitude out of range"))]
    pub longitude: f64,

    /// City name.
    #[validate(length(min = 1, message = "city is required"))]
    pub city: String,

    /// Two-letter state code.
    #[validate(length(min = 1, max = 2, message = "uf must have at most 2 characters"))]
    pub uf: String,

    /// Accepted item ids.
    #[validate(length(min = 1, message = "at least one item is required"))]
    pub items: Vec<ItemId>
}

impl NewPoint {
    /// Run derived validation plus the finite-coordinate and digit-only
    /// whatsapp rules.
    pub fn check(&self) -> Result<()> {
        // Range checks pass NaN.
        if !self.latitude.is_finite() || !self.longitude.is_finite() {
            return Err(Error::validation("coordinates must be finite numbers"));
        }

        self.validate()?;

        if !self.whatsapp.chars().all(|c| c.is_ascii_digit()) {
            return Err(Error::validation("whatsapp must contain digits only"));
        }

        Ok(())
    }
}

/// Uploaded image as received from the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    /// File name sent by the client.
    pub file_name:    String,
    /// MIME type sent by the client.
    pub content_type: Option<String>,
    /// File contents.
    pub bytes:        Vec<u8>
}

impl ImageUpload {
    /// Upload without a content type.
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: None,
            bytes
        }
    }

    /// Set the MIME type.
    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

/// Parse a raw path segment into a [`PointId`].
///
/// # Errors
///
/// [`Error::MalformedId`] when the segment is not an integer.
pub fn parse_point_id(raw: &str) -> Result<PointId> {
    raw.trim()
        .parse()
        .map_err(|_| Error::MalformedId(raw.to_string()))
}

/// Categories shipped with a fresh database.
pub fn default_items() -> Vec<Item> {
    [
        (1, "Lâmpadas", "lampadas.svg"),
        (2, "Pilhas e Baterias", "baterias.svg"),
        (3, "Papéis e Papelão", "papeis-papelao.svg"),
        (4, "Resíduos Eletrônicos", "eletronicos.svg"),
        (5, "Resíduos Orgânicos", "organicos.svg"),
        (6, "Óleo de Cozinha", "oleo.svg")
    ]
    .into_iter()
    .map(|(id, title, image)| Item {
        id,
        title: title.to_string(),
        image: image.to_string()
    })
    .collect()
}
