// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Multipart create-point form.
//!
//! Scalar fields arrive as text parts; `items` may be one comma-joined part
//! or several parts; `image` is the uploaded file.

use axum::extract::Multipart;
use ecoleta_core::{Error, ImageUpload, ItemIds, NewPoint};
use masterror::AppError;

use crate::error::{app_error, multipart_error};

/// Fields collected from a `POST /points` body.
#[derive(Debug, Default)]
pub struct PointForm {
    /// `name` part.
    pub name:      Option<String>,
    /// `email` part.
    pub email:     Option<String>,
    /// `whatsapp` part.
    pub whatsapp:  Option<String>,
    /// `latitude` part.
    pub latitude:  Option<String>,
    /// `longitude` part.
    pub longitude: Option<String>,
    /// `city` part.
    pub city:      Option<String>,
    /// `uf` part.
    pub uf:        Option<String>,
    /// All `items` and `items[]` parts.
    pub items:     Vec<String>,
    /// The `image` file part.
    pub image:     Option<ImageUpload>
}

impl PointForm {
    /// Drain a multipart stream into the form.
    pub async fn read(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
            let Some(name) = field.name().map(str::to_owned) else {
                continue;
            };

            if name == "image" {
                let file_name = field.file_name().unwrap_or("image").to_owned();
                let content_type = field.content_type().map(str::to_owned);
                let bytes = field.bytes().await.map_err(multipart_error)?;
                form.image = Some(ImageUpload {
                    file_name,
                    content_type,
                    bytes: bytes.to_vec()
                });
                continue;
            }

            let value = field.text().await.map_err(multipart_error)?;
            form.set(&name, value);
        }

        Ok(form)
    }

    /// Assign a text field by name. Unknown names are ignored.
    pub fn set(&mut self, name: &str, value: String) {
        match name {
            "name" => self.name = Some(value),
            "email" => self.email = Some(value),
            "whatsapp" => self.whatsapp = Some(value),
            "latitude" => self.latitude = Some(value),
            "longitude" => self.longitude = Some(value),
            "city" => self.city = Some(value),
            "uf" => self.uf = Some(value),
            "items" | "items[]" => self.items.push(value),
            _ => tracing::debug!(field = name, "Ignoring unknown form field")
        }
    }

    /// Split into the create payload and the optional image.
    pub fn into_parts(self) -> Result<(NewPoint, Option<ImageUpload>), AppError> {
        self.parse().map_err(app_error)
    }

    fn parse(self) -> Result<(NewPoint, Option<ImageUpload>), Error> {
        let payload = NewPoint {
            name:      required("name", self.name)?,
            email:     required("email", self.email)?,
            whatsapp:  required("whatsapp", self.whatsapp)?.trim().to_string(),
            latitude:  coordinate("latitude", self.latitude)?,
            longitude: coordinate("longitude", self.longitude)?,
            city:      required("city", self.city)?,
            uf:        required("uf", self.uf)?,
            items:     ItemIds::parse(&self.items)?.to_vec()
        };
        Ok((payload, self.image))
    }
}

fn required(field: &str, value: Option<String>) -> Result<String, Error> {
    value.ok_or_else(|| Error::validation(format!("field `{field}` is required")))
}

fn coordinate(field: &str, value: Option<String>) -> Result<f64, Error> {
    let raw = required(field, value)?;
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| Error::validation(format!("field `{field}` must be a number")))
}
