// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Uploaded image storage and public URL resolution.

use async_trait::async_trait;
use uuid::Uuid;

use crate::model::ImageUpload;

/// Storage for uploaded point images.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Error type for storage operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Persist an upload and return the servable file name.
    async fn store(&self, upload: &ImageUpload) -> Result<String, Self::Error>;

    /// Remove a previously stored file.
    async fn discard(&self, name: &str) -> Result<(), Self::Error>;
}

/// Generate a unique stored name for an upload.
///
/// Format: 12 random hex characters, `-`, then the sanitized original name.
pub fn stored_name(original: &str) -> String {
    let random = Uuid::new_v4().simple().to_string();
    format!("{}-{}", &random[..12], sanitize_file_name(original))
}

/// Keep the last path component and replace anything outside
/// `[A-Za-z0-9._-]` with `_`.
pub fn sanitize_file_name(original: &str) -> String {
    let base = original
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim_start_matches('.');

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if cleaned.is_empty() {
        "image".to_string()
    } else {
        cleaned
    }
}

/// Resolves stored image names to fully-qualified URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUrls {
    base: String
}

impl ImageUrls {
    /// # Arguments
    ///
    /// * `public_url` — Externally reachable server URL, e.g.
    ///   `http://192.168.0.10:3333`
    pub fn new(public_url: impl Into<String>) -> Self {
        let mut base = public_url.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self {
            base
        }
    }

    /// Public URL of a stored file name.
    pub fn resolve(&self, name: &str) -> String {
        format!("{}/uploads/{}", self.base, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_joins_uploads_path() {
        let urls = ImageUrls::new("http://localhost:3333/");
        assert_eq!(urls.resolve("oleo.svg"), "http://localhost:3333/uploads/oleo.svg");
    }

    #[test]
    fn sanitize_strips_directories() {
        assert_eq!(sanitize_file_name("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_file_name("C:\\photos\\ponto.jpg"), "ponto.jpg");
    }

    #[test]
    fn sanitize_replaces_unsafe_chars() {
        assert_eq!(sanitize_file_name("foto do ponto (1).png"), "foto_do_ponto__1_.png");
    }

    #[test]
    fn sanitize_falls_back_for_empty() {
        assert_eq!(sanitize_file_name(""), "image");
        assert_eq!(sanitize_file_name("..."), "image");
    }

    #[test]
    fn stored_name_has_random_prefix() {
        let a = stored_name("ponto.png");
        let b = stored_name("ponto.png");
        assert_ne!(a, b);
        assert!(a.ends_with("-ponto.png"));
        assert_eq!(a.find('-'), Some(12));
    }
}
