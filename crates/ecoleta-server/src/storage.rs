// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Disk-backed image storage under the upload directory.

use std::{
    io,
    path::{Path, PathBuf}
};

use async_trait::async_trait;
use ecoleta_core::{ImageStore, ImageUpload, image::stored_name};
use tokio::fs;

/// Writes uploads into a directory served at `/uploads`.
#[derive(Debug, Clone)]
pub struct DiskImageStore {
    root: PathBuf
}

impl DiskImageStore {
    /// Create the store, creating `root` if needed.
    pub async fn open(root: impl Into<PathBuf>) -> io::Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root).await?;
        Ok(Self {
            root
        })
    }

    /// Directory files are written to.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl ImageStore for DiskImageStore {
    type Error = io::Error;

    async fn store(&self, upload: &ImageUpload) -> Result<String, Self::Error> {
        let name = stored_name(&upload.file_name);
        fs::write(self.root.join(&name), &upload.bytes).await?;
        tracing::debug!(image = %name, bytes = upload.bytes.len(), "Stored upload");
        Ok(name)
    }

    async fn discard(&self, name: &str) -> Result<(), Self::Error> {
        fs::remove_file(self.root.join(name)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn store_and_discard() {
        let dir = tempfile::tempdir().unwrap();
        let store = DiskImageStore::open(dir.path().join("uploads")).await.unwrap();

        let name = store
            .store(&ImageUpload::new("../ponto.png", vec![1, 2, 3]))
            .await
            .unwrap();
        assert!(name.ends_with("-ponto.png"));

        let path = store.root().join(&name);
        assert_eq!(fs::read(&path).await.unwrap(), vec![1, 2, 3]);

        store.discard(&name).await.unwrap();
        assert!(!path.exists());
    }
}
