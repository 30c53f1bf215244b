//! Uploaded media.
//!
//! The document never embeds binary data; image content and backgrounds
//! store the URL an [`AssetUploader`] hands back.

use crate::content::generate_id;
use crate::error::{EditorError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File extensions accepted for upload.
pub const ACCEPTED_IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "svg"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Image,
    Video,
    Audio,
    Icon,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRef {
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: AssetKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    pub uploaded_at: DateTime<Utc>,
}

/// Upload collaborator. Returns a reference whose `url` can be stored in
/// content.
pub trait AssetUploader {
    fn upload(&mut self, name: &str, bytes: &[u8]) -> Result<AssetRef>;
}

/// Whether `name` has one of the accepted image extensions.
pub fn is_accepted_image(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| ACCEPTED_IMAGE_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Copies uploads into a local directory and hands out `file://` URLs.
#[derive(Debug, Clone)]
pub struct DirectoryUploader {
    root: PathBuf,
}

impl DirectoryUploader {
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }
}

impl AssetUploader for DirectoryUploader {
    fn upload(&mut self, name: &str, bytes: &[u8]) -> Result<AssetRef> {
        if !is_accepted_image(name) {
            return Err(EditorError::Storage(format!("unsupported asset type: {name}")));
        }
        let file_name = Path::new(name)
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| EditorError::Storage(format!("invalid asset name: {name:?}")))?;

        let id = generate_id();
        let path = self.root.join(format!("{id}-{file_name}"));
        fs::write(&path, bytes)?;
        tracing::debug!("Stored asset {} at {}", name, path.display());

        let url = format!("file://{}", path.display());
        Ok(AssetRef {
            id,
            name: file_name.to_string(),
            thumbnail: Some(url.clone()),
            url,
            kind: AssetKind::Image,
            uploaded_at: Utc::now(),
        })
    }
}

/// The assets uploaded during a session.
#[derive(Debug, Clone, Default)]
pub struct AssetLibrary {
    assets: Vec<AssetRef>,
}

impl AssetLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upload through `uploader` and remember the result. Nothing is
    /// recorded on failure.
    pub fn upload<U>(&mut self, uploader: &mut U, name: &str, bytes: &[u8]) -> Result<AssetRef>
    where
        U: AssetUploader + ?Sized,
    {
        match uploader.upload(name, bytes) {
            Ok(asset) => {
                tracing::info!(asset_id = %asset.id, "Uploaded asset {}", asset.name);
                self.assets.push(asset.clone());
                Ok(asset)
            }
            Err(err) => {
                tracing::warn!("Upload of {} failed: {}", name, err);
                Err(err)
            }
        }
    }

    pub fn assets(&self) -> &[AssetRef] {
        &self.assets
    }

    pub fn get(&self, id: &str) -> Option<&AssetRef> {
        self.assets.iter().find(|a| a.id == id)
    }

    /// Case-insensitive substring match on the asset name. An empty query
    /// matches everything.
    pub fn search(&self, query: &str) -> Vec<&AssetRef> {
        let query = query.to_lowercase();
        self.assets
            .iter()
            .filter(|a| a.name.to_lowercase().contains(&query))
            .collect()
    }

    pub fn remove(&mut self, id: &str) -> Option<AssetRef> {
        let position = self.assets.iter().position(|a| a.id == id)?;
        Some(self.assets.remove(position))
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}
