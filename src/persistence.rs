//! Storage backends for presentations.
//!
//! The store only talks to [`PresentationRepository`]; which backend sits
//! behind it (memory, a directory of JSON files, a network API) is up to the
//! application.

use crate::error::{EditorError, Result};
use crate::presentation::Presentation;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Persistence collaborator.
pub trait PresentationRepository {
    /// `Ok(None)` means the id is unknown; `Err` means the backend failed.
    fn load(&self, id: &str) -> Result<Option<Presentation>>;

    /// Store `presentation` under its id, replacing any previous version.
    fn save(&mut self, presentation: &Presentation) -> Result<()>;

    fn list(&self) -> Result<Vec<Presentation>>;

    /// Like [`load`](Self::load), but a missing id is an error.
    fn fetch(&self, id: &str) -> Result<Presentation> {
        self.load(id)?
            .ok_or_else(|| EditorError::PresentationNotFound(id.to_string()))
    }
}

/// Keeps presentations in a map; handy for tests and scratch documents.
#[derive(Debug, Default, Clone)]
pub struct MemoryRepository {
    presentations: BTreeMap<String, Presentation>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.presentations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presentations.is_empty()
    }
}

impl PresentationRepository for MemoryRepository {
    fn load(&self, id: &str) -> Result<Option<Presentation>> {
        Ok(self.presentations.get(id).cloned())
    }

    fn save(&mut self, presentation: &Presentation) -> Result<()> {
        self.presentations
            .insert(presentation.id.clone(), presentation.clone());
        Ok(())
    }

    fn list(&self) -> Result<Vec<Presentation>> {
        Ok(self.presentations.values().cloned().collect())
    }
}

/// One pretty-printed `<id>.json` file per presentation.
#[derive(Debug, Clone)]
pub struct JsonDirectoryRepository {
    root: PathBuf,
}

impl JsonDirectoryRepository {
    /// Use `root` as the storage directory, creating it if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, id: &str) -> Result<PathBuf> {
        // Ids become file names; refuse anything that could escape `root`.
        let valid = !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(EditorError::Storage(format!(
                "invalid presentation id: {id:?}"
            )));
        }
        Ok(self.root.join(format!("{id}.json")))
    }
}

impl PresentationRepository for JsonDirectoryRepository {
    fn load(&self, id: &str) -> Result<Option<Presentation>> {
        let path = self.path_for(id)?;
        if !path.exists() {
            return Ok(None);
        }
        let json = fs::read_to_string(&path)?;
        let presentation = serde_json::from_str(&json)?;
        tracing::debug!("Loaded presentation {} from {}", id, path.display());
        Ok(Some(presentation))
    }

    fn save(&mut self, presentation: &Presentation) -> Result<()> {
        let path = self.path_for(&presentation.id)?;
        let json = serde_json::to_string_pretty(presentation)?;
        // Write then rename so a failed write never truncates the old file.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &path)?;
        tracing::debug!(
            "Saved presentation {} to {}",
            presentation.id,
            path.display()
        );
        Ok(())
    }

    fn list(&self) -> Result<Vec<Presentation>> {
        let mut presentations = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let json = fs::read_to_string(&path)?;
            match serde_json::from_str::<Presentation>(&json) {
                Ok(p) => presentations.push(p),
                Err(err) => {
                    tracing::warn!("Skipping unreadable presentation {}: {}", path.display(), err)
                }
            }
        }
        presentations.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(presentations)
    }
}
