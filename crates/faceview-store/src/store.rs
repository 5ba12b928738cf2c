//! Filesystem-backed record store.
//!
//! Layout:
//! - `<details_root>/<key>_details.json` — one document per identity
//! - `<image_root>/<key>/profile_image<ext>` — one canonical image
//!
//! No in-memory caching; every read re-touches disk.

use crate::record::{storage_key, IdentityRecord};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to create storage root {path}: {source}")]
    Init { path: PathBuf, source: io::Error },
    #[error("failed to encode record for {name}: {source}")]
    RecordEncode {
        name: String,
        source: serde_json::Error,
    },
    #[error("failed to write record {path}: {source}")]
    RecordWrite { path: PathBuf, source: io::Error },
    #[error("image not found or not a regular file: {0}")]
    ImageNotFound(PathBuf),
    #[error("failed to save profile image {path}: {source}")]
    ImageWrite { path: PathBuf, source: io::Error },
    #[error("failed to read record {path}: {source}")]
    RecordRead { path: PathBuf, source: io::Error },
    #[error("corrupt record {path}: {source}")]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Handle on the two storage roots.
pub struct RecordStore {
    details_root: PathBuf,
    image_root: PathBuf,
}

impl RecordStore {
    /// Enrollment-side constructor: ensures both storage roots exist,
    /// creating them if absent. Must succeed before any field collection
    /// starts.
    pub fn create(details_root: PathBuf, image_root: PathBuf) -> Result<Self, StoreError> {
        for root in [&details_root, &image_root] {
            if !root.exists() {
                fs::create_dir_all(root).map_err(|source| StoreError::Init {
                    path: root.clone(),
                    source,
                })?;
                tracing::info!(path = %root.display(), "created storage root");
            }
        }
        Ok(Self {
            details_root,
            image_root,
        })
    }

    /// Recognition-side constructor: a read handle that touches nothing
    /// on disk.
    pub fn open(details_root: PathBuf, image_root: PathBuf) -> Self {
        Self {
            details_root,
            image_root,
        }
    }

    fn record_path(&self, key: &str) -> PathBuf {
        self.details_root.join(format!("{key}_details.json"))
    }

    /// Serialize the full record (Image Path included) to its document,
    /// overwriting any existing document with the same key.
    pub fn save_record(&self, record: &IdentityRecord) -> Result<PathBuf, StoreError> {
        let path = self.record_path(&record.key());
        let json =
            serde_json::to_string_pretty(record).map_err(|source| StoreError::RecordEncode {
                name: record.name.clone(),
                source,
            })?;

        if path.exists() {
            tracing::info!(path = %path.display(), "overwriting existing record");
        }
        fs::write(&path, json).map_err(|source| StoreError::RecordWrite {
            path: path.clone(),
            source,
        })?;

        tracing::info!(path = %path.display(), "record saved");
        Ok(path)
    }

    /// Copy the enrollment image to `<image_root>/<key>/profile_image<ext>`,
    /// preserving the source extension and overwriting any prior image for
    /// the same identity.
    pub fn save_profile_image(&self, record: &IdentityRecord) -> Result<PathBuf, StoreError> {
        let source_path = Path::new(&record.image_path);
        if !source_path.is_file() {
            return Err(StoreError::ImageNotFound(source_path.to_path_buf()));
        }

        let dir = self.image_root.join(record.key());
        fs::create_dir_all(&dir).map_err(|source| StoreError::ImageWrite {
            path: dir.clone(),
            source,
        })?;

        let file_name = match source_path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) => format!("profile_image.{ext}"),
            None => "profile_image".to_string(),
        };
        let target = dir.join(file_name);

        fs::copy(source_path, &target).map_err(|source| StoreError::ImageWrite {
            path: target.clone(),
            source,
        })?;

        tracing::info!(path = %target.display(), "profile image saved");
        Ok(target)
    }

    /// Load the record for a display name. Absent document → `Ok(None)`;
    /// a document that exists but cannot be parsed is `Corrupt`.
    pub fn load_record(&self, name: &str) -> Result<Option<IdentityRecord>, StoreError> {
        let path = self.record_path(&storage_key(name));
        if !path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&path).map_err(|source| StoreError::RecordRead {
            path: path.clone(),
            source,
        })?;
        let record = serde_json::from_str(&json).map_err(|source| StoreError::Corrupt {
            path: path.clone(),
            source,
        })?;
        Ok(Some(record))
    }
}
