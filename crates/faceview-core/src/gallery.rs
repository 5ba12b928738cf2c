//! Gallery artifact loading.
//!
//! The gallery is produced by an external enrollment/training step as a
//! MessagePack document holding two positionally paired sequences:
//! `encodings` (embedding vectors) and `names` (identity labels). It is
//! loaded once at recognition startup and never mutated afterwards.

use crate::types::{Embedding, GalleryEntry};
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("gallery artifact not found: {0}")]
    NotFound(PathBuf),
    #[error("failed to read gallery artifact {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("malformed gallery artifact {path}: {source}")]
    Malformed {
        path: PathBuf,
        source: rmp_serde::decode::Error,
    },
    #[error("gallery artifact has {encodings} encodings but {names} names")]
    LengthMismatch { encodings: usize, names: usize },
    #[error("encoding {index} has {got} dimensions, expected {expected}")]
    RaggedEncodings {
        index: usize,
        expected: usize,
        got: usize,
    },
}

/// On-disk artifact layout. Public so enrollment tooling can write it.
#[derive(Debug, Serialize, Deserialize)]
pub struct GalleryFile {
    pub encodings: Vec<Embedding>,
    pub names: Vec<String>,
}

/// Immutable snapshot of every enrolled (embedding, label) pair, in
/// artifact order.
#[derive(Debug, Clone)]
pub struct Gallery {
    entries: Vec<GalleryEntry>,
}

impl Gallery {
    /// Load and validate the gallery artifact at `path`.
    ///
    /// Fails on a missing or undecodable artifact, on sequence length
    /// mismatch, and on encodings of differing dimension.
    pub fn load(path: &Path) -> Result<Self, GalleryError> {
        if !path.exists() {
            return Err(GalleryError::NotFound(path.to_path_buf()));
        }

        let bytes = std::fs::read(path).map_err(|source| GalleryError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let file: GalleryFile =
            rmp_serde::from_slice(&bytes).map_err(|source| GalleryError::Malformed {
                path: path.to_path_buf(),
                source,
            })?;

        if file.encodings.len() != file.names.len() {
            return Err(GalleryError::LengthMismatch {
                encodings: file.encodings.len(),
                names: file.names.len(),
            });
        }

        if let Some(first) = file.encodings.first() {
            let expected = first.dim();
            for (index, encoding) in file.encodings.iter().enumerate() {
                if encoding.dim() != expected {
                    return Err(GalleryError::RaggedEncodings {
                        index,
                        expected,
                        got: encoding.dim(),
                    });
                }
            }
        }

        let dim = file.encodings.first().map(Embedding::dim).unwrap_or(0);
        let entries: Vec<GalleryEntry> = file
            .encodings
            .into_iter()
            .zip(file.names)
            .map(|(embedding, label)| GalleryEntry { embedding, label })
            .collect();

        tracing::info!(
            path = %path.display(),
            entries = entries.len(),
            dim,
            "gallery loaded"
        );

        Ok(Self { entries })
    }

    /// Build a gallery directly from entries (tests, in-process tooling).
    pub fn from_entries(entries: Vec<GalleryEntry>) -> Self {
        Self { entries }
    }

    /// Entries in gallery order; vote tie-breaking follows this order.
    pub fn entries(&self) -> &[GalleryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_artifact(dir: &tempfile::TempDir, file: &GalleryFile) -> PathBuf {
        let path = dir.path().join("face_enc");
        std::fs::write(&path, rmp_serde::to_vec_named(file).unwrap()).unwrap();
        path
    }

    #[test]
    fn test_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_artifact(
            &dir,
            &GalleryFile {
                encodings: vec![
                    Embedding::new(vec![0.1, 0.2]),
                    Embedding::new(vec![0.3, 0.4]),
                ],
                names: vec!["Jane Doe".into(), "John Roe".into()],
            },
        );

        let gallery = Gallery::load(&path).unwrap();
        assert_eq!(gallery.len(), 2);
        assert_eq!(gallery.entries()[0].label, "Jane Doe");
        assert_eq!(gallery.entries()[1].embedding.values, vec![0.3, 0.4]);
    }

    #[test]
    fn test_load_missing_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let result = Gallery::load(&dir.path().join("no_such_file"));
        assert!(matches!(result, Err(GalleryError::NotFound(_))));
    }

    #[test]
    fn test_load_garbage_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("face_enc");
        std::fs::write(&path, b"not a gallery").unwrap();
        let result = Gallery::load(&path);
        assert!(matches!(result, Err(GalleryError::Malformed { .. })));
    }

    #[test]
    fn test_load_length_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_artifact(
            &dir,
            &GalleryFile {
                encodings: vec![Embedding::new(vec![0.1])],
                names: vec!["A".into(), "B".into()],
            },
        );
        let result = Gallery::load(&path);
        assert!(matches!(
            result,
            Err(GalleryError::LengthMismatch {
                encodings: 1,
                names: 2
            })
        ));
    }

    #[test]
    fn test_load_ragged_encodings() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_artifact(
            &dir,
            &GalleryFile {
                encodings: vec![
                    Embedding::new(vec![0.1, 0.2]),
                    Embedding::new(vec![0.3]),
                ],
                names: vec!["A".into(), "B".into()],
            },
        );
        let result = Gallery::load(&path);
        assert!(matches!(
            result,
            Err(GalleryError::RaggedEncodings {
                index: 1,
                expected: 2,
                got: 1
            })
        ));
    }

    #[test]
    fn test_load_empty_artifact_is_legal() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_artifact(
            &dir,
            &GalleryFile {
                encodings: vec![],
                names: vec![],
            },
        );
        let gallery = Gallery::load(&path).unwrap();
        assert!(gallery.is_empty());
    }
}
