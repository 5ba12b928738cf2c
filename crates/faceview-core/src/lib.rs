//! faceview-core — Embedding gallery and identity matching engine.
//!
//! Consumes face embeddings produced by an external encoder and resolves
//! each probe against an enrolled gallery by threshold voting.

pub mod gallery;
pub mod matcher;
pub mod types;

pub use gallery::{Gallery, GalleryError, GalleryFile};
pub use matcher::{MatchResult, Matcher, VoteMatcher, UNKNOWN_LABEL};
pub use types::{Embedding, GalleryEntry};
