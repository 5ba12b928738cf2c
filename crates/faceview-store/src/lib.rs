//! faceview-store — Filesystem persistence for enrolled identity profiles.
//!
//! One human-readable JSON document and one canonical profile image per
//! identity, keyed by the sanitized display name. Writes happen only
//! during enrollment; the recognition flow reads.

pub mod record;
pub mod store;

pub use record::{storage_key, IdentityDetails, IdentityRecord};
pub use store::{RecordStore, StoreError};
