//! faceview-stream — Recognition runtime for live embedding streams.
//!
//! Capture, face detection, and embedding extraction happen in an
//! external pipeline; frames arrive here as sets of already-extracted
//! embeddings. The session resolves each probe against the gallery and
//! attaches profile details for known identities.

pub mod frame;
pub mod session;
pub mod source;

pub use frame::ProbeFrame;
pub use session::{Identification, RecognitionSession};
pub use source::{FrameSource, JsonlSource, StreamError};
