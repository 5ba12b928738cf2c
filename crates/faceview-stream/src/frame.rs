use faceview_core::Embedding;
use serde::Deserialize;

/// Embeddings for every face detected in one captured frame, in
/// detection order.
#[derive(Debug, Clone, Deserialize)]
pub struct ProbeFrame {
    pub faces: Vec<Embedding>,
    /// Monotonic frame sequence number, assigned by the source.
    #[serde(default)]
    pub sequence: u64,
}

impl ProbeFrame {
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }
}
