use serde::{Deserialize, Serialize};

/// Face embedding vector (128-dimensional for the dlib-style encoder).
///
/// Serializes transparently as a plain array, keeping gallery artifacts
/// written by external enrollment tooling a pair of flat sequences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Embedding {
    pub values: Vec<f32>,
}

impl Embedding {
    pub fn new(values: Vec<f32>) -> Self {
        Self { values }
    }

    pub fn dim(&self) -> usize {
        self.values.len()
    }

    /// Compute Euclidean distance between two embeddings.
    pub fn euclidean_distance(&self, other: &Embedding) -> f32 {
        self.values
            .iter()
            .zip(other.values.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f32>()
            .sqrt()
    }
}

/// One enrolled gallery entry: an embedding and the identity it belongs to.
///
/// Multiple entries may carry the same label (re-enrollment, several
/// photos of one person). The label is a free-text join key against the
/// record store, not an enforced foreign key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryEntry {
    pub embedding: Embedding,
    pub label: String,
}

impl GalleryEntry {
    pub fn new(embedding: Embedding, label: impl Into<String>) -> Self {
        Self {
            embedding,
            label: label.into(),
        }
    }
}
