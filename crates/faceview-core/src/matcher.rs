//! Identity resolution by threshold voting over the gallery.

use crate::gallery::Gallery;
use crate::types::Embedding;

/// Reserved no-match sentinel label.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Result of resolving a probe embedding against a gallery.
#[derive(Debug, Clone)]
pub struct MatchResult {
    pub matched: bool,
    /// Resolved identity label; [`UNKNOWN_LABEL`] when `matched` is false.
    pub label: String,
    /// Number of gallery entries that voted for the winning label.
    pub votes: usize,
}

impl MatchResult {
    fn unknown() -> Self {
        Self {
            matched: false,
            label: UNKNOWN_LABEL.to_string(),
            votes: 0,
        }
    }
}

/// Strategy for resolving a probe embedding to an identity label.
pub trait Matcher {
    fn resolve(&self, probe: &Embedding, gallery: &Gallery, threshold: f32) -> MatchResult;
}

/// Majority-vote matcher over Euclidean distance.
///
/// Every gallery entry within `threshold` of the probe (inclusive) casts
/// one vote for its label; the label with the strictly highest vote count
/// wins. Ties are broken in favor of the label seen earliest in gallery
/// order.
pub struct VoteMatcher;

impl Matcher for VoteMatcher {
    fn resolve(&self, probe: &Embedding, gallery: &Gallery, threshold: f32) -> MatchResult {
        // Tally in first-seen gallery order; unmatched entries contribute
        // nothing.
        let mut tally: Vec<(&str, usize)> = Vec::new();

        for entry in gallery.entries() {
            if probe.euclidean_distance(&entry.embedding) <= threshold {
                match tally.iter_mut().find(|(label, _)| *label == entry.label) {
                    Some((_, count)) => *count += 1,
                    None => tally.push((entry.label.as_str(), 1)),
                }
            }
        }

        let mut winner: Option<(&str, usize)> = None;
        for &(label, count) in &tally {
            let better = match winner {
                Some((_, best)) => count > best,
                None => true,
            };
            if better {
                winner = Some((label, count));
            }
        }

        match winner {
            Some((label, votes)) => MatchResult {
                matched: true,
                label: label.to_string(),
                votes,
            },
            None => MatchResult::unknown(),
        }
    }
}
