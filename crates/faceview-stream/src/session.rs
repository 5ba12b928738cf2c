//! Recognition session — the explicit per-process context for the live
//! identification loop.
//!
//! Built once at startup from the loaded gallery, a record-store read
//! handle, and the match threshold; every operation afterwards is a pure
//! read against that context.

use crate::frame::ProbeFrame;
use crate::source::{FrameSource, StreamError};
use faceview_core::{Embedding, Gallery, Matcher, VoteMatcher, UNKNOWN_LABEL};
use faceview_store::{IdentityDetails, RecordStore};

/// One resolved face within a frame.
#[derive(Debug)]
pub struct Identification {
    /// Resolved identity label, or the "Unknown" sentinel.
    pub label: String,
    /// Profile details for a known identity, when a record exists.
    pub details: Option<IdentityDetails>,
}

pub struct RecognitionSession {
    gallery: Gallery,
    store: RecordStore,
    matcher: VoteMatcher,
    threshold: f32,
}

impl RecognitionSession {
    pub fn new(gallery: Gallery, store: RecordStore, threshold: f32) -> Self {
        tracing::info!(
            entries = gallery.len(),
            threshold,
            "recognition session ready"
        );
        Self {
            gallery,
            store,
            matcher: VoteMatcher,
            threshold,
        }
    }

    /// Resolve one probe embedding to an identity and its profile details.
    pub fn identify(&self, probe: &Embedding) -> Identification {
        let result = self.matcher.resolve(probe, &self.gallery, self.threshold);
        let details = self.retrieve_details(&result.label);
        Identification {
            label: result.label,
            details,
        }
    }

    /// Look up the profile document for a resolved label.
    ///
    /// The "Unknown" sentinel never touches storage. A missing or
    /// unreadable record is logged and skipped; the stream continues.
    pub fn retrieve_details(&self, label: &str) -> Option<IdentityDetails> {
        if label == UNKNOWN_LABEL {
            return None;
        }
        match self.store.load_record(label) {
            Ok(Some(record)) => Some(record.into_details()),
            Ok(None) => {
                tracing::warn!(label, "details not found");
                None
            }
            Err(err) => {
                tracing::warn!(label, error = %err, "failed to load details");
                None
            }
        }
    }

    /// Run the matcher for every detected face in a frame, sequentially
    /// in detection order.
    pub fn process_frame(&self, frame: &ProbeFrame) -> Vec<Identification> {
        frame.faces.iter().map(|probe| self.identify(probe)).collect()
    }

    /// Single-threaded frame loop: blocks on the source, hands each
    /// processed frame to `on_frame`, exits cleanly at end of stream.
    /// The first source error terminates the loop.
    pub fn run<S, F>(&self, source: &mut S, mut on_frame: F) -> Result<(), StreamError>
    where
        S: FrameSource,
        F: FnMut(&ProbeFrame, &[Identification]),
    {
        tracing::info!("recognition loop started");
        while let Some(frame) = source.next_frame()? {
            let identifications = self.process_frame(&frame);
            on_frame(&frame, &identifications);
        }
        tracing::info!("recognition loop ended");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use faceview_core::GalleryEntry;
    use faceview_store::IdentityRecord;
    use std::path::PathBuf;

    fn sample_record(name: &str) -> IdentityRecord {
        IdentityRecord {
            name: name.into(),
            gender: "Female".into(),
            age: "34".into(),
            father_name: "John Doe".into(),
            mother_name: "Mary Doe".into(),
            date_of_birth: "1991-06-02".into(),
            mobile_number: "5550001234".into(),
            email: "jane@example.com".into(),
            address: "12 High Street".into(),
            pincode: "560001".into(),
            image_path: "/tmp/jane.jpg".into(),
        }
    }

    fn gallery_of(entries: &[(&str, Vec<f32>)]) -> Gallery {
        Gallery::from_entries(
            entries
                .iter()
                .map(|(label, values)| {
                    GalleryEntry::new(Embedding::new(values.clone()), *label)
                })
                .collect(),
        )
    }

    struct FixedSource {
        frames: Vec<ProbeFrame>,
    }

    impl FrameSource for FixedSource {
        fn next_frame(&mut self) -> Result<Option<ProbeFrame>, StreamError> {
            if self.frames.is_empty() {
                Ok(None)
            } else {
                Ok(Some(self.frames.remove(0)))
            }
        }
    }

    #[test]
    fn test_identify_known_label_with_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::create(
            dir.path().join("details"),
            dir.path().join("images"),
        )
        .unwrap();
        store.save_record(&sample_record("Jane Doe")).unwrap();

        let gallery = gallery_of(&[("Jane Doe", vec![0.1, 0.0])]);
        let store = RecordStore::open(dir.path().join("details"), dir.path().join("images"));
        let session = RecognitionSession::new(gallery, store, 0.6);

        let ident = session.identify(&Embedding::new(vec![0.0, 0.0]));
        assert_eq!(ident.label, "Jane Doe");
        let details = ident.details.unwrap();
        assert_eq!(details.name, "Jane Doe");
        assert_eq!(details.pincode, "560001");
    }

    #[test]
    fn test_identify_known_label_without_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::open(dir.path().join("details"), dir.path().join("images"));
        let gallery = gallery_of(&[("Ghost", vec![0.1, 0.0])]);
        let session = RecognitionSession::new(gallery, store, 0.6);

        // A gallery label with no stored record is legal: label resolves,
        // details stay absent, nothing errors.
        let ident = session.identify(&Embedding::new(vec![0.0, 0.0]));
        assert_eq!(ident.label, "Ghost");
        assert!(ident.details.is_none());
    }

    #[test]
    fn test_unknown_never_touches_storage() {
        // Roots that were never created: any filesystem access would
        // surface as a missing-record lookup, so assert on a session whose
        // store points nowhere.
        let store = RecordStore::open(
            PathBuf::from("/nonexistent/details"),
            PathBuf::from("/nonexistent/images"),
        );
        let session = RecognitionSession::new(gallery_of(&[]), store, 0.6);

        let ident = session.identify(&Embedding::new(vec![0.0, 0.0]));
        assert_eq!(ident.label, UNKNOWN_LABEL);
        assert!(ident.details.is_none());
        assert!(session.retrieve_details(UNKNOWN_LABEL).is_none());
    }

    #[test]
    fn test_corrupt_record_is_swallowed() {
        let dir = tempfile::tempdir().unwrap();
        let details_dir = dir.path().join("details");
        std::fs::create_dir_all(&details_dir).unwrap();
        std::fs::write(details_dir.join("Jane_Doe_details.json"), "{ broken").unwrap();

        let store = RecordStore::open(details_dir, dir.path().join("images"));
        let gallery = gallery_of(&[("Jane Doe", vec![0.1, 0.0])]);
        let session = RecognitionSession::new(gallery, store, 0.6);

        let ident = session.identify(&Embedding::new(vec![0.0, 0.0]));
        assert_eq!(ident.label, "Jane Doe");
        assert!(ident.details.is_none());
    }

    #[test]
    fn test_process_frame_keeps_detection_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::open(dir.path().join("details"), dir.path().join("images"));
        let gallery = gallery_of(&[("A", vec![0.0, 0.0]), ("B", vec![5.0, 5.0])]);
        let session = RecognitionSession::new(gallery, store, 0.5);

        let frame = ProbeFrame {
            faces: vec![
                Embedding::new(vec![5.0, 5.0]),
                Embedding::new(vec![0.0, 0.0]),
                Embedding::new(vec![50.0, 50.0]),
            ],
            sequence: 0,
        };
        let idents = session.process_frame(&frame);
        let labels: Vec<&str> = idents.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, vec!["B", "A", UNKNOWN_LABEL]);
    }

    #[test]
    fn test_run_processes_every_frame_until_end() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::open(dir.path().join("details"), dir.path().join("images"));
        let gallery = gallery_of(&[("A", vec![0.0, 0.0])]);
        let session = RecognitionSession::new(gallery, store, 0.5);

        let mut source = FixedSource {
            frames: vec![
                ProbeFrame {
                    faces: vec![Embedding::new(vec![0.0, 0.0])],
                    sequence: 0,
                },
                ProbeFrame {
                    faces: vec![],
                    sequence: 1,
                },
                ProbeFrame {
                    faces: vec![Embedding::new(vec![9.0, 9.0])],
                    sequence: 2,
                },
            ],
        };

        let mut seen = Vec::new();
        session
            .run(&mut source, |frame, idents| {
                seen.push((frame.sequence, idents.len()));
            })
            .unwrap();

        assert_eq!(seen, vec![(0, 1), (1, 0), (2, 1)]);
    }
}
