//! Live recognition loop over an embedding stream.

use crate::config::Config;
use anyhow::{Context, Result};
use faceview_core::Gallery;
use faceview_store::RecordStore;
use faceview_stream::{Identification, JsonlSource, ProbeFrame, RecognitionSession};
use std::io;
use std::path::Path;

pub fn run(config: &Config, input: Option<&Path>) -> Result<()> {
    // Gallery load failure is fatal: recognition cannot run without one.
    let gallery = Gallery::load(&config.gallery_path)
        .context("recognition cannot start without a gallery")?;

    let store = RecordStore::open(config.details_dir.clone(), config.image_dir.clone());
    let session = RecognitionSession::new(gallery, store, config.match_threshold);

    println!("Streaming started");
    let outcome = match input {
        Some(path) => {
            let mut source = JsonlSource::open(path)?;
            session.run(&mut source, print_frame)
        }
        None => {
            let stdin = io::stdin();
            let mut source = JsonlSource::from_reader(stdin.lock());
            session.run(&mut source, print_frame)
        }
    };

    outcome.context("embedding stream failed")?;
    Ok(())
}

fn print_frame(frame: &ProbeFrame, identifications: &[Identification]) {
    for ident in identifications {
        println!("frame {}: {}", frame.sequence, ident.label);
        if let Some(details) = &ident.details {
            for (label, value) in details.fields() {
                println!("  {label}: {value}");
            }
        }
    }
}
