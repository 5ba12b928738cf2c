//! Frame sources — the seam to the external capture/detection/encoding
//! pipeline.

use crate::frame::ProbeFrame;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StreamError {
    #[error("failed to open embedding stream {path}: {source}")]
    Open { path: PathBuf, source: io::Error },
    #[error("failed to read from embedding stream: {0}")]
    Read(#[from] io::Error),
    #[error("malformed frame at line {line}: {source}")]
    MalformedFrame {
        line: u64,
        source: serde_json::Error,
    },
}

/// Source of per-frame probe embeddings.
///
/// `Ok(None)` signals a clean end of stream (the terminate signal); any
/// error is fatal to the recognition loop.
pub trait FrameSource {
    fn next_frame(&mut self) -> Result<Option<ProbeFrame>, StreamError>;
}

/// JSON Lines frame source: one frame object per line,
/// `{"faces": [[…], …]}`, the way an external detector process pipes
/// frames in. Blank lines are skipped.
pub struct JsonlSource<R> {
    reader: R,
    line: u64,
    next_sequence: u64,
}

impl JsonlSource<BufReader<File>> {
    pub fn open(path: &Path) -> Result<Self, StreamError> {
        let file = File::open(path).map_err(|source| StreamError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "embedding stream opened");
        Ok(Self::from_reader(BufReader::new(file)))
    }
}

impl<R: BufRead> JsonlSource<R> {
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader,
            line: 0,
            next_sequence: 0,
        }
    }
}

impl<R: BufRead> FrameSource for JsonlSource<R> {
    fn next_frame(&mut self) -> Result<Option<ProbeFrame>, StreamError> {
        let mut buf = String::new();
        loop {
            buf.clear();
            if self.reader.read_line(&mut buf)? == 0 {
                return Ok(None);
            }
            self.line += 1;

            let trimmed = buf.trim();
            if trimmed.is_empty() {
                continue;
            }

            let mut frame: ProbeFrame = serde_json::from_str(trimmed).map_err(|source| {
                StreamError::MalformedFrame {
                    line: self.line,
                    source,
                }
            })?;
            frame.sequence = self.next_sequence;
            self.next_sequence += 1;
            return Ok(Some(frame));
        }
    }
}
