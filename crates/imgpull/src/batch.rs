//! The per-record pipeline and the loop that drives it.
//!
//! Each record moves through
//! `existence check → fetch → normalize → persist`, never backtracking.
//! Any stage failure ends that record as [`ProcessingOutcome::Failed`]; the
//! loop records the identifier and carries on with the next row.

use std::fmt;
use std::path::{Path, PathBuf};

use imgpull_codec::CodecError;
use imgpull_fetch::{FetchError, Fetcher, HttpClient};
use tracing::{error, info};

use crate::layout::canonical_path;
use crate::manifest::{ManifestEntry, ManifestRecord};
use crate::ui::Tracker;

#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Persist(#[from] imgpull_fs::Error),
}

/// Coarse failure classes reported per record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    InvalidSource,
    Transfer,
    Decode,
    Encode,
    Write,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidSource => write!(f, "invalid-source"),
            FailureKind::Transfer => write!(f, "transfer"),
            FailureKind::Decode => write!(f, "decode"),
            FailureKind::Encode => write!(f, "encode"),
            FailureKind::Write => write!(f, "write"),
        }
    }
}

impl RecordError {
    pub fn kind(&self) -> FailureKind {
        match self {
            RecordError::Fetch(e) if e.is_invalid_source() => FailureKind::InvalidSource,
            RecordError::Fetch(_) => FailureKind::Transfer,
            RecordError::Codec(CodecError::Decode(_)) => FailureKind::Decode,
            RecordError::Codec(CodecError::Encode(_)) => FailureKind::Encode,
            RecordError::Persist(_) => FailureKind::Write,
        }
    }
}

#[derive(Debug)]
pub enum ProcessingOutcome {
    /// The canonical file was already there; nothing was fetched.
    Skipped,
    /// Fetched, normalized and written.
    Completed,
    Failed {
        identifier: String,
        error: RecordError,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchResult {
    pub skipped: u64,
    pub fetched: u64,
    pub malformed_rows: u64,
    pub failed_identifiers: Vec<String>,
}

impl BatchResult {
    /// Records considered done: already present plus newly written.
    pub fn completed_count(&self) -> u64 {
        self.skipped + self.fetched
    }
}

pub struct BatchRunner<C: HttpClient> {
    fetcher: Fetcher<C>,
    output_dir: PathBuf,
    write_options: imgpull_fs::Options,
}

impl<C: HttpClient> BatchRunner<C> {
    pub fn new(fetcher: Fetcher<C>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            fetcher,
            output_dir: output_dir.into(),
            write_options: imgpull_fs::Options::new(),
        }
    }

    pub fn with_write_options(mut self, options: imgpull_fs::Options) -> Self {
        self.write_options = options;
        self
    }

    /// Drive a single record to a terminal outcome.
    pub fn process(&self, record: &ManifestRecord) -> ProcessingOutcome {
        let target = canonical_path(&self.output_dir, &record.destination_name);

        if imgpull_fs::is_regular_file(&target) {
            info!(identifier = %record.identifier, "File already exists: {}", target.display());
            return ProcessingOutcome::Skipped;
        }

        match self.pull(record, &target) {
            Ok(()) => ProcessingOutcome::Completed,
            Err(error) => ProcessingOutcome::Failed {
                identifier: record.identifier.clone(),
                error,
            },
        }
    }

    fn pull(&self, record: &ManifestRecord, target: &Path) -> Result<(), RecordError> {
        info!(identifier = %record.identifier, "Downloading: {}", record.source_url);
        info!(identifier = %record.identifier, "Saving to: {}", target.display());

        let bytes = self.fetcher.fetch(&record.source_url)?;
        let image = imgpull_codec::normalize(&bytes)?;
        tracing::debug!(
            identifier = %record.identifier,
            width = image.width,
            height = image.height,
            source_format = ?image.source_format,
            "normalized"
        );
        imgpull_fs::atomic_write(target, &image.bytes, self.write_options)?;

        Ok(())
    }

    /// Process `entries` in order and tally the results.
    ///
    /// Malformed rows are logged and counted but otherwise ignored.
    pub fn run<'a, I, T>(&self, entries: I, tracker: &T) -> BatchResult
    where
        I: IntoIterator<Item = &'a ManifestEntry>,
        T: Tracker<u64>,
    {
        let mut result = BatchResult::default();

        for entry in entries {
            match entry {
                ManifestEntry::Malformed(row) => {
                    error!(line = row.line, "Error row size: {:?}", row.fields);
                    result.malformed_rows += 1;
                }
                ManifestEntry::Record(record) => {
                    tracker.message(&record.identifier);
                    match self.process(record) {
                        ProcessingOutcome::Skipped => {
                            result.skipped += 1;
                            info!("Completed: {}", result.completed_count());
                        }
                        ProcessingOutcome::Completed => {
                            result.fetched += 1;
                            info!("Completed: {}", result.completed_count());
                        }
                        ProcessingOutcome::Failed { identifier, error } => {
                            error!(
                                identifier = %identifier,
                                kind = %error.kind(),
                                "Error processing {identifier}: {error}"
                            );
                            result.failed_identifiers.push(identifier);
                        }
                    }
                }
            }
            tracker.step(1);
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_completed_count_includes_skipped() {
        let result = BatchResult {
            skipped: 2,
            fetched: 3,
            malformed_rows: 7,
            failed_identifiers: vec!["9".to_string()],
        };
        assert_eq!(result.completed_count(), 5);
    }

    #[test]
    fn test_failure_kinds() {
        let invalid = RecordError::from(imgpull_fetch::parse_source("nope").unwrap_err());
        assert_eq!(invalid.kind(), FailureKind::InvalidSource);

        let status = RecordError::from(FetchError::Status {
            url: "http://example.test".to_string(),
            status: 500,
        });
        assert_eq!(status.kind(), FailureKind::Transfer);

        let decode = RecordError::from(imgpull_codec::normalize(b"nope").unwrap_err());
        assert_eq!(decode.kind(), FailureKind::Decode);

        let float = image::DynamicImage::ImageRgb32F(image::Rgb32FImage::new(2, 2));
        let mut tiff = std::io::Cursor::new(Vec::new());
        float.write_to(&mut tiff, image::ImageFormat::Tiff).unwrap();
        let encode = RecordError::from(imgpull_codec::normalize(tiff.get_ref()).unwrap_err());
        assert_eq!(encode.kind(), FailureKind::Encode);

        let write = RecordError::from(imgpull_fs::Error::Write {
            path: PathBuf::from("/x.png"),
            source: std::io::Error::other("disk full"),
        });
        assert_eq!(write.kind(), FailureKind::Write);
        assert_eq!(write.kind().to_string(), "write");
    }
}
