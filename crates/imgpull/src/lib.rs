//! Pull every image listed in a tab-separated manifest, normalize it to PNG
//! and place it under an output directory.
//!
//! Records run strictly one after another through
//! existence check → fetch → normalize → persist. A failing record is
//! recorded and skipped over; only manifest-level problems stop a run.

pub mod batch;
pub mod cli;
pub mod layout;
pub mod manifest;
pub mod report;
pub mod telemetry;
pub mod ui;

pub use batch::{BatchResult, BatchRunner, FailureKind, ProcessingOutcome, RecordError};
pub use layout::canonical_path;
pub use manifest::{Manifest, ManifestEntry, ManifestError, ManifestRecord, MalformedRow, read_manifest};
pub use report::write_failures;
