//! Tab-separated manifest reader.
//!
//! A well-formed row has exactly three fields:
//! `source url <TAB> destination name <TAB> identifier`. Rows with any other
//! field count, the two-field layout included, are kept as [`MalformedRow`]
//! so the runner can log them; they never reach the pipeline.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

pub const FIELD_COUNT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestRecord {
    pub source_url: String,
    pub destination_name: String,
    pub identifier: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedRow {
    /// 1-based line in the manifest file.
    pub line: u64,
    pub fields: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestEntry {
    Record(ManifestRecord),
    Malformed(MalformedRow),
}

#[derive(Debug, Default)]
pub struct Manifest {
    pub entries: Vec<ManifestEntry>,
}

impl Manifest {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = &ManifestRecord> {
        self.entries.iter().filter_map(|entry| match entry {
            ManifestEntry::Record(record) => Some(record),
            ManifestEntry::Malformed(_) => None,
        })
    }

    pub fn malformed(&self) -> impl Iterator<Item = &MalformedRow> {
        self.entries.iter().filter_map(|entry| match entry {
            ManifestEntry::Malformed(row) => Some(row),
            ManifestEntry::Record(_) => None,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Error reading file: {}: {source}", path.display())]
    Unreadable { path: PathBuf, source: io::Error },

    #[error("Error parsing file: {}: {source}", path.display())]
    Parse { path: PathBuf, source: csv::Error },
}

/// Read the whole manifest up front.
///
/// Any file-level failure aborts before a single record is processed.
pub fn read_manifest(path: impl AsRef<Path>) -> Result<Manifest, ManifestError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ManifestError::NotFound(path.to_path_buf()),
        _ => ManifestError::Unreadable {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    parse_manifest(file).map_err(|e| classify(path, e))
}

/// Parse manifest rows from any reader.
pub fn parse_manifest<R: io::Read>(reader: R) -> Result<Manifest, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut entries = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let row = row?;
        let line = row
            .position()
            .map(|pos| pos.line())
            .unwrap_or(index as u64 + 1);

        let entry = if row.len() == FIELD_COUNT {
            ManifestEntry::Record(ManifestRecord {
                source_url: row[0].to_string(),
                destination_name: row[1].to_string(),
                identifier: row[2].to_string(),
            })
        } else {
            ManifestEntry::Malformed(MalformedRow {
                line,
                fields: row.iter().map(str::to_string).collect(),
            })
        };
        entries.push(entry);
    }

    Ok(Manifest { entries })
}

fn classify(path: &Path, err: csv::Error) -> ManifestError {
    if let csv::ErrorKind::Io(source) = err.kind() {
        return ManifestError::Unreadable {
            path: path.to_path_buf(),
            source: io::Error::new(source.kind(), source.to_string()),
        };
    }
    ManifestError::Parse {
        path: path.to_path_buf(),
        source: err,
    }
}
