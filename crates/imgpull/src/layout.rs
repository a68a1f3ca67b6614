use std::path::{Path, PathBuf};

use imgpull_codec::OUTPUT_EXTENSION;

/// Where the normalized image for `destination_name` lives.
///
/// Surrounding whitespace in the name is dropped. Records sharing a name share
/// a path; nothing here de-duplicates them.
pub fn canonical_path(output_dir: &Path, destination_name: &str) -> PathBuf {
    output_dir.join(format!("{}.{OUTPUT_EXTENSION}", destination_name.trim()))
}
