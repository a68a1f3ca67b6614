use std::path::{Path, PathBuf};

/// Side file collecting identifiers of records that failed.
pub const DEFAULT_FAILED_FILE: &str = "failed_images.txt";

/// Write `identifiers`, newline-joined, to `path`, replacing prior content.
///
/// Returns the path written, or `None` without touching the filesystem when
/// there is nothing to report.
pub fn write_failures(path: impl AsRef<Path>, identifiers: &[String]) -> imgpull_fs::Result<Option<PathBuf>> {
    if identifiers.is_empty() {
        return Ok(None);
    }

    let path = path.as_ref();
    let content = identifiers.join("\n");
    imgpull_fs::atomic_write(path, content.as_bytes(), imgpull_fs::Options::new())?;
    Ok(Some(path.to_path_buf()))
}
