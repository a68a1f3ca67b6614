use std::path::Path;

/// Returns `true` when `path` names an existing regular file.
///
/// Symlinks are followed. Probe failures (permissions, broken links, ...)
/// report `false`: re-downloading is always safe, skipping is not.
pub fn is_regular_file(path: impl AsRef<Path>) -> bool {
    std::fs::metadata(path.as_ref())
        .map(|meta| meta.is_file())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.png");
        std::fs::write(&path, b"x").unwrap();
        assert!(is_regular_file(&path));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        assert!(!is_regular_file(dir.path().join("missing.png")));
    }

    #[test]
    fn test_directory_is_not_a_file() {
        let dir = tempdir().unwrap();
        let sub = dir.path().join("foo.png");
        std::fs::create_dir(&sub).unwrap();
        assert!(!is_regular_file(&sub));
    }

    #[cfg(unix)]
    #[test]
    fn test_broken_symlink() {
        let dir = tempdir().unwrap();
        let link = dir.path().join("dangling.png");
        std::os::unix::fs::symlink(dir.path().join("nowhere"), &link).unwrap();
        assert!(!is_regular_file(&link));
    }
}
