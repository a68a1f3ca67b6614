use crate::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, Default)]
pub struct Options {
    /// fsync the temp file before it is renamed into place.
    pub sync: bool,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sync(mut self, sync: bool) -> Self {
        self.sync = sync;
        self
    }
}

/// Removes the temp file on drop unless it was renamed into place.
struct TempFile {
    path: PathBuf,
    committed: bool,
}

impl TempFile {
    fn new(path: PathBuf) -> Self {
        Self { path, committed: false }
    }

    fn persist(mut self, to: &Path) -> Result<()> {
        fs::rename(&self.path, to).map_err(|e| Error::Write {
            path: to.to_path_buf(),
            source: e,
        })?;
        self.committed = true;
        Ok(())
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        if !self.committed {
            let _ = fs::remove_file(&self.path);
        }
    }
}

/// Create `path` and every missing ancestor. Existing directories are fine.
pub fn ensure_dir(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Ok(());
    }
    fs::create_dir_all(path).map_err(|e| Error::CreateDir {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write `content` to `path`, replacing whatever was there.
///
/// Missing parent directories are created first. The bytes land in a sibling
/// temp file which is then renamed over `path`, so readers never observe a
/// half-written image. The temp file never outlives a failed call.
pub fn atomic_write(path: impl AsRef<Path>, content: &[u8], options: Options) -> Result<()> {
    let path = path.as_ref();
    let parent = path.parent().unwrap_or_else(|| Path::new(""));
    ensure_dir(parent)?;

    let tmp = TempFile::new(parent.join(format!(".tmp.{}.imgpull", uuid::Uuid::new_v4())));
    let write_err = |e: std::io::Error| Error::Write {
        path: tmp.path.clone(),
        source: e,
    };

    fs::write(&tmp.path, content).map_err(write_err)?;

    if options.sync {
        fs::File::open(&tmp.path)
            .and_then(|file| file.sync_all())
            .map_err(write_err)?;
    }

    tmp.persist(path)
}
