//! Filesystem-backed cache, one file per key

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{AssetCache, CacheResult};

/// Stores each entry as a file named after its (already sanitized) key
/// inside a fixed directory.
#[derive(Debug, Clone)]
pub struct FsCache {
    dir: PathBuf,
}

impl FsCache {
    /// Opens a cache rooted at `dir`, creating the directory if needed.
    pub fn new<P: AsRef<Path>>(dir: P) -> CacheResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Directory this cache stores its entries in.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl AssetCache for FsCache {
    fn get(&self, key: &str) -> CacheResult<Option<Vec<u8>>> {
        match fs::read(self.entry_path(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn put(&self, key: &str, bytes: &[u8]) -> CacheResult<()> {
        fs::write(self.entry_path(key), bytes)?;
        Ok(())
    }

    fn clear(&self) -> CacheResult<()> {
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                fs::remove_file(entry.path())?;
            }
        }
        Ok(())
    }
}
