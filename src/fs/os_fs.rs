use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tempfile::Builder;

use crate::fs::FileSystem;

/// Host-OS backing for the filesystem capability.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFs;

impl FileSystem for OsFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        fs::write(path, contents)
    }

    fn remove(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }

    fn modified(&self, path: &Path) -> io::Result<DateTime<Utc>> {
        let mtime = fs::metadata(path)?.modified()?;
        Ok(DateTime::<Utc>::from(mtime))
    }

    fn create_temp(&self, prefix: &str) -> io::Result<PathBuf> {
        let file = Builder::new().prefix(prefix).tempfile()?;
        // keep() detaches the file from the guard so it survives drop
        let (_, path) = file.keep().map_err(|e| e.error)?;
        Ok(path)
    }
}
