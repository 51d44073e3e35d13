use std::collections::HashMap;
use std::io::{Error, ErrorKind, Result};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use chrono::{DateTime, Utc};

use crate::fs::FileSystem;
use crate::helpers::time::now_utc;

#[derive(Debug, Clone)]
struct MemFile {
    contents: Vec<u8>,
    modified: DateTime<Utc>,
}

/// In-memory backing for the filesystem capability. Every write stamps a
/// fresh mtime; `set_modified` lets a test move the mtime without sleeping.
#[derive(Debug, Default)]
pub struct MemFs {
    files: Mutex<HashMap<PathBuf, MemFile>>,
    temp_counter: AtomicU64,
}

impl MemFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the mtime of an existing file.
    pub fn set_modified(&self, path: &Path, modified: DateTime<Utc>) -> Result<()> {
        let mut files = self.files.lock().unwrap();
        let file = files
            .get_mut(path)
            .ok_or_else(|| Error::new(ErrorKind::NotFound, format!("{}", path.display())))?;
        file.modified = modified;
        Ok(())
    }
}

impl FileSystem for MemFs {
    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        self.files
            .lock()
            .unwrap()
            .get(path)
            .map(|file| file.contents.clone())
            .ok_or_else(|| Error::new(ErrorKind::NotFound, format!("{}", path.display())))
    }

    fn write(&self, path: &Path, contents: &[u8]) -> Result<()> {
        let mut files = self.files.lock().unwrap();
        files.insert(
            path.to_owned(),
            MemFile {
                contents: contents.to_vec(),
                modified: now_utc(),
            },
        );
        Ok(())
    }

    fn remove(&self, path: &Path) -> Result<()> {
        self.files
            .lock()
            .unwrap()
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| Error::new(ErrorKind::NotFound, format!("{}", path.display())))
    }

    fn modified(&self, path: &Path) -> Result<DateTime<Utc>> {
        self.files
            .lock()
            .unwrap()
            .get(path)
            .map(|file| file.modified)
            .ok_or_else(|| Error::new(ErrorKind::NotFound, format!("{}", path.display())))
    }

    fn create_temp(&self, prefix: &str) -> Result<PathBuf> {
        let n = self.temp_counter.fetch_add(1, Ordering::SeqCst);
        let path = PathBuf::from(format!("/tmp/{}{}", prefix, n));
        self.files.lock().unwrap().insert(
            path.clone(),
            MemFile {
                contents: Vec::new(),
                modified: now_utc(),
            },
        );
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use std::io::ErrorKind;
    use std::path::Path;

    use crate::fs::mem_fs::MemFs;
    use crate::fs::FileSystem;

    #[test]
    fn write_read_remove_roundtrip() {
        let fs = MemFs::new();
        let path = Path::new("/var/run/token");

        assert!(!fs.exists(path));
        fs.write(path, b"value").unwrap();
        assert!(fs.exists(path));
        assert_eq!(fs.read(path).unwrap(), b"value");

        fs.remove(path).unwrap();
        assert!(!fs.exists(path));
        assert_eq!(fs.read(path).unwrap_err().kind(), ErrorKind::NotFound);
        assert_eq!(fs.modified(path).unwrap_err().kind(), ErrorKind::NotFound);
    }

    #[test]
    fn temp_files_get_unique_paths() {
        let fs = MemFs::new();
        let a = fs.create_temp("token-").unwrap();
        let b = fs.create_temp("token-").unwrap();
        assert_ne!(a, b);
        assert!(fs.exists(&a));
        assert!(fs.exists(&b));
    }
}
