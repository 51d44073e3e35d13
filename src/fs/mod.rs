//! Filesystem capability consumed by the authenticator.
//!
//! Injected at construction instead of swapped through a process-wide
//! global, so concurrent tests never interfere with each other.

pub mod mem_fs;
pub mod os_fs;

use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

/// Primitive filesystem operations the authenticator needs. Production code
/// backs this with [`os_fs::OsFs`]; tests back it with [`mem_fs::MemFs`].
///
/// `write`, `remove` and `create_temp` exist so a test can play the role of
/// the external token writer; the authenticator itself only reads and stats.
pub trait FileSystem: Send + Sync {
    fn exists(&self, path: &Path) -> bool;

    /// Read the full contents of `path` as raw bytes.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

    fn remove(&self, path: &Path) -> io::Result<()>;

    /// Modification time of `path`. Fails with `ErrorKind::NotFound` when the
    /// file is absent.
    fn modified(&self, path: &Path) -> io::Result<DateTime<Utc>>;

    /// Create an empty uniquely-named file and return its path.
    fn create_temp(&self, prefix: &str) -> io::Result<PathBuf>;
}
