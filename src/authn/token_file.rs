use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::authn::error::AuthnError;
use crate::authn::wait::wait_for_text_file;
use crate::fs::FileSystem;
use crate::helpers::time::now_utc;

/// Credential provider backed by a file on disk.
///
/// `refresh_token` reads the file, waiting up to `max_wait_time` for it to
/// appear (a sidecar may write it asynchronously). `needs_token_refresh`
/// reports whether the file changed on disk since the last successful read.
///
/// The filesystem is an injected capability, so the same authenticator runs
/// against the host OS in production and an in-memory map under test.
pub struct TokenFileAuthenticator {
    token_file: PathBuf,
    max_wait_time: Option<Duration>,
    fs: Arc<dyn FileSystem>,
    // time of the last successful read, set only on success
    last_read_at: Mutex<Option<DateTime<Utc>>>,
}

impl TokenFileAuthenticator {
    /// New authenticator with no wait budget: `refresh_token` fails
    /// immediately if the file is absent.
    pub fn new(fs: Arc<dyn FileSystem>, token_file: impl Into<PathBuf>) -> Self {
        Self {
            token_file: token_file.into(),
            max_wait_time: None,
            fs,
            last_read_at: Mutex::new(None),
        }
    }

    /// Allow `refresh_token` to wait up to `max_wait_time` for the file.
    pub fn with_max_wait_time(mut self, max_wait_time: Duration) -> Self {
        self.max_wait_time = Some(max_wait_time);
        self
    }

    pub fn token_file(&self) -> &Path {
        &self.token_file
    }

    /// Read the current token bytes, waiting for the file to appear if a wait
    /// budget is configured.
    ///
    /// Fails with [`AuthnError::Timeout`] when the file never appears, and
    /// with [`AuthnError::Io`] when it exists but cannot be read (removed
    /// between the existence check and the read, permissions, ...).
    pub async fn refresh_token(&self) -> Result<Vec<u8>, AuthnError> {
        let token = wait_for_text_file(self.fs.as_ref(), &self.token_file, self.max_wait_time).await?;

        let mut last_read_at = self.last_read_at.lock().await;
        *last_read_at = Some(now_utc());
        debug!("token read from '{}'", self.token_file.display());

        Ok(token)
    }

    /// Whether the token file was modified after the last successful read.
    ///
    /// Returns `false` when nothing has been read yet (the caller has no
    /// token either way and will refresh regardless). A stat failure after a
    /// successful read returns `true`: the file going away is itself a
    /// change worth a refresh attempt.
    pub async fn needs_token_refresh(&self) -> bool {
        let last_read_at = self.last_read_at.lock().await;
        let Some(last_read_at) = *last_read_at else {
            return false;
        };

        match self.fs.modified(&self.token_file) {
            Ok(modified) => modified > last_read_at,
            Err(err) => {
                warn!(
                    "stat failed for token file '{}': {}",
                    self.token_file.display(),
                    err
                );
                true
            }
        }
    }
}
