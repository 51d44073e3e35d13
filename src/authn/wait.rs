use std::path::Path;
use std::time::Duration;

use tokio::time::{sleep, Instant};
use tracing::debug;

use crate::authn::error::AuthnError;
use crate::fs::FileSystem;
use crate::utils::constants::WAIT_POLL_INTERVAL_MS;

/// Poll until `path` exists, then read it whole.
///
/// `max_wait` bounds the total wait measured from invocation; `None` means a
/// single existence check with no sleeping at all. An already-present file is
/// read immediately, so the happy path adds no delay. The loop sleeps between
/// checks (never spins) and clamps the final sleep to the remaining budget,
/// making the deadline exact under the paused tokio clock.
pub(crate) async fn wait_for_text_file(
    fs: &dyn FileSystem,
    path: &Path,
    max_wait: Option<Duration>,
) -> Result<Vec<u8>, AuthnError> {
    let poll_interval = Duration::from_millis(WAIT_POLL_INTERVAL_MS);
    let deadline = max_wait.map(|d| Instant::now() + d);

    loop {
        if fs.exists(path) {
            return fs.read(path).map_err(AuthnError::from);
        }

        let Some(deadline) = deadline else {
            // no wait budget configured, absent means timed out right away
            return Err(AuthnError::Timeout);
        };

        let now = Instant::now();
        if now >= deadline {
            debug!("token file '{}' did not appear in time", path.display());
            return Err(AuthnError::Timeout);
        }

        sleep(poll_interval.min(deadline - now)).await;
    }
}
