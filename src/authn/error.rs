use thiserror::Error;

/// Failures surfaced by [`crate::TokenFileAuthenticator::refresh_token`].
///
/// The timeout display text is load-bearing: callers match on the exact
/// string, so it must stay byte-for-byte stable.
#[derive(Debug, Error)]
pub enum AuthnError {
    /// The token file did not appear within the configured wait budget.
    #[error("Operation waitForTextFile timed out.")]
    Timeout,

    /// The token file exists but could not be read or stat'ed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
