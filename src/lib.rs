//! # Token File Authenticator Library
//!
//! Provides a file-based credential provider: the token is read verbatim
//! from a filesystem path, waiting (bounded) for the file to appear when
//! an external writer produces it asynchronously, and reporting staleness
//! when the on-disk token changes after the last read.
//!
//! Modules:
//! - `authn` — the `TokenFileAuthenticator` and its wait-for-file loop
//! - `fs` — injectable filesystem capability (real and in-memory backends)
//! - `helpers` — small time helpers
//! - `utils` — constants and logging setup

pub mod authn;
pub mod fs;
pub mod helpers;
pub mod tests;
pub mod utils;

pub use crate::authn::error::AuthnError;
pub use crate::authn::token_file::TokenFileAuthenticator;
