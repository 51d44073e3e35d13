//! File-based authentication: wait for a token file, read it, detect staleness.

pub mod error;
pub mod token_file;
pub(crate) mod wait;

pub use error::AuthnError;
pub use token_file::TokenFileAuthenticator;
