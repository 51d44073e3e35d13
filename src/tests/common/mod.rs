// tests/common/mod.rs
use std::path::PathBuf;

use crate::fs::FileSystem;
use crate::utils::logging::init_logging;

pub const TOKEN_CONTENTS: &[u8] = b"token-from-file-contents";

/// Create a uniquely-named token file with the given contents, simulating the
/// sidecar that provisions credentials before the client starts.
pub fn seed_token_file(fs: &dyn FileSystem, contents: &[u8]) -> PathBuf {
    let path = fs.create_temp("existent-token-file").expect("create temp");
    fs.write(&path, contents).expect("write token file");
    path
}

pub fn init_test_logging() {
    init_logging("debug");
}
