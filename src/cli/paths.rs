//! Path resolution utilities for CLI commands

use std::env;
use std::path::{Path, PathBuf};

use skillrank_core::store::STORE_DIR;

/// Resolve the root path for store discovery.
///
/// If a root path is provided, returns it. Otherwise, falls back to the
/// current working directory, or "." if that cannot be determined.
pub fn resolve_root_path(root: Option<PathBuf>) -> PathBuf {
    root.unwrap_or_else(|| env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// Resolve the store directory: an explicit `--store` (relative to `root`
/// when not absolute), else `<root>/.skillrank`
pub fn resolve_store_path(store: Option<&Path>, root: &Path) -> PathBuf {
    match store {
        Some(path) if path.is_absolute() => path.to_path_buf(),
        Some(path) => root.join(path),
        None => root.join(STORE_DIR),
    }
}
