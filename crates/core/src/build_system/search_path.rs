//! Making the freshly built verifier discoverable on `PATH`

use crate::error::{Error, Result};
use std::env;
use std::ffi::{OsStr, OsString};
use std::path::Path;
use tracing::{debug, info};

/// Compute a `PATH` value with `dir` as its first entry. Returns `None` when
/// `dir` is already one of the entries, so repeated calls never duplicate it.
pub fn prepend_to_search_path(current: Option<&OsStr>, dir: &Path) -> Result<Option<OsString>> {
    let entries: Vec<_> = current.map(|p| env::split_paths(p).collect()).unwrap_or_default();
    if entries.iter().any(|entry| entry == dir) {
        return Ok(None);
    }

    let joined = env::join_paths(std::iter::once(dir.to_path_buf()).chain(entries))
        .map_err(|e| Error::ConfigError(format!("Cannot add {} to PATH: {e}", dir.display())))?;
    Ok(Some(joined))
}

/// Prepend `dir` to this process's `PATH` unless it is already there.
/// Returns whether `PATH` changed.
pub fn ensure_on_search_path(dir: &Path) -> Result<bool> {
    let current = env::var_os("PATH");
    match prepend_to_search_path(current.as_deref(), dir)? {
        Some(updated) => {
            info!("Adding {} to PATH", dir.display());
            // SAFETY: the driver calls this once, before any verifier process
            // or output-draining thread exists.
            unsafe {
                env::set_var("PATH", updated);
            }
            Ok(true)
        }
        None => {
            debug!("{} is already on PATH", dir.display());
            Ok(false)
        }
    }
}
