//! Source tree enumeration.

use crate::error::{BaseAppError, BaseAppResult};
use crate::ignore::ExclusionPolicy;
use log::debug;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Collects every file under `source_root` that the policy does not exclude.
///
/// # Arguments
/// * `source_root` - Root of the framework tree used as the template
/// * `policy` - Directory and file names to skip
///
/// # Returns
/// * `BaseAppResult<Vec<PathBuf>>` - Absolute paths, depth-first, siblings sorted by name
///
/// # Notes
/// Excluded directories are pruned from the walk and never read, so large
/// dependency trees cost nothing.
/// Symlinks are not followed: each one is returned as a single entry, even
/// when it points at a directory.
///
/// # Errors
/// * `BaseAppError::TraversalError` if the root or any directory cannot be read
pub fn collect_files<P: AsRef<Path>>(
    source_root: P,
    policy: &ExclusionPolicy,
) -> BaseAppResult<Vec<PathBuf>> {
    let source_root = source_root.as_ref();
    debug!("Collecting files under '{}'", source_root.display());

    let keep = |entry: &DirEntry| {
        if entry.depth() == 0 {
            return true;
        }
        match entry.path().strip_prefix(source_root) {
            Ok(relative) => !policy.is_excluded(relative, entry.file_type().is_dir()),
            Err(_) => false,
        }
    };

    let mut files = Vec::new();
    for entry in WalkDir::new(source_root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(keep)
    {
        let entry = entry.map_err(|e| BaseAppError::TraversalError {
            path: e.path().unwrap_or(source_root).to_path_buf(),
            message: e.to_string(),
        })?;
        if entry.file_type().is_dir() {
            continue;
        }
        debug!("Collected '{}'", entry.path().display());
        files.push(entry.into_path());
    }

    debug!("Collected {} files", files.len());
    Ok(files)
}
