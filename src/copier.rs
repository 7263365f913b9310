//! Materializes collected files into the target directory.

use crate::error::{BaseAppError, BaseAppResult};
use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Resolves where a source file lands under the target root.
///
/// # Errors
/// * `BaseAppError::TraversalError` if `source` is not under `source_root`
pub fn target_path_for(
    source: &Path,
    source_root: &Path,
    target_root: &Path,
) -> BaseAppResult<PathBuf> {
    let relative = source
        .strip_prefix(source_root)
        .map_err(|e| BaseAppError::TraversalError {
            path: source.to_path_buf(),
            message: e.to_string(),
        })?;
    Ok(target_root.join(relative))
}

fn copy_error(source: &Path, dest: &Path, e: io::Error) -> BaseAppError {
    BaseAppError::CopyError {
        source_path: source.to_path_buf(),
        target_path: dest.to_path_buf(),
        source: e,
    }
}

fn copy_file(source: &Path, dest: &Path) -> BaseAppResult<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(|e| BaseAppError::WriteError {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let metadata = fs::symlink_metadata(source)
        .map_err(|e| copy_error(source, dest, e))?;
    if metadata.file_type().is_symlink() {
        return copy_symlink(source, dest);
    }

    fs::copy(source, dest)
        .map(|_| ())
        .map_err(|e| copy_error(source, dest, e))
}

/// Recreates the link at `dest` with the same (possibly relative or dangling)
/// target, replacing whatever file or link is already there.
fn copy_symlink(source: &Path, dest: &Path) -> BaseAppResult<()> {
    let link_target = fs::read_link(source)
        .map_err(|e| copy_error(source, dest, e))?;

    if let Ok(existing) = fs::symlink_metadata(dest) {
        if !existing.is_dir() {
            fs::remove_file(dest)
                .map_err(|e| copy_error(source, dest, e))?;
        }
    }

    #[cfg(unix)]
    std::os::unix::fs::symlink(&link_target, dest)
        .map_err(|e| copy_error(source, dest, e))?;

    #[cfg(windows)]
    {
        let created = if source.is_dir() {
            std::os::windows::fs::symlink_dir(&link_target, dest)
        } else {
            std::os::windows::fs::symlink_file(&link_target, dest)
        };
        created.map_err(|e| copy_error(source, dest, e))?;
    }

    debug!(
        "Symlinked '{}' -> '{}' (target: '{}')",
        source.display(),
        dest.display(),
        link_target.display()
    );
    Ok(())
}

/// Copies each file to the same relative path under `target_root`.
///
/// Existing destinations are overwritten and bytes are copied verbatim.
/// Symlinks are recreated as symlinks rather than followed.
/// The first failure aborts the copy and leaves already written files in place.
///
/// # Returns
/// * `BaseAppResult<usize>` - Number of files copied
pub fn copy_tree<S: AsRef<Path>, T: AsRef<Path>>(
    files: &[PathBuf],
    source_root: S,
    target_root: T,
) -> BaseAppResult<usize> {
    let source_root = source_root.as_ref();
    let target_root = target_root.as_ref();

    for file in files {
        let dest = target_path_for(file, source_root, target_root)?;
        debug!(
            "Copying file: '{}' -> '{}'",
            file.display(),
            dest.display()
        );
        copy_file(file, &dest)?;
    }

    Ok(files.len())
}
