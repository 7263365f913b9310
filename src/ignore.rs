//! Exclusion rules applied while collecting the source tree.
//! Paths are skipped when any of their segments names an excluded directory,
//! or when their base name is an excluded file, similar to .gitignore entries
//! without globbing.

use crate::constants::{EXCLUDED_DIRS, EXCLUDED_FILES};
use std::collections::HashSet;
use std::path::{Component, Path};

/// Set of directory names and exact file names that are never copied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionPolicy {
    dirs: HashSet<String>,
    files: HashSet<String>,
}

impl Default for ExclusionPolicy {
    /// Build output, dependency caches, VCS metadata, coverage reports, the
    /// tool's own directory, local env overrides and lock files.
    fn default() -> Self {
        Self::new(EXCLUDED_DIRS, EXCLUDED_FILES)
    }
}

impl ExclusionPolicy {
    pub fn new<D, F>(dirs: D, files: F) -> Self
    where
        D: IntoIterator,
        D::Item: Into<String>,
        F: IntoIterator,
        F::Item: Into<String>,
    {
        Self {
            dirs: dirs.into_iter().map(Into::into).collect(),
            files: files.into_iter().map(Into::into).collect(),
        }
    }

    /// Adds a directory name to exclude at every depth.
    pub fn exclude_dir<S: Into<String>>(mut self, name: S) -> Self {
        self.dirs.insert(name.into());
        self
    }

    /// Adds an exact file name to exclude at every depth.
    pub fn exclude_file<S: Into<String>>(mut self, name: S) -> Self {
        self.files.insert(name.into());
        self
    }

    pub fn is_excluded_dir_name(&self, name: &str) -> bool {
        self.dirs.contains(name)
    }

    pub fn is_excluded_file_name(&self, name: &str) -> bool {
        self.files.contains(name)
    }

    /// Decides whether a path relative to the source root is excluded.
    ///
    /// # Arguments
    /// * `relative_path` - Path relative to the source root
    /// * `is_dir` - Whether the path names a directory
    ///
    /// # Notes
    /// - Every segment is checked against the directory names, so
    ///   `a/node_modules/b.js` is excluded as well as `node_modules/b.js`
    /// - File names are only matched against the last segment of a file path
    pub fn is_excluded<P: AsRef<Path>>(&self, relative_path: P, is_dir: bool) -> bool {
        let relative_path = relative_path.as_ref();
        let excluded_dir = |component: Component| match component {
            Component::Normal(segment) => segment
                .to_str()
                .is_some_and(|name| self.is_excluded_dir_name(name)),
            _ => false,
        };
        if relative_path.components().any(excluded_dir) {
            return true;
        }

        !is_dir
            && relative_path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| self.is_excluded_file_name(name))
    }
}
