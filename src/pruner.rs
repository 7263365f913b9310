//! Removal of artifacts that belong to unselected features.
//!
//! Each feature owns a [`PruneRule`] listing the files, directories and
//! manifest keys it contributes. Rules are independent of each other, and
//! removing a path that does not exist is a no-op.

use crate::config::{Feature, ProjectConfiguration};
use crate::constants::FRAMEWORK_CONFIG_FILES;
use crate::error::{BaseAppError, BaseAppResult};
use crate::manifest::Manifest;
use log::{debug, info};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Start of an `i18n: {` entry inside a framework config object.
static I18N_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bi18n\s*:\s*\{").expect("valid i18n pattern"));

/// Artifacts owned by one feature, relative to the target root.
#[derive(Debug, Clone, Copy)]
pub struct PruneRule {
    pub feature: Feature,
    pub files: &'static [&'static str],
    pub dirs: &'static [&'static str],
    pub dev_dependencies: &'static [&'static str],
    pub scripts: &'static [&'static str],
    /// Whether the rule strips `i18n` blocks from framework config files.
    pub strips_i18n_config: bool,
}

impl PruneRule {
    const fn new(feature: Feature) -> Self {
        Self {
            feature,
            files: &[],
            dirs: &[],
            dev_dependencies: &[],
            scripts: &[],
            strips_i18n_config: false,
        }
    }
}

pub const PRUNE_RULES: [PruneRule; 5] = [
    PruneRule {
        dirs: &["src/i18n", "src/locales"],
        strips_i18n_config: true,
        ..PruneRule::new(Feature::I18n)
    },
    PruneRule {
        files: &["jest.config.js"],
        dirs: &["src/__tests__", "__tests__"],
        dev_dependencies: &[
            "@testing-library/react",
            "@testing-library/jest-dom",
            "jest",
            "jest-environment-jsdom",
        ],
        scripts: &["test"],
        ..PruneRule::new(Feature::Testing)
    },
    PruneRule {
        dirs: &["src/pages/api/auth", "src/app/api/auth"],
        ..PruneRule::new(Feature::Auth)
    },
    PruneRule {
        dirs: &["src/store", "src/stores"],
        ..PruneRule::new(Feature::State)
    },
    PruneRule {
        files: &[".eslintrc.json", ".prettierrc"],
        dev_dependencies: &["eslint", "eslint-config-next", "prettier"],
        scripts: &["lint"],
        ..PruneRule::new(Feature::Linter)
    },
];

/// Returns the prune rule for a feature, if it owns any prunable artifacts.
pub fn rule_for(feature: Feature) -> Option<&'static PruneRule> {
    PRUNE_RULES.iter().find(|rule| rule.feature == feature)
}

/// What a pruning pass removed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PruneReport {
    pub removed_paths: Vec<PathBuf>,
    pub removed_dev_dependencies: Vec<String>,
    pub removed_scripts: Vec<String>,
    pub edited_configs: Vec<PathBuf>,
}

/// Byte offset just past the brace that closes the one at `open`.
///
/// Braces inside string literals are ignored. Returns `None` when the
/// object is never closed.
fn closing_brace(content: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut quote = None;
    let mut escaped = false;

    for (offset, c) in content[open..].char_indices() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '\'' | '"' | '`' => quote = Some(c),
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + offset + 1);
                }
            }
            _ => {}
        }
    }
    None
}

/// Removes `i18n: {...}` entries from framework config text, together with
/// a trailing comma and the whitespace that follows.
///
/// Nested objects and arrays inside the entry are removed with it. An entry
/// whose braces never balance is left untouched.
pub fn strip_i18n_block(content: &str) -> String {
    let mut stripped = String::with_capacity(content.len());
    let mut rest = content;

    while let Some(found) = I18N_KEY.find(rest) {
        let Some(end) = closing_brace(rest, found.end() - 1) else {
            break;
        };
        stripped.push_str(&rest[..found.start()]);
        let tail = &rest[end..];
        rest = tail.strip_prefix(',').unwrap_or(tail).trim_start();
    }

    stripped.push_str(rest);
    stripped
}

fn remove_path(path: &Path) -> BaseAppResult<bool> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(_) => return Ok(false),
    };
    debug!("Removing '{}'", path.display());
    let removed = if metadata.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };
    removed.map_err(|e| BaseAppError::WriteError {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(true)
}

fn strip_i18n_configs(target_root: &Path, report: &mut PruneReport) -> BaseAppResult<()> {
    for name in FRAMEWORK_CONFIG_FILES {
        let path = target_root.join(name);
        if !path.is_file() {
            continue;
        }
        let content = fs::read_to_string(&path)?;
        let stripped = strip_i18n_block(&content);
        if stripped != content {
            debug!("Stripping i18n block from '{}'", path.display());
            fs::write(&path, stripped).map_err(|e| BaseAppError::WriteError {
                path: path.clone(),
                source: e,
            })?;
            report.edited_configs.push(path);
        }
    }
    Ok(())
}

/// Applies a single rule to the target tree and the in-memory manifest.
pub fn apply_rule(
    rule: &PruneRule,
    target_root: &Path,
    manifest: &mut Manifest,
    report: &mut PruneReport,
) -> BaseAppResult<()> {
    debug!("Pruning artifacts of feature '{}'", rule.feature);

    if rule.strips_i18n_config {
        strip_i18n_configs(target_root, report)?;
    }

    for relative in rule.files.iter().chain(rule.dirs.iter()) {
        let path = target_root.join(relative);
        if remove_path(&path)? {
            report.removed_paths.push(path);
        }
    }

    let removed = manifest.remove_dev_dependencies(rule.dev_dependencies);
    report.removed_dev_dependencies.extend(removed);
    report.removed_scripts.extend(manifest.remove_scripts(rule.scripts));
    Ok(())
}

/// Prunes every feature the configuration does not select.
///
/// # Arguments
/// * `target_root` - The generated project directory
/// * `config` - Configuration deciding which features stay
/// * `manifest` - The run's manifest; edited in place, not written
pub fn prune_features<P: AsRef<Path>>(
    target_root: P,
    config: &ProjectConfiguration,
    manifest: &mut Manifest,
) -> BaseAppResult<PruneReport> {
    let target_root = target_root.as_ref();
    let mut report = PruneReport::default();

    for feature in config.features.missing() {
        if let Some(rule) = rule_for(feature) {
            apply_rule(rule, target_root, manifest, &mut report)?;
        }
    }

    info!(
        "Pruned {} paths, {} devDependencies and {} scripts",
        report.removed_paths.len(),
        report.removed_dev_dependencies.len(),
        report.removed_scripts.len()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_i18n_block() {
        let content = "module.exports = {\n  reactStrictMode: true,\n  \
                       i18n: { locales: ['en', 'zh'], defaultLocale: 'en' },\n  images: {},\n}\n";
        assert_eq!(
            strip_i18n_block(content),
            "module.exports = {\n  reactStrictMode: true,\n  images: {},\n}\n"
        );
    }

    #[test]
    fn test_strip_i18n_block_with_nested_objects() {
        let content = "module.exports = {\n  \
                       i18n: {\n    locales: ['en'],\n    \
                       domains: [{ domain: 'a.com', defaultLocale: 'en' }],\n  },\n  \
                       images: {},\n}\n";
        assert_eq!(
            strip_i18n_block(content),
            "module.exports = {\n  images: {},\n}\n"
        );
    }

    #[test]
    fn test_strip_i18n_block_ignores_braces_in_strings() {
        let content = "const c = {\n  i18n: { localeDetection: '}' },\n  basePath: '/x',\n}\n";
        assert_eq!(
            strip_i18n_block(content),
            "const c = {\n  basePath: '/x',\n}\n"
        );
    }

    #[test]
    fn test_unbalanced_i18n_block_is_left_alone() {
        let content = "module.exports = {\n  i18n: { locales: ['en'],\n";
        assert_eq!(strip_i18n_block(content), content);
    }

    #[test]
    fn test_strip_without_block_is_identity() {
        let content = "const nextConfig = {\n  reactStrictMode: true,\n}\n";
        assert_eq!(strip_i18n_block(content), content);
    }

    #[test]
    fn test_rules_cover_prunable_features_only() {
        for feature in [Feature::Api, Feature::Env, Feature::Git] {
            assert!(rule_for(feature).is_none());
        }
        let prunable = [
            Feature::I18n,
            Feature::Testing,
            Feature::Auth,
            Feature::State,
            Feature::Linter,
        ];
        for feature in prunable {
            assert!(rule_for(feature).is_some());
        }
    }
}
