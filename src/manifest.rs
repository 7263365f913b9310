//! Project manifest (package.json) synthesis.
//!
//! The manifest is loaded once, mutated in memory by the synthesizer and the
//! feature pruner, and written back once at the end of a run.

use crate::config::ProjectConfiguration;
use crate::constants::{CANONICAL_SCRIPTS, DEFAULT_VERSION, MANIFEST_FILE};
use crate::error::{BaseAppError, BaseAppResult};
use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// The recognized top-level keys of a package manifest.
///
/// Unknown keys are kept in `extra` and written back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Either a plain string or a `{ name, email, url }` object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<serde_json::Value>,
    #[serde(default)]
    pub scripts: IndexMap<String, String>,
    #[serde(default)]
    pub dependencies: IndexMap<String, String>,
    #[serde(default, rename = "devDependencies")]
    pub dev_dependencies: IndexMap<String, String>,
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}

impl Manifest {
    /// Minimal manifest used when the copied tree has none.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            version: Some(DEFAULT_VERSION.to_string()),
            private: Some(true),
            description: None,
            author: None,
            scripts: IndexMap::new(),
            dependencies: IndexMap::new(),
            dev_dependencies: IndexMap::new(),
            extra: IndexMap::new(),
        }
    }

    pub fn path_in<P: AsRef<Path>>(project_root: P) -> PathBuf {
        project_root.as_ref().join(MANIFEST_FILE)
    }

    /// Parses manifest text, reporting `path` when it is malformed.
    pub fn parse(content: &str, path: &Path) -> BaseAppResult<Self> {
        serde_json::from_str(content).map_err(|e| BaseAppError::ManifestParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Loads the manifest at `path` if the file exists.
    ///
    /// # Errors
    /// * `BaseAppError::ManifestParseError` if the file is not a valid manifest
    /// * `BaseAppError::IoError` if the file cannot be read
    pub fn load<P: AsRef<Path>>(path: P) -> BaseAppResult<Option<Self>> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(None);
        }
        debug!("Loading manifest from '{}'", path.display());
        let content = fs::read_to_string(path)?;
        Self::parse(&content, path).map(Some)
    }

    /// Pretty-printed JSON with two-space indentation and a trailing newline.
    pub fn to_json(&self) -> BaseAppResult<String> {
        let mut content = serde_json::to_string_pretty(self)
            .map_err(BaseAppError::ManifestSerializeError)?;
        content.push('\n');
        Ok(content)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> BaseAppResult<()> {
        let path = path.as_ref();
        debug!("Writing manifest to '{}'", path.display());
        fs::write(path, self.to_json()?).map_err(|e| BaseAppError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Applies the configuration's identity fields and canonical scripts.
    ///
    /// Running this twice with the same configuration yields the same manifest.
    pub fn apply_configuration(&mut self, config: &ProjectConfiguration) {
        self.name = config.project_name.clone();
        self.description = Some(config.description.clone());
        if !config.author.is_empty() {
            self.author = Some(serde_json::Value::String(config.author.clone()));
        }
        for (script, command) in CANONICAL_SCRIPTS {
            self.scripts.insert(script.to_string(), command.to_string());
        }
    }

    /// Deletes the given keys from `devDependencies`, returning those that were present.
    pub fn remove_dev_dependencies(&mut self, packages: &[&str]) -> Vec<String> {
        packages
            .iter()
            .filter_map(|package| self.dev_dependencies.shift_remove_entry(*package))
            .map(|(package, _)| package)
            .collect()
    }

    /// Deletes the given script keys, returning those that were present.
    pub fn remove_scripts(&mut self, scripts: &[&str]) -> Vec<String> {
        scripts
            .iter()
            .filter_map(|script| self.scripts.shift_remove_entry(*script))
            .map(|(script, _)| script)
            .collect()
    }
}

/// Loads the copied manifest from `project_root`, or a fresh default, and
/// applies the configuration to it.
///
/// The result is not written; the caller owns it until the run finishes.
pub fn synthesize_manifest<P: AsRef<Path>>(
    project_root: P,
    config: &ProjectConfiguration,
) -> BaseAppResult<Manifest> {
    let path = Manifest::path_in(project_root);
    let mut manifest = match Manifest::load(&path)? {
        Some(existing) => existing,
        None => {
            debug!("No manifest in copied tree, starting from defaults");
            Manifest::new(config.project_name.clone())
        }
    };
    manifest.apply_configuration(config);
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ProjectConfiguration {
        let mut config = ProjectConfiguration::new("demo").unwrap();
        config.description = "Demo project".to_string();
        config
    }

    #[test]
    fn test_default_manifest_shape() {
        let manifest = Manifest::new("demo");
        let value: serde_json::Value = serde_json::from_str(&manifest.to_json().unwrap()).unwrap();
        assert_eq!(value["name"], "demo");
        assert_eq!(value["version"], "0.1.0");
        assert_eq!(value["private"], true);
        assert!(value["scripts"].as_object().unwrap().is_empty());
        assert!(value["dependencies"].as_object().unwrap().is_empty());
        assert!(value["devDependencies"].as_object().unwrap().is_empty());
    }

    #[test]
    fn test_canonical_scripts_overwrite_and_others_survive() {
        let content = r#"{
  "name": "base-framework",
  "author": "Original Author",
  "scripts": { "dev": "next dev --turbo", "build:messages": "node scripts/build-messages.js" },
  "engines": { "node": ">=18" }
}"#;
        let mut manifest = Manifest::parse(content, Path::new("package.json")).unwrap();
        manifest.apply_configuration(&config());

        assert_eq!(manifest.name, "demo");
        assert_eq!(manifest.description.as_deref(), Some("Demo project"));
        assert_eq!(manifest.scripts["dev"], "next dev");
        assert_eq!(manifest.scripts["lint"], "next lint");
        assert_eq!(
            manifest.scripts["build:messages"],
            "node scripts/build-messages.js"
        );
        assert_eq!(manifest.author, Some(serde_json::json!("Original Author")));
        assert_eq!(
            manifest.extra["engines"],
            serde_json::json!({ "node": ">=18" })
        );
    }

    #[test]
    fn test_author_set_when_supplied() {
        let mut config = config();
        config.author = "Jane".to_string();
        let mut manifest = Manifest::new("x");
        manifest.author = Some(serde_json::json!("Someone"));
        manifest.apply_configuration(&config);
        assert_eq!(manifest.author, Some(serde_json::json!("Jane")));
    }

    #[test]
    fn test_apply_is_idempotent() {
        let mut once = Manifest::new("x");
        once.scripts
            .insert("storybook".to_string(), "storybook dev".to_string());
        once.apply_configuration(&config());
        let mut twice = once.clone();
        twice.apply_configuration(&config());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_malformed_manifest_reports_path() {
        let path = Path::new("/tmp/demo/package.json");
        let err = Manifest::parse("{ not json", path).unwrap_err();
        assert!(err.to_string().contains("/tmp/demo/package.json"));
    }

    #[test]
    fn test_remove_keys() {
        let mut manifest = Manifest::new("x");
        manifest.dev_dependencies.insert("jest".to_string(), "^29".to_string());
        manifest.scripts.insert("test".to_string(), "jest".to_string());

        assert_eq!(
            manifest.remove_dev_dependencies(&["jest", "prettier"]),
            vec!["jest"]
        );
        assert_eq!(manifest.remove_scripts(&["test"]), vec!["test"]);
        assert!(manifest.remove_scripts(&["test"]).is_empty());
    }
}
