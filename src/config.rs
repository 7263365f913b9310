//! Project configuration accepted by the generator.
//! Holds the user's choices (name, router, styling, features, package manager)
//! and the derived template variant the emitter renders against.

use crate::constants::{DEFAULT_DESCRIPTION, DEFAULT_PROJECT_NAME};
use crate::error::{BaseAppError, BaseAppResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Styling solution selected for the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Styling {
    #[default]
    Tailwind,
    CssModules,
    StyledComponents,
    Css,
}

impl Styling {
    pub const ALL: [Styling; 4] = [
        Styling::Tailwind,
        Styling::CssModules,
        Styling::StyledComponents,
        Styling::Css,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Styling::Tailwind => "tailwind",
            Styling::CssModules => "css-modules",
            Styling::StyledComponents => "styled-components",
            Styling::Css => "css",
        }
    }

    /// Human readable name shown by the interactive prompt.
    pub fn label(&self) -> &'static str {
        match self {
            Styling::Tailwind => "Tailwind CSS",
            Styling::CssModules => "CSS Modules",
            Styling::StyledComponents => "Styled Components",
            Styling::Css => "Plain CSS",
        }
    }
}

impl fmt::Display for Styling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Styling {
    type Err = BaseAppError;

    fn from_str(s: &str) -> BaseAppResult<Self> {
        Styling::ALL
            .into_iter()
            .find(|styling| styling.as_str() == s)
            .ok_or_else(|| BaseAppError::ConfigError(format!("unknown styling '{s}'")))
    }
}

/// Optional subsystem toggled by the `features` set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feature {
    Auth,
    Api,
    Env,
    Linter,
    Git,
    I18n,
    State,
    Testing,
}

impl Feature {
    pub const ALL: [Feature; 8] = [
        Feature::Auth,
        Feature::Api,
        Feature::Env,
        Feature::Linter,
        Feature::Git,
        Feature::I18n,
        Feature::State,
        Feature::Testing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Feature::Auth => "auth",
            Feature::Api => "api",
            Feature::Env => "env",
            Feature::Linter => "linter",
            Feature::Git => "git",
            Feature::I18n => "i18n",
            Feature::State => "state",
            Feature::Testing => "testing",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Feature::Auth => "Authentication (NextAuth.js)",
            Feature::Api => "API Routes",
            Feature::Env => "Environment Variables (.env.example)",
            Feature::Linter => "ESLint + Prettier",
            Feature::Git => "Git Repository (.git)",
            Feature::I18n => "i18n Support",
            Feature::State => "State Management (Zustand)",
            Feature::Testing => "Testing (Jest + React Testing Library)",
        }
    }

    /// Whether the interactive prompt pre-selects this feature.
    pub fn enabled_by_default(&self) -> bool {
        matches!(
            self,
            Feature::Api | Feature::Env | Feature::Linter | Feature::Git
        )
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Feature {
    type Err = BaseAppError;

    fn from_str(s: &str) -> BaseAppResult<Self> {
        Feature::ALL
            .into_iter()
            .find(|feature| feature.as_str() == s)
            .ok_or_else(|| BaseAppError::ConfigError(format!("unknown feature '{s}'")))
    }
}

/// Set of selected features, kept in a stable order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureSet(BTreeSet<Feature>);

impl FeatureSet {
    pub fn empty() -> Self {
        Self(BTreeSet::new())
    }

    pub fn contains(&self, feature: Feature) -> bool {
        self.0.contains(&feature)
    }

    pub fn insert(&mut self, feature: Feature) -> bool {
        self.0.insert(feature)
    }

    pub fn remove(&mut self, feature: Feature) -> bool {
        self.0.remove(&feature)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Feature> + '_ {
        self.0.iter().copied()
    }

    /// Features from the configurable set that are not selected.
    pub fn missing(&self) -> impl Iterator<Item = Feature> + '_ {
        Feature::ALL
            .into_iter()
            .filter(|feature| !self.contains(*feature))
    }
}

impl Default for FeatureSet {
    fn default() -> Self {
        Feature::ALL
            .into_iter()
            .filter(Feature::enabled_by_default)
            .collect()
    }
}

impl FromIterator<Feature> for FeatureSet {
    fn from_iter<I: IntoIterator<Item = Feature>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for FeatureSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("None");
        }
        let names: Vec<&str> = self.iter().map(|feature| feature.as_str()).collect();
        f.write_str(&names.join(", "))
    }
}

/// Package manager the user will run the generated project with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    #[default]
    Npm,
    Yarn,
    Pnpm,
}

impl PackageManager {
    pub const ALL: [PackageManager; 3] = [
        PackageManager::Npm,
        PackageManager::Yarn,
        PackageManager::Pnpm,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
        }
    }

    pub fn install_command(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm install",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm install",
        }
    }

    /// Command line that runs a manifest script with this package manager.
    pub fn run_command(&self, script: &str) -> String {
        format!("{} run {script}", self.as_str())
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageManager {
    type Err = BaseAppError;

    fn from_str(s: &str) -> BaseAppResult<Self> {
        PackageManager::ALL
            .into_iter()
            .find(|pm| pm.as_str() == s)
            .ok_or_else(|| BaseAppError::ConfigError(format!("unknown package manager '{s}'")))
    }
}

/// The complete, validated set of choices a project is generated from.
///
/// Field names on the wire follow the interactive tool's answer keys, so an
/// answers file uses `projectName`, `appRouter`, `gitInit` and so on. Any key
/// that is absent takes the prompt's default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfiguration {
    #[serde(rename = "projectName")]
    pub project_name: String,
    #[serde(rename = "typescript")]
    pub use_typescript: bool,
    pub styling: Styling,
    #[serde(rename = "appRouter")]
    pub use_app_router: bool,
    pub features: FeatureSet,
    #[serde(rename = "packageManager")]
    pub package_manager: PackageManager,
    pub author: String,
    pub description: String,
    #[serde(rename = "gitInit")]
    pub git_init: bool,
}

impl Default for ProjectConfiguration {
    fn default() -> Self {
        Self {
            project_name: DEFAULT_PROJECT_NAME.to_string(),
            use_typescript: true,
            styling: Styling::default(),
            use_app_router: true,
            features: FeatureSet::default(),
            package_manager: PackageManager::default(),
            author: String::new(),
            description: DEFAULT_DESCRIPTION.to_string(),
            git_init: true,
        }
    }
}

impl ProjectConfiguration {
    /// Creates a configuration with the prompt defaults and the given name.
    pub fn new<S: Into<String>>(project_name: S) -> BaseAppResult<Self> {
        let config = Self {
            project_name: project_name.into(),
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> BaseAppResult<()> {
        validate_project_name(&self.project_name)
    }

    pub fn has_feature(&self, feature: Feature) -> bool {
        self.features.contains(feature)
    }

    /// Version control is initialized only when both `git` and `gitInit` are set.
    pub fn should_init_git(&self) -> bool {
        self.git_init && self.has_feature(Feature::Git)
    }

    pub fn template_variant(&self) -> TemplateVariant {
        TemplateVariant {
            language: if self.use_typescript {
                Language::TypeScript
            } else {
                Language::JavaScript
            },
            styling: self.styling,
            router: if self.use_app_router {
                Router::App
            } else {
                Router::Pages
            },
        }
    }
}

/// Checks that a project name is usable as a directory and manifest name.
///
/// # Errors
/// * `BaseAppError::ValidationError` if the name is empty or contains characters
///   other than ASCII letters, digits, `-` and `_`
pub fn validate_project_name(name: &str) -> BaseAppResult<()> {
    if name.trim().is_empty() {
        return Err(BaseAppError::ValidationError("Project name is required".to_string()));
    }
    let allowed = |c: char| c.is_ascii_alphanumeric() || c == '-' || c == '_';
    if !name.chars().all(allowed) {
        return Err(BaseAppError::ValidationError(
            "Project name can only contain letters, numbers, hyphens, and underscores"
                .to_string(),
        ));
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    TypeScript,
    JavaScript,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Router {
    App,
    Pages,
}

impl Router {
    pub fn label(&self) -> &'static str {
        match self {
            Router::App => "App Router",
            Router::Pages => "Pages Router",
        }
    }
}

/// Template selector derived from a configuration.
///
/// Passed to the config file emitter as rendering context. Only `router`
/// currently changes emitted text; `language` and `styling` are carried so
/// templates can branch on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TemplateVariant {
    pub language: Language,
    pub styling: Styling,
    pub router: Router,
}
