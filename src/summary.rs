//! Configuration summary and next-step instructions shown after generation.

use crate::config::ProjectConfiguration;
use crate::pruner::PruneReport;
use std::fmt;
use std::path::PathBuf;

/// Echo of the configuration, rendered as the summary table.
pub struct ConfigurationSummary<'a>(pub &'a ProjectConfiguration);

impl fmt::Display for ConfigurationSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = self.0;
        let router = config.template_variant().router;
        writeln!(f, "  Project Name:    {}", config.project_name)?;
        writeln!(f, "  TypeScript:      {}", config.use_typescript)?;
        writeln!(f, "  Styling:         {}", config.styling)?;
        writeln!(f, "  Router:          {}", router.label())?;
        writeln!(f, "  Features:        {}", config.features)?;
        write!(f, "  Package Manager: {}", config.package_manager)
    }
}

/// Result of a successful generation run.
#[derive(Debug, Clone)]
pub struct GenerationSummary {
    pub config: ProjectConfiguration,
    pub target_dir: PathBuf,
    pub files_copied: usize,
    pub emitted_files: Vec<PathBuf>,
    pub pruned: PruneReport,
    pub git_initialized: bool,
}

impl GenerationSummary {
    pub fn next_steps(&self) -> Vec<String> {
        next_steps(&self.config)
    }
}

/// Commands the user runs to start the generated project.
pub fn next_steps(config: &ProjectConfiguration) -> Vec<String> {
    let pm = config.package_manager;
    vec![
        format!("cd {}", config.project_name),
        pm.install_command().to_string(),
        pm.run_command("dev"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FeatureSet, PackageManager};

    #[test]
    fn test_next_steps_follow_package_manager() {
        let mut config = ProjectConfiguration::new("demo").unwrap();
        config.package_manager = PackageManager::Pnpm;
        assert_eq!(
            next_steps(&config),
            vec!["cd demo", "pnpm install", "pnpm run dev"]
        );

        config.package_manager = PackageManager::Yarn;
        assert_eq!(next_steps(&config)[1], "yarn");
    }

    #[test]
    fn test_configuration_summary() {
        let mut config = ProjectConfiguration::new("demo").unwrap();
        config.use_app_router = false;
        config.features = FeatureSet::empty();
        let text = ConfigurationSummary(&config).to_string();
        assert!(text.contains("Project Name:    demo"));
        assert!(text.contains("Router:          Pages Router"));
        assert!(text.contains("Features:        None"));
        assert!(text.ends_with("Package Manager: npm"));
    }
}
