//! Generation pipeline orchestration.
//! Sequences directory check, collection, copying, manifest synthesis, config
//! emission and pruning, reporting each stage as it starts.

use log::{debug, info, warn};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::{
    collector::collect_files,
    config::ProjectConfiguration,
    copier::copy_tree,
    emitter::emit_config_files,
    error::{BaseAppError, BaseAppResult},
    hooks::{init_repository, CommandRunner},
    ignore::ExclusionPolicy,
    manifest::{synthesize_manifest, Manifest},
    pruner::prune_features,
    renderer::TemplateRenderer,
    summary::GenerationSummary,
};

/// Pipeline states, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Init,
    DirectoryCheck,
    Collecting,
    Copying,
    ManifestWrite,
    ConfigWrite,
    Pruning,
    Done,
}

impl Stage {
    /// Status line describing the stage to the user.
    pub fn description(&self) -> &'static str {
        match self {
            Stage::Init => "Creating project structure...",
            Stage::DirectoryCheck => "Checking target directory...",
            Stage::Collecting => "Collecting base framework files...",
            Stage::Copying => "Copying base framework files...",
            Stage::ManifestWrite => "Generating package.json...",
            Stage::ConfigWrite => "Generating configuration files...",
            Stage::Pruning => "Applying project configuration...",
            Stage::Done => "Project structure created successfully!",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Structured status events emitted while generating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    StageStarted(Stage),
    FilesCollected(usize),
    FilesCopied(usize),
    /// Version control initialization failed; the run continues.
    GitInitFailed(String),
    Failed { stage: Stage, message: String },
}

/// Receives progress events; display is up to the implementor.
pub trait ProgressReporter {
    fn report(&self, event: &ProgressEvent);
}

/// Reporter that forwards events to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl ProgressReporter for LogReporter {
    fn report(&self, event: &ProgressEvent) {
        match event {
            ProgressEvent::StageStarted(stage) => info!("{stage}"),
            ProgressEvent::FilesCollected(count) => debug!("{count} files to copy"),
            ProgressEvent::FilesCopied(count) => debug!("{count} files copied"),
            ProgressEvent::GitInitFailed(message) => warn!("git init failed: {message}"),
            ProgressEvent::Failed { stage, message } => warn!("{stage:?} failed: {message}"),
        }
    }
}

/// Ensures the target directory does not exist yet.
///
/// # Errors
/// * `BaseAppError::TargetDirectoryExistsError` if anything exists at `target_dir`
pub fn ensure_target_absent<P: AsRef<Path>>(
    target_dir: P,
    project_name: &str,
) -> BaseAppResult<()> {
    let target_dir = target_dir.as_ref();
    if target_dir.exists() {
        return Err(BaseAppError::TargetDirectoryExistsError {
            target_dir: project_name.to_string(),
        });
    }
    Ok(())
}

/// Generates projects from a source tree.
pub struct Generator<'a> {
    source_root: PathBuf,
    policy: ExclusionPolicy,
    renderer: &'a dyn TemplateRenderer,
    runner: &'a dyn CommandRunner,
    reporter: &'a dyn ProgressReporter,
}

impl<'a> Generator<'a> {
    pub fn new<P: Into<PathBuf>>(
        source_root: P,
        renderer: &'a dyn TemplateRenderer,
        runner: &'a dyn CommandRunner,
        reporter: &'a dyn ProgressReporter,
    ) -> Self {
        Self {
            source_root: source_root.into(),
            policy: ExclusionPolicy::default(),
            renderer,
            runner,
            reporter,
        }
    }

    /// Replaces the default exclusion policy.
    pub fn with_policy(mut self, policy: ExclusionPolicy) -> Self {
        self.policy = policy;
        self
    }

    fn stage<T>(
        &self,
        stage: Stage,
        step: impl FnOnce() -> BaseAppResult<T>,
    ) -> BaseAppResult<T> {
        self.reporter.report(&ProgressEvent::StageStarted(stage));
        step().inspect_err(|e| {
            self.reporter.report(&ProgressEvent::Failed {
                stage,
                message: e.to_string(),
            });
        })
    }

    /// Generates `<parent_dir>/<project_name>` from the source tree.
    ///
    /// # Flow
    /// 1. Fails before touching the filesystem if the target exists
    /// 2. Collects and copies the source files
    /// 3. Synthesizes the manifest in memory
    /// 4. Emits derived configuration files
    /// 5. Prunes unselected features, writes the manifest, runs `git init`
    ///
    /// # Errors
    /// Any stage error is returned as-is. Files written before the failure
    /// stay on disk.
    pub fn generate<P: AsRef<Path>>(
        &self,
        config: &ProjectConfiguration,
        parent_dir: P,
    ) -> BaseAppResult<GenerationSummary> {
        self.reporter.report(&ProgressEvent::StageStarted(Stage::Init));
        let target_dir = parent_dir.as_ref().join(&config.project_name);

        self.stage(Stage::DirectoryCheck, || {
            config.validate()?;
            ensure_target_absent(&target_dir, &config.project_name)
        })?;

        let files = self.stage(Stage::Collecting, || {
            collect_files(&self.source_root, &self.policy)
        })?;
        self.reporter.report(&ProgressEvent::FilesCollected(files.len()));

        let files_copied = self.stage(Stage::Copying, || {
            fs::create_dir_all(&target_dir).map_err(|e| BaseAppError::WriteError {
                path: target_dir.clone(),
                source: e,
            })?;
            copy_tree(&files, &self.source_root, &target_dir)
        })?;
        self.reporter.report(&ProgressEvent::FilesCopied(files_copied));

        let mut manifest = self.stage(Stage::ManifestWrite, || {
            synthesize_manifest(&target_dir, config)
        })?;

        let emitted_files = self.stage(Stage::ConfigWrite, || {
            emit_config_files(&target_dir, config, self.renderer)
        })?;

        let pruned = self.stage(Stage::Pruning, || {
            let report = prune_features(&target_dir, config, &mut manifest)?;
            manifest.save(Manifest::path_in(&target_dir))?;
            Ok(report)
        })?;

        let git_initialized = config.should_init_git() && self.init_git(&target_dir);

        self.reporter.report(&ProgressEvent::StageStarted(Stage::Done));
        info!("Generated '{}'", target_dir.display());

        Ok(GenerationSummary {
            config: config.clone(),
            target_dir,
            files_copied,
            emitted_files,
            pruned,
            git_initialized,
        })
    }

    fn init_git(&self, target_dir: &Path) -> bool {
        // Reported, never fatal.
        match init_repository(self.runner, target_dir) {
            Ok(()) => true,
            Err(e) => {
                self.reporter.report(&ProgressEvent::GitInitFailed(e.to_string()));
                false
            }
        }
    }
}
