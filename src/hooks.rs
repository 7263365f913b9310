//! External commands run after generation.
//! Version control initialization is the only one; it is best-effort and its
//! failure never affects the outcome of a run.

use std::path::Path;
use std::process::{Command, Stdio};

use log::debug;

use crate::error::{BaseAppError, BaseAppResult};

/// Capability for running an external command in a working directory.
pub trait CommandRunner {
    /// Runs `program` with `args` inside `working_dir`, returning an error if
    /// it cannot be spawned or exits unsuccessfully.
    fn run(&self, program: &str, args: &[&str], working_dir: &Path) -> BaseAppResult<()>;
}

/// Runs commands as child processes with all standard streams discarded.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&self, program: &str, args: &[&str], working_dir: &Path) -> BaseAppResult<()> {
        let command_line = std::iter::once(program)
            .chain(args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ");
        debug!("Running '{}' in '{}'", command_line, working_dir.display());

        let status = Command::new(program)
            .args(args)
            .current_dir(working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| BaseAppError::CommandError {
                command: command_line.clone(),
                message: e.to_string(),
            })?;

        if !status.success() {
            return Err(BaseAppError::CommandError {
                command: command_line,
                message: format!("exited with {status}"),
            });
        }

        Ok(())
    }
}

/// Initializes a git repository in `project_dir`.
pub fn init_repository(runner: &dyn CommandRunner, project_dir: &Path) -> BaseAppResult<()> {
    runner.run("git", &["init"], project_dir)
}
