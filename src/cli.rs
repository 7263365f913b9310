//! Command-line interface implementation for create-base-app.
//! Provides argument parsing using clap.

use crate::error::{BaseAppError, BaseAppResult};
use clap::Parser;
use std::path::{Path, PathBuf};

/// Command-line arguments structure for create-base-app.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Create a new Next.js project with base-framework template",
    long_about = None
)]
pub struct Args {
    /// Name of the project; asked interactively when omitted
    #[arg(value_name = "PROJECT_NAME")]
    pub project_name: Option<String>,

    /// Framework tree to copy from (defaults to the directory above this
    /// tool's source checkout; required for an installed binary)
    #[arg(long, value_name = "DIR")]
    pub source: Option<PathBuf>,

    /// Directory the project directory is created in
    #[arg(short = 'C', long, value_name = "DIR", default_value = ".")]
    pub directory: PathBuf,

    /// Read answers from a JSON or YAML file instead of prompting
    #[arg(short, long, value_name = "FILE", conflicts_with = "stdin")]
    pub answers: Option<PathBuf>,

    /// Read answers as JSON from stdin instead of prompting
    #[arg(short, long)]
    pub stdin: bool,

    /// Skip the confirmation prompt before generating
    #[arg(short, long)]
    pub yes: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Source root to copy: `--source`, or the directory one level above
    /// the tool's own directory.
    ///
    /// # Errors
    /// * `BaseAppError::ConfigError` if `--source` is absent and the default
    ///   tree does not exist
    pub fn source_root(&self) -> BaseAppResult<PathBuf> {
        resolve_source_root(self.source.clone(), default_source_root())
    }

    /// Whether answers come from somewhere other than the terminal.
    pub fn is_non_interactive(&self) -> bool {
        self.stdin || self.answers.is_some()
    }
}

/// The framework tree the tool ships inside of.
///
/// The path is fixed when the binary is built, so it only points at a real
/// tree when running from the source checkout.
pub fn default_source_root() -> PathBuf {
    let tool_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    tool_dir.parent().unwrap_or(tool_dir).to_path_buf()
}

/// Uses `explicit` as given, otherwise `fallback` if it is a directory.
pub fn resolve_source_root(
    explicit: Option<PathBuf>,
    fallback: PathBuf,
) -> BaseAppResult<PathBuf> {
    match explicit {
        Some(path) => Ok(path),
        None if fallback.is_dir() => Ok(fallback),
        None => Err(BaseAppError::ConfigError(format!(
            "no framework tree at '{}', pass --source DIR",
            fallback.display()
        ))),
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default error handling for argument errors
pub fn get_args() -> Args {
    Args::parse()
}
