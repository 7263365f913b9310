//! Error handling for create-base-app.
//! Defines the error type and result alias shared by every stage of the generator.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while generating a project.
///
/// Every pipeline stage returns this type; only the caller of the
/// orchestrator turns it into a user-facing message.
#[derive(Error, Debug)]
pub enum BaseAppError {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// The target directory exists before generation started.
    #[error("Directory \"{target_dir}\" already exists.")]
    TargetDirectoryExistsError { target_dir: String },

    /// The source tree could not be traversed.
    #[error("Failed to read source tree at '{}': {message}.", path.display())]
    TraversalError { path: PathBuf, message: String },

    /// A single file could not be copied into the target tree.
    #[error("Failed to copy '{}' to '{}': {source}.", source_path.display(), target_path.display())]
    CopyError {
        source_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A file or directory could not be written or removed.
    #[error("Failed to write '{}': {source}.", path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A pre-existing manifest is not valid JSON.
    #[error("Malformed manifest '{}': {source}.", path.display())]
    ManifestParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The in-memory manifest could not be serialized.
    #[error("Failed to serialize manifest: {0}.")]
    ManifestSerializeError(#[source] serde_json::Error),

    /// Represents errors that occur during template rendering
    #[error("Template error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// Represents errors in the supplied project configuration
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Represents validation failures in user input
    #[error("Validation error: {0}.")]
    ValidationError(String),

    /// Represents failures while interacting with the terminal
    #[error("Prompt error: {0}.")]
    PromptError(String),

    /// An external command exited unsuccessfully or could not be spawned.
    #[error("Command '{command}' failed: {message}.")]
    CommandError { command: String, message: String },
}

/// Convenience type alias for Results with [`BaseAppError`] as the error type.
pub type BaseAppResult<T> = Result<T, BaseAppError>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: BaseAppError) -> ! {
    eprintln!("Error generating project: {err}");
    std::process::exit(1);
}
