//! create-base-app scaffolds a new project by copying the base framework's
//! own source tree and customizing its manifest and config files for the
//! features the user selected.

/// Command-line interface module
pub mod cli;

/// Source tree enumeration
pub mod collector;

/// Project configuration, feature set and template variant
pub mod config;

/// Common constants (file names, exclusion lists, canonical scripts)
pub mod constants;

/// Copying collected files into the target directory
pub mod copier;

/// Derived configuration files (.gitignore, .env.example, next.config.js)
pub mod emitter;

/// Error types and handling
pub mod error;

/// External commands run after generation (git init)
pub mod hooks;

/// Directory and file exclusion rules
pub mod ignore;

/// Logger setup for the binary
pub mod logger;

/// Project manifest (package.json) synthesis
pub mod manifest;

/// Terminal output for the binary
pub mod output;

/// Answers files and stdin answers
pub mod parser;

/// Pipeline orchestration
/// Combines all components to generate the final output
pub mod processor;

/// User input and interaction handling
pub mod prompt;

/// Removal of unselected features
pub mod pruner;

/// Template rendering
pub mod renderer;

/// Generation summary and next steps
pub mod summary;
