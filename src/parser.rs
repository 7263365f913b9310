//! Non-interactive answers: a JSON or YAML document holding some or all of the
//! configuration keys, read from a file or from stdin.

use crate::config::ProjectConfiguration;
use crate::error::{BaseAppError, BaseAppResult};
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerSource {
    Stdin,
    File(PathBuf),
    None,
}

impl AnswerSource {
    pub fn from_args(take_from_stdin: bool, answers_file: Option<PathBuf>) -> Self {
        match (take_from_stdin, answers_file) {
            (true, _) => AnswerSource::Stdin,
            (false, Some(path)) => AnswerSource::File(path),
            (false, None) => AnswerSource::None,
        }
    }
}

/// Parses answers text, trying JSON first and YAML second.
///
/// # Errors
/// * `BaseAppError::ConfigError` if the text is neither valid JSON nor valid YAML
pub fn parse_answers(content: &str) -> BaseAppResult<serde_json::Value> {
    match serde_json::from_str(content) {
        Ok(value) => Ok(value),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| BaseAppError::ConfigError(format!("Invalid answers format: {e}"))),
    }
}

pub fn load_from_stdin() -> BaseAppResult<serde_json::Value> {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    parse_answers(buffer.trim())
}

pub fn load_from_file<P: AsRef<Path>>(path: P) -> BaseAppResult<serde_json::Value> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        BaseAppError::ConfigError(format!("Cannot read answers file '{}': {e}", path.display()))
    })?;
    parse_answers(&content)
}

/// Reads answers from the selected source; `None` means ask interactively.
pub fn load_answers(source: AnswerSource) -> BaseAppResult<Option<serde_json::Value>> {
    match source {
        AnswerSource::Stdin => load_from_stdin().map(Some),
        AnswerSource::File(path) => load_from_file(path).map(Some),
        AnswerSource::None => Ok(None),
    }
}

/// Builds a validated configuration from answers.
///
/// Missing keys take the interactive defaults. A project name passed on the
/// command line wins over the one in the answers.
///
/// # Errors
/// * `BaseAppError::ConfigError` if a key has an unexpected type or value
/// * `BaseAppError::ValidationError` if the project name is invalid
pub fn configuration_from_answers(
    answers: serde_json::Value,
    project_name: Option<String>,
) -> BaseAppResult<ProjectConfiguration> {
    let answers = match answers {
        serde_json::Value::Null => serde_json::Value::Object(serde_json::Map::new()),
        other => other,
    };
    let mut config: ProjectConfiguration = serde_json::from_value(answers)
        .map_err(|e| BaseAppError::ConfigError(format!("Invalid answers: {e}")))?;
    if let Some(name) = project_name {
        config.project_name = name;
    }
    config.validate()?;
    Ok(config)
}
