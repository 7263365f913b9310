//! Interactive collection of the project configuration.
//! Questions are asked in a fixed order; every one has a default, so pressing
//! enter throughout yields the default configuration.

use crate::config::{
    validate_project_name, Feature, FeatureSet, PackageManager, ProjectConfiguration, Styling,
};
use crate::constants::{DEFAULT_DESCRIPTION, DEFAULT_PROJECT_NAME};
use crate::error::{BaseAppError, BaseAppResult};
use dialoguer::{Confirm, Input, MultiSelect, Select};

/// Trait for terminal interaction, so collection can run without a terminal.
pub trait Prompter {
    /// Free text input. `validate` is re-run until it accepts the value.
    fn input(
        &self,
        prompt: &str,
        default: &str,
        validate: &dyn Fn(&str) -> BaseAppResult<()>,
    ) -> BaseAppResult<String>;

    /// Single choice; returns the selected index.
    fn select(&self, prompt: &str, items: &[&str], default: usize) -> BaseAppResult<usize>;

    /// Multiple choice; returns the selected indices.
    fn multi_select(
        &self,
        prompt: &str,
        items: &[&str],
        defaults: &[bool],
    ) -> BaseAppResult<Vec<usize>>;

    fn confirm(&self, prompt: &str, default: bool) -> BaseAppResult<bool>;
}

/// Prompter backed by dialoguer.
#[derive(Debug, Default, Clone, Copy)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

fn prompt_error(e: dialoguer::Error) -> BaseAppError {
    BaseAppError::PromptError(e.to_string())
}

impl Prompter for DialoguerPrompter {
    fn input(
        &self,
        prompt: &str,
        default: &str,
        validate: &dyn Fn(&str) -> BaseAppResult<()>,
    ) -> BaseAppResult<String> {
        Input::<String>::new()
            .with_prompt(prompt)
            .default(default.to_string())
            .allow_empty(true)
            .validate_with(|input: &String| validate(input).map_err(|e| e.to_string()))
            .interact_text()
            .map_err(prompt_error)
    }

    fn select(&self, prompt: &str, items: &[&str], default: usize) -> BaseAppResult<usize> {
        Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact()
            .map_err(prompt_error)
    }

    fn multi_select(
        &self,
        prompt: &str,
        items: &[&str],
        defaults: &[bool],
    ) -> BaseAppResult<Vec<usize>> {
        MultiSelect::new()
            .with_prompt(prompt)
            .items(items)
            .defaults(defaults)
            .interact()
            .map_err(prompt_error)
    }

    fn confirm(&self, prompt: &str, default: bool) -> BaseAppResult<bool> {
        Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(prompt_error)
    }
}

fn accept_any(_: &str) -> BaseAppResult<()> {
    Ok(())
}

fn choice<T: Copy>(options: &[T], index: usize) -> BaseAppResult<T> {
    options
        .get(index)
        .copied()
        .ok_or_else(|| BaseAppError::PromptError(format!("selection {index} is out of range")))
}

/// Asks every configuration question.
///
/// # Arguments
/// * `prompt` - Terminal (or scripted) prompter
/// * `project_name` - Name given on the command line; skips the name question
pub fn collect_configuration(
    prompt: &dyn Prompter,
    project_name: Option<String>,
) -> BaseAppResult<ProjectConfiguration> {
    let project_name = match project_name {
        Some(name) => {
            validate_project_name(&name)?;
            name
        }
        None => prompt.input(
            "What is your project name?",
            DEFAULT_PROJECT_NAME,
            &validate_project_name,
        )?,
    };

    let use_typescript =
        prompt.select("Would you like to use TypeScript?", &["Yes", "No"], 0)? == 0;

    let styling_labels: Vec<&str> = Styling::ALL.iter().map(Styling::label).collect();
    let styling_index = prompt.select(
        "Which styling solution would you like to use?",
        &styling_labels,
        0,
    )?;
    let styling = choice(&Styling::ALL, styling_index)?;

    let use_app_router = prompt.select(
        "Use Next.js App Router (app directory) or Pages Router (pages directory)?",
        &["App Router (Recommended)", "Pages Router"],
        0,
    )? == 0;

    let feature_labels: Vec<&str> = Feature::ALL.iter().map(Feature::label).collect();
    let feature_defaults: Vec<bool> =
        Feature::ALL.iter().map(Feature::enabled_by_default).collect();
    let features: FeatureSet = prompt
        .multi_select(
            "Which features would you like to include?",
            &feature_labels,
            &feature_defaults,
        )?
        .into_iter()
        .filter_map(|index| Feature::ALL.get(index).copied())
        .collect();

    let pm_labels: Vec<&str> = PackageManager::ALL
        .iter()
        .map(PackageManager::as_str)
        .collect();
    let pm_index = prompt.select(
        "Which package manager would you like to use?",
        &pm_labels,
        0,
    )?;
    let package_manager = choice(&PackageManager::ALL, pm_index)?;

    let author = prompt.input("Author name:", "", &accept_any)?;
    let description = prompt.input("Project description:", DEFAULT_DESCRIPTION, &accept_any)?;
    let git_init = prompt.confirm("Initialize a new git repository?", true)?;

    Ok(ProjectConfiguration {
        project_name,
        use_typescript,
        styling,
        use_app_router,
        features,
        package_manager,
        author,
        description,
        git_init,
    })
}

/// Final confirmation before anything is written.
pub fn confirm_generation(prompt: &dyn Prompter, skip_confirmation: bool) -> BaseAppResult<bool> {
    if skip_confirmation {
        return Ok(true);
    }
    prompt.confirm("Proceed with this configuration?", true)
}
