//! Terminal output for the command-line binary: banner, configuration
//! summary, progress spinner and next steps.

use crate::config::ProjectConfiguration;
use crate::processor::{ProgressEvent, ProgressReporter, Stage};
use crate::summary::{ConfigurationSummary, GenerationSummary};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::warn;
use std::time::Duration;

const RULE_WIDTH: usize = 40;
const SPINNER_TEMPLATE: &str = "{spinner:.cyan} {msg}";

pub fn print_banner() {
    println!();
    println!("{}", "┌─────────────────────────────────────┐".cyan().bold());
    println!("{}", "│     Create Base App CLI Tool        │".cyan().bold());
    println!("{}", "│     Next.js + Base Framework        │".cyan().bold());
    println!("{}", "└─────────────────────────────────────┘".cyan().bold());
    println!();
}

pub fn print_configuration(config: &ProjectConfiguration) {
    println!();
    println!("{}", "Configuration Summary:".yellow());
    println!("{}", "─".repeat(RULE_WIDTH).dimmed());
    println!("{}", ConfigurationSummary(config));
    println!("{}", "─".repeat(RULE_WIDTH).dimmed());
    println!();
}

pub fn print_cancelled() {
    println!("{}", "Operation cancelled.".yellow());
}

pub fn print_next_steps(summary: &GenerationSummary) {
    println!();
    println!("{}", "✓ Project created successfully!".green().bold());
    println!();
    println!("{}", "Next steps:".cyan());
    println!();
    for (index, step) in summary.next_steps().iter().enumerate() {
        println!("  {} {}", format!("{}.", index + 1).dimmed(), step);
    }
    println!();
    println!("{}", "Documentation:".cyan());
    println!("  https://nextjs.org/docs");
    println!();
    println!("{}", "─".repeat(RULE_WIDTH + 10).dimmed());
    println!();
}

/// Progress reporter drawing a single spinner that follows the pipeline stages.
pub struct SpinnerReporter {
    spinner: ProgressBar,
}

impl SpinnerReporter {
    pub fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template(SPINNER_TEMPLATE) {
            spinner.set_style(style);
        }
        spinner.enable_steady_tick(Duration::from_millis(80));
        Self { spinner }
    }
}

impl Default for SpinnerReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for SpinnerReporter {
    fn report(&self, event: &ProgressEvent) {
        match event {
            ProgressEvent::StageStarted(Stage::Done) => {
                let message = format!("{} {}", "✓".green(), Stage::Done);
                self.spinner.finish_with_message(message);
            }
            ProgressEvent::StageStarted(stage) => self.spinner.set_message(stage.to_string()),
            ProgressEvent::FilesCollected(_) | ProgressEvent::FilesCopied(_) => {}
            ProgressEvent::GitInitFailed(message) => warn!("git init failed: {message}"),
            ProgressEvent::Failed { .. } => {
                let message = format!("{} {}", "✗".red(), "Failed to create project");
                self.spinner.finish_with_message(message);
            }
        }
    }
}
