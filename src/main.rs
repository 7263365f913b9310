//! create-base-app's entry point.
//! Collects the configuration, asks for confirmation, runs the generator and
//! maps the outcome onto the process exit code.

use create_base_app::{
    cli::{get_args, Args},
    error::{default_error_handler, BaseAppResult},
    hooks::ProcessRunner,
    logger::init_logger,
    output::{print_banner, print_cancelled, print_configuration, print_next_steps, SpinnerReporter},
    parser::{configuration_from_answers, load_answers, AnswerSource},
    processor::{Generator, LogReporter, ProgressReporter},
    prompt::{collect_configuration, confirm_generation, DialoguerPrompter},
    renderer::MiniJinjaRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Loads answers from a file or stdin, or prompts for them
/// 2. Prints the configuration summary and asks for confirmation
/// 3. Generates the project
/// 4. Prints the next steps
fn run(args: Args) -> BaseAppResult<()> {
    let source_root = args.source_root()?;
    let prompt = DialoguerPrompter::new();
    let interactive = !args.is_non_interactive();

    if interactive {
        print_banner();
    }

    let source = AnswerSource::from_args(args.stdin, args.answers.clone());
    let config = match load_answers(source)? {
        Some(answers) => configuration_from_answers(answers, args.project_name.clone())?,
        None => collect_configuration(&prompt, args.project_name.clone())?,
    };

    print_configuration(&config);

    // Answers piped through stdin leave no terminal to confirm on.
    if !confirm_generation(&prompt, args.yes || !interactive)? {
        print_cancelled();
        return Ok(());
    }

    let renderer = MiniJinjaRenderer::new();
    let runner = ProcessRunner;
    // Verbose runs log every stage instead of drawing the spinner.
    let reporter: Box<dyn ProgressReporter> = if args.verbose {
        Box::new(LogReporter)
    } else {
        Box::new(SpinnerReporter::new())
    };
    let generator = Generator::new(source_root, &renderer, &runner, reporter.as_ref());

    let summary = generator.generate(&config, &args.directory)?;
    print_next_steps(&summary);
    Ok(())
}
