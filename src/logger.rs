//! Logger setup for the command-line binary.

/// Initializes env_logger: `Debug` when verbose, otherwise `Warn` so log
/// lines do not interleave with the progress spinner.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .format_timestamp(None)
        .init();
}
