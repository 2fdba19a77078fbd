//! Platform-specific functionality and error handling.

/// Handle application startup errors.
///
/// Prints to stderr and exits with code 1. Errors after the window is up
/// never reach this; the shell turns them into modal dialogs instead.
pub fn handle_error(error: anyhow::Error) {
    eprintln!();
    eprintln!("Error starting Fontpeek:");
    eprintln!("{error}");
    eprintln!();
    eprintln!("Try running with --help for usage information.");
    std::process::exit(1);
}

/// Parse CLI arguments.
pub fn get_cli_args() -> crate::core::cli::CliArgs {
    use clap::Parser;
    crate::core::cli::CliArgs::parse()
}
