//! A quick font metadata viewer built with Rust and the Bevy game engine.

use anyhow::Result;
use fontpeek::core;

/// Create and run the application with the given CLI arguments.
fn run_app(cli_args: core::cli::CliArgs) -> Result<()> {
    let mut app = core::app::create_app(cli_args)?;
    app.run();
    Ok(())
}

fn main() {
    let cli_args = core::platform::get_cli_args();
    match run_app(cli_args) {
        Ok(()) => {}
        Err(error) => core::platform::handle_error(error),
    }
}
