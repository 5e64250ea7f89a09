//! Documentation renderer entry point.

use std::process::ExitCode;

use clap::Parser;
use corkboard_docs::DocsConfig;

fn main() -> ExitCode {
    env_logger::init();

    // Exits with 0 for --help/--version and 2 for bad arguments.
    let config = DocsConfig::parse();

    match corkboard_docs::run(&config, &mut std::io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Failed to render docs: {}", e);
            ExitCode::FAILURE
        }
    }
}
