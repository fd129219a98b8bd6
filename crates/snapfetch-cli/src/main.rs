use snapfetch_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Log to the state-dir file when possible, else stderr.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    // Parse CLI and dispatch.
    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("snapfetch error: {:#}", err);
        std::process::exit(1);
    }
}
