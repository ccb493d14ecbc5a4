//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use roadlog_cli::CliError;

fn main() {
    match roadlog_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("roadlog: {err}");
            std::process::exit(1);
        }
    }
}
