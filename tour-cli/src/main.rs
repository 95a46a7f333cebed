//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use tour_cli::CliError;

fn main() {
    if let Err(err) = tour_cli::init_logging() {
        eprintln!("tour: logging disabled: {err}");
    }
    match tour_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("tour: {err}");
            std::process::exit(1);
        }
    }
}
