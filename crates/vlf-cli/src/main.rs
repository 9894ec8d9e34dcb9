use vlf_core::logging;

mod cli;

use crate::cli::Cli;
use clap::Parser;

fn main() {
    let cli = Cli::parse();

    // Initialize logging as early as possible.
    logging::init_logging(cli.debug).expect("failed to initialize logging");

    match cli.run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("vlf error: {:#}", err);
            std::process::exit(1);
        }
    }
}
