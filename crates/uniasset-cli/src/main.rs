mod cli;

use crate::cli::CliCommand;

fn main() {
    // Parse CLI, set up logging, dispatch.
    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("uniasset error: {:#}", err);
        std::process::exit(1);
    }
}
