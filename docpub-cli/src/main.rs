//! Main entry point for the docpub CLI.
//!
//! This is the command-line interface for publishing Doxygen documentation
//! to a HostMyDocs server. A single invocation runs the whole pipeline:
//! - Resolve: merge command-line flags over the JSON configuration file and
//!   rewrite project metadata into a working copy of the Doxyfile
//! - Build: run Doxygen and package the generated HTML into a tar archive
//! - Upload: deliver the archive to the documentation host

mod cli;
mod error;
mod publish;

use clap::Parser;
use cli::Cli;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on the debug flag
    let logger = docpub::init_logger(cli.debug);

    // Execute the publish run
    match publish::execute(&cli, &logger) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            logger.fatal(&e.to_string());
            std::process::exit(e.exit_code());
        }
    }
}
