//! # Kantan CLI
//!
//! The binary is thin: `cli/` parses arguments, calls into the library and
//! renders the results. Everything from [`kantan::Board`] inward is UI
//! agnostic and never prints or exits.
//!
//! Every failure prints in red on stderr and exits with status 1.

mod cli;

use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = cli::Cli::parse();
    cli::init_logging(args.verbose);

    if let Err(e) = cli::run(args).await {
        cli::print::error(&e.to_string());
        std::process::exit(1);
    }
}
