//! riskeda CLI - exploratory chart reports for maternal health risk data.

mod cli;
mod logging;
mod report;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init_logger();

    if let Err(e) = report::run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
