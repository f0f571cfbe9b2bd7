//! Report command - load data, split it, and render the chart set.

use colored::Colorize;
use log::debug;
use riskeda::generate_eda_report;

use crate::cli::Cli;

pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    println!(
        "{} {}",
        "Reading".cyan().bold(),
        cli.data_location.display().to_string().white()
    );

    let summary = generate_eda_report(&cli.data_location, &cli.output_location)?;
    debug!("{}", serde_json::to_string_pretty(&summary)?);

    println!(
        "Loaded {} rows ({} train, {} test) across {} risk levels",
        summary.source.row_count.to_string().white().bold(),
        summary.train_rows.to_string().green(),
        summary.test_rows.to_string().yellow(),
        summary.risk_levels.len().to_string().white().bold()
    );

    println!();
    for artifact in &summary.artifacts {
        println!(
            "  {} {} ({} bytes)",
            "Saved".green().bold(),
            artifact.path.display().to_string().white(),
            artifact.bytes
        );
    }

    Ok(())
}
