//! CLI argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

/// riskeda: export exploratory charts from maternal health risk data
#[derive(Parser, Debug)]
#[command(name = "riskeda")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Location of the data to be used for EDA
    #[arg(long = "data_location", value_name = "DATA_LOCATION")]
    pub data_location: PathBuf,

    /// Location prefix to output the visualisations (e.g. "figures/")
    #[arg(long = "output_location", value_name = "OUTPUT_LOCATION")]
    pub output_location: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_underscore_flags() {
        let cli = Cli::try_parse_from([
            "riskeda",
            "--data_location",
            "data/maternal.csv",
            "--output_location",
            "figures/",
        ])
        .unwrap();
        assert_eq!(cli.data_location, PathBuf::from("data/maternal.csv"));
        assert_eq!(cli.output_location, "figures/");
    }

    #[test]
    fn test_both_flags_required() {
        assert!(Cli::try_parse_from(["riskeda", "--data_location", "a.csv"]).is_err());
        assert!(Cli::try_parse_from(["riskeda", "--output_location", "out/"]).is_err());
    }
}
