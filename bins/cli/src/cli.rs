//! Command-line arguments and their merge with file/env configuration.

use clap::Parser;
use tally_shared::Strategy;
use tally_shared::config::{OutputConfig, OutputFormat};

/// Break monetary amounts down into bills and coins.
#[derive(Debug, Parser)]
#[command(name = "tally", version, about, allow_negative_numbers = true)]
pub struct Cli {
    /// Amounts to break down, e.g. `1.28` or `'$1,000,040.15'`.
    #[arg(required_unless_present = "table")]
    pub amounts: Vec<String>,

    /// Walk to use (`greedy` or `recursive`).
    #[arg(long)]
    pub strategy: Option<Strategy>,

    /// Output format (`text` or `json`).
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Fail unless every breakdown sums back to its amount.
    #[arg(long)]
    pub verify: bool,

    /// Print the denomination table and exit.
    #[arg(long)]
    pub table: bool,
}

/// Effective settings after flags override configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Breakdown walk.
    pub strategy: Strategy,
    /// Rendering format.
    pub format: OutputFormat,
    /// Check round trips.
    pub verify: bool,
}

impl Settings {
    /// Flags win over configuration; `--verify` can only switch checking on.
    pub fn resolve(cli: &Cli, output: &OutputConfig) -> Self {
        Self {
            strategy: cli.strategy.unwrap_or(output.strategy),
            format: cli.format.unwrap_or(output.format),
            verify: cli.verify || output.verify,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("tally").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_parse_amounts() {
        let cli = parse(&["1.28", "$19.48"]);
        assert_eq!(cli.amounts, vec!["1.28", "$19.48"]);
        assert!(cli.strategy.is_none());
        assert!(!cli.table);
    }

    #[test]
    fn test_parse_negative_amount_as_value() {
        let cli = parse(&["-5"]);
        assert_eq!(cli.amounts, vec!["-5"]);
    }

    #[test]
    fn test_parse_options() {
        let cli = parse(&["--strategy", "recursive", "--format", "json", "--verify", "0.01"]);
        assert_eq!(cli.strategy, Some(Strategy::Recursive));
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(cli.verify);
    }

    #[test]
    fn test_amount_required_without_table() {
        assert!(Cli::try_parse_from(["tally"]).is_err());
        assert!(Cli::try_parse_from(["tally", "--table"]).is_ok());
    }

    #[test]
    fn test_rejects_unknown_strategy() {
        assert!(Cli::try_parse_from(["tally", "--strategy", "dynamic", "1"]).is_err());
    }

    #[test]
    fn test_flags_override_config() {
        let output = OutputConfig {
            format: OutputFormat::Text,
            verify: false,
            strategy: Strategy::Greedy,
        };
        let cli = parse(&["--strategy", "recursive", "--format", "json", "1"]);
        let settings = Settings::resolve(&cli, &output);
        assert_eq!(settings.strategy, Strategy::Recursive);
        assert_eq!(settings.format, OutputFormat::Json);
        assert!(!settings.verify);
    }

    #[test]
    fn test_config_used_when_flags_absent() {
        let output = OutputConfig {
            format: OutputFormat::Json,
            verify: true,
            strategy: Strategy::Recursive,
        };
        let settings = Settings::resolve(&parse(&["1"]), &output);
        assert_eq!(
            settings,
            Settings {
                strategy: Strategy::Recursive,
                format: OutputFormat::Json,
                verify: true,
            }
        );
    }
}
