//! Tally command-line front end.
//!
//! Usage:
//!   tally 1.28 '$1,000,040.15'          - Break amounts down
//!   tally --strategy recursive 19.48    - Use the recursive walk
//!   tally --format json --verify 100.75 - JSON output, checked round trip
//!   tally --table                       - Print the denomination table

mod cli;
mod render;

use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use tally_core::{BreakdownError, breakdown, verify};
use tally_shared::{Amount, AppConfig, AppError};

use crate::cli::{Cli, Settings};
use crate::render::{Report, render_table};

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let args = Cli::parse();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            let (message, status) = report_error(&anyhow::Error::from(AppError::from(err)));
            eprintln!("{message}");
            return ExitCode::from(status);
        }
    };

    // Logs go to stderr so stdout stays machine readable
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log.filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let settings = Settings::resolve(&args, &config.output);
    debug!(
        strategy = %settings.strategy,
        format = %settings.format,
        verify = settings.verify,
        "Settings resolved"
    );

    match run(&args, settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let (message, status) = report_error(&err);
            error!(
                code = err
                    .downcast_ref::<AppError>()
                    .map_or("INTERNAL_ERROR", AppError::error_code),
                "{message}"
            );
            // printed regardless of the log filter
            eprintln!("{message}");
            ExitCode::from(status)
        }
    }
}

fn run(args: &Cli, settings: Settings) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();

    if args.table {
        let table = render_table(settings.format).context("Failed to render table")?;
        writeln!(stdout, "{table}")?;
        return Ok(());
    }

    for raw in &args.amounts {
        let amount = raw.parse::<Amount>().map_err(AppError::from)?;
        let result = breakdown(amount, settings.strategy);
        info!(
            %amount,
            strategy = %settings.strategy,
            entries = result.len(),
            pieces = result.pieces(),
            "Amount broken down"
        );

        if settings.verify {
            verify(amount, &result).map_err(|err| match err {
                BreakdownError::Mismatch { .. } => AppError::Verification(err.to_string()),
                BreakdownError::InvalidAmount(err) => AppError::from(err),
            })?;
            debug!(%amount, "Round trip verified");
        }

        let line = Report::new(amount, settings.strategy, result)
            .render(settings.format)
            .context("Failed to render breakdown")?;
        writeln!(stdout, "{line}")?;
    }

    Ok(())
}

/// Message and process status for a failed run. Errors that are not an
/// `AppError` exit with 1.
fn report_error(err: &anyhow::Error) -> (String, u8) {
    let status = err
        .downcast_ref::<AppError>()
        .map_or(1, |app_error| u8::try_from(app_error.exit_code()).unwrap_or(1));
    (format!("{err:#}"), status)
}
