//! smexp - Retrieve a secret from AWS Secrets Manager and save it to a file.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use smexp::cli::output;
use smexp::cli::{execute, Cli};
use smexp::core::constants::{EX_USAGE, LOG_ENV};
use smexp::error::{ConfigError, Error, UsageError};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help requests exit with the usage code too; nothing was exported.
            let _ = e.print();
            std::process::exit(EX_USAGE);
        }
    };

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("smexp=debug")
        } else {
            EnvFilter::new("smexp=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli) {
        let suggestion = match &e {
            Error::Config(ConfigError::RegionNotFound | ConfigError::Metadata(_)) => {
                Some("set AWS_REGION or configure a region in your AWS profile")
            }
            Error::Usage(UsageError::UnsupportedType(_)) => {
                Some("use a .json, .yaml or .yml file, or pass --type json|yaml")
            }
            _ => None,
        };

        match suggestion {
            Some(hint) => output::error_with_hint(&e.to_string(), hint),
            None => output::error(&e.to_string()),
        }
        std::process::exit(e.exit_code());
    }
}
