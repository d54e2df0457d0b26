//! Command-line interface.

pub mod output;
pub mod version;

use std::path::PathBuf;

use clap::Parser;
use tokio::runtime::Runtime;

use crate::core::domain::Format;
use crate::core::environment::Resolver;
use crate::core::export::Export;
use crate::core::source::SecretsManager;
use crate::error::{ConfigError, Result, UsageError};

/// smexp - Retrieve a secret from AWS Secrets Manager and save it to a file.
#[derive(Parser, Debug)]
#[command(
    name = "smexp",
    about = "Retrieve a secret from AWS Secrets Manager and save it to a file",
    long_about = "Retrieve secret from AWS Secrets Manager and save to file. \
                  JSON and YAML formats supported.",
    disable_version_flag = true
)]
pub struct Cli {
    /// Secret name or ARN
    #[arg(value_name = "SECRET", required_unless_present = "version")]
    pub secret: Option<String>,

    /// Output file
    #[arg(value_name = "FILE", required_unless_present = "version")]
    pub file: Option<PathBuf>,

    /// Output file type, file extension is used if not specified
    #[arg(short = 't', long = "type", value_enum)]
    pub file_type: Option<FileType>,

    /// Print version and exit
    #[arg(short = 'v', long)]
    pub version: bool,

    /// Enable debug logging
    #[arg(long)]
    pub verbose: bool,
}

/// Output types accepted by `--type`.
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileType {
    Json,
    Yaml,
}

impl From<FileType> for Format {
    fn from(value: FileType) -> Self {
        match value {
            FileType::Json => Format::Json,
            FileType::Yaml => Format::Yaml,
        }
    }
}

/// Execute a parsed command line.
pub fn execute(cli: Cli) -> Result<()> {
    if cli.version {
        version::execute();
        return Ok(());
    }

    let secret = cli.secret.ok_or(UsageError::MissingArgument("SECRET"))?;
    let file = cli.file.ok_or(UsageError::MissingArgument("FILE"))?;

    let export = Export::new(secret, file, cli.file_type.map(Format::from))?;

    let runtime = runtime()?;
    export.run(|| {
        let execution = Resolver::new(&runtime).resolve()?;
        Ok(SecretsManager::new(&runtime, &execution))
    })?;

    output::success(&format!(
        "wrote {} to {}",
        output::key(export.secret()),
        output::path(&export.output().path().display().to_string())
    ));
    Ok(())
}

/// Single-threaded runtime for the AWS SDK and the metadata probe.
fn runtime() -> Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| ConfigError::Load(format!("failed to create runtime: {}", e)).into())
}
