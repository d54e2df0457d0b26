//! Secret retrieval.
//!
//! Abstracts the remote secret store so the export pipeline can run against
//! AWS Secrets Manager or an in-memory source.

use aws_config::Region;
use aws_sdk_secretsmanager::error::DisplayErrorContext;
use aws_sdk_secretsmanager::{config, Client};
use tokio::runtime::Runtime;
use tracing::debug;

use crate::core::domain::SecretPayload;
use crate::core::environment::ExecutionConfig;
use crate::error::{FetchError, Result};

/// A store that can look up one secret by name.
pub trait SecretSource {
    /// Store name for diagnostics
    fn name(&self) -> &'static str;

    /// Fetch the secret's string value.
    ///
    /// # Errors
    ///
    /// Returns a `FetchError` on transport, authorization or not-found errors.
    fn fetch(&self, secret: &str) -> Result<SecretPayload>;
}

/// AWS Secrets Manager.
///
/// Issues exactly one `GetSecretValue` request per fetch on the caller's runtime.
pub struct SecretsManager<'rt> {
    runtime: &'rt Runtime,
    client: Client,
}

impl<'rt> SecretsManager<'rt> {
    /// Build a client for the resolved credentials and region.
    pub fn new(runtime: &'rt Runtime, execution: &ExecutionConfig) -> Self {
        let conf = config::Builder::from(execution.sdk_config())
            .region(Region::new(execution.region().to_string()))
            .build();

        Self {
            runtime,
            client: Client::from_conf(conf),
        }
    }
}

impl SecretSource for SecretsManager<'_> {
    fn name(&self) -> &'static str {
        "aws-secretsmanager"
    }

    fn fetch(&self, secret: &str) -> Result<SecretPayload> {
        debug!(secret = %secret, "fetching secret value");

        let output = self
            .runtime
            .block_on(self.client.get_secret_value().secret_id(secret).send())
            .map_err(|e| FetchError::Request(DisplayErrorContext(&e).to_string()))?;

        // Binary-only secrets carry no string value.
        let value = output
            .secret_string()
            .ok_or_else(|| FetchError::NoStringValue(secret.to_string()))?;

        debug!(len = value.len(), "fetched secret value");
        Ok(SecretPayload::from(value))
    }
}
