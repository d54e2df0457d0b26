//! Execution environment resolution.
//!
//! Loads credentials from the standard AWS discovery chain (environment,
//! shared profile files, container/instance roles) and the region from the
//! environment and profile files only. When neither names a region, the
//! instance metadata service is asked instead, bounded by [`METADATA_TIMEOUT`].
//! The metadata service is never consulted for the region anywhere else.

use std::future::Future;
use std::time::Duration;

use aws_config::environment::region::EnvironmentVariableRegionProvider;
use aws_config::meta::region::RegionProviderChain;
use aws_config::profile::region::ProfileFileRegionProvider;
use aws_config::{BehaviorVersion, SdkConfig};
use tokio::runtime::Runtime;
use tracing::{debug, trace};

use crate::core::constants::{METADATA_REGION_PATH, METADATA_TIMEOUT};
use crate::error::{ConfigError, Result};

/// Environment variable that turns off instance metadata lookups.
const METADATA_DISABLED_ENV: &str = "AWS_EC2_METADATA_DISABLED";

/// Resolved credentials and region for one run.
///
/// The region is always non-empty.
#[derive(Debug, Clone)]
pub struct ExecutionConfig {
    sdk: SdkConfig,
    region: String,
}

impl ExecutionConfig {
    /// Pair a loaded SDK config with a region.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::RegionNotFound` if `region` is blank.
    pub fn new(sdk: SdkConfig, region: impl Into<String>) -> Result<Self> {
        let region = region.into();
        if region.trim().is_empty() {
            return Err(ConfigError::RegionNotFound.into());
        }
        Ok(Self { sdk, region })
    }

    /// SDK configuration (credentials provider, retry and timeout settings)
    pub fn sdk_config(&self) -> &SdkConfig {
        &self.sdk
    }

    /// Region the remote call is addressed to
    pub fn region(&self) -> &str {
        &self.region
    }
}

/// Resolves an [`ExecutionConfig`] on a caller-provided runtime.
pub struct Resolver<'rt> {
    runtime: &'rt Runtime,
    timeout: Duration,
}

impl<'rt> Resolver<'rt> {
    /// Create a resolver using the default metadata timeout.
    pub fn new(runtime: &'rt Runtime) -> Self {
        Self {
            runtime,
            timeout: METADATA_TIMEOUT,
        }
    }

    /// Override the metadata timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load credentials and region.
    ///
    /// Credentials are resolved lazily by the SDK on first use, so a bad
    /// credential surfaces at fetch time.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if no region is configured and the metadata
    /// lookup fails or does not answer in time.
    pub fn resolve(&self) -> Result<ExecutionConfig> {
        self.runtime.block_on(self.load())
    }

    async fn load(&self) -> Result<ExecutionConfig> {
        // The SDK's default region chain ends with an unbounded metadata lookup.
        let region_chain = RegionProviderChain::first_try(EnvironmentVariableRegionProvider::new())
            .or_else(ProfileFileRegionProvider::new());

        let sdk = aws_config::defaults(BehaviorVersion::latest())
            .region(region_chain)
            .load()
            .await;

        let chain = sdk.region().map(|r| r.as_ref().to_string());
        let region = region_or_probe(chain, metadata_region, self.timeout).await?;

        ExecutionConfig::new(sdk, region)
    }
}

/// Use the chain's region, or race a metadata probe against `limit`.
///
/// `probe` is only invoked when `chain` is missing or blank. The probe runs
/// as its own task; when the timer wins the task is aborted and its eventual
/// answer is discarded.
pub async fn region_or_probe<P, F>(
    chain: Option<String>,
    probe: P,
    limit: Duration,
) -> Result<String>
where
    P: FnOnce() -> F,
    F: Future<Output = Result<String>> + Send + 'static,
{
    if let Some(region) = chain.filter(|r| !r.trim().is_empty()) {
        debug!(region = %region, "region resolved from standard chain");
        return Ok(region);
    }

    debug!(
        timeout_ms = limit.as_millis() as u64,
        "region not configured, asking instance metadata"
    );

    let mut task = tokio::spawn(probe());

    match tokio::time::timeout(limit, &mut task).await {
        Ok(Ok(answer)) => {
            let region = answer?.trim().to_string();
            if region.is_empty() {
                return Err(ConfigError::Metadata("empty region returned".into()).into());
            }
            debug!(region = %region, "region resolved from instance metadata");
            Ok(region)
        }
        Ok(Err(join)) => Err(ConfigError::Metadata(join.to_string()).into()),
        Err(_) => {
            task.abort();
            debug!("instance metadata lookup timed out");
            Err(ConfigError::RegionNotFound.into())
        }
    }
}

/// Ask the instance metadata service for the current region.
async fn metadata_region() -> Result<String> {
    if metadata_disabled() {
        let reason = format!("disabled by {}", METADATA_DISABLED_ENV);
        return Err(ConfigError::Metadata(reason).into());
    }

    trace!(path = METADATA_REGION_PATH, "querying instance metadata");

    let client = aws_config::imds::Client::builder().build();
    let answer = client
        .get(METADATA_REGION_PATH)
        .await
        .map_err(|e| ConfigError::Metadata(e.to_string()))?;

    Ok(answer.as_ref().to_string())
}

fn metadata_disabled() -> bool {
    std::env::var(METADATA_DISABLED_ENV)
        .map(|v| v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}
