//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

/// AWS variables that would otherwise leak in from the host.
const AWS_VARS: &[&str] = &[
    "AWS_REGION",
    "AWS_DEFAULT_REGION",
    "AWS_PROFILE",
    "AWS_ACCESS_KEY_ID",
    "AWS_SECRET_ACCESS_KEY",
    "AWS_SESSION_TOKEN",
    "AWS_ENDPOINT_URL",
    "AWS_ENDPOINT_URL_SECRETS_MANAGER",
    "AWS_IGNORE_CONFIGURED_ENDPOINT_URLS",
    "AWS_EC2_METADATA_SERVICE_ENDPOINT",
    "AWS_CONTAINER_CREDENTIALS_RELATIVE_URI",
    "AWS_CONTAINER_CREDENTIALS_FULL_URI",
    "AWS_WEB_IDENTITY_TOKEN_FILE",
    "AWS_ROLE_ARN",
    "SMEXP_LOG",
];

impl Test {
    /// Create an smexp command with an isolated AWS environment.
    ///
    /// Returns a Command configured with:
    /// - HOME set to the temporary home directory
    /// - shared config/credentials files pointing at missing files
    /// - instance metadata disabled
    /// - current directory set to the test directory
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("smexp").expect("failed to find smexp binary");
        for var in AWS_VARS {
            cmd.env_remove(var);
        }
        cmd.env("HOME", self.home.path());
        // Windows uses USERPROFILE instead of HOME for home directory
        cmd.env("USERPROFILE", self.home.path());
        cmd.env("AWS_CONFIG_FILE", self.home.path().join("aws-config"));
        cmd.env(
            "AWS_SHARED_CREDENTIALS_FILE",
            self.home.path().join("aws-credentials"),
        );
        cmd.env("AWS_EC2_METADATA_DISABLED", "true");
        cmd.env("NO_COLOR", "1");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Command with a region and static credentials pointed at `endpoint`.
    ///
    /// Retries are off so an unreachable endpoint fails quickly.
    pub fn cmd_with_endpoint(&self, endpoint: &str) -> Command {
        let mut cmd = self.cmd();
        cmd.env("AWS_REGION", "us-east-1");
        cmd.env("AWS_ACCESS_KEY_ID", "AKIDEXAMPLE");
        cmd.env("AWS_SECRET_ACCESS_KEY", "wJalrXUtnFEMI/K7MDENG/bPxRfiCYEXAMPLEKEY");
        cmd.env("AWS_ENDPOINT_URL", endpoint);
        cmd.env("AWS_MAX_ATTEMPTS", "1");
        cmd
    }

    /// Shortcut for `smexp <secret> <file>`.
    pub fn export(&self, secret: &str, file: &str) -> Output {
        self.cmd()
            .args([secret, file])
            .output()
            .expect("failed to run smexp")
    }

    /// Shortcut for `smexp --version`.
    pub fn version(&self) -> Output {
        self.cmd()
            .arg("--version")
            .output()
            .expect("failed to run smexp --version")
    }
}
