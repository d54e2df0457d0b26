//! Build banner.

use crate::core::constants::{BUILD_TIME, GIT_HASH, VERSION};

/// Version, git hash and build time, one per line.
pub fn banner() -> String {
    format!(
        "Version:    {}\nGit Hash:   {}\nBuild Time: {}",
        VERSION, GIT_HASH, BUILD_TIME
    )
}

/// Print the build banner.
pub fn execute() {
    println!("{}", banner());
}
