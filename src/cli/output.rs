//! Shared CLI output helpers.
//!
//! Color scheme (respects NO_COLOR):
//! - Green: success, checkmarks
//! - Red: errors
//! - Cyan: paths, hints
//! - Bold: secret names

use console::style;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err()
}

/// Print a success message with checkmark (green).
///
/// Example: `✓ wrote db/creds to out.json`
pub fn success(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("✓").green(), msg);
    } else {
        println!("✓ {}", msg);
    }
}

/// Print an error message to stderr (red).
///
/// Example: `✗ aws: region not found`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print an error message with a hint on the same stderr line.
///
/// Example: `✗ aws: region not found → set AWS_REGION`
pub fn error_with_hint(msg: &str, hint: &str) {
    if colors_enabled() {
        eprintln!(
            "{} {} {} {}",
            style("✗").red(),
            msg,
            style("→").cyan(),
            style(hint).cyan()
        );
    } else {
        eprintln!("✗ {} → {}", msg, hint);
    }
}

/// Format a path string in cyan.
pub fn path(p: &str) -> String {
    if colors_enabled() {
        style(p).cyan().to_string()
    } else {
        p.to_string()
    }
}

/// Format a secret name in bold.
pub fn key(k: &str) -> String {
    if colors_enabled() {
        style(k).bold().to_string()
    } else {
        k.to_string()
    }
}
