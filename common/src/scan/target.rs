//! # Scan Target Model
//!
//! Defines what a scan can be pointed at.
//!
//! Users paste targets straight out of a browser bar, so this module
//! accepts:
//! * A plain IP address or hostname (e.g., `192.168.1.5`, `example.com`).
//! * A URL, from which one leading `http://`/`https://` scheme and one
//!   leading `www.` are stripped (e.g., `https://www.example.com`).

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::ValidationError;

/// A normalized, non-empty scan target.
///
/// Normalization happens exactly once, in [`FromStr`]; everything
/// downstream (command assembly, output path derivation) works with the
/// already-clean value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target(String);

impl Target {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Filesystem-safe stem used to derive the output file name.
    ///
    /// Every character outside `[A-Za-z0-9]` becomes `_`, so
    /// `example.com` yields `example_com`.
    pub fn file_stem(&self) -> String {
        self.0
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect()
    }
}

impl FromStr for Target {
    type Err = ValidationError;

    /// Parses raw user input into a normalized target.
    ///
    /// Strips surrounding whitespace, then at most one scheme prefix,
    /// then at most one `www.` prefix. Fails with
    /// [`ValidationError::EmptyTarget`] if nothing remains.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let stripped = strip_scheme(trimmed);
        let stripped = stripped.strip_prefix("www.").unwrap_or(stripped);

        if stripped.len() != trimmed.len() {
            debug!("normalized target '{trimmed}' to '{stripped}'");
        }

        if stripped.is_empty() {
            return Err(ValidationError::EmptyTarget);
        }

        Ok(Target(stripped.to_string()))
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Strips exactly one leading `http://` or `https://`.
fn strip_scheme(s: &str) -> &str {
    s.strip_prefix("https://")
        .or_else(|| s.strip_prefix("http://"))
        .unwrap_or(s)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
