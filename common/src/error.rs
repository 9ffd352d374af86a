use std::path::PathBuf;

use thiserror::Error;

/// Validation failures surfaced before the external binary is ever started.
///
/// Every variant is a local input problem; nothing here wraps an nmap
/// failure. A non-zero exit from the scanner itself is reported as-is by
/// the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("target is empty after stripping the scheme and 'www.' prefix")]
    EmptyTarget,
    #[error("invalid timing template '{0}': expected an integer from 0 to 5")]
    BadTiming(String),
    #[error("invalid port range '{0}': expected start[-end] with ports in 1-65535 and start <= end")]
    BadPortRange(String),
    #[error("script '{}' does not exist", .0.display())]
    ScriptNotFound(PathBuf),
    #[error("more than one scan type selected, pick one of SYN, connect or UDP")]
    ConflictingScanType,
    #[error("script categories and a script file are mutually exclusive, pick one")]
    ConflictingScriptSpec,
}
