//! Turns raw user input into a validated [`ScanRequest`].
//!
//! All validation lives here and in the `nmapr-common` value types it
//! delegates to; both the flag parser and the interactive wizard feed
//! their answers through [`build`] so a bad wizard answer fails exactly
//! like a bad flag would.

use std::path::PathBuf;

use nmapr_common::error::ValidationError;
use nmapr_common::scan::ScanType;
use nmapr_common::scan::output::OutputFormat;
use nmapr_common::scan::ports::PortRange;
use nmapr_common::scan::script::ScriptSpec;
use nmapr_common::scan::target::Target;
use nmapr_common::scan::timing::TimingTemplate;

/// Scan parameters exactly as collected, before any validation.
///
/// The three scan-type booleans are kept separate on purpose: the wizard
/// lets users tick several, and deciding that this is an error belongs to
/// [`build`], not to the collection layer.
#[derive(Debug, Default, Clone)]
pub struct RawScanOptions {
    pub target: String,
    pub syn: bool,
    pub connect: bool,
    pub udp: bool,
    pub service_detection: bool,
    pub os_detection: bool,
    pub default_scripts: bool,
    pub script_categories: Option<String>,
    pub script_file: Option<PathBuf>,
    pub skip_discovery: bool,
    /// Comma-separated decoy addresses, verbatim from the user.
    pub decoys: Option<String>,
    pub timing: Option<u8>,
    pub ports: Option<String>,
    pub format: OutputFormat,
}

/// A validated, normalized scan request.
///
/// Immutable once built; the command assembler consumes it by value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRequest {
    pub target: Target,
    pub scan_type: ScanType,
    pub service_detection: bool,
    pub os_detection: bool,
    pub default_scripts: bool,
    pub script: Option<ScriptSpec>,
    pub skip_discovery: bool,
    /// Empty means no decoys.
    pub decoys: Vec<String>,
    pub timing: Option<TimingTemplate>,
    pub ports: Option<PortRange>,
    pub format: OutputFormat,
}

/// Validates and normalizes raw options into a [`ScanRequest`].
///
/// Pure apart from the read-only script-path existence check delegated to
/// [`ScriptSpec::resolve`]. Fails fast on the first invalid field.
pub fn build(raw: RawScanOptions) -> Result<ScanRequest, ValidationError> {
    let target: Target = raw.target.parse()?;
    let scan_type = select_scan_type(raw.syn, raw.connect, raw.udp)?;
    let script = ScriptSpec::resolve(raw.script_categories, raw.script_file)?;
    let timing = raw.timing.map(TimingTemplate::try_from).transpose()?;
    let ports = raw.ports.as_deref().map(str::parse).transpose()?;
    let decoys = split_decoys(raw.decoys);

    Ok(ScanRequest {
        target,
        scan_type,
        service_detection: raw.service_detection,
        os_detection: raw.os_detection,
        default_scripts: raw.default_scripts,
        script,
        skip_discovery: raw.skip_discovery,
        decoys,
        timing,
        ports,
        format: raw.format,
    })
}

/// Exactly one scan type may be selected.
///
/// None selected falls back to a connect scan, the technique that works
/// without privileges; the CLI pre-selects SYN instead when already
/// running as root.
fn select_scan_type(syn: bool, connect: bool, udp: bool) -> Result<ScanType, ValidationError> {
    match (syn, connect, udp) {
        (true, false, false) => Ok(ScanType::Syn),
        (false, true, false) => Ok(ScanType::Connect),
        (false, false, true) => Ok(ScanType::Udp),
        (false, false, false) => Ok(ScanType::Connect),
        _ => Err(ValidationError::ConflictingScanType),
    }
}

fn split_decoys(raw: Option<String>) -> Vec<String> {
    raw.map(|list| {
        list.split(',')
            .map(str::trim)
            .filter(|decoy| !decoy.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}
