//! Maps a validated [`ScanRequest`] onto the nmap argument vector.
//!
//! nmap is order-sensitive for some flag combinations, so tokens are
//! emitted in one fixed canonical order: scan type, detection flags,
//! scripts, discovery, decoys, timing, ports, output, target last.
//! Tokens stay discrete argv elements end to end; nothing is ever joined
//! into a shell string, so a hostile target or script path cannot smuggle
//! extra arguments in.

use std::path::PathBuf;

use crate::request::ScanRequest;

/// Name of the external binary the assembled argv is handed to.
pub const NMAP_BINARY: &str = "nmap";

/// The assembled invocation: ordered tokens plus the derived output path.
///
/// The output path also appears inside `argv` (right after the format
/// flag); it is carried separately so callers can tell the user where
/// results landed without re-parsing the token list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledCommand {
    pub argv: Vec<String>,
    pub output_file: PathBuf,
}

/// Assembles the canonical token list for a request.
///
/// Consumes the request: a request is built once, assembled once.
/// Deterministic and infallible; every fallible decision was already made
/// by the request builder.
pub fn assemble(request: ScanRequest) -> AssembledCommand {
    let output_file = output_file(&request);
    let mut argv: Vec<String> = Vec::new();

    argv.push(request.scan_type.flag().to_string());
    if request.service_detection {
        argv.push("-sV".to_string());
    }
    if request.os_detection {
        argv.push("-O".to_string());
    }
    if request.default_scripts {
        argv.push("-sC".to_string());
    }
    if let Some(script) = &request.script {
        argv.push("--script".to_string());
        argv.push(script.argument());
    }
    if request.skip_discovery {
        argv.push("-Pn".to_string());
    }
    if !request.decoys.is_empty() {
        argv.push("-D".to_string());
        argv.push(request.decoys.join(","));
    }
    if let Some(timing) = request.timing {
        argv.push(format!("-T{}", timing.level()));
    }
    if let Some(ports) = request.ports {
        argv.push("-p".to_string());
        argv.push(ports.to_string());
    }
    argv.push(request.format.flag().to_string());
    argv.push(output_file.display().to_string());
    argv.push(request.target.to_string());

    AssembledCommand { argv, output_file }
}

/// Derives `<sanitized-target>_scan.<ext>` from the target and format.
fn output_file(request: &ScanRequest) -> PathBuf {
    PathBuf::from(format!(
        "{}_scan.{}",
        request.target.file_stem(),
        request.format.extension()
    ))
}
