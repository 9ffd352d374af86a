//! Sequential form-filling for users who prefer prompts over flags.
//!
//! Collection only: every answer lands in [`RawScanOptions`] and goes
//! through the same request builder as the flag path, so a conflicting
//! selection made here fails exactly like conflicting flags would.

use std::path::PathBuf;

use colored::*;
use nmapr_common::config::Config;
use nmapr_common::scan::output::OutputFormat;
use nmapr_common::scan::timing::TimingTemplate;
use nmapr_core::request::RawScanOptions;

use crate::terminal::{print, prompt};

const TECHNIQUES: &[&str] = &[
    "SYN scan (requires root)",
    "Connect scan",
    "UDP scan (requires root)",
    "Service detection",
    "OS detection (requires root)",
    "Default NSE scripts",
];

pub fn run(cfg: &Config) -> anyhow::Result<RawScanOptions> {
    print::header("interactive configuration", cfg.quiet);

    let target = prompt::line("Target IP/hostname/URL")?;

    for (idx, name) in TECHNIQUES.iter().enumerate() {
        println!("  {} {}", format!("{})", idx + 1).bright_black(), name);
    }
    let choices = prompt::line_or("Techniques (comma separated)", "2")?;
    let picked: Vec<&str> = choices.split(',').map(str::trim).collect();
    let has = |choice: &str| picked.iter().any(|p| *p == choice);

    let skip_discovery = prompt::confirm("Skip host discovery (-Pn)?", false)?;
    let script_categories = prompt::optional("NSE categories (e.g. vuln,discovery)")?;
    let script_file = prompt::optional("NSE script file or directory")?.map(PathBuf::from);
    let decoys = prompt::optional("Decoy addresses (comma separated)")?;

    // Parsed eagerly so a typo is reported at the prompt it was made at,
    // with the same error a bad -T flag would produce.
    let timing: TimingTemplate = prompt::line_or("Timing template 0-5", "4")?.parse()?;

    let ports = prompt::line_or("Port range", "1-1000")?;
    let format: OutputFormat = prompt::line_or("Output format (normal/xml/grepable/json)", "normal")?
        .parse()
        .map_err(anyhow::Error::msg)?;

    Ok(RawScanOptions {
        target,
        syn: has("1"),
        connect: has("2"),
        udp: has("3"),
        service_detection: has("4"),
        os_detection: has("5"),
        default_scripts: has("6"),
        script_categories,
        script_file,
        skip_discovery,
        decoys,
        timing: Some(timing.level()),
        ports: Some(ports),
        format,
    })
}
