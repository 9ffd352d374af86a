pub mod scan;
pub mod wizard;

use std::path::PathBuf;

use clap::Parser;
use nmapr_common::scan::output::OutputFormat;
use nmapr_core::request::RawScanOptions;

#[derive(Parser)]
#[command(name = "nmapr")]
#[command(about = "A convenience front-end for nmap.", version)]
pub struct CommandLine {
    /// IP, hostname or URL to scan (omit to run the interactive wizard)
    pub target: Option<String>,

    /// Answer every option interactively
    #[arg(short, long)]
    pub interactive: bool,

    /// TCP SYN scan (requires root)
    #[arg(long)]
    pub syn: bool,

    /// TCP connect scan
    #[arg(long)]
    pub connect: bool,

    /// UDP scan (requires root)
    #[arg(long)]
    pub udp: bool,

    /// Probe open ports for service and version info
    #[arg(long)]
    pub service_detection: bool,

    /// Enable OS detection (requires root)
    #[arg(short = 'O', long)]
    pub os_detection: bool,

    /// Run the default NSE script set
    #[arg(long)]
    pub default_scripts: bool,

    /// Comma-separated NSE categories (e.g. vuln,discovery)
    #[arg(long, value_name = "CATEGORIES")]
    pub script_cats: Option<String>,

    /// Specific NSE script file or directory
    #[arg(long, value_name = "PATH")]
    pub script_file: Option<PathBuf>,

    /// Skip host discovery, treat the target as online
    #[arg(long)]
    pub skip_ping: bool,

    /// Comma-separated decoy addresses (requires root)
    #[arg(long, value_name = "IPS")]
    pub decoy: Option<String>,

    /// Timing template, 0 (slowest) to 5 (fastest)
    #[arg(short = 'T', long, default_value_t = 4)]
    pub timing: u8,

    /// Port or port range, e.g. 443 or 1-65535
    #[arg(short = 'p', long, value_name = "RANGE")]
    pub ports: Option<String>,

    /// Output format for the result file
    #[arg(short = 'f', long, default_value_t = OutputFormat::Normal)]
    pub format: OutputFormat,

    /// Print the assembled command without running it
    #[arg(long)]
    pub dry_run: bool,

    /// Less decorative output; repeat for errors only
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub quiet: u8,

    /// Skip the startup banner
    #[arg(long)]
    pub no_banner: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Hands the collected flags to the request builder untouched; all
    /// validation happens there.
    pub fn into_raw_options(self) -> RawScanOptions {
        RawScanOptions {
            target: self.target.unwrap_or_default(),
            syn: self.syn,
            connect: self.connect,
            udp: self.udp,
            service_detection: self.service_detection,
            os_detection: self.os_detection,
            default_scripts: self.default_scripts,
            script_categories: self.script_cats,
            script_file: self.script_file,
            skip_discovery: self.skip_ping,
            decoys: self.decoy,
            timing: Some(self.timing),
            ports: self.ports,
            format: self.format,
        }
    }
}
