use std::time::{Duration, Instant};

use colored::*;
use nmapr_common::config::Config;
use nmapr_core::command::{self, AssembledCommand, NMAP_BINARY};
use nmapr_core::privilege;
use nmapr_core::request::{self, RawScanOptions};
use nmapr_core::runner::{NmapRunner, ProcessRunner};
use tracing::info;

use crate::terminal::{print, spinner};

pub async fn scan(mut raw: RawScanOptions, dry_run: bool, cfg: &Config) -> anyhow::Result<()> {
    fill_default_scan_type(&mut raw);

    let request = request::build(raw)?;

    if privilege::requires_root(&request) && !privilege::has_root() {
        anyhow::bail!(
            "this scan needs raw sockets (SYN/UDP probes, OS detection or decoys); rerun with sudo"
        );
    }

    let command = command::assemble(request);
    print::command_line(NMAP_BINARY, &command.argv, cfg);

    if dry_run {
        return Ok(());
    }

    let start_time: Instant = Instant::now();
    let code = run_scan(&command).await?;

    if code != 0 {
        anyhow::bail!("nmap exited with status {code}");
    }

    scan_ends(&command, start_time.elapsed(), cfg);
    Ok(())
}

/// When no technique was picked, mirror nmap's own default: SYN when
/// running as root, connect otherwise.
fn fill_default_scan_type(raw: &mut RawScanOptions) {
    if !(raw.syn || raw.connect || raw.udp) {
        if privilege::has_root() {
            raw.syn = true;
        } else {
            raw.connect = true;
        }
    }
}

async fn run_scan(command: &AssembledCommand) -> anyhow::Result<i32> {
    let handle = spinner::get_spinner();
    handle.set_message("Scanning...".to_string());

    // Scanner output is printed above the spinner as it arrives.
    let runner = NmapRunner::new(Some(Box::new(|line: &str| {
        spinner::get_spinner().println(line);
    })));

    let result = runner.run(NMAP_BINARY, &command.argv).await;
    handle.finish_and_clear();
    result
}

fn scan_ends(command: &AssembledCommand, total_time: Duration, cfg: &Config) {
    let output_file: ColoredString = command.output_file.display().to_string().bold().green();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let summary: String = format!("Scan complete: results in {output_file} after {total_time}");

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&summary);
        }
        _ => info!("{summary}"),
    }
}
