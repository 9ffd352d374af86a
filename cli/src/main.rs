mod commands;
mod terminal;

use commands::{CommandLine, scan, wizard};
use nmapr_common::config::Config;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let command_line = CommandLine::parse_args();

    logging::init(command_line.quiet);

    let cfg = Config {
        quiet: command_line.quiet,
        no_banner: command_line.no_banner,
    };

    print::banner(&cfg);

    let dry_run = command_line.dry_run;
    let raw = if command_line.interactive || command_line.target.is_none() {
        wizard::run(&cfg)?
    } else {
        command_line.into_raw_options()
    };

    scan::scan(raw, dry_run, &cfg).await
}
