use ampctl::cli::SerialCli;
use ampctl::{logging, run};
use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli: SerialCli = SerialCli::parse();
    logging::init(cli.log_level)?;

    run::run_serial(&cli)
}
