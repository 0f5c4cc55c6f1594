use ampctl::cli::UsbCli;
use ampctl::{logging, run};
use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli: UsbCli = UsbCli::parse();
    logging::init(cli.log_level)?;

    run::run_usb(&cli)
}
