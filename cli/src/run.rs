use crate::cli::{SerialCli, UsbCli};
use ampctl_frame::{send_frame, Frame};
use ampctl_serial::{SerialAmp, SerialSettings};
use ampctl_usb::{list_devices, EndpointAddress, UsbAmp};
use anyhow::{Context, Result};
use log::warn;

pub fn run_usb(cli: &UsbCli) -> Result<()> {
    if cli.list {
        return print_usb_devices(cli.debug);
    }

    // Build before opening anything, so bad input never reaches the hardware.
    let frame = Frame::build(&cli.frame.settings()).context("Could not build the control frame")?;

    let address = EndpointAddress {
        config: cli.config,
        interface: cli.interface,
        setting: cli.setup,
        endpoint: cli.ep,
    };

    let mut amp = UsbAmp::open(cli.device, address, cli.debug)
        .with_context(|| format!("Unable to open USB device {}", cli.device))?;
    send_frame(&mut amp, &frame).context("Failed to write to the USB device")?;
    Ok(())
}

fn print_usb_devices(debug: u8) -> Result<()> {
    let devices = list_devices(debug).context("Unable to list USB devices")?;
    if devices.is_empty() {
        warn!("No USB devices found");
    }
    for device in devices {
        println!("{}", device);
    }
    Ok(())
}

pub fn run_serial(cli: &SerialCli) -> Result<()> {
    let frame = Frame::build(&cli.frame.settings()).context("Could not build the control frame")?;

    let settings = SerialSettings {
        path: cli.device.clone(),
        baud_rate: cli.baud,
    };

    let mut amp = SerialAmp::open(&settings)
        .with_context(|| format!("Unable to open serial port {}", settings.path))?;
    send_frame(&mut amp, &frame).context("Failed to write to the serial port")?;
    Ok(())
}
