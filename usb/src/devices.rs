// Plain descriptions of what libusb can see, so callers can print them without touching
// libusb types directly.
use crate::error::ConnectError;
use crate::selector::DeviceSelector;
use log::debug;
use rusb::{Context, UsbContext};
use std::fmt::{Display, Formatter};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UsbDeviceInfo {
    pub bus_number: u8,
    pub address: u8,
    pub vendor_id: u16,
    pub product_id: u16,
    pub num_configurations: u8,
    pub active_configuration: Option<u8>,
}

impl UsbDeviceInfo {
    pub fn selector(&self) -> DeviceSelector {
        DeviceSelector {
            vendor_id: self.vendor_id,
            product_id: self.product_id,
        }
    }
}

impl Display for UsbDeviceInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} on bus {:03}, address {:03}, {} configuration(s)",
            self.selector(),
            self.bus_number,
            self.address,
            self.num_configurations
        )?;
        if let Some(active) = self.active_configuration {
            write!(f, ", active: {}", active)?;
        }
        Ok(())
    }
}

/// Creates a libusb context, with libusb's own logging set from a 0 - 4 verbosity.
pub(crate) fn create_context(debug: u8) -> Result<Context, ConnectError> {
    let mut context = Context::new()?;
    context.set_log_level(match debug {
        0 => rusb::LogLevel::None,
        1 => rusb::LogLevel::Error,
        2 => rusb::LogLevel::Warning,
        3 => rusb::LogLevel::Info,
        _ => rusb::LogLevel::Debug,
    });
    Ok(context)
}

pub fn list_devices(debug: u8) -> Result<Vec<UsbDeviceInfo>, ConnectError> {
    let context = create_context(debug)?;
    let mut found_devices = Vec::new();

    for device in context.devices()?.iter() {
        let descriptor = match device.device_descriptor() {
            Ok(descriptor) => descriptor,
            Err(error) => {
                debug!("Skipping {:?}, unable to read descriptor: {}", device, error);
                continue;
            }
        };

        // Reading the active configuration needs the device opened, which may not be permitted.
        let active_configuration = device
            .open()
            .and_then(|handle| handle.active_configuration())
            .ok();

        found_devices.push(UsbDeviceInfo {
            bus_number: device.bus_number(),
            address: device.address(),
            vendor_id: descriptor.vendor_id(),
            product_id: descriptor.product_id(),
            num_configurations: descriptor.num_configurations(),
            active_configuration,
        });
    }

    Ok(found_devices)
}
