use crate::devices::create_context;
use crate::error::ConnectError;
use crate::selector::{DeviceSelector, EndpointAddress};
use ampctl_frame::AmpTransport;
use log::{debug, info, warn};
use rusb::{Context, Device, DeviceHandle, Direction, TransferType, UsbContext};
use std::time::Duration;

/// An opened amplifier, with its interface claimed and an OUT endpoint selected.
///
/// The interface is released and the handle closed when this is dropped, so an
/// open device should live no longer than the single write it exists for.
pub struct UsbAmp {
    handle: DeviceHandle<Context>,
    selector: DeviceSelector,
    address: EndpointAddress,
    transfer_type: TransferType,
    timeout: Duration,
}

impl UsbAmp {
    pub fn open(
        selector: DeviceSelector,
        address: EndpointAddress,
        debug: u8,
    ) -> Result<Self, ConnectError> {
        let context = create_context(debug)?;
        let device = UsbAmp::find_device(&context, selector)?;

        let mut handle = device.open()?;
        info!("Connected to {} at {:?}", selector, device);

        if rusb::supports_detach_kernel_driver() {
            if let Err(error) = handle.set_auto_detach_kernel_driver(true) {
                warn!("Unable to auto detach kernel driver: {}", error);
            }
        }

        // Changing the configuration while it's active would reset the device.
        let active = handle.active_configuration()?;
        if active != address.config {
            debug!("Switching configuration {} -> {}", active, address.config);
            handle.set_active_configuration(address.config)?;
        }

        let transfer_type = UsbAmp::find_transfer_type(&device, address)?;

        handle.claim_interface(address.interface)?;
        let mut amp = Self {
            handle,
            selector,
            address,
            transfer_type,
            timeout: Duration::from_secs(1),
        };

        if address.setting != 0 {
            amp.handle
                .set_alternate_setting(address.interface, address.setting)?;
        }

        debug!("Using {:?} transfers on {}", transfer_type, address);
        Ok(amp)
    }

    fn find_device(
        context: &Context,
        selector: DeviceSelector,
    ) -> Result<Device<Context>, ConnectError> {
        for usb_device in context.devices()?.iter() {
            if let Ok(descriptor) = usb_device.device_descriptor() {
                if selector.matches(descriptor.vendor_id(), descriptor.product_id()) {
                    return Ok(usb_device);
                }
            }
        }
        Err(ConnectError::DeviceNotFound(selector.to_string()))
    }

    fn find_transfer_type(
        device: &Device<Context>,
        address: EndpointAddress,
    ) -> Result<TransferType, ConnectError> {
        let not_found = ConnectError::EndpointNotFound {
            config: address.config,
            interface: address.interface,
            setting: address.setting,
            endpoint: address.endpoint,
        };

        let descriptor = device.device_descriptor()?;
        for index in 0..descriptor.num_configurations() {
            let config = device.config_descriptor(index)?;
            if config.number() != address.config {
                continue;
            }

            for interface in config.interfaces() {
                if interface.number() != address.interface {
                    continue;
                }
                for setting in interface.descriptors() {
                    if setting.setting_number() != address.setting {
                        continue;
                    }
                    for endpoint in setting.endpoint_descriptors() {
                        if endpoint.direction() != Direction::Out
                            || endpoint.address() != address.out_address()
                        {
                            continue;
                        }
                        return match endpoint.transfer_type() {
                            TransferType::Bulk => Ok(TransferType::Bulk),
                            TransferType::Interrupt => Ok(TransferType::Interrupt),
                            _ => Err(ConnectError::UnsupportedTransfer(address.endpoint)),
                        };
                    }
                }
            }
        }

        Err(not_found)
    }
}

impl AmpTransport for UsbAmp {
    type Error = rusb::Error;

    fn describe(&self) -> String {
        format!("USB device {} ({})", self.selector, self.address)
    }

    fn write(&mut self, data: &[u8]) -> Result<usize, Self::Error> {
        let endpoint = self.address.out_address();
        match self.transfer_type {
            TransferType::Interrupt => self.handle.write_interrupt(endpoint, data, self.timeout),
            _ => self.handle.write_bulk(endpoint, data, self.timeout),
        }
    }
}

impl Drop for UsbAmp {
    fn drop(&mut self) {
        if let Err(error) = self.handle.release_interface(self.address.interface) {
            debug!("Unable to release interface {}: {}", self.address.interface, error);
        }
        debug!("Closing {}", self.selector);
    }
}
