use crate::error::ConnectError;
use crate::{PID_AMP, VID_AMP};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Identifies a USB device by its vendor and product id.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DeviceSelector {
    pub vendor_id: u16,
    pub product_id: u16,
}

impl DeviceSelector {
    pub fn matches(&self, vendor_id: u16, product_id: u16) -> bool {
        self.vendor_id == vendor_id && self.product_id == product_id
    }
}

impl Default for DeviceSelector {
    fn default() -> Self {
        Self {
            vendor_id: VID_AMP,
            product_id: PID_AMP,
        }
    }
}

impl FromStr for DeviceSelector {
    type Err = ConnectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConnectError::InvalidSelector(s.to_owned());

        let (vendor, product) = s.trim().split_once(':').ok_or_else(invalid)?;
        Ok(Self {
            vendor_id: parse_id(vendor).ok_or_else(invalid)?,
            product_id: parse_id(product).ok_or_else(invalid)?,
        })
    }
}

impl Display for DeviceSelector {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04x}:{:04x}", self.vendor_id, self.product_id)
    }
}

fn parse_id(value: &str) -> Option<u16> {
    let value = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value);

    if value.is_empty() || value.len() > 4 {
        return None;
    }
    u16::from_str_radix(value, 16).ok()
}

/// Where on the device the frame should be written.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EndpointAddress {
    pub config: u8,
    pub interface: u8,
    pub setting: u8,
    pub endpoint: u8,
}

impl EndpointAddress {
    /// The OUT address of the endpoint, as libusb expects it.
    pub fn out_address(&self) -> u8 {
        self.endpoint & 0x0F
    }
}

impl Default for EndpointAddress {
    fn default() -> Self {
        Self {
            config: 1,
            interface: 0,
            setting: 0,
            endpoint: 2,
        }
    }
}

impl Display for EndpointAddress {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "config {}, interface {}, setting {}, endpoint {}",
            self.config, self.interface, self.setting, self.endpoint
        )
    }
}
