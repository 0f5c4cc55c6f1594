pub use rusb;

pub mod device;
pub mod devices;
pub mod error;
pub mod selector;

pub use device::UsbAmp;
pub use devices::{list_devices, UsbDeviceInfo};
pub use error::ConnectError;
pub use selector::{DeviceSelector, EndpointAddress};

/// Default target, an FTDI FT232R USB-UART bridge.
pub const VID_AMP: u16 = 0x0403;
pub const PID_AMP: u16 = 0x6001;
