use crate::error::ConnectError;
use ampctl_frame::AmpTransport;
use log::{debug, info};
use serialport::{DataBits, ErrorKind, FlowControl, Parity, SerialPort, StopBits};
use std::io::Write;
use std::time::Duration;

cfg_if::cfg_if! {
    if #[cfg(target_os = "windows")] {
        pub const DEFAULT_PORT: &str = "COM1";
    } else {
        pub const DEFAULT_PORT: &str = "/dev/ttyUSB0";
    }
}

/// The amplifier's UART runs at 9600 8N1.
pub const DEFAULT_BAUD_RATE: u32 = 9600;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SerialSettings {
    pub path: String,
    pub baud_rate: u32,
}

impl Default for SerialSettings {
    fn default() -> Self {
        Self {
            path: String::from(DEFAULT_PORT),
            baud_rate: DEFAULT_BAUD_RATE,
        }
    }
}

pub struct SerialAmp {
    port: Box<dyn SerialPort>,
    path: String,
}

impl SerialAmp {
    pub fn open(settings: &SerialSettings) -> Result<Self, ConnectError> {
        debug!("Opening {} at {} baud", settings.path, settings.baud_rate);
        let port = serialport::new(&settings.path, settings.baud_rate)
            .data_bits(DataBits::Eight)
            .stop_bits(StopBits::One)
            .parity(Parity::None)
            .flow_control(FlowControl::None)
            .timeout(Duration::from_secs(1))
            .open()
            .map_err(|error| match error.kind() {
                ErrorKind::NoDevice => ConnectError::DeviceNotFound(settings.path.clone()),
                _ => ConnectError::Open {
                    path: settings.path.clone(),
                    source: error,
                },
            })?;

        info!("Opened serial port {}", settings.path);
        Ok(Self {
            port,
            path: settings.path.clone(),
        })
    }
}

impl AmpTransport for SerialAmp {
    type Error = std::io::Error;

    fn describe(&self) -> String {
        format!("serial port {}", self.path)
    }

    fn write(&mut self, data: &[u8]) -> Result<usize, Self::Error> {
        let written = self.port.write(data)?;
        self.port.flush()?;
        Ok(written)
    }
}

impl Drop for SerialAmp {
    fn drop(&mut self) {
        debug!("Closing serial port {}", self.path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings() {
        let settings = SerialSettings::default();
        assert_eq!(settings.baud_rate, 9600);
        assert_eq!(settings.path, DEFAULT_PORT);
    }

    #[test]
    fn missing_port_is_reported() {
        let settings = SerialSettings {
            path: String::from("/dev/this-port-does-not-exist"),
            ..Default::default()
        };

        match SerialAmp::open(&settings) {
            Err(ConnectError::DeviceNotFound(path)) => assert_eq!(path, settings.path),
            Err(ConnectError::Open { path, .. }) => assert_eq!(path, settings.path),
            Ok(_) => panic!("Opened a port which shouldn't exist"),
        }
    }
}
