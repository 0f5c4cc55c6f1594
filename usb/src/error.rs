#[derive(thiserror::Error, Debug)]
pub enum ConnectError {
    #[error("No USB device matching {0} was found")]
    DeviceNotFound(String),

    #[error("USB error: {0}")]
    UsbError(#[from] rusb::Error),

    #[error("Endpoint {endpoint} is not an OUT endpoint of interface {interface} (setting {setting}) in configuration {config}")]
    EndpointNotFound {
        config: u8,
        interface: u8,
        setting: u8,
        endpoint: u8,
    },

    #[error("Endpoint {0} uses an unsupported transfer type, expected bulk or interrupt")]
    UnsupportedTransfer(u8),

    #[error("Invalid device selector '{0}', expected vendor:product in hex (eg. 0403:6001)")]
    InvalidSelector(String),
}
