#[derive(thiserror::Error, Debug)]
pub enum ConnectError {
    #[error("Serial port {0} was not found")]
    DeviceNotFound(String),

    #[error("Unable to open serial port {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: serialport::Error,
    },
}
