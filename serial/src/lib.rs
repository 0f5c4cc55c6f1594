pub use serialport;

pub mod error;
pub mod port;

pub use error::ConnectError;
pub use port::{SerialAmp, SerialSettings, DEFAULT_BAUD_RATE, DEFAULT_PORT};
