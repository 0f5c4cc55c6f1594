pub use ampctl_types::{LevelParameter, Power, Settings};

pub mod error;
pub mod frame;
pub mod transport;

pub use error::FrameError;
pub use frame::{build_frame, Frame, FRAME_LENGTH};
pub use transport::{send_frame, AmpTransport, SendError};
