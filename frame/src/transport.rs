use crate::frame::{Frame, FRAME_LENGTH};
use log::{debug, info};

/// Anything that can push raw bytes at a connected amplifier.
///
/// Implementations are expected to hold an already opened connection, and to
/// release it when dropped.
pub trait AmpTransport {
    type Error: std::error::Error + Send + Sync + 'static;

    /// A short, human readable description of the connected device.
    fn describe(&self) -> String;

    fn write(&mut self, data: &[u8]) -> Result<usize, Self::Error>;
}

#[derive(thiserror::Error, Debug)]
pub enum SendError<E: std::error::Error + 'static> {
    #[error("Transport error: {0}")]
    Transport(#[source] E),

    #[error("Short write, wrote {written} of {expected} bytes")]
    ShortWrite { expected: usize, written: usize },
}

pub fn send_frame<T: AmpTransport>(
    transport: &mut T,
    frame: &Frame,
) -> Result<usize, SendError<T::Error>> {
    let bytes = frame.to_bytes();
    info!("Sending [{}] to {}", frame, transport.describe());

    let written = transport.write(&bytes).map_err(SendError::Transport)?;
    debug!("Transport accepted {} bytes", written);

    if written < FRAME_LENGTH {
        return Err(SendError::ShortWrite {
            expected: FRAME_LENGTH,
            written,
        });
    }

    info!("Wrote {} bytes.", written);
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ampctl_types::Settings;
    use std::io;

    struct RecordingTransport {
        written: Vec<Vec<u8>>,
        accept: Option<usize>,
    }

    impl AmpTransport for RecordingTransport {
        type Error = io::Error;

        fn describe(&self) -> String {
            String::from("recorder")
        }

        fn write(&mut self, data: &[u8]) -> Result<usize, Self::Error> {
            self.written.push(data.to_vec());
            Ok(self.accept.unwrap_or(data.len()))
        }
    }

    struct BrokenTransport;

    impl AmpTransport for BrokenTransport {
        type Error = io::Error;

        fn describe(&self) -> String {
            String::from("broken")
        }

        fn write(&mut self, _data: &[u8]) -> Result<usize, Self::Error> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "unplugged"))
        }
    }

    #[test]
    fn sends_the_frame_once() {
        let frame = Frame::build(&Settings::default()).unwrap();
        let mut transport = RecordingTransport {
            written: vec![],
            accept: None,
        };

        let written = send_frame(&mut transport, &frame).unwrap();
        assert_eq!(written, FRAME_LENGTH);
        assert_eq!(transport.written, vec![frame.to_bytes().to_vec()]);
    }

    #[test]
    fn short_write_is_an_error() {
        let frame = Frame::build(&Settings::default()).unwrap();
        let mut transport = RecordingTransport {
            written: vec![],
            accept: Some(5),
        };

        match send_frame(&mut transport, &frame) {
            Err(SendError::ShortWrite { expected, written }) => {
                assert_eq!(expected, 8);
                assert_eq!(written, 5);
            }
            other => panic!("Expected a short write, got {:?}", other),
        }
        assert_eq!(transport.written.len(), 1);
    }

    #[test]
    fn transport_failures_are_passed_through() {
        let frame = Frame::build(&Settings::default()).unwrap();
        let error = send_frame(&mut BrokenTransport, &frame).unwrap_err();
        assert!(matches!(error, SendError::Transport(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
        assert_eq!(error.to_string(), "Transport error: unplugged");
    }
}
