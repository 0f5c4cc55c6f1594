use crate::error::FrameError;
use ampctl_types::{LevelParameter, Power, Settings};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub const FRAME_LENGTH: usize = 8;

pub const STX: u8 = 0x02;
pub const ETX: u8 = 0x03;
pub const TEXT_TOP: u8 = 0x2F;

const POWER_OFF: u8 = 0x30;
const POWER_ON: u8 = 0x31;

// Level 0 is the top of the range for music / mic, and the bottom for echo.
const MUSIC_MIC_BASE: i32 = 0x7F;
const ECHO_BASE: i32 = 0x40;

/// A single amplifier control message.
///
/// On the wire this is laid out as:
/// `[STX, TEXT_TOP, power, music, mic, echo, ETX, checksum]`
///
/// A `Frame` can only be created through [`Frame::build`], so every instance
/// holds bytes which have already been range checked.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    power: u8,
    music: u8,
    mic: u8,
    echo: u8,
}

impl Frame {
    pub fn build(settings: &Settings) -> Result<Self, FrameError> {
        Ok(Self {
            power: encode_power(settings.power),
            music: encode_music(settings.music)?,
            mic: encode_mic(settings.mic)?,
            echo: encode_echo(settings.echo)?,
        })
    }

    pub fn checksum(&self) -> u8 {
        checksum(&[TEXT_TOP, self.power, self.music, self.mic, self.echo, ETX])
    }

    pub fn to_bytes(&self) -> [u8; FRAME_LENGTH] {
        [
            STX,
            TEXT_TOP,
            self.power,
            self.music,
            self.mic,
            self.echo,
            ETX,
            self.checksum(),
        ]
    }
}

impl Display for Frame {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let bytes = self.to_bytes();
        for (index, byte) in bytes.iter().enumerate() {
            if index > 0 {
                write!(f, " ")?;
            }
            write!(f, "{:02X}", byte)?;
        }
        Ok(())
    }
}

/// Builds the wire bytes directly from the four raw settings.
pub fn build_frame(
    power: &str,
    music: i32,
    mic: i32,
    echo: i32,
) -> Result<[u8; FRAME_LENGTH], FrameError> {
    let settings = Settings {
        power: parse_power(power)?,
        music,
        mic,
        echo,
    };
    Ok(Frame::build(&settings)?.to_bytes())
}

pub fn parse_power(value: &str) -> Result<Power, FrameError> {
    Power::from_str(value).map_err(|_| FrameError::InvalidPower(value.to_owned()))
}

pub fn encode_power(power: Power) -> u8 {
    match power {
        Power::Off => POWER_OFF,
        Power::On => POWER_ON,
    }
}

pub fn encode_music(level: i32) -> Result<u8, FrameError> {
    encode_level(LevelParameter::Music, level)
}

pub fn encode_mic(level: i32) -> Result<u8, FrameError> {
    encode_level(LevelParameter::Mic, level)
}

pub fn encode_echo(level: i32) -> Result<u8, FrameError> {
    encode_level(LevelParameter::Echo, level)
}

fn encode_level(parameter: LevelParameter, level: i32) -> Result<u8, FrameError> {
    let range = parameter.range();
    if !range.contains(&level) {
        return Err(FrameError::InvalidLevel {
            parameter,
            value: level,
            min: *range.start(),
            max: *range.end(),
        });
    }

    let encoded = match parameter {
        LevelParameter::Music | LevelParameter::Mic => MUSIC_MIC_BASE + level,
        LevelParameter::Echo => ECHO_BASE + level,
    };

    // Both ranges land inside 0x40..=0x7F once validated.
    Ok(encoded as u8)
}

pub fn checksum(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0, |acc, byte| acc ^ byte)
}
