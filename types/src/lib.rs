#[cfg(feature = "clap")]
use clap::ValueEnum;
use std::ops::RangeInclusive;
use strum::{Display, EnumIter, EnumString};

/// Valid range for the music and microphone levels, 0 being the loudest.
pub const MUSIC_MIC_LEVEL_RANGE: RangeInclusive<i32> = -63..=0;

/// Valid range for the echo level, 0 being no echo.
pub const ECHO_LEVEL_RANGE: RangeInclusive<i32> = 0..=63;

pub const DEFAULT_MUSIC_LEVEL: i32 = -20;
pub const DEFAULT_MIC_LEVEL: i32 = -20;
pub const DEFAULT_ECHO_LEVEL: i32 = 20;

#[derive(Copy, Clone, Debug, Default, Display, EnumString, EnumIter, PartialEq, Eq)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[cfg_attr(feature = "clap", derive(ValueEnum))]
pub enum Power {
    Off,
    #[default]
    On,
}

/// Which level a value belongs to, used when reporting bad input.
#[derive(Copy, Clone, Debug, Display, EnumIter, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum LevelParameter {
    Music,
    Mic,
    Echo,
}

impl LevelParameter {
    pub fn range(&self) -> RangeInclusive<i32> {
        match self {
            LevelParameter::Music | LevelParameter::Mic => MUSIC_MIC_LEVEL_RANGE,
            LevelParameter::Echo => ECHO_LEVEL_RANGE,
        }
    }
}

// Built once from the command line and handed to the frame builder as-is.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub power: Power,
    pub music: i32,
    pub mic: i32,
    pub echo: i32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            power: Power::On,
            music: DEFAULT_MUSIC_LEVEL,
            mic: DEFAULT_MIC_LEVEL,
            echo: DEFAULT_ECHO_LEVEL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn power_parses_lowercase_names() {
        assert_eq!(<Power as FromStr>::from_str("on").unwrap(), Power::On);
        assert_eq!(<Power as FromStr>::from_str("off").unwrap(), Power::Off);
        assert_eq!(<Power as FromStr>::from_str("OFF").unwrap(), Power::Off);
        assert!(<Power as FromStr>::from_str("standby").is_err());
        assert!(<Power as FromStr>::from_str("").is_err());
    }

    #[test]
    fn power_displays_as_flag_value() {
        let names: Vec<String> = Power::iter().map(|p| p.to_string()).collect();
        assert_eq!(names, vec!["off", "on"]);
    }

    #[test]
    fn default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.power, Power::On);
        assert_eq!((settings.music, settings.mic, settings.echo), (-20, -20, 20));
    }

    #[test]
    fn parameter_ranges() {
        assert_eq!(LevelParameter::Music.range(), -63..=0);
        assert_eq!(LevelParameter::Mic.range(), -63..=0);
        assert_eq!(LevelParameter::Echo.range(), 0..=63);
    }
}
