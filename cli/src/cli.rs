use ampctl_serial::{DEFAULT_BAUD_RATE, DEFAULT_PORT};
use ampctl_types::{Power, Settings, DEFAULT_ECHO_LEVEL, DEFAULT_MIC_LEVEL, DEFAULT_MUSIC_LEVEL};
use ampctl_usb::DeviceSelector;
use clap::{Args, Parser, ValueEnum};

#[derive(Debug, Args)]
pub struct FrameArgs {
    /// Amplifier power
    #[clap(long, value_enum, default_value_t = Power::On)]
    pub power: Power,

    /// Music volume (-63 to 0)
    #[clap(long, default_value_t = DEFAULT_MUSIC_LEVEL, allow_negative_numbers = true)]
    pub music: i32,

    /// Microphone volume (-63 to 0)
    #[clap(long, default_value_t = DEFAULT_MIC_LEVEL, allow_negative_numbers = true)]
    pub mic: i32,

    /// Echo level (0 to 63)
    #[clap(long, default_value_t = DEFAULT_ECHO_LEVEL, allow_negative_numbers = true)]
    pub echo: i32,
}

impl FrameArgs {
    pub fn settings(&self) -> Settings {
        Settings {
            power: self.power,
            music: self.music,
            mic: self.mic,
            echo: self.echo,
        }
    }
}

#[derive(Parser, Debug)]
#[clap(name = "ampctl-usb", about, version)]
pub struct UsbCli {
    /// The vendor:product id of the amplifier, in hex
    #[clap(long, default_value = "0403:6001")]
    pub device: DeviceSelector,

    /// USB configuration to select
    #[clap(long, default_value_t = 1)]
    pub config: u8,

    /// Interface to claim
    #[clap(long, default_value_t = 0)]
    pub interface: u8,

    /// Alternate setting of the interface
    #[clap(long, default_value_t = 0)]
    pub setup: u8,

    /// OUT endpoint number to write the frame to
    #[clap(long, default_value_t = 2)]
    pub ep: u8,

    /// libusb verbosity (0 - 4)
    #[clap(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(0..=4))]
    pub debug: u8,

    /// List all connected USB devices and exit
    #[clap(long)]
    pub list: bool,

    #[clap(flatten, next_help_heading = "Amplifier settings")]
    pub frame: FrameArgs,

    /// Minimum log level to print out
    #[clap(long, value_enum, default_value = "info")]
    pub log_level: LevelFilter,
}

#[derive(Parser, Debug)]
#[clap(name = "ampctl-serial", about, version)]
pub struct SerialCli {
    /// Path of the serial port the amplifier is attached to
    #[clap(long, default_value = DEFAULT_PORT)]
    pub device: String,

    /// Baud rate of the serial port
    #[clap(long, default_value_t = DEFAULT_BAUD_RATE)]
    pub baud: u32,

    #[clap(flatten, next_help_heading = "Amplifier settings")]
    pub frame: FrameArgs,

    /// Minimum log level to print out
    #[clap(long, value_enum, default_value = "info")]
    pub log_level: LevelFilter,
}

#[repr(usize)]
#[derive(ValueEnum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum LevelFilter {
    /// A level lower than all log levels.
    Off,
    /// Corresponds to the `Error` log level.
    Error,
    /// Corresponds to the `Warn` log level.
    Warn,
    /// Corresponds to the `Info` log level.
    Info,
    /// Corresponds to the `Debug` log level.
    Debug,
    /// Corresponds to the `Trace` log level.
    Trace,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definitions_are_valid() {
        UsbCli::command().debug_assert();
        SerialCli::command().debug_assert();
    }

    #[test]
    fn serial_defaults() {
        let cli = SerialCli::try_parse_from(["ampctl-serial"]).unwrap();
        assert_eq!(cli.device, DEFAULT_PORT);
        assert_eq!(cli.baud, 9600);
        assert_eq!(cli.frame.settings(), Settings::default());
        assert_eq!(cli.log_level, LevelFilter::Info);
    }

    #[test]
    fn usb_defaults() {
        let cli = UsbCli::try_parse_from(["ampctl-usb"]).unwrap();
        assert_eq!(cli.device, DeviceSelector::default());
        assert_eq!((cli.config, cli.interface, cli.setup, cli.ep), (1, 0, 0, 2));
        assert_eq!(cli.debug, 3);
        assert!(!cli.list);
    }

    #[test]
    fn negative_levels_parse() {
        let cli = SerialCli::try_parse_from([
            "ampctl-serial",
            "--power",
            "off",
            "--music",
            "-63",
            "--mic",
            "-5",
            "--echo",
            "0",
        ])
        .unwrap();

        let settings = cli.frame.settings();
        assert_eq!(settings.power, Power::Off);
        assert_eq!((settings.music, settings.mic, settings.echo), (-63, -5, 0));
    }

    #[test]
    fn out_of_range_levels_reach_the_frame_builder() {
        // Range checks belong to the frame builder, clap should pass these through.
        let cli = SerialCli::try_parse_from(["ampctl-serial", "--music", "-64", "--echo", "99"])
            .unwrap();
        assert_eq!(cli.frame.music, -64);
        assert_eq!(cli.frame.echo, 99);
    }

    #[test]
    fn unknown_power_is_rejected() {
        assert!(SerialCli::try_parse_from(["ampctl-serial", "--power", "standby"]).is_err());
    }

    #[test]
    fn usb_selector_and_debug_are_checked() {
        assert!(UsbCli::try_parse_from(["ampctl-usb", "--device", "nonsense"]).is_err());
        assert!(UsbCli::try_parse_from(["ampctl-usb", "--debug", "5"]).is_err());

        let cli = UsbCli::try_parse_from(["ampctl-usb", "--device", "1a86:7523", "--ep", "1"])
            .unwrap();
        assert_eq!(cli.device.to_string(), "1a86:7523");
        assert_eq!(cli.ep, 1);
    }
}
