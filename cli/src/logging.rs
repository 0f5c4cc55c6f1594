use crate::cli::LevelFilter;
use anyhow::{Context, Result};
use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

impl From<LevelFilter> for log::LevelFilter {
    fn from(level: LevelFilter) -> Self {
        match level {
            LevelFilter::Off => log::LevelFilter::Off,
            LevelFilter::Error => log::LevelFilter::Error,
            LevelFilter::Warn => log::LevelFilter::Warn,
            LevelFilter::Info => log::LevelFilter::Info,
            LevelFilter::Debug => log::LevelFilter::Debug,
            LevelFilter::Trace => log::LevelFilter::Trace,
        }
    }
}

pub fn init(level: LevelFilter) -> Result<()> {
    CombinedLogger::init(vec![TermLogger::new(
        level.into(),
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )])
    .context("Could not configure the logger")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_filters_map_across() {
        assert_eq!(log::LevelFilter::from(LevelFilter::Off), log::LevelFilter::Off);
        assert_eq!(log::LevelFilter::from(LevelFilter::Warn), log::LevelFilter::Warn);
        assert_eq!(log::LevelFilter::from(LevelFilter::Trace), log::LevelFilter::Trace);
    }
}
