use ampctl_types::LevelParameter;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    #[error("Invalid {parameter} level {value}, expected a value between {min} and {max}")]
    InvalidLevel {
        parameter: LevelParameter,
        value: i32,
        min: i32,
        max: i32,
    },

    #[error("Invalid power state '{0}', expected 'on' or 'off'")]
    InvalidPower(String),
}
