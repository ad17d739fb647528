use thiserror::Error;

/// Rejected `data-*` override on the hero root.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{key}: `{value}` is not a number")]
    InvalidNumber { key: String, value: String },
    #[error("{key}: {value} is outside {min}..={max}")]
    OutOfRange {
        key: String,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("unknown config key `{0}`")]
    UnknownKey(String),
}
