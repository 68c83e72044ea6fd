use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors surfaced while building configuration. Runtime event handling never
/// fails; bad input there degrades silently.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("invalid color literal `{0}`")]
    InvalidColor(String),

    #[error("invalid config field `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },
}

impl Error {
    pub fn config(field: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}
