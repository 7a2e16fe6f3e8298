//! Errors raised while loading or validating a `TaskboardConfig`.

use std::net::AddrParseError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A layer (TOML file or `TASKBOARD_*` variable) could not be read or extracted.
    #[error("cannot load taskboard config: {0}")]
    Figment(#[from] figment::Error),

    /// `server.bind` is not a `host:port` socket address.
    #[error("server.bind '{bind}' is not a socket address: {source}")]
    InvalidBind {
        bind: String,
        #[source]
        source: AddrParseError,
    },

    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

impl ConfigError {
    /// Dotted name of the offending field, when the error concerns one.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Figment(_) => None,
            Self::InvalidBind { .. } => Some("server.bind"),
            Self::InvalidValue { field, .. } => Some(field),
        }
    }
}
