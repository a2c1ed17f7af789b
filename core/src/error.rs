use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HostsError {
    /// The domain was empty or only whitespace.
    #[error("domain cannot be empty")]
    EmptyDomain,

    /// The address did not pass the IP validity check.
    #[error("invalid IP address: {0}")]
    InvalidIp(String),

    #[error("failed to read hosts file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write hosts file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl HostsError {
    /// True for errors raised before any mutation because the caller's input was rejected.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, HostsError::EmptyDomain | HostsError::InvalidIp(_))
    }
}

pub type Result<T> = std::result::Result<T, HostsError>;
