use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The peer could not be reached, or the IP endpoint answered with a non-2xx status.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The provider answered but rejected the request.
    #[error("Provider error (HTTP {status}): {body}")]
    Provider { status: u16, body: String },

    #[error("Storage error on {}: {source}", .path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid IPv4 address: {0:?}")]
    InvalidAddress(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    pub fn provider(status: u16, body: impl Into<String>) -> Self {
        Self::Provider {
            status,
            body: body.into(),
        }
    }

    pub fn storage(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Storage {
            path: path.into(),
            source,
        }
    }
}
