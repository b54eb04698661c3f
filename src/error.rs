use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid schedule link: {0}")]
    InvalidInput(String),

    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("failed to decode response body: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Errors after which nothing sensible can be written.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Decode(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
