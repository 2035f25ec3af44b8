//! Failures between asking for a sensor's data and having a reading.

/// Broad class of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The data source could not be reached or refused the request.
    Fetch,
    /// The data source answered, but not with a usable sensor document.
    Malformed,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("could not reach data source: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("data source returned HTTP {status}")]
    Status { status: u16 },

    #[error("could not read sensor data: {0}")]
    Io(#[from] std::io::Error),

    #[error("sensor data is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed sensor data: {0}")]
    Malformed(String),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Transport(_) | Error::Status { .. } | Error::Io(_) => ErrorKind::Fetch,
            Error::Json(_) | Error::Malformed(_) => ErrorKind::Malformed,
        }
    }
}
