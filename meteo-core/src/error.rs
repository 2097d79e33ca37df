use thiserror::Error;

/// Boxed cause carried by transport failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Which side of the request failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    /// The endpoint answered with a non-success status.
    Request,
    /// The request never completed, or the body could not be parsed.
    Transport,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request failed: {status} {status_text}")]
    Status { status: u16, status_text: String },

    #[error("Failed to retrieve weather data: {0}")]
    Transport(#[source] BoxError),
}

impl FetchError {
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::Status { .. } => FetchErrorKind::Request,
            FetchError::Transport(_) => FetchErrorKind::Transport,
        }
    }

    pub(crate) fn transport<E>(err: E) -> Self
    where
        E: Into<BoxError>,
    {
        FetchError::Transport(err.into())
    }
}
