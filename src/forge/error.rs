use std::{result::Result as StdResult, sync::Arc};
use thiserror::Error as ThisError;

/// Failure of a request to the codeforces api.
///
/// Cheap to clone: one failed catalog fetch is handed to every caller that
/// joined it.
#[derive(Debug, Clone, ThisError)]
pub enum Error {
    #[error("The request is invalid: {0}")]
    InvalidRequest(String),
    #[error("Server returned an error. Status code: {0}")]
    Status(u16),
    #[error("Failed to process data from server. Details: {0}")]
    Decoding(#[source] Arc<serde_json::Error>),
    #[error("Connection failed. Please check your internet connection. Details: {0}")]
    Transport(#[source] Arc<reqwest::Error>),
    #[error("Codeforces API Error: {0}")]
    Api(String),
    #[error("The server returned no data.")]
    NoData,
    #[error("Unauthorized access. Please check your credentials.")]
    Unauthorized,
    #[error("The request was interrupted before it finished.")]
    Interrupted,
}

pub type Result<T> = StdResult<T, Error>;

impl Error {
    pub(crate) fn is_transient(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Status(code) => *code == 429 || *code >= 500,
            _ => false,
        }
    }
    /// The judge answers 429/503 when its call limit is hit.
    pub(crate) fn is_rate_limit(&self) -> bool {
        matches!(self, Self::Status(429) | Self::Status(503))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Decoding(Arc::new(err))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            return Self::InvalidRequest(err.to_string());
        }
        match err.status() {
            Some(status) => from_status(status.as_u16()),
            None => Self::Transport(Arc::new(err)),
        }
    }
}

pub(crate) fn from_status(code: u16) -> Error {
    match code {
        401 | 403 => Error::Unauthorized,
        code => Error::Status(code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_map_to_kinds() {
        assert!(matches!(from_status(401), Error::Unauthorized));
        assert!(matches!(from_status(403), Error::Unauthorized));
        assert!(matches!(from_status(404), Error::Status(404)));
    }

    #[test]
    fn only_server_side_failures_are_transient() {
        assert!(Error::Status(502).is_transient());
        assert!(Error::Status(429).is_transient());
        assert!(Error::Status(429).is_rate_limit());
        assert!(!Error::Status(404).is_transient());
        assert!(!Error::Api("Call limit exceeded".to_string()).is_transient());
        assert!(!Error::NoData.is_transient());
    }

    #[test]
    fn messages_are_user_facing() {
        assert_eq!(
            Error::Status(500).to_string(),
            "Server returned an error. Status code: 500"
        );
        assert_eq!(
            Error::Api("handle: User with handle x not found".to_string()).to_string(),
            "Codeforces API Error: handle: User with handle x not found"
        );
        let err: Error = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(err.to_string().starts_with("Failed to process data from server."));
    }
}
