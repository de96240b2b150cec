use std::fmt;

use serde::Deserialize;

/// Result type for xpdash-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error taxonomy for the auth exchange and GraphQL transport
#[derive(Debug)]
pub enum Error {
    /// Credentials rejected or no active session
    Auth(String),

    /// Network failure, timeout, or non-2xx from the GraphQL endpoint
    Transport(String),

    /// The GraphQL response carried a non-empty `errors` array
    Query(Vec<GraphqlError>),

    /// 401 on an authenticated request; the session token has been cleared
    SessionExpired,

    /// Response missing an expected field or shape
    DataShape(String),
}

/// One entry of a GraphQL `errors` array.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlError {
    pub message: String,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Auth(msg) => write!(f, "Authentication failed: {}", msg),
            Error::Transport(msg) => write!(f, "Transport error: {}", msg),
            Error::Query(errors) => {
                let messages: Vec<&str> =
                    errors.iter().map(|e| e.message.as_str()).collect();
                write!(f, "GraphQL returned errors: {}", messages.join("; "))
            }
            Error::SessionExpired => write!(f, "Session expired, please log in again"),
            Error::DataShape(msg) => write!(f, "Unexpected response shape: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(err.to_string())
    }
}
