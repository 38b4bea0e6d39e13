use thiserror::Error;

/// Failure of a call to the remote user collection
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("remote rejected the request with status {status}")]
    Rejected { status: u16, message: Option<String> },
    #[error("could not decode remote response: {0}")]
    Decode(String),
}

impl RemoteError {
    /// Human-readable message supplied by the server in the error body, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            RemoteError::Rejected {
                message: Some(message),
                ..
            } if !message.is_empty() => Some(message),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for RemoteError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            RemoteError::Decode(err.to_string())
        } else {
            RemoteError::Transport(err.to_string())
        }
    }
}
