use std::fmt;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    State,
    Move,
    Reset,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::State => "/api/state",
            Endpoint::Move => "/api/move",
            Endpoint::Reset => "/api/reset",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Both variants are recovered the same way: report, then re-sync.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {endpoint} failed: {message}")]
    Transport { endpoint: Endpoint, message: String },
    #[error("malformed response from {endpoint}: {source}")]
    Decode {
        endpoint: Endpoint,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    pub fn transport(endpoint: Endpoint, err: impl fmt::Display) -> Self {
        ApiError::Transport {
            endpoint,
            message: err.to_string(),
        }
    }

    #[cfg(test)]
    pub fn endpoint(&self) -> Endpoint {
        match self {
            ApiError::Transport { endpoint, .. } | ApiError::Decode { endpoint, .. } => *endpoint,
        }
    }
}
