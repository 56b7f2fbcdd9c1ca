//! The single failure kind a remote call can produce.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RequestFailure {
    #[error("cannot reach {method} {url}: {source}")]
    Transport {
        method: String,
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{method} {url} returned {status}: {body}")]
    Status {
        method: String,
        url: String,
        status: u16,
        body: String,
    },
    #[error("cannot decode response of {method} {url}: {source}")]
    Decode {
        method: String,
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("backend unavailable: {0}")]
    Unavailable(String),
}

impl RequestFailure {
    /// HTTP status carried by the failure, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            RequestFailure::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message() {
        let err = RequestFailure::Status {
            method: "PATCH".to_string(),
            url: "https://example.com/users/me".to_string(),
            status: 400,
            body: "Validation failed".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "PATCH https://example.com/users/me returned 400: Validation failed"
        );
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_unavailable_has_no_status() {
        let err = RequestFailure::Unavailable("offline".to_string());
        assert_eq!(err.status(), None);
        assert_eq!(err.to_string(), "backend unavailable: offline");
    }
}
