//! Error types for the run client.

/// Run client errors.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Filter input was neither the all-tests sentinel nor an integer
    /// sequence. Detected before any network call.
    #[error("invalid test filter: {message}")]
    InvalidFilter { message: String },

    /// The transport could not complete the exchange (DNS, connection,
    /// timeout).
    #[error("transport failure: {source}")]
    TransportFailure {
        #[source]
        source: reqwest::Error,
    },

    /// The service rejected the run request with a non-201 status. The
    /// message is the service's `error` field, verbatim.
    #[error("run rejected (HTTP {status}): {message}")]
    RemoteRejected { status: u16, message: String },

    /// The response body did not parse as the expected JSON shape, on
    /// either the success or the error branch.
    #[error("malformed response: {message}")]
    MalformedResponse { message: String },
}

impl ClientError {
    /// HTTP status of a remote rejection, if any.
    ///
    /// The status is auxiliary context only; this layer attaches no retry
    /// semantics to it.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RemoteRejected { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the failure happened below the HTTP layer.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::TransportFailure { .. })
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(source: reqwest::Error) -> Self {
        Self::TransportFailure { source }
    }
}

/// Result type for run client operations.
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_preserved_on_rejection() {
        let err = ClientError::RemoteRejected {
            status: 403,
            message: "Invalid test ids".to_string(),
        };
        assert_eq!(err.status(), Some(403));
        assert!(!err.is_transport());
    }

    #[test]
    fn test_status_absent_elsewhere() {
        let err = ClientError::MalformedResponse {
            message: "not json".to_string(),
        };
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_rejection_display_carries_message() {
        let err = ClientError::RemoteRejected {
            status: 404,
            message: "Account not found".to_string(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("Account not found"));
        assert!(rendered.contains("404"));
    }
}
