use thiserror::Error;

/// Why a single backend fetch did not produce a store entry.
///
/// Every variant carries the request path so a failure can be logged on its
/// own; one failed resource never affects the others.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The backend answered with something other than 200.
    #[error("failed to fetch {path} data: status {status}")]
    Status { path: String, status: u16 },

    /// The request never produced a response (DNS, connection, CORS, ...).
    #[error("error fetching {path} data: {message}")]
    Network { path: String, message: String },

    /// A 200 response whose `data` object lacks the expected key.
    #[error("response for {path} has no `{key}` field")]
    MissingKey { path: String, key: String },

    /// The payload was present but did not match the expected shape.
    #[error("failed to decode {path} data: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// Request path of the resource that failed.
    pub fn path(&self) -> &str {
        match self {
            Self::Status { path, .. }
            | Self::Network { path, .. }
            | Self::MissingKey { path, .. }
            | Self::Decode { path, .. } => path,
        }
    }

    /// True when the request itself failed, as opposed to a bad answer.
    pub const fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = FetchError::Status {
            path: "socials".to_string(),
            status: 500,
        };
        assert_eq!(err.to_string(), "failed to fetch socials data: status 500");
        assert_eq!(err.path(), "socials");
        assert!(!err.is_network());
    }

    #[test]
    fn test_network_error_message() {
        let err = FetchError::Network {
            path: "articles?get=all".to_string(),
            message: "connection refused".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "error fetching articles?get=all data: connection refused"
        );
        assert!(err.is_network());
    }

    #[test]
    fn test_decode_error_keeps_source() {
        let source = serde_json::from_str::<u32>("\"x\"").unwrap_err();
        let err = FetchError::Decode {
            path: "catalog".to_string(),
            source,
        };
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!(err.path(), "catalog");
    }
}
