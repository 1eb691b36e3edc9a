use thiserror::Error;

/// Errors reported by the wrapped cloud API clients.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Request failed with status {code}: {message}")]
    Status { code: u16, message: String },

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound(_))
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced by the control plane [`Client`](crate::Client).
#[derive(Error, Debug)]
pub enum CloudError {
    #[error("namespace is not supported for Upbound Cloud control planes")]
    NamespaceUnsupported,

    #[error("control plane not found: {0}")]
    NotFound(#[source] ApiError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl CloudError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, CloudError::NotFound(_))
    }

    /// Translates a backend not-found into [`CloudError::NotFound`] and keeps
    /// every other error unchanged.
    pub(crate) fn from_lookup(err: ApiError) -> Self {
        if err.is_not_found() {
            CloudError::NotFound(err)
        } else {
            CloudError::Api(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn lookup_translation_only_touches_not_found() {
        let err = CloudError::from_lookup(ApiError::NotFound("dev".into()));
        assert!(err.is_not_found());
        assert!(err.source().is_some());

        let err = CloudError::from_lookup(ApiError::Status {
            code: 500,
            message: "boom".into(),
        });
        assert!(!err.is_not_found());
        assert!(matches!(
            err,
            CloudError::Api(ApiError::Status { code: 500, .. })
        ));
    }

    #[test]
    fn wrapped_errors_display_unchanged() {
        let err = CloudError::from(ApiError::InvalidRequest("bad".into()));
        assert_eq!(err.to_string(), "Invalid request: bad");
    }
}
