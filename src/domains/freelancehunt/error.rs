//! Freelancehunt API error types.

use thiserror::Error;

/// Result type for Freelancehunt API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors produced by the Freelancehunt API client.
///
/// HTTP status codes with a dedicated meaning get their own variant so callers
/// can match on them; everything else at or above 400 is reported as
/// [`ApiError::Status`] with the raw body attached.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The client could not be configured (missing credential, bad base URL).
    #[error("Configuration error: {0}")]
    Config(String),

    /// The request never produced an HTTP response (connect, DNS, timeout).
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// HTTP 401.
    #[error("Unauthorized. Check your API key.")]
    Unauthorized,

    /// HTTP 403.
    #[error("Forbidden. Check your API permissions.")]
    Forbidden,

    /// HTTP 404.
    #[error("Resource not found.")]
    NotFound,

    /// HTTP 429.
    #[error("Rate limit exceeded. Please wait.")]
    RateLimited,

    /// Any other status >= 400.
    #[error("API error: {status} - {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// A single-resource endpoint answered without a `data` object.
    #[error("No {resource} data in response")]
    NoData {
        /// Resource that was expected (e.g. "project").
        resource: &'static str,
    },

    /// The response did not match the expected record layout.
    #[error("Invalid {resource} response format: {message}")]
    InvalidResponseShape {
        /// Resource that was being decoded.
        resource: &'static str,
        /// Decoder message.
        message: String,
    },
}

impl ApiError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Map a transport-level reqwest failure.
    pub fn request_failed(err: &reqwest::Error) -> Self {
        let detail = if err.is_timeout() {
            "request timed out".to_string()
        } else if err.is_connect() {
            format!("connection failed ({err})")
        } else {
            err.to_string()
        };
        Self::RequestFailed(detail)
    }

    /// Create a response shape error for the given resource.
    pub fn invalid_shape(resource: &'static str, msg: impl ToString) -> Self {
        Self::InvalidResponseShape {
            resource,
            message: msg.to_string(),
        }
    }

    /// Map an HTTP error status to its error variant.
    ///
    /// Returns `None` for statuses below 400.
    pub fn from_status(status: u16, body: impl FnOnce() -> String) -> Option<Self> {
        match status {
            401 => Some(Self::Unauthorized),
            403 => Some(Self::Forbidden),
            404 => Some(Self::NotFound),
            429 => Some(Self::RateLimited),
            s if s >= 400 => Some(Self::Status {
                status: s,
                body: body(),
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert!(matches!(
            ApiError::from_status(401, String::new),
            Some(ApiError::Unauthorized)
        ));
        assert!(matches!(
            ApiError::from_status(403, String::new),
            Some(ApiError::Forbidden)
        ));
        assert!(matches!(
            ApiError::from_status(404, String::new),
            Some(ApiError::NotFound)
        ));
        assert!(matches!(
            ApiError::from_status(429, String::new),
            Some(ApiError::RateLimited)
        ));
        assert!(ApiError::from_status(200, String::new).is_none());
        assert!(ApiError::from_status(302, String::new).is_none());
    }

    #[test]
    fn test_generic_status_keeps_body() {
        let err = ApiError::from_status(502, || "bad gateway".to_string()).unwrap();
        assert!(matches!(err, ApiError::Status { status: 502, .. }));
        assert_eq!(err.to_string(), "API error: 502 - bad gateway");
    }

    #[test]
    fn test_body_only_read_for_generic_status() {
        let err = ApiError::from_status(404, || panic!("body must not be read"));
        assert!(matches!(err, Some(ApiError::NotFound)));
    }

    #[test]
    fn test_messages() {
        assert!(ApiError::NotFound.to_string().contains("not found"));
        assert_eq!(
            ApiError::NoData { resource: "project" }.to_string(),
            "No project data in response"
        );
    }
}
