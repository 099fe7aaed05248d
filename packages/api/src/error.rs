//! Error taxonomy for gateway calls.
//!
//! Three conditions reach callers; everything else (a probe missing its id,
//! a delete-merge finding nothing to delete) is an expected outcome handled
//! below this layer and never surfaces as an error.

use thiserror::Error;

/// A failed gateway call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Login or registration rejected by the remote API. The session is
    /// left unchanged; the auth views show the message.
    #[error("{0}")]
    AuthFailure(String),

    /// Any other non-2xx response.
    #[error("request failed with status {status}: {message}")]
    RequestFailed { status: u16, message: String },

    /// Connection, timeout or body-decoding failure.
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    /// Build the error for a non-2xx response, given its status and body.
    pub(crate) fn from_status(status: u16, body: String) -> Self {
        let message = if body.trim().is_empty() {
            "no response body".to_string()
        } else {
            body
        };
        ApiError::RequestFailed { status, message }
    }

    /// Re-classify an authentication-endpoint rejection (4xx) as
    /// [`ApiError::AuthFailure`]; other failures pass through.
    pub(crate) fn into_auth(self) -> Self {
        match self {
            ApiError::RequestFailed { status, message } if (400..500).contains(&status) => {
                ApiError::AuthFailure(message)
            }
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_2xx_keeps_status_and_body() {
        let err = ApiError::from_status(500, "boom".to_string());
        match err {
            ApiError::RequestFailed { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn empty_body_gets_a_placeholder_message() {
        let err = ApiError::from_status(404, "  ".to_string());
        assert!(err.to_string().contains("no response body"));
    }

    #[test]
    fn auth_endpoints_reclassify_rejections() {
        let err = ApiError::from_status(401, "bad credentials".to_string()).into_auth();
        assert!(matches!(err, ApiError::AuthFailure(ref m) if m == "bad credentials"));

        // Server-side failures are not the user's fault
        let err = ApiError::from_status(503, "maintenance".to_string()).into_auth();
        assert!(matches!(err, ApiError::RequestFailed { status: 503, .. }));
    }
}
