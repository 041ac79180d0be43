//! Errors returned by [`crate::ApiClient`] and the login check.

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("server responded {status}: {body}")]
    Status { status: u16, body: String },

    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid identifier or password")]
    InvalidCredentials,

    #[error("role {0} may not access the back-office")]
    Forbidden(String),
}

impl ApiError {
    /// Message for the alert banner. Transport and decoding problems all read
    /// as the same generic failure.
    pub fn user_message(&self) -> &'static str {
        match self {
            ApiError::InvalidCredentials => "Invalid identifier or password.",
            ApiError::Forbidden(_) => "Access denied. You are not allowed to open the admin panel.",
            ApiError::Status { status: 404, .. } => "The requested record no longer exists.",
            ApiError::Network(_) | ApiError::Status { .. } | ApiError::Decode(_) => {
                "Could not reach the server. Please try again."
            }
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        assert_eq!(
            ApiError::InvalidCredentials.user_message(),
            "Invalid identifier or password."
        );
        let err = ApiError::Status {
            status: 500,
            body: "boom".into(),
        };
        assert_eq!(err.user_message(), "Could not reach the server. Please try again.");
        assert_eq!(err.to_string(), "server responded 500: boom");
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_not_found() {
        let err = ApiError::Status {
            status: 404,
            body: String::new(),
        };
        assert!(err.is_not_found());
        assert_eq!(err.user_message(), "The requested record no longer exists.");
    }
}
