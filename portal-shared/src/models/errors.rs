use serde::{Deserialize, Serialize};

/// Error body the backend attaches to non-2xx responses.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// The error message.
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new error response.
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for ErrorResponse {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_display() {
        let error = ErrorResponse::new("Invalid email or password");
        assert_eq!(error.to_string(), "Invalid email or password");
    }

    #[test]
    fn test_error_response_deserialization() {
        let parsed: ErrorResponse = serde_json::from_str(r#"{"error": "Email already exists"}"#).unwrap();
        assert_eq!(parsed, ErrorResponse::new("Email already exists"));
    }
}
