use serde::{Deserialize, Serialize};

use super::User;

/// Credentials posted to `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Profile fields posted to `POST /auth/signup`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignupRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Body returned by login and signup.
///
/// `access_token` is the bearer token the backend mints on success; it is
/// persisted client-side so guarded navigation and subsequent requests can
/// present it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    pub user: User,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

/// Body returned by `GET /auth/user`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserResponse {
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_shape() {
        let request = LoginRequest {
            email: "ada@example.com".to_string(),
            password: "hunter2".to_string(),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["email"], "ada@example.com");
        assert_eq!(json["password"], "hunter2");
    }

    #[test]
    fn test_auth_response_without_token() {
        let json = r#"{
            "user": {
                "id": "f47ac10b-58cc-4372-a567-0e02b2c3d479",
                "first_name": "Ada",
                "last_name": "Lovelace",
                "email": "ada@example.com"
            }
        }"#;

        let parsed: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.access_token, None);
        assert_eq!(parsed.user.first_name, "Ada");
    }

    #[test]
    fn test_auth_response_with_token() {
        let json = r#"{
            "user": {
                "id": "f47ac10b-58cc-4372-a567-0e02b2c3d479",
                "first_name": "Ada",
                "last_name": "Lovelace",
                "email": "ada@example.com"
            },
            "access_token": "eyJhbGciOiJIUzI1NiJ9.e30.sig"
        }"#;

        let parsed: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.access_token.as_deref(), Some("eyJhbGciOiJIUzI1NiJ9.e30.sig"));
    }
}
