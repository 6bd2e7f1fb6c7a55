use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a registered student account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Unique identifier for the user.
    pub id: Uuid,

    /// The user's given name.
    pub first_name: String,

    /// The user's family name.
    pub last_name: String,

    /// The user's email address.
    pub email: String,
}

impl User {
    /// Display name used in headers and greetings.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_user_full_name() {
        let user = User {
            id: Uuid::new_v4(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
        };

        assert_eq!(user.full_name(), "Ada Lovelace");
    }

    #[test]
    fn test_user_equality() {
        let id = Uuid::new_v4();
        let user1 = User {
            id,
            first_name: "Same".to_string(),
            last_name: "User".to_string(),
            email: "same@example.com".to_string(),
        };
        let user2 = user1.clone();

        assert_eq!(user1, user2, "Users with the same fields should be equal");
    }

    #[test]
    fn test_user_deserialization() {
        let json = r#"{
            "id": "f47ac10b-58cc-4372-a567-0e02b2c3d479",
            "first_name": "Grace",
            "last_name": "Hopper",
            "email": "grace@example.com"
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.email, "grace@example.com");
        assert!(!user.id.is_nil());
    }
}
