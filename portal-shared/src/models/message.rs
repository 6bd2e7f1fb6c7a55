use serde::{Deserialize, Serialize};

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MessageRole {
    /// The student typing into the portal.
    #[serde(rename = "user")]
    User,

    /// The assistant service's reply.
    #[serde(rename = "ai")]
    Assistant,
}

impl MessageRole {
    /// Label shown next to a message bubble.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::User => "You",
            Self::Assistant => "Assistant",
        }
    }
}

/// A single message inside a conversation transcript.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    /// Who sent the message.
    pub sender: MessageRole,

    /// The message text, possibly containing markdown and TeX.
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_names() {
        assert_eq!(serde_json::to_string(&MessageRole::User).unwrap(), "\"user\"");
        assert_eq!(serde_json::to_string(&MessageRole::Assistant).unwrap(), "\"ai\"");
    }

    #[test]
    fn test_role_deserialization() {
        let role: MessageRole = serde_json::from_str("\"ai\"").unwrap();
        assert_eq!(role, MessageRole::Assistant);
    }

    #[test]
    fn test_message_round_trip() {
        let message = ChatMessage {
            sender: MessageRole::User,
            content: "What is the derivative of x^2?".to_string(),
        };

        let serialized = serde_json::to_string(&message).unwrap();
        let deserialized: ChatMessage = serde_json::from_str(&serialized).unwrap();

        assert_eq!(deserialized, message);
    }

    #[test]
    fn test_role_labels() {
        assert_eq!(MessageRole::User.label(), "You");
        assert_eq!(MessageRole::Assistant.label(), "Assistant");
    }
}
