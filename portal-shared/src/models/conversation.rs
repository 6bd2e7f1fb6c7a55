use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ChatMessage, Timestamp};

/// The assistant mode a conversation was started in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChatType {
    /// Step-by-step help with a concrete assignment.
    AssignmentHelp,

    /// Coaching on study techniques and planning.
    StudyTips,

    /// A mode this client version does not know about.
    #[serde(other)]
    Unknown,
}

impl ChatType {
    /// Human-readable label for list entries.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::AssignmentHelp => "Assignment Help",
            Self::StudyTips => "Study Tips",
            Self::Unknown => "Chat",
        }
    }
}

/// One entry in the conversation history list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConversationSummary {
    /// Unique identifier for the conversation.
    pub id: Uuid,

    /// The title the backend derived from the assistant mode.
    pub title: String,

    /// The assistant mode tag.
    pub chat_type: ChatType,

    /// When the conversation was created.
    pub created_at: Timestamp,
}

/// The single conversation currently open, with its full transcript.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CurrentConversation {
    /// The conversation's summary entry.
    pub conversation: ConversationSummary,

    /// The transcript, oldest message first.
    pub messages: Vec<ChatMessage>,
}

impl CurrentConversation {
    /// Identifier of the open conversation.
    pub fn id(&self) -> Uuid {
        self.conversation.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MessageRole;
    use chrono::Utc;

    fn summary(title: &str) -> ConversationSummary {
        ConversationSummary {
            id: Uuid::new_v4(),
            title: title.to_string(),
            chat_type: ChatType::AssignmentHelp,
            created_at: Timestamp(Utc::now()),
        }
    }

    #[test]
    fn test_chat_type_wire_names() {
        assert_eq!(
            serde_json::to_string(&ChatType::AssignmentHelp).unwrap(),
            "\"assignment_help\""
        );
        assert_eq!(serde_json::to_string(&ChatType::StudyTips).unwrap(), "\"study_tips\"");
    }

    #[test]
    fn test_chat_type_unknown_mode() {
        let parsed: ChatType = serde_json::from_str("\"exam_prep\"").unwrap();
        assert_eq!(parsed, ChatType::Unknown);
        assert_eq!(parsed.label(), "Chat");
    }

    #[test]
    fn test_current_conversation_id() {
        let current = CurrentConversation {
            conversation: summary("Assignment Help"),
            messages: vec![ChatMessage {
                sender: MessageRole::User,
                content: "hello".to_string(),
            }],
        };

        assert_eq!(current.id(), current.conversation.id);
    }

    #[test]
    fn test_summary_deserialization() {
        let json = r#"{
            "id": "6ba7b810-9dad-11d1-80b4-00c04fd430c8",
            "title": "Study Tips",
            "chat_type": "study_tips",
            "created_at": "2026-03-08T14:30:00Z"
        }"#;

        let parsed: ConversationSummary = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.title, "Study Tips");
        assert_eq!(parsed.chat_type, ChatType::StudyTips);
    }
}
