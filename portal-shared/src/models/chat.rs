use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ChatMessage, ChatType, ConversationSummary};

/// Body posted to `POST /api/chat`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatRequest {
    pub message: String,
}

/// Reply from `POST /api/chat`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatResponse {
    /// The assistant's reply text.
    pub response: String,

    /// The conversation the exchange was recorded under. New conversations
    /// are created server-side on the first message.
    pub conversation_id: Uuid,

    /// Title of that conversation.
    pub title: String,

    /// Assistant mode of that conversation.
    pub chat_type: ChatType,
}

/// Body returned by `GET /api/conversations/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConversationDetailResponse {
    pub conversation: ConversationSummary,
    pub messages: Vec<ChatMessage>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MessageRole;

    #[test]
    fn test_chat_response_deserialization() {
        let json = r#"{
            "response": "Start by applying the power rule.",
            "conversation_id": "6ba7b810-9dad-11d1-80b4-00c04fd430c8",
            "title": "Assignment Help",
            "chat_type": "assignment_help"
        }"#;

        let parsed: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.title, "Assignment Help");
        assert_eq!(parsed.chat_type, ChatType::AssignmentHelp);
        assert!(parsed.response.contains("power rule"));
    }

    #[test]
    fn test_conversation_detail_deserialization() {
        let json = r#"{
            "conversation": {
                "id": "6ba7b810-9dad-11d1-80b4-00c04fd430c8",
                "title": "Study Tips",
                "chat_type": "study_tips",
                "created_at": "2026-03-08T14:30:00Z"
            },
            "messages": [
                {"sender": "user", "content": "How do I plan revision?"},
                {"sender": "ai", "content": "Use spaced repetition."}
            ]
        }"#;

        let parsed: ConversationDetailResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.messages.len(), 2);
        assert_eq!(parsed.messages[0].sender, MessageRole::User);
        assert_eq!(parsed.messages[1].sender, MessageRole::Assistant);
    }
}
