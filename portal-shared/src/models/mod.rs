pub mod auth;
pub mod chat;
pub mod conversation;
pub mod errors;
pub mod message;
pub mod timestamp;
pub mod user;

pub use auth::{AuthResponse, LoginRequest, SignupRequest, UserResponse};
pub use chat::{ChatRequest, ChatResponse, ConversationDetailResponse};
pub use conversation::{ChatType, ConversationSummary, CurrentConversation};
pub use errors::ErrorResponse;
pub use message::{ChatMessage, MessageRole};
pub use timestamp::Timestamp;
pub use user::User;
