use std::rc::Rc;

use shared::models::{
    ChatMessage, ChatRequest, ChatResponse, ConversationSummary, CurrentConversation, MessageRole,
    Timestamp,
};
use uuid::Uuid;
use yewdux::{Dispatch, Store};

use crate::api::{ApiError, PortalClient};

/// In-memory cache of the conversation list and the one open conversation.
///
/// The two are independent caches: the list is not reconciled against the
/// open conversation except where an action does so explicitly (delete).
#[derive(Debug, Default, Clone, PartialEq, Store)]
pub struct ConversationsState {
    /// Conversation summaries, newest inserted at the front.
    pub conversations: Vec<ConversationSummary>,
    /// The conversation whose transcript is on screen, if any.
    pub current: Option<CurrentConversation>,
    /// Whether a conversation request is in flight.
    pub loading: bool,
    /// Monotonic counter over state-replacing requests. A reply holding a
    /// stale ticket lost the race to a newer request and is dropped.
    epoch: u64,
}

impl ConversationsState {
    /// Apply a completed chat exchange.
    ///
    /// With no open conversation, the server just created one: synthesize
    /// its summary (client-stamped `sent_at`) and prepend it. Either way the
    /// open conversation becomes exactly the two-message transcript of this
    /// exchange; earlier messages of a previously loaded conversation are
    /// not kept.
    pub(crate) fn record_exchange(&mut self, text: &str, response: ChatResponse, sent_at: Timestamp) {
        let summary = ConversationSummary {
            id: response.conversation_id,
            title: response.title,
            chat_type: response.chat_type,
            created_at: sent_at,
        };
        if self.current.is_none() {
            self.conversations.insert(0, summary.clone());
        }
        self.current = Some(CurrentConversation {
            conversation: summary,
            messages: vec![
                ChatMessage {
                    sender: MessageRole::User,
                    content: text.to_string(),
                },
                ChatMessage {
                    sender: MessageRole::Assistant,
                    content: response.response,
                },
            ],
        });
    }

    /// Remove a conversation from the list; the open conversation is cleared
    /// only when it is the one removed.
    pub(crate) fn remove(&mut self, id: Uuid) {
        self.conversations.retain(|summary| summary.id != id);
        if self.current.as_ref().is_some_and(|current| current.id() == id) {
            self.current = None;
        }
    }
}

/// Handle bundling the conversation state with its actions.
#[derive(Clone)]
pub struct ConversationsStore {
    client: PortalClient,
    dispatch: Dispatch<ConversationsState>,
}

impl ConversationsStore {
    /// Bind the actions to a client and a state dispatch.
    pub fn new(client: PortalClient, dispatch: Dispatch<ConversationsState>) -> Self {
        Self { client, dispatch }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> Rc<ConversationsState> {
        self.dispatch.get()
    }

    /// Replace the cached list with the server's. Both authentication
    /// failures and other errors propagate; the page decides how to react.
    pub async fn fetch_conversations(&self) -> Result<(), ApiError> {
        self.dispatch.reduce_mut(|state| state.loading = true);
        let result = self.client.conversations().await;
        self.dispatch.reduce_mut(|state| state.loading = false);
        match result {
            Ok(list) => {
                self.dispatch.reduce_mut(|state| state.conversations = list);
                Ok(())
            }
            Err(err) => {
                log::error!("failed to list conversations: {err}");
                Err(err)
            }
        }
    }

    /// Pure local assignment of the open conversation.
    pub fn set_current(&self, conversation: CurrentConversation) {
        self.dispatch
            .reduce_mut(|state| state.current = Some(conversation));
    }

    /// Clear the open conversation: "no conversation selected yet".
    pub fn start_new_chat(&self) {
        self.dispatch.reduce_mut(|state| state.current = None);
    }

    pub(crate) fn take_ticket(&self) -> u64 {
        self.dispatch.reduce_mut(|state| state.epoch += 1);
        self.dispatch.get().epoch
    }

    pub(crate) fn ticket_is_current(&self, ticket: u64) -> bool {
        self.dispatch.get().epoch == ticket
    }

    /// Post a message to the chat endpoint. Empty and whitespace-only text
    /// is a no-op. On success the exchange is applied via
    /// [`ConversationsState::record_exchange`] unless a newer request has
    /// since taken over.
    pub async fn send_message(&self, text: &str) -> Result<(), ApiError> {
        if text.trim().is_empty() {
            return Ok(());
        }
        let ticket = self.take_ticket();
        let request = ChatRequest {
            message: text.to_string(),
        };
        self.dispatch.reduce_mut(|state| state.loading = true);
        let result = self.client.send_chat(&request).await;
        self.dispatch.reduce_mut(|state| state.loading = false);
        match result {
            Ok(response) => {
                if self.ticket_is_current(ticket) {
                    self.dispatch
                        .reduce_mut(|state| state.record_exchange(text, response, Timestamp::now()));
                }
                Ok(())
            }
            Err(err) => {
                log::error!("send message failed: {err}");
                Err(err)
            }
        }
    }

    /// Fetch one conversation and its full history, replacing the open
    /// conversation wholesale unless a newer request has since taken over.
    pub async fn load_conversation(&self, id: Uuid) -> Result<(), ApiError> {
        let ticket = self.take_ticket();
        self.dispatch.reduce_mut(|state| state.loading = true);
        let result = self.client.conversation(&id).await;
        self.dispatch.reduce_mut(|state| state.loading = false);
        match result {
            Ok(detail) => {
                if self.ticket_is_current(ticket) {
                    self.dispatch.reduce_mut(|state| {
                        state.current = Some(CurrentConversation {
                            conversation: detail.conversation,
                            messages: detail.messages,
                        });
                    });
                }
                Ok(())
            }
            Err(err) => {
                log::error!("load conversation failed: {err}");
                Err(err)
            }
        }
    }

    /// Delete a conversation remotely, then drop it from local state per
    /// [`ConversationsState::remove`].
    pub async fn delete_conversation(&self, id: Uuid) -> Result<(), ApiError> {
        self.dispatch.reduce_mut(|state| state.loading = true);
        let result = self.client.delete_conversation(&id).await;
        self.dispatch.reduce_mut(|state| state.loading = false);
        match result {
            Ok(()) => {
                self.dispatch.reduce_mut(|state| state.remove(id));
                Ok(())
            }
            Err(err) => {
                log::error!("delete conversation failed: {err}");
                Err(err)
            }
        }
    }
}
