use once_cell::unsync::OnceCell;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use shared::models::{
    AuthResponse, ChatRequest, ChatResponse, ConversationDetailResponse, ConversationSummary,
    LoginRequest, SignupRequest, UserResponse,
};
use thiserror::Error;
use uuid::Uuid;

use crate::auth;
use crate::config::FrontendConfig;

thread_local! {
    static SHARED_CLIENT: OnceCell<PortalClient> = OnceCell::new();
}

/// Failure of a [`PortalClient`] call.
///
/// Authentication failures get their own variant because both stores react
/// to them by invalidating local session state; everything else is reported
/// to the caller unclassified.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend rejected the token or session (HTTP 401).
    #[error("authentication required")]
    Unauthorized,

    /// Any other non-2xx response, carrying the body the server sent.
    #[error("server responded {status}: {body}")]
    Status {
        /// The response status code.
        status: StatusCode,
        /// The raw response body.
        body: String,
    },
}

impl ApiError {
    /// Whether this is an authentication failure.
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

/// Lightweight API client for the portal backend.
///
/// Every request presents the bearer token read fresh from local storage.
/// There is no retry, timeout, or refresh policy; a stale token simply
/// yields [`ApiError::Unauthorized`].
#[derive(Clone, Debug)]
pub struct PortalClient {
    base_url: String,
    client: Client,
}

impl PortalClient {
    /// Create a new API client against the provided backend origin.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// The per-page shared client instance.
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| Self::new(FrontendConfig::default().api_base_url()))
                .clone()
        })
    }

    /// The backend origin this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match auth::access_token() {
            Some(token) => request.header("Authorization", format!("Bearer {token}")),
            None => request,
        }
    }

    async fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ApiError> {
        let response = request.send().await?;
        if response.status().is_success() {
            return Ok(response.json().await?);
        }
        Err(Self::reject(response).await)
    }

    async fn send_empty(request: RequestBuilder) -> Result<(), ApiError> {
        let response = request.send().await?;
        if response.status().is_success() {
            return Ok(());
        }
        Err(Self::reject(response).await)
    }

    async fn reject(response: Response) -> ApiError {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return ApiError::Unauthorized;
        }
        let body = response.text().await.unwrap_or_default();
        ApiError::Status { status, body }
    }

    /// Authenticate with email/password credentials.
    pub async fn login(&self, payload: &LoginRequest) -> Result<AuthResponse, ApiError> {
        Self::send(self.client.post(self.url("auth/login")).json(payload)).await
    }

    /// Register a new account.
    pub async fn signup(&self, payload: &SignupRequest) -> Result<AuthResponse, ApiError> {
        Self::send(self.client.post(self.url("auth/signup")).json(payload)).await
    }

    /// Retrieve the authenticated user's profile.
    pub async fn current_user(&self) -> Result<UserResponse, ApiError> {
        Self::send(self.authorize(self.client.get(self.url("auth/user")))).await
    }

    /// Terminate the current session server-side.
    pub async fn logout(&self) -> Result<(), ApiError> {
        Self::send_empty(self.authorize(self.client.post(self.url("auth/logout")))).await
    }

    /// List the user's conversations, newest activity first.
    pub async fn conversations(&self) -> Result<Vec<ConversationSummary>, ApiError> {
        Self::send(self.authorize(self.client.get(self.url("api/conversations")))).await
    }

    /// Fetch one conversation with its full message history.
    pub async fn conversation(&self, id: &Uuid) -> Result<ConversationDetailResponse, ApiError> {
        let url = self.url(&format!("api/conversations/{id}"));
        Self::send(self.authorize(self.client.get(url))).await
    }

    /// Delete a conversation.
    pub async fn delete_conversation(&self, id: &Uuid) -> Result<(), ApiError> {
        let url = self.url(&format!("api/conversations/{id}"));
        Self::send_empty(self.authorize(self.client.delete(url))).await
    }

    /// Send a chat message, creating a conversation if none is open.
    pub async fn send_chat(&self, payload: &ChatRequest) -> Result<ChatResponse, ApiError> {
        Self::send(self.authorize(self.client.post(self.url("api/chat")).json(payload))).await
    }
}
