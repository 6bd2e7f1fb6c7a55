use std::rc::Rc;

use shared::models::{AuthResponse, LoginRequest, SignupRequest, User};
use yewdux::{Dispatch, Store};

use crate::api::{ApiError, PortalClient};
use crate::auth;

/// In-memory cache of the authenticated user's identity.
#[derive(Default, Clone, PartialEq, Store)]
pub struct SessionState {
    /// The authenticated user, absent until login/signup/fetch succeeds.
    pub user: Option<User>,
    /// Whether a session request is in flight.
    pub loading: bool,
}

impl SessionState {
    /// Whether a user is cached. Accepts staleness: no revalidation happens
    /// here.
    pub const fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub(crate) fn set_user(&mut self, user: User) {
        self.user = Some(user);
    }

    pub(crate) fn clear_user(&mut self) {
        self.user = None;
    }
}

/// Handle bundling the session state with its actions.
///
/// Cloneable; all clones created against the same [`Dispatch`] share state.
/// Pages construct one from the shared client and their yewdux dispatch
/// instead of reaching for a global.
#[derive(Clone)]
pub struct SessionStore {
    client: PortalClient,
    dispatch: Dispatch<SessionState>,
}

impl SessionStore {
    /// Bind the actions to a client and a state dispatch.
    pub fn new(client: PortalClient, dispatch: Dispatch<SessionState>) -> Self {
        Self { client, dispatch }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> Rc<SessionState> {
        self.dispatch.get()
    }

    /// Post credentials; on success cache the user and persist the token.
    /// On failure the cached user stays absent and the error propagates.
    pub async fn login(&self, email: String, password: String) -> Result<(), ApiError> {
        let request = LoginRequest { email, password };
        self.dispatch.reduce_mut(|state| state.loading = true);
        let result = self.client.login(&request).await;
        self.dispatch.reduce_mut(|state| state.loading = false);
        self.finish_auth(result?);
        Ok(())
    }

    /// Register a new account; state handling matches [`Self::login`].
    pub async fn signup(&self, request: SignupRequest) -> Result<(), ApiError> {
        self.dispatch.reduce_mut(|state| state.loading = true);
        let result = self.client.signup(&request).await;
        self.dispatch.reduce_mut(|state| state.loading = false);
        self.finish_auth(result?);
        Ok(())
    }

    fn finish_auth(&self, response: AuthResponse) {
        if let Some(token) = response.access_token.as_deref() {
            auth::store_access_token(token);
        }
        self.dispatch.reduce_mut(|state| state.set_user(response.user));
    }

    /// Fetch the current identity from the backend. A 401 invalidates the
    /// local session (cached user and stored token) before propagating.
    pub async fn fetch_user(&self) -> Result<User, ApiError> {
        self.dispatch.reduce_mut(|state| state.loading = true);
        let result = self.client.current_user().await;
        self.dispatch.reduce_mut(|state| state.loading = false);
        match result {
            Ok(body) => {
                self.dispatch
                    .reduce_mut(|state| state.set_user(body.user.clone()));
                Ok(body.user)
            }
            Err(err) => {
                if err.is_unauthorized() {
                    auth::clear_access_token();
                    self.dispatch.reduce_mut(SessionState::clear_user);
                }
                Err(err)
            }
        }
    }

    /// True immediately if a user is already cached, with no network call.
    /// Otherwise fetches the identity and reports whether a user ended up
    /// cached. Never fails: all errors collapse to `false`.
    pub async fn check_auth(&self) -> bool {
        if self.dispatch.get().is_authenticated() {
            return true;
        }
        match self.fetch_user().await {
            Ok(_) => self.dispatch.get().is_authenticated(),
            Err(_) => false,
        }
    }

    /// App-bootstrap wrapper over [`Self::check_auth`].
    pub async fn initialize(&self) {
        let _ = self.check_auth().await;
    }

    /// Call the backend logout endpoint (failure is logged, not propagated),
    /// then unconditionally clear the cached user and the stored token. The
    /// route guard turns the cleared state into a redirect to the login
    /// screen.
    pub async fn logout(&self) {
        self.dispatch.reduce_mut(|state| state.loading = true);
        let result = self.client.logout().await;
        self.dispatch.reduce_mut(|state| state.loading = false);
        if let Err(err) = result {
            log::error!("logout failed: {err}");
        }
        auth::clear_access_token();
        self.dispatch.reduce_mut(SessionState::clear_user);
    }
}
