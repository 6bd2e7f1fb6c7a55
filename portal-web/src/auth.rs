//! Access-token persistence.
//!
//! The backend mints a bearer token on login/signup; it lives in browser
//! local storage under `access_token`. The route guard checks only that a
//! token is present; validity is enforced server-side.

use gloo_storage::{LocalStorage, Storage};

/// Local-storage key the token is kept under.
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// The stored token, if any.
pub fn access_token() -> Option<String> {
    LocalStorage::get(ACCESS_TOKEN_KEY).ok()
}

/// Persist a freshly minted token.
pub fn store_access_token(token: &str) {
    if let Err(err) = LocalStorage::set(ACCESS_TOKEN_KEY, token) {
        log::error!("failed to persist access token: {err}");
    }
}

/// Drop the stored token, if any.
pub fn clear_access_token() {
    LocalStorage::delete(ACCESS_TOKEN_KEY);
}
