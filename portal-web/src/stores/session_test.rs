//! Tests for the session store's state transitions.
//!
//! Networked paths need a live backend; what is covered here is everything
//! that must hold without one: cache-hit short-circuits and the
//! unconditional clearing rules.

use futures::executor::block_on;
use shared::models::User;
use uuid::Uuid;
use yewdux::Dispatch;

use crate::api::PortalClient;
use crate::stores::session::{SessionState, SessionStore};

fn test_user() -> User {
    User {
        id: Uuid::new_v4(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: "ada@example.com".to_string(),
    }
}

fn test_store() -> (SessionStore, Dispatch<SessionState>) {
    let cx = yewdux::Context::new();
    let dispatch = Dispatch::<SessionState>::new(&cx);
    let store = SessionStore::new(PortalClient::new("http://localhost:5000"), dispatch.clone());
    (store, dispatch)
}

#[test]
fn test_default_state_is_unauthenticated() {
    let (store, _dispatch) = test_store();
    assert!(!store.state().is_authenticated());
    assert!(!store.state().loading);
}

#[test]
fn test_set_and_clear_user() {
    let (_store, dispatch) = test_store();
    let user = test_user();

    dispatch.reduce_mut(|state| state.set_user(user.clone()));
    assert_eq!(dispatch.get().user.clone(), Some(user));

    dispatch.reduce_mut(SessionState::clear_user);
    assert!(dispatch.get().user.is_none());
}

#[test]
fn test_check_auth_is_a_cache_hit_when_populated() {
    let (store, dispatch) = test_store();
    dispatch.reduce_mut(|state| state.set_user(test_user()));

    // Short-circuits before any request is built; completes synchronously.
    assert!(block_on(store.check_auth()));
    assert!(block_on(store.check_auth()));

    // The cached user is untouched and no loading transition happened.
    assert!(dispatch.get().is_authenticated());
    assert!(!dispatch.get().loading);
}

#[test]
fn test_clones_share_state() {
    let (store, dispatch) = test_store();
    let clone = store.clone();

    dispatch.reduce_mut(|state| state.set_user(test_user()));
    assert!(clone.state().is_authenticated());
}
