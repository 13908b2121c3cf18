use super::*;
use crate::net::error::CONNECTIVITY_MESSAGE;
use crate::net::gateway::TransportError;
use crate::net::test_support::{ScriptedTransport, memory_store, service, user_json};
use crate::state::auth::SessionObserver;
use crate::util::auth::LOGIN_PATH;
use futures::executor::block_on;
use std::cell::RefCell;
use std::rc::Rc;

fn recording_navigate() -> (Rc<RefCell<Vec<(String, bool)>>>, impl Fn(&str, NavigateOptions)) {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let calls_cb = Rc::clone(&calls);
    let navigate = move |path: &str, options: NavigateOptions| {
        calls_cb.borrow_mut().push((path.to_owned(), options.replace));
    };
    (calls, navigate)
}

#[test]
fn default_state_is_idle_and_empty() {
    let state = UserListState::default();
    assert!(!state.loading);
    assert_eq!(state.view(), UserListView::Empty);
}

#[test]
fn begin_load_clears_previous_error() {
    let mut state = UserListState { error: Some("boom".to_owned()), ..UserListState::default() };
    state.begin_load();
    assert!(state.error.is_none());
    assert_eq!(state.view(), UserListView::Loading);
}

#[test]
fn apply_failed_shows_error_view() {
    let mut state = UserListState::default();
    state.begin_load();
    state.apply(UsersOutcome::Failed("nope".to_owned()));
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("nope"));
    assert_eq!(state.view(), UserListView::Error);
}

#[test]
fn apply_expired_stops_loading_without_error() {
    let mut state = UserListState::default();
    state.begin_load();
    state.apply(UsersOutcome::Expired);
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn apply_loaded_populates_view() {
    let user: User = serde_json::from_value(user_json("1", "Jane", "Doe")).unwrap();
    let mut state = UserListState::default();
    state.begin_load();
    state.apply(UsersOutcome::Loaded(vec![user]));
    assert_eq!(state.view(), UserListView::Populated);
}

#[test]
fn unauthorized_clears_session_and_redirects_without_banner() {
    let transport = ScriptedTransport::default();
    transport.reply(401, serde_json::json!({ "message": "Unauthorized" }));
    let store = memory_store();
    store.set_token("stale");
    let (calls, navigate) = recording_navigate();

    let outcome = block_on(fetch_users(&service(&transport, &store), &store, &navigate));

    assert_eq!(outcome, UsersOutcome::Expired);
    assert_eq!(store.get_token(), None);
    assert_eq!(*calls.borrow(), vec![(LOGIN_PATH.to_owned(), true)]);

    let mut state = UserListState::default();
    state.begin_load();
    state.apply(outcome);
    assert!(state.error.is_none());
}

#[test]
fn expired_session_notifies_observers() {
    let transport = ScriptedTransport::default();
    transport.reply(401, serde_json::json!({}));
    let store = memory_store();
    store.set_token("stale");
    let seen = Rc::new(RefCell::new(Vec::new()));
    let seen_cb = Rc::clone(&seen);
    let _navbar = SessionObserver::attach(store.clone(), move |state| seen_cb.borrow_mut().push(state));
    let (_calls, navigate) = recording_navigate();

    block_on(fetch_users(&service(&transport, &store), &store, &navigate));

    assert_eq!(*seen.borrow(), vec![true, false]);
}

#[test]
fn connection_failure_shows_banner_and_retry_reissues_same_call() {
    let transport = ScriptedTransport::default();
    transport.fail(TransportError::Network("Failed to fetch".to_owned()));
    transport.reply(200, serde_json::json!({
        "success": true,
        "message": "ok",
        "data": [user_json("1", "Jane", "Doe")]
    }));
    let store = memory_store();
    store.set_token("tok1");
    let svc = service(&transport, &store);
    let (calls, navigate) = recording_navigate();
    let mut state = UserListState::default();

    state.begin_load();
    state.apply(block_on(fetch_users(&svc, &store, &navigate)));
    assert_eq!(state.error.as_deref(), Some(CONNECTIVITY_MESSAGE));
    assert_eq!(state.view(), UserListView::Error);

    state.begin_load();
    state.apply(block_on(fetch_users(&svc, &store, &navigate)));
    assert_eq!(state.view(), UserListView::Populated);

    let requests = transport.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0], requests[1]);
    assert!(calls.borrow().is_empty());
    assert_eq!(store.get_token().as_deref(), Some("tok1"));
}

#[test]
fn unsuccessful_envelope_becomes_banner() {
    let transport = ScriptedTransport::default();
    transport.reply(200, serde_json::json!({ "success": false, "message": "directory offline" }));
    let store = memory_store();
    let (_calls, navigate) = recording_navigate();

    let outcome = block_on(fetch_users(&service(&transport, &store), &store, &navigate));

    assert_eq!(outcome, UsersOutcome::Failed("directory offline".to_owned()));
}
