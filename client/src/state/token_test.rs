use super::*;
use crate::util::storage::MemoryStorage;
use std::cell::Cell;

fn memory_store() -> (TokenStore, Rc<MemoryStorage>) {
    let storage = Rc::new(MemoryStorage::new());
    let store = TokenStore::new(Some(storage.clone() as Rc<dyn KeyValueStorage>), AuthBus::new());
    (store, storage)
}

fn count_emits(store: &TokenStore) -> (Rc<Cell<u32>>, crate::state::auth_bus::Subscription) {
    let hits = Rc::new(Cell::new(0));
    let hits_cb = Rc::clone(&hits);
    let sub = store.bus().subscribe(move || hits_cb.set(hits_cb.get() + 1));
    (hits, sub)
}

#[test]
fn get_token_is_none_initially() {
    let (store, _) = memory_store();
    assert_eq!(store.get_token(), None);
    assert!(!store.is_authenticated());
}

#[test]
fn last_write_wins() {
    let (store, storage) = memory_store();
    store.set_token("a");
    store.set_token("b");
    store.clear_token();
    store.set_token("c");
    assert_eq!(store.get_token().as_deref(), Some("c"));
    assert_eq!(storage.len(), 1);

    store.set_token("d");
    store.clear_token();
    assert_eq!(store.get_token(), None);
}

#[test]
fn token_lives_under_fixed_key() {
    let (store, storage) = memory_store();
    store.set_token("tok1");
    assert_eq!(storage.get_item(TOKEN_STORAGE_KEY).as_deref(), Some("tok1"));
}

#[test]
fn every_set_and_clear_emits_exactly_once() {
    let (store, _) = memory_store();
    let (hits, _sub) = count_emits(&store);

    store.set_token("a");
    assert_eq!(hits.get(), 1);
    store.set_token("a");
    assert_eq!(hits.get(), 2);
    store.clear_token();
    assert_eq!(hits.get(), 3);
}

#[test]
fn clear_without_token_emits_once_and_does_not_fail() {
    let (store, _) = memory_store();
    let (hits, _sub) = count_emits(&store);
    store.clear_token();
    assert_eq!(hits.get(), 1);
    assert_eq!(store.get_token(), None);
}

#[test]
fn listener_sees_new_state_when_notified() {
    let (store, _) = memory_store();
    let seen = Rc::new(Cell::new(false));
    let seen_cb = Rc::clone(&seen);
    let store_cb = store.clone();
    let _sub = store.bus().subscribe(move || seen_cb.set(store_cb.is_authenticated()));

    store.set_token("tok");
    assert!(seen.get());
    store.clear_token();
    assert!(!seen.get());
}

#[test]
fn store_without_storage_is_silent_noop() {
    let store = TokenStore::new(None, AuthBus::new());
    let (hits, _sub) = count_emits(&store);

    store.set_token("tok");
    store.clear_token();

    assert!(!store.has_storage());
    assert_eq!(store.get_token(), None);
    assert_eq!(hits.get(), 0);
}

#[test]
fn empty_token_is_ignored() {
    let (store, storage) = memory_store();
    let (hits, _sub) = count_emits(&store);
    store.set_token("");
    assert!(storage.is_empty());
    assert_eq!(hits.get(), 0);
}

#[test]
fn clones_share_storage_and_bus() {
    let (store, _) = memory_store();
    let other = store.clone();
    let (hits, _sub) = count_emits(&store);
    other.set_token("shared");
    assert_eq!(store.get_token().as_deref(), Some("shared"));
    assert_eq!(hits.get(), 1);
}
