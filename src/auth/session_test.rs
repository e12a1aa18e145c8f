use super::*;

use crate::util::storage::MemoryStorage;

fn session(life_time: u64, token: &str) -> Session {
    Session {
        life_time,
        token: token.to_owned(),
    }
}

#[test]
fn load_returns_what_save_wrote() {
    let store = SessionStore::new(MemoryStorage::default());
    store.save(&session(3600, "abc123"));
    assert_eq!(store.load(), Some(session(3600, "abc123")));
}

#[test]
fn save_fully_replaces_the_previous_session() {
    let store = SessionStore::new(MemoryStorage::default());
    store.save(&session(3600, "abc123"));
    store.save(&session(60, "xyz789"));
    assert_eq!(store.load(), Some(session(60, "xyz789")));
}

#[test]
fn the_wire_format_is_camel_case_json_under_the_fixed_key() {
    let backing = MemoryStorage::default();
    let store = SessionStore::new(backing.clone());
    store.save(&session(3600, "abc123"));
    assert_eq!(
        backing.get_item(SESSION_STORAGE_KEY),
        Some(r#"{"lifeTime":3600,"token":"abc123"}"#.to_owned())
    );
}

#[test]
fn load_without_a_saved_session_is_none() {
    let store = SessionStore::new(MemoryStorage::default());
    assert_eq!(store.load(), None);
}

#[test]
fn clear_removes_the_stored_session() {
    let store = SessionStore::new(MemoryStorage::default());
    store.save(&session(3600, "abc123"));
    store.clear();
    assert_eq!(store.load(), None);
}

#[test]
fn load_ignores_an_undecodable_value() {
    let backing = MemoryStorage::default();
    let store = SessionStore::new(backing.clone());
    backing.set_item(SESSION_STORAGE_KEY, "not json");
    assert_eq!(store.load(), None);
}
