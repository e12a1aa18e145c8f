use super::*;

#[test]
fn memory_storage_round_trips_values() {
    let storage = MemoryStorage::default();
    storage.set_item("greeting", "hello");
    assert_eq!(storage.get_item("greeting"), Some("hello".to_owned()));
}

#[test]
fn memory_storage_overwrites_existing_keys() {
    let storage = MemoryStorage::default();
    storage.set_item("slot", "first");
    storage.set_item("slot", "second");
    assert_eq!(storage.get_item("slot"), Some("second".to_owned()));
}

#[test]
fn memory_storage_removes_keys() {
    let storage = MemoryStorage::default();
    storage.set_item("slot", "value");
    storage.remove_item("slot");
    assert_eq!(storage.get_item("slot"), None);
}

#[test]
fn memory_storage_clones_share_the_same_map() {
    let storage = MemoryStorage::default();
    let handle = storage.clone();
    storage.set_item("slot", "value");
    assert_eq!(handle.get_item("slot"), Some("value".to_owned()));
}

#[test]
fn browser_storage_is_inert_without_a_browser() {
    let storage = BrowserStorage;
    storage.set_item("slot", "value");
    assert_eq!(storage.get_item("slot"), None);
    storage.remove_item("slot");
}
