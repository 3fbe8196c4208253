use super::*;

#[test]
fn new_storage_is_empty() {
    let storage = MemoryStorage::new();
    assert!(storage.is_empty());
    assert_eq!(storage.get("token").unwrap(), None);
}

#[test]
fn set_then_get_returns_value() {
    let storage = MemoryStorage::new();
    storage.set("token", "abc").unwrap();
    assert_eq!(storage.get("token").unwrap().as_deref(), Some("abc"));
}

#[test]
fn remove_missing_key_succeeds() {
    let storage = MemoryStorage::new();
    assert!(storage.remove("token").is_ok());
}

#[test]
fn clones_share_entries() {
    let storage = MemoryStorage::new();
    let observer = storage.clone();
    storage.set("token", "abc").unwrap();
    assert_eq!(observer.peek("token").as_deref(), Some("abc"));
    storage.remove("token").unwrap();
    assert!(observer.is_empty());
}

#[test]
fn with_entry_seeds_previous_session() {
    let storage = MemoryStorage::with_entry("token", "left-over");
    assert_eq!(storage.len(), 1);
    assert_eq!(storage.peek("token").as_deref(), Some("left-over"));
}
