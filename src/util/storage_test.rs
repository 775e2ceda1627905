use super::*;

// =============================================================
// MemoryStore
// =============================================================

#[test]
fn memory_store_round_trips_values() {
    let store = MemoryStore::new();
    store.write("token", "abc");
    assert_eq!(store.read("token"), Some("abc".to_owned()));
}

#[test]
fn memory_store_read_missing_key_is_none() {
    let store = MemoryStore::new();
    assert_eq!(store.read("token"), None);
}

#[test]
fn memory_store_remove_deletes_key() {
    let store = MemoryStore::new();
    store.write("user", "{}");
    store.remove("user");
    assert_eq!(store.read("user"), None);
    assert!(store.is_empty());
}

#[test]
fn memory_store_remove_absent_key_is_noop() {
    let store = MemoryStore::new();
    store.remove("user");
    assert!(store.is_empty());
}

#[test]
fn memory_store_write_overwrites() {
    let store = MemoryStore::new();
    store.write("token", "old");
    store.write("token", "new");
    assert_eq!(store.read("token"), Some("new".to_owned()));
    assert_eq!(store.len(), 1);
}

// =============================================================
// BrowserStore (no browser in unit tests)
// =============================================================

#[cfg(not(feature = "csr"))]
#[test]
fn browser_store_degrades_outside_browser() {
    let store = BrowserStore;
    store.write("token", "abc");
    assert_eq!(store.read("token"), None);
    store.remove("token");
}
