use super::*;

// =============================================================
// MemoryStorage
// =============================================================

#[test]
fn memory_storage_set_get_remove() {
    let store = MemoryStorage::new();
    assert_eq!(store.get("k"), None);
    store.set("k", "v");
    assert_eq!(store.get("k"), Some("v".to_owned()));
    store.set("k", "w");
    assert_eq!(store.get("k"), Some("w".to_owned()));
    store.remove("k");
    assert_eq!(store.get("k"), None);
}

#[test]
fn memory_storage_remove_missing_is_noop() {
    let store = MemoryStorage::new();
    store.remove("absent");
    assert_eq!(store.get("absent"), None);
}

#[test]
fn memory_storage_clones_share_entries() {
    let store = MemoryStorage::new();
    let reloaded = store.clone();
    store.set("drawer", "true");
    assert_eq!(reloaded.get("drawer"), Some("true".to_owned()));
}

// =============================================================
// BrowserStorage outside the browser
// =============================================================

#[cfg(not(feature = "csr"))]
#[test]
fn browser_storage_is_empty_off_browser() {
    let store = BrowserStorage;
    store.set("k", "v");
    assert_eq!(store.get("k"), None);
    store.remove("k");
}
