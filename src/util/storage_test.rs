use super::*;

#[test]
fn memory_store_reads_back_what_it_stored() {
    let store = MemoryStore::default();
    assert_eq!(store.get("token"), None);

    store.set("token", "abc123");
    assert_eq!(store.get("token"), Some("abc123".to_owned()));
}

#[test]
fn memory_store_overwrites_existing_values() {
    let store = MemoryStore::default();
    store.set("token", "first");
    store.set("token", "second");
    assert_eq!(store.get("token"), Some("second".to_owned()));
}

#[test]
fn memory_store_clones_share_the_same_map() {
    let store = MemoryStore::default();
    let observer = store.clone();

    store.set("token", "abc123");
    assert_eq!(observer.get("token"), Some("abc123".to_owned()));
}

#[test]
fn browser_store_is_inert_outside_the_browser() {
    let store = BrowserStore;
    store.set("token", "abc123");
    assert_eq!(store.get("token"), None);
}
