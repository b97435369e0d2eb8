use super::*;

#[test]
fn memory_store_reads_back_writes() {
    let store = MemoryStore::default();
    assert_eq!(store.read("k"), Ok(None));
    store.write("k", "v").expect("memory write");
    assert_eq!(store.read("k"), Ok(Some("v".to_owned())));
    store.write("k", "w").expect("memory overwrite");
    assert_eq!(store.get("k"), Some("w".to_owned()));
}

#[test]
fn memory_store_with_entry_is_seeded() {
    let store = MemoryStore::with_entry("portfolio-theme", "light");
    assert_eq!(store.get("portfolio-theme"), Some("light".to_owned()));
    assert_eq!(store.get("other"), None);
}

#[cfg(not(feature = "csr"))]
#[test]
fn browser_store_is_inert_outside_the_browser() {
    let store = BrowserStore;
    assert_eq!(store.read("portfolio-theme"), Ok(None));
    assert_eq!(store.write("portfolio-theme", "dark"), Ok(()));
    assert_eq!(store.read("portfolio-theme"), Ok(None));
}

#[test]
fn errors_render_key_and_reason() {
    let err = StorageError::Write {
        key: "portfolio-theme".to_owned(),
        reason: "QuotaExceededError".to_owned(),
    };
    assert_eq!(err.to_string(), "failed to write `portfolio-theme`: QuotaExceededError");
    assert_eq!(StorageError::Unavailable.to_string(), "localStorage is unavailable");
}
