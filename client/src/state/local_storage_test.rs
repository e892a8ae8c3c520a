use super::*;
use std::sync::Arc;

use friendlink::SessionStore;

#[cfg(not(feature = "hydrate"))]
#[test]
fn operations_outside_browser_are_unavailable() {
    assert!(matches!(LocalStorage.get("authToken"), Err(StorageError::Unavailable(_))));
    assert!(matches!(LocalStorage.set("authToken", "tok"), Err(StorageError::Unavailable(_))));
    assert!(matches!(LocalStorage.remove("authToken"), Err(StorageError::Unavailable(_))));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn session_over_unavailable_storage_starts_logged_out() {
    let session = SessionStore::new(Arc::new(LocalStorage));
    assert!(!session.initialize());
    assert!(!session.is_authenticated());
    assert!(!session.has_persisted_token());
}
