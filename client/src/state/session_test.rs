use super::*;

use friendlink::state::storage::{TOKEN_KEY, USER_KEY};
use friendlink::MemoryStorage;
use leptos::reactive::owner::Owner;

fn persisted_store() -> SessionStore {
    let storage = MemoryStorage::with_slots([(TOKEN_KEY, "tok"), (USER_KEY, r#"{"id":1,"username":"ana"}"#)]);
    SessionStore::restore(Arc::new(storage))
}

#[test]
fn context_starts_from_store_snapshot() {
    let owner = Owner::new();
    owner.with(|| {
        let ctx = SessionContext::new(persisted_store(), DEFAULT_API_BASE);
        let snapshot = ctx.snapshot.get_untracked();
        assert!(snapshot.is_authenticated());
        assert_eq!(snapshot.username(), Some("ana"));
        assert_eq!(ctx.api.base_url(), "/api");
    });
}

#[test]
fn mirrored_signal_follows_logout() {
    let owner = Owner::new();
    owner.with(|| {
        let ctx = SessionContext::new(persisted_store(), DEFAULT_API_BASE);
        mirror_store(&ctx);

        ctx.store.logout();

        assert!(!ctx.snapshot.get_untracked().is_authenticated());
    });
}

#[test]
fn mirroring_stops_after_owner_cleanup() {
    let store = persisted_store();
    let owner = Owner::new();
    let snapshot = owner.with(|| {
        let ctx = SessionContext::new(store.clone(), DEFAULT_API_BASE);
        mirror_store(&ctx);
        ctx.snapshot
    });

    owner.cleanup();
    store.logout();

    assert!(!store.is_authenticated());
    assert!(snapshot.try_get_untracked().is_none_or(|s| s.is_authenticated()));
}

#[test]
fn provide_session_outside_browser_is_anonymous() {
    let owner = Owner::new();
    owner.with(|| {
        let provided = provide_session(DEFAULT_API_BASE);
        let used = use_session();
        assert!(!provided.snapshot.get_untracked().is_authenticated());
        assert!(!used.store.is_authenticated());
    });
}
