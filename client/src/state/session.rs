//! Session context for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once at the app root. Route guards, the login page and
//! user-aware components read it with [`use_session`] instead of importing a
//! global store.
//!
//! DESIGN
//! ======
//! `snapshot` is a signal copy of the store, refreshed by a store
//! subscription. Writes always go through `store`/`api`; writing the signal
//! directly would desync it from storage.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use friendlink::router::routes::RouteTable;
use friendlink::state::friends::FriendDirectory;
use friendlink::{ApiClient, RouteGuard, SessionSnapshot, SessionStore};
use leptos::prelude::*;

use super::local_storage::LocalStorage;
use crate::net::gloo_transport::GlooTransport;

/// API prefix when the app is served from the same origin as the backend.
pub const DEFAULT_API_BASE: &str = "/api";

#[derive(Clone)]
pub struct SessionContext {
    pub store: SessionStore,
    pub snapshot: RwSignal<SessionSnapshot>,
    pub api: ApiClient<GlooTransport>,
    pub friends: FriendDirectory<GlooTransport>,
    pub guard: RouteGuard,
}

impl SessionContext {
    /// Wire the API client, friend directory and guard around `store`.
    pub fn new(store: SessionStore, api_base_url: &str) -> Self {
        let api = ApiClient::new(GlooTransport, store.clone(), api_base_url);
        Self {
            snapshot: RwSignal::new(store.snapshot()),
            friends: FriendDirectory::new(api.clone()),
            guard: RouteGuard::new(store.clone(), RouteTable::standard()),
            api,
            store,
        }
    }
}

/// Rehydrate the session from `localStorage` and provide it as context.
///
/// The signal is kept in sync for as long as the calling owner lives.
pub fn provide_session(api_base_url: &str) -> SessionContext {
    let ctx = SessionContext::new(SessionStore::restore(Arc::new(LocalStorage)), api_base_url);
    mirror_store(&ctx);
    provide_context(ctx.clone());
    ctx
}

/// Copy every store change into `ctx.snapshot` until the owner is cleaned up.
pub(crate) fn mirror_store(ctx: &SessionContext) {
    let snapshot = ctx.snapshot;
    let subscription = ctx.store.subscribe(move |next| {
        let _ = snapshot.try_set(next.clone());
    });
    let store = ctx.store.clone();
    on_cleanup(move || {
        store.unsubscribe(subscription);
    });
}

pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}
