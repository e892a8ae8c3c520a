//! Client state shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! The authoritative state lives in `friendlink`'s stores; this module only
//! mirrors it into signals so components re-render on change.

pub mod local_storage;
pub mod session;
