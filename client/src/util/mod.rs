//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate router/environment glue from page logic to improve
//! reuse and testability.

pub mod auth;
