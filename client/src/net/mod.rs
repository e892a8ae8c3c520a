//! Networking modules for the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! `gloo_transport` executes requests already decorated by the core
//! pipeline; authorization and `401` handling stay in `friendlink::net`.

pub mod gloo_transport;
