//! Browser adapter for the friendlink client core.
//!
//! SYSTEM CONTEXT
//! ==============
//! The core crate knows nothing about the DOM. This crate supplies the
//! browser halves of its ports (`localStorage` storage, `fetch` transport)
//! and wires the session store into Leptos context and the router.
//!
//! Everything touching `web-sys` or `gloo-net` is gated on `hydrate`; the
//! non-hydrate build compiles the same API with inert fallbacks so pure logic
//! stays testable natively.

pub mod net;
pub mod state;
pub mod util;

/// Install the panic hook and route `log`/`tracing` output to the console.
pub fn init_browser_logging() {
    #[cfg(feature = "hydrate")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Debug);
    }
}
