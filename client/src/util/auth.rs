//! Shared auth routing helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route applies identical guard behavior, so the guard runs once from
//! an effect at the router root instead of inside each page.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use friendlink::router::guard::redirect_from_query;
use friendlink::{LoginCredentials, LoginError, Navigation, RouteGuard, SessionSnapshot};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_location;

use crate::state::session::SessionContext;

/// Join a router pathname and search string into one full path.
pub(crate) fn full_path(pathname: &str, search: &str) -> String {
    let search = search.trim_start_matches('?');
    if search.is_empty() { pathname.to_owned() } else { format!("{pathname}?{search}") }
}

/// The URL the guard sends `full_path` to, if it does not proceed.
pub(crate) fn redirect_target(guard: &RouteGuard, full_path: &str) -> Option<String> {
    match guard.before_each(full_path) {
        Navigation::Proceed => None,
        Navigation::Redirect(redirect) => Some(redirect.href()),
    }
}

/// Guard the current location, re-evaluating whenever it or the session changes.
///
/// Must be called inside the `<Router>`.
pub fn install_route_guard<F>(guard: RouteGuard, session: RwSignal<SessionSnapshot>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let location = use_location();
    install_guard_effect(
        guard,
        session,
        move || full_path(&location.pathname.get(), &location.search.get()),
        navigate,
    );
}

/// Effect behind [`install_route_guard`], reading the location through `current_path`.
pub(crate) fn install_guard_effect<P, F>(
    guard: RouteGuard,
    session: RwSignal<SessionSnapshot>,
    current_path: P,
    navigate: F,
) where
    P: Fn() -> String + 'static,
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        // Tracked so a 401 logout kicks the user off protected pages.
        session.track();
        let path = current_path();
        if let Some(target) = redirect_target(&guard, &path) {
            navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

/// Log in, then navigate to the `redirect` carried by `search` or the landing route.
///
/// # Errors
///
/// Returns the classified login failure; no navigation happens.
pub async fn login_and_navigate<F>(
    ctx: &SessionContext,
    credentials: &LoginCredentials,
    search: &str,
    navigate: F,
) -> Result<(), LoginError>
where
    F: Fn(&str, NavigateOptions),
{
    ctx.api.login(credentials).await?;
    let redirect = redirect_from_query(search);
    navigate(&ctx.guard.post_login_destination(redirect.as_deref()), NavigateOptions::default());
    Ok(())
}
