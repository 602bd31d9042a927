//! Navigation guard gating every route on authentication.
//!
//! SYSTEM CONTEXT
//! ==============
//! Installed once inside the router context so every navigation applies the
//! same redirect behavior: unauthenticated admins land on the login screen,
//! authenticated admins are kept off it.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::hydrate;
use crate::state::session::Session;

/// Route serving the login screen.
pub const LOGIN_PATH: &str = "/login";
/// Default route authenticated admins land on.
pub const HOME_PATH: &str = "/";

/// Terminal decision for one navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Render the requested route.
    Allow,
    /// Unauthenticated request for a protected route.
    RedirectToLogin,
    /// Authenticated request for the login screen.
    RedirectToHome,
}

/// Evaluate the guard for a target path.
pub fn evaluate(authenticated: bool, path: &str) -> GuardOutcome {
    if path == LOGIN_PATH {
        if authenticated {
            GuardOutcome::RedirectToHome
        } else {
            GuardOutcome::Allow
        }
    } else if authenticated {
        GuardOutcome::Allow
    } else {
        GuardOutcome::RedirectToLogin
    }
}

/// Install the guard effect: on every navigation (and session change) repair
/// persisted state first, then allow the route or redirect. A redirect
/// unconditionally replaces the requested route.
///
/// Effects never run during server rendering, so the guard is inert there.
pub fn install_route_guard<F>(session: Session, path: Memo<String>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let target = path.get();
        hydrate::reconcile(&session);
        let authenticated = session.state().get().is_authenticated();
        match evaluate(authenticated, &target) {
            GuardOutcome::Allow => {}
            GuardOutcome::RedirectToLogin => navigate(LOGIN_PATH, NavigateOptions::default()),
            GuardOutcome::RedirectToHome => navigate(HOME_PATH, NavigateOptions::default()),
        }
    });
}
