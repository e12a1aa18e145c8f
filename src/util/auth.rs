//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect
//! behavior, and the login route needs to know where the user was headed so
//! it can send them back after sign-in.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::auth::session::SessionStore;
use crate::util::storage::KeyValueBacking;

/// Login route path including the recorded origin.
pub fn login_path_from(origin: &str) -> String {
    format!("/login?from={origin}")
}

/// Redirect to the login route whenever no session is stored, recording
/// `origin` as the path to return to afterwards.
pub fn install_login_redirect<B, F>(sessions: SessionStore<B>, navigate: F, origin: &'static str)
where
    B: KeyValueBacking + Clone + 'static,
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if sessions.load().is_none() {
            navigate(&login_path_from(origin), NavigateOptions::default());
        }
    });
}
