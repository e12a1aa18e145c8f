//! Dashboard page: the authenticated landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sign-in redirects here by default. The page only renders for users with a
//! stored session; everyone else is bounced to the login route with this
//! path recorded as their origin.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::auth::session::SessionStore;
use crate::util::auth::install_login_redirect;
use crate::util::storage::BrowserStorage;

/// Authenticated landing page with a sign-out control.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let navigate = use_navigate();
    install_login_redirect(SessionStore::new(BrowserStorage), navigate.clone(), "/dashboard");

    let on_sign_out = move |_| {
        SessionStore::new(BrowserStorage).clear();
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-header">
                <h1>"OpsDeck"</h1>
                <button class="dashboard-sign-out" on:click=on_sign_out>
                    "Sign out"
                </button>
            </header>
            <p class="dashboard-greeting">"You are signed in."</p>
        </div>
    }
}
