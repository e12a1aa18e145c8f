//! Application shell: router, meta context, and global providers.
//!
//! ARCHITECTURE
//! ============
//! The notice slot lives at the root so any page can publish and the
//! `NotificationHost` renders above whatever route is active.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::notification::NotificationHost;
use crate::pages::dashboard::DashboardPage;
use crate::pages::login::LoginPage;
use crate::state::notices::NoticesState;

/// Root component mounted by the WASM entry point.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let notices = RwSignal::new(NoticesState::default());
    provide_context(notices);

    view! {
        <Title text="OpsDeck"/>
        <Router>
            <NotificationHost/>
            <main class="app-main">
                <Routes fallback=|| view! { <p>"Page not found."</p> }>
                    <Route path=path!("/") view=DashboardPage/>
                    <Route path=path!("/dashboard") view=DashboardPage/>
                    <Route path=path!("/login") view=LoginPage/>
                </Routes>
            </main>
        </Router>
    }
}
