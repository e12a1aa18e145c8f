//! Sign-in page: username + password form submitting to the GraphQL backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form is the visible face of `auth::controller`: signals here hold the
//! raw input, busy flag, and inline errors; the controller decides what
//! happens in which order. The page the user was bounced from arrives as the
//! `from` query parameter and is replayed after a successful sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

#[cfg(feature = "hydrate")]
use crate::auth::controller::{LoginController, LoginSurface};
#[cfg(feature = "hydrate")]
use crate::auth::session::SessionStore;
#[cfg(feature = "hydrate")]
use crate::auth::submitter::GraphQlBackend;
use crate::auth::validator::{FieldErrors, LoginInput};
#[cfg(feature = "hydrate")]
use crate::state::notices::Notice;
use crate::state::notices::NoticesState;
#[cfg(feature = "hydrate")]
use crate::util::storage::BrowserStorage;

/// The recorded origin path, if the query carried a usable one.
///
/// Only absolute in-app paths are honored, so the login route can never be
/// used to bounce a user to a foreign origin.
fn redirect_from_query(raw: Option<String>) -> Option<String> {
    raw.filter(|path| path.starts_with('/'))
}

/// Adapter driving this page's signals on behalf of the controller.
#[cfg(feature = "hydrate")]
struct SignalSurface<N> {
    busy: RwSignal<bool>,
    field_errors: RwSignal<FieldErrors>,
    notices: RwSignal<NoticesState>,
    navigate: N,
}

#[cfg(feature = "hydrate")]
impl<N: Fn(&str)> LoginSurface for SignalSurface<N> {
    fn is_loading(&self) -> bool {
        self.busy.get_untracked()
    }

    fn set_loading(&self, loading: bool) {
        self.busy.set(loading);
    }

    fn show_field_errors(&self, errors: &FieldErrors) {
        self.field_errors.set(*errors);
    }

    fn notify(&self, notice: Notice) {
        self.notices.update(|n| n.publish(notice));
    }

    fn navigate(&self, path: &str) {
        (self.navigate)(path);
    }
}

/// Sign-in page component.
#[component]
pub fn LoginPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let field_errors = RwSignal::new(FieldErrors::default());
    let busy = RwSignal::new(false);
    let notices = expect_context::<RwSignal<NoticesState>>();

    let query = use_query_map();
    let redirect_from = redirect_from_query(query.get_untracked().get("from"));
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let input = LoginInput {
            username: username.get(),
            password: password.get(),
        };
        let redirect_from = redirect_from.clone();
        let navigate = navigate.clone();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let surface = SignalSurface {
                busy,
                field_errors,
                notices,
                navigate: move |path: &str| navigate(path, leptos_router::NavigateOptions::default()),
            };
            let controller = LoginController::new(
                GraphQlBackend,
                SessionStore::new(BrowserStorage),
                surface,
                redirect_from,
            );
            controller.submit(&input).await;
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (input, redirect_from, navigate, notices);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"OpsDeck"</h1>
                <p class="login-card__subtitle">"Sign in to continue"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <Show when=move || field_errors.get().username.is_some()>
                        <p class="login-field-error">{move || field_errors.get().username}</p>
                    </Show>
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <Show when=move || field_errors.get().password.is_some()>
                        <p class="login-field-error">{move || field_errors.get().password}</p>
                    </Show>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
