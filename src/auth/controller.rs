//! The submit state machine behind the sign-in form.
//!
//! SYSTEM CONTEXT
//! ==============
//! One controller drives one submission attempt end to end: the re-entrancy
//! gate, the validation gate, the loading flag around the backend round
//! trip, a notice carrying every server-reported message, session
//! persistence, and the post-login redirect. The surface owns the widgets;
//! the controller owns the order things happen in.
//!
//! ERROR HANDLING
//! ==============
//! No path panics or terminates the flow: invalid input stays on the form,
//! application errors and transport failures become notices, and the loading
//! flag is cleared on every outcome before any further effect runs.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::auth::session::SessionStore;
use crate::auth::submitter::{LoginBackend, LoginOutcome};
use crate::auth::validator::{FieldErrors, LoginInput, validate};
use crate::state::notices::Notice;
use crate::util::storage::KeyValueBacking;

/// Where a signed-in user lands when no origin path was recorded.
pub const DEFAULT_LANDING_PATH: &str = "/dashboard";

/// UI effects the submit flow drives. Pages implement this over signals;
/// tests implement it over recording fakes.
pub trait LoginSurface {
    /// Whether a submission is currently in flight.
    fn is_loading(&self) -> bool;
    /// Flip the in-flight flag.
    fn set_loading(&self, loading: bool);
    /// Show (or clear) inline per-field validation messages.
    fn show_field_errors(&self, errors: &FieldErrors);
    /// Publish a transient notification.
    fn notify(&self, notice: Notice);
    /// Leave the login route for `path`.
    fn navigate(&self, path: &str);
}

/// How a submit trigger was handled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitDisposition {
    /// A submission was already in flight; this trigger was dropped.
    AlreadySubmitting,
    /// Validation failed; no network call was made.
    Invalid(FieldErrors),
    /// The attempt ran to completion (its outcome may still have carried errors).
    Completed,
    /// The request itself failed before producing an outcome.
    TransportFailed,
}

/// Resolve where to send the user after sign-in.
///
/// Only a non-empty recorded origin is honored; everything else falls back
/// to the default landing path.
pub fn redirect_target(recorded: Option<&str>) -> &str {
    match recorded {
        Some(path) if !path.is_empty() => path,
        _ => DEFAULT_LANDING_PATH,
    }
}

/// Orchestrates submission attempts against a backend, a session store, and
/// a rendering surface.
pub struct LoginController<B, S, U>
where
    B: LoginBackend,
    S: KeyValueBacking,
    U: LoginSurface,
{
    backend: B,
    sessions: SessionStore<S>,
    surface: U,
    redirect_from: Option<String>,
}

impl<B, S, U> LoginController<B, S, U>
where
    B: LoginBackend,
    S: KeyValueBacking,
    U: LoginSurface,
{
    pub fn new(backend: B, sessions: SessionStore<S>, surface: U, redirect_from: Option<String>) -> Self {
        Self {
            backend,
            sessions,
            surface,
            redirect_from,
        }
    }

    /// Run one submit trigger through the full flow.
    pub async fn submit(&self, input: &LoginInput) -> SubmitDisposition {
        if self.surface.is_loading() {
            return SubmitDisposition::AlreadySubmitting;
        }

        let errors = validate(input);
        if !errors.is_valid() {
            self.surface.show_field_errors(&errors);
            return SubmitDisposition::Invalid(errors);
        }
        self.surface.show_field_errors(&FieldErrors::default());

        self.surface.set_loading(true);
        let result = self.backend.login(&input.credentials()).await;
        // Idle again before any notice or navigation, on every path.
        self.surface.set_loading(false);

        match result {
            Ok(LoginOutcome { session, errors }) => {
                if !errors.is_empty() {
                    self.surface.notify(Notice::login_errors(errors));
                }
                if let Some(session) = session {
                    self.sessions.save(&session);
                    self.surface.navigate(redirect_target(self.redirect_from.as_deref()));
                }
                SubmitDisposition::Completed
            }
            Err(error) => {
                self.surface.notify(Notice::connection_error(error.to_string()));
                SubmitDisposition::TransportFailed
            }
        }
    }
}
