//! Transient notification host rendered at the app root.
//!
//! Shows the current notice from `NoticesState` and dismisses it after a
//! fixed delay, unless a newer notice replaced it first. Clicking a notice
//! dismisses it immediately.

use leptos::prelude::*;

use crate::state::notices::NoticesState;

/// Floating notice container; renders nothing while the slot is empty.
#[component]
pub fn NotificationHost() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticesState>>();

    // Arm a dismissal timer each time a new notice is published.
    Effect::new(move || {
        let state = notices.get();
        if state.current.is_none() {
            return;
        }
        let seq = state.seq;
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(crate::state::notices::NOTICE_DISMISS_AFTER).await;
            notices.update(|n| n.dismiss_if_current(seq));
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = seq;
        }
    });

    view! {
        <Show when=move || notices.get().current.is_some()>
            <div class="notice notice--error" role="alert" on:click=move |_| notices.update(NoticesState::dismiss)>
                <p class="notice__title">{move || notices.get().current.map(|notice| notice.title)}</p>
                <ul class="notice__messages">
                    {move || {
                        notices.get().current.map(|notice| {
                            notice
                                .messages
                                .into_iter()
                                .map(|message| view! { <li>{message}</li> })
                                .collect_view()
                        })
                    }}
                </ul>
            </div>
        </Show>
    }
}
