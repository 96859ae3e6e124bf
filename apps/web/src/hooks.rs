//! Hooks over the shared application context.

use dioxus::prelude::*;
use vayana_kernel::client::ApiClient;
use vayana_session::{Session, SessionState};

/// Reactive view of the session flag.
///
/// The returned signal follows [`Session::subscribe`], so every component that
/// reads it re-renders after a logout anywhere in the app.
pub fn use_session_state() -> Signal<SessionState> {
    let session = use_context::<Session>();
    // Subscribed on first render: a logout before the task is first polled
    // still counts as unseen by the receiver.
    let changes = use_hook(|| session.subscribe());
    let mut state = use_signal(|| *changes.borrow());

    use_future(move || {
        let mut changes = changes.clone();
        async move {
            while changes.changed().await.is_ok() {
                let next = *changes.borrow_and_update();
                state.set(next);
            }
        }
    });

    state
}

pub fn use_api_client() -> ApiClient {
    use_context::<ApiClient>()
}
