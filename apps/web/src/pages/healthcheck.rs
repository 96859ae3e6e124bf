use crate::hooks::{use_api_client, use_session_state};
use dioxus::prelude::*;
use vayana_kernel::health::{HealthStatus, check_health};

/// Landing page: backend liveness and the session flag.
///
/// Exactly one health request is issued per mount. The task belongs to this
/// component's scope, so a pending request is dropped when the page unmounts
/// and never writes into a dead signal.
#[component]
pub fn Healthcheck() -> Element {
    let client = use_api_client();
    let session = use_session_state();
    let mut status = use_signal(HealthStatus::default);

    use_future(move || {
        let client = client.clone();
        async move {
            status.set(check_health(&client).await);
        }
    });

    let authenticated = session.read().is_authenticated();

    rsx! {
        div { "{status}" }
        div { "Auth status: {authenticated}" }
    }
}
