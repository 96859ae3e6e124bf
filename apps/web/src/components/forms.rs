//! Credential forms. Inputs are submitted as typed; there is no client-side
//! validation. A successful login does not touch the session flag.

use crate::hooks::use_api_client;
use dioxus::prelude::*;
use tracing::{info, warn};
use vayana_kernel::client::ApiError;
use vayana_kernel::domain::dto::{LoginRequest, RegisterRequest};

const SIGNED_IN: &str = "Signed in";

/// Lifecycle of one form submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Pending,
    Done(String),
    Failed(String),
}

impl SubmitState {
    pub fn from_result<T>(result: Result<T, ApiError>, success: impl FnOnce(T) -> String) -> Self {
        match result {
            Ok(value) => Self::Done(success(value)),
            Err(err) => {
                warn!(error = %err, "Form submission failed");
                Self::Failed(err.user_message().into_owned())
            },
        }
    }

    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Text shown under the form, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Done(msg) | Self::Failed(msg) => Some(msg),
            Self::Idle | Self::Pending => None,
        }
    }
}

#[component]
fn Outcome(state: SubmitState) -> Element {
    let class = if matches!(state, SubmitState::Failed(_)) {
        "text-sm text-destructive"
    } else {
        "text-sm text-muted-foreground"
    };

    rsx! {
        if let Some(message) = state.message() {
            p { class, role: "status", "{message}" }
        }
    }
}

#[component]
pub fn LoginForm() -> Element {
    let client = use_api_client();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut outcome = use_signal(SubmitState::default);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        let request = LoginRequest { email: email.cloned(), password: password.cloned() };
        outcome.set(SubmitState::Pending);

        spawn(async move {
            let result = client.login(&request).await;
            if result.is_ok() {
                info!("Login accepted");
            }
            outcome.set(SubmitState::from_result(result, |_| SIGNED_IN.to_owned()));
        });
    };

    rsx! {
        form { class: "w-full max-w-sm space-y-4", onsubmit: submit,
            h1 { class: "text-2xl font-semibold", "Sign In" }
            input {
                r#type: "email",
                name: "email",
                placeholder: "Email",
                oninput: move |evt| email.set(evt.value()),
            }
            input {
                r#type: "password",
                name: "password",
                placeholder: "Password",
                oninput: move |evt| password.set(evt.value()),
            }
            button { r#type: "submit", disabled: outcome.read().is_pending(), "Sign In" }
            Outcome { state: outcome.cloned() }
        }
    }
}

#[component]
pub fn RegisterForm() -> Element {
    let client = use_api_client();
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut outcome = use_signal(SubmitState::default);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        let request = RegisterRequest {
            username: username.cloned(),
            email: email.cloned(),
            password: password.cloned(),
        };
        outcome.set(SubmitState::Pending);

        spawn(async move {
            let result = client.register(&request).await;
            outcome.set(SubmitState::from_result(result, |body| body.message));
        });
    };

    rsx! {
        form { class: "w-full max-w-sm space-y-4", onsubmit: submit,
            h1 { class: "text-2xl font-semibold", "Sign Up" }
            input {
                r#type: "text",
                name: "username",
                placeholder: "Username",
                oninput: move |evt| username.set(evt.value()),
            }
            input {
                r#type: "email",
                name: "email",
                placeholder: "Email",
                oninput: move |evt| email.set(evt.value()),
            }
            input {
                r#type: "password",
                name: "password",
                placeholder: "Password",
                oninput: move |evt| password.set(evt.value()),
            }
            button { r#type: "submit", disabled: outcome.read().is_pending(), "Sign Up" }
            Outcome { state: outcome.cloned() }
        }
    }
}
