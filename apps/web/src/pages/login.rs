use crate::components::LoginForm;
use dioxus::prelude::*;

#[component]
pub fn Login() -> Element {
    rsx! {
        div { class: "my-48 h-auto flex items-center justify-center", LoginForm {} }
    }
}
