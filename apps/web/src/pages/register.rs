use crate::components::RegisterForm;
use dioxus::prelude::*;

#[component]
pub fn Register() -> Element {
    rsx! {
        div { class: "my-48 h-auto flex items-center justify-center", RegisterForm {} }
    }
}
