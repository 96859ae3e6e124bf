use super::{Footer, Header};
use crate::routes::Route;
use dioxus::prelude::*;

/// Layout shared by every route.
#[component]
pub fn Shell() -> Element {
    rsx! {
        Header {}
        main { class: "min-h-[calc(100vh-6rem)]", Outlet::<Route> {} }
        Footer {}
    }
}
