//! Client-side route table.
//!
//! Three static paths, no wildcard, guard, or redirect. Unknown paths do not
//! resolve to any page.

use crate::components::Shell;
use crate::pages::{Healthcheck, Login, Register};
use dioxus::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Healthcheck {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
}
