//! Shared layout pieces: the always-visible header and footer, the routed shell
//! that wraps them around the current page, and the credential forms.

mod footer;
mod forms;
mod header;
mod shell;

pub use footer::Footer;
pub use forms::{LoginForm, RegisterForm, SubmitState};
pub use header::{Header, HeaderAction, HeaderMenu, NAVIGATION, NavItem};
pub use shell::Shell;
