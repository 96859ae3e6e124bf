use crate::hooks::use_session_state;
use crate::routes::Route;
use dioxus::prelude::*;
use tracing::debug;
use vayana_domain::constants::{ABOUT_PATH, APP_NAME, CONTACT_PATH, HOME_PATH, SERVICES_PATH};
use vayana_session::{Session, SessionState};

/// Plain navigation link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
}

/// Header links. Only `Home` has a registered route.
pub const NAVIGATION: &[NavItem] = &[
    NavItem { name: "Home", href: HOME_PATH },
    NavItem { name: "About", href: ABOUT_PATH },
    NavItem { name: "Services", href: SERVICES_PATH },
    NavItem { name: "Contact", href: CONTACT_PATH },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    SignIn,
    SignUp,
    Logout,
}

impl HeaderAction {
    pub const fn label(self) -> &'static str {
        match self {
            Self::SignIn => "Sign In",
            Self::SignUp => "Sign Up",
            Self::Logout => "Logout",
        }
    }

    pub fn destination(self) -> Route {
        match self {
            Self::SignIn => Route::Login {},
            Self::SignUp => Route::Register {},
            Self::Logout => Route::Healthcheck {},
        }
    }
}

/// Which set of controls the header shows.
///
/// The branches are inverted relative to their labels: an authenticated session
/// gets the sign-in/sign-up controls and an anonymous one gets logout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderMenu {
    Credentials,
    Logout,
}

impl HeaderMenu {
    pub const fn for_session(state: SessionState) -> Self {
        if state.is_authenticated() { Self::Credentials } else { Self::Logout }
    }

    pub const fn actions(self) -> &'static [HeaderAction] {
        match self {
            Self::Credentials => &[HeaderAction::SignIn, HeaderAction::SignUp],
            Self::Logout => &[HeaderAction::Logout],
        }
    }
}

fn activate(session: &Session, action: HeaderAction) {
    debug!(?action, "Header action");
    if action == HeaderAction::Logout {
        session.logout();
    }
    navigator().push(action.destination());
}

#[component]
pub fn Header() -> Element {
    let session = use_context::<Session>();
    let state = use_session_state();
    let menu = HeaderMenu::for_session(*state.read());

    rsx! {
        header { class: "sticky top-0 z-50 w-full border-b bg-background/95 backdrop-blur",
            div { class: "container flex h-16 items-center",
                div { class: "mr-4 hidden md:flex",
                    a {
                        class: "mx-6 flex items-center space-x-2",
                        href: HOME_PATH,
                        onclick: move |evt: MouseEvent| {
                            evt.prevent_default();
                            navigator().push(Route::Healthcheck {});
                        },
                        span { class: "hidden font-bold sm:inline-block", "{APP_NAME}" }
                    }
                    nav { class: "flex items-center space-x-6 text-sm font-medium",
                        for item in NAVIGATION.iter() {
                            a {
                                key: "{item.href}",
                                class: "transition-colors hover:text-foreground/80",
                                href: item.href,
                                "{item.name}"
                            }
                        }
                    }
                }
                div { class: "flex flex-1 items-center justify-end space-x-2",
                    nav { class: "flex items-center",
                        for action in menu.actions().iter().copied() {
                            button {
                                key: "{action.label()}",
                                class: "ml-2",
                                onclick: {
                                    let session = session.clone();
                                    move |_| activate(&session, action)
                                },
                                "{action.label()}"
                            }
                        }
                    }
                }
            }
        }
    }
}
