//! # Vayana client
//!
//! Dioxus front end: a header/footer shell around three routed pages. The pages
//! share two pieces of context, a [`Session`] and an [`ApiClient`], injected at
//! launch.
//!
//! ## Example
//! ```no_run
//! use vayana_kernel::prelude::*;
//! use vayana_web::ClientApp;
//!
//! let client = ApiClient::new(&ApiConfig::default()).unwrap();
//! ClientApp::new(client).launch();
//! ```

pub mod components;
pub mod hooks;
pub mod pages;
pub mod routes;

use crate::routes::Route;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use tracing::info;
use vayana_domain::config::WindowConfig;
use vayana_kernel::client::ApiClient;
use vayana_session::Session;

/// Application root: the router, everything else hangs off it.
#[component]
pub fn App() -> Element {
    rsx! {
        Router::<Route> {}
    }
}

/// Launcher for the desktop shell.
#[derive(Debug)]
pub struct ClientApp {
    window: WindowConfig,
    session: Session,
    client: ApiClient,
}

impl ClientApp {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { window: WindowConfig::default(), session: Session::default(), client }
    }

    #[must_use]
    pub fn with_window(mut self, window: WindowConfig) -> Self {
        self.window = window;
        self
    }

    /// Opens the window and blocks until it is closed.
    pub fn launch(self) {
        let Self { window, session, client } = self;

        info!(
            base_url = client.base_url(),
            session = %session.state(),
            "Launching client"
        );

        let window = WindowBuilder::new()
            .with_title(&window.title)
            .with_inner_size(LogicalSize { width: window.width, height: window.height });

        let cfg = Config::default().with_window(window).with_custom_head(
            r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#.into(),
        );

        LaunchBuilder::desktop()
            .with_cfg(cfg)
            .with_context_provider(move || Box::new(session.clone()))
            .with_context_provider(move || Box::new(client.clone()))
            .launch(App);
    }
}
