//! Session feature slice.
//!
//! Holds the client's authentication flag as explicit application context. The
//! flag starts out [`SessionState::Unauthenticated`] and the only mutation is
//! [`Session::logout`]; there is no login transition. Readers either sample it
//! with [`Session::state`] or follow changes through [`Session::subscribe`].

use std::fmt;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SessionState {
    Authenticated,
    #[default]
    Unauthenticated,
}

impl SessionState {
    pub const fn is_authenticated(self) -> bool {
        matches!(self, Self::Authenticated)
    }
}

impl From<bool> for SessionState {
    fn from(authenticated: bool) -> Self {
        if authenticated { Self::Authenticated } else { Self::Unauthenticated }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Authenticated => "authenticated",
            Self::Unauthenticated => "unauthenticated",
        })
    }
}

/// Shared handle to the session flag. Clones observe and mutate the same state.
#[derive(Debug, Clone)]
pub struct Session {
    state: Arc<watch::Sender<SessionState>>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionState::default())
    }
}

impl Session {
    pub fn new(initial: SessionState) -> Self {
        let (state, _) = watch::channel(initial);
        debug!(state = %initial, "Session created");
        Self { state: Arc::new(state) }
    }

    /// Current state.
    pub fn state(&self) -> SessionState {
        *self.state.borrow()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state().is_authenticated()
    }

    /// Receiver that is notified whenever the flag changes value.
    ///
    /// The current value counts as already seen.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// Clears the flag. Infallible and idempotent; subscribers only wake on an
    /// actual transition.
    pub fn logout(&self) {
        let changed = self.state.send_if_modified(|state| {
            let was = *state;
            *state = SessionState::Unauthenticated;
            was != *state
        });

        if changed {
            info!("Session logged out");
        } else {
            debug!("Logout on an unauthenticated session");
        }
    }
}
