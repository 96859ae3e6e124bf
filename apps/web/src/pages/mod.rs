//! Route targets.

mod healthcheck;
mod login;
mod register;

pub use healthcheck::Healthcheck;
pub use login::Login;
pub use register::Register;
