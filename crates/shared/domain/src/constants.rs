//! Route paths, backend endpoints and fixed display strings.

pub const APP_NAME: &str = "Vayana";

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";

// Advertised in the header but never registered with the router.
pub const ABOUT_PATH: &str = "/about";
pub const SERVICES_PATH: &str = "/services";
pub const CONTACT_PATH: &str = "/contact";

pub const HEALTH_ENDPOINT: &str = "/health";
pub const LOGIN_ENDPOINT: &str = "/auth/login";
pub const REGISTER_ENDPOINT: &str = "/auth/register";

pub const STATUS_LOADING: &str = "Loading...";
pub const STATUS_ERROR: &str = "Error";

pub const FOOTER_TEXT: &str = "Built with love in Bangalore ❤️";
