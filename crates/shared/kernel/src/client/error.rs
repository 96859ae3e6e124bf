use std::borrow::Cow;

/// Errors raised by [`super::ApiClient`].
#[vayana_derive::app_error]
pub enum ApiError {
    /// Connection, timeout, or body decoding failure.
    #[error("Transport error{}: {source}", format_context(.context))]
    Transport { source: reqwest::Error, context: Option<Cow<'static, str>> },

    /// The backend answered with a non-success status.
    #[error("Request rejected with status {status}{}: {message}", format_context(.context))]
    Rejected { status: u16, message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Invalid API configuration{}: {message}", format_context(.context))]
    InvalidConfiguration { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal API client error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl ApiError {
    /// Text suitable for showing next to a form.
    ///
    /// Backend rejections carry their own message; everything else falls back to the
    /// full error text.
    pub fn user_message(&self) -> Cow<'_, str> {
        match self {
            Self::Rejected { message, .. } => Cow::Borrowed(message.as_ref()),
            other => Cow::Owned(other.to_string()),
        }
    }

    /// HTTP status of a backend rejection.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}
