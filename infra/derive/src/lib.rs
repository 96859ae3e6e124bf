#![allow(unreachable_pub)]

//! # Macros
//!
//! Procedural macros shared by the Vayana crates.
//!
//! Currently this is a single attribute, [`macro@app_error`], that turns a plain enum
//! into a crate error type with context support.

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for crate-level error enums.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already derived.
/// * `<Name>Ext` trait with `.context(...)`, implemented for `Result<T, Name>` and for
///   `Result<T, Source>` of every variant that wraps a `source` field.
/// * `From<Source>` for each variant with a `source` field (or a field marked `#[source]`).
/// * `From<&'static str>` and `From<String>` when an `Internal { message, context }`
///   variant is present.
/// * A private `format_context` helper for use inside `#[error(...)]` strings.
///
/// # Requirements
///
/// Every variant must use named fields and carry `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[vayana_derive::app_error]
/// pub enum ApiError {
///     #[error("Transport error{}: {source}", format_context(.context))]
///     Transport { source: reqwest::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn fetch(client: &reqwest::Client) -> Result<(), ApiError> {
///     let response = client.get("http://localhost/health").send().await.context("GET /health")?;
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn app_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(input).into()
}
