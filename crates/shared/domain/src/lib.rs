//! # Domain Models
//!
//! Plain data shared by the client crates: configuration, route paths and the
//! backend wire types. Only `serde` is allowed here; no I/O, networking, or UI.

pub mod config;
pub mod constants;
pub mod dto;
