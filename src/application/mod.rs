//! Application layer
//!
//! Use cases that turn raw request input into domain calls and project
//! domain results outward.

pub mod auth;
pub mod task;
