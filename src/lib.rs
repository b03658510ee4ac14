//! Task tracking service with role-gated token authentication.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod infrastructure;
