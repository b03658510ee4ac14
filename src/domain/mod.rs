pub mod auth;
pub mod task;

// Re-export auth module for easier access
pub use auth::*;
