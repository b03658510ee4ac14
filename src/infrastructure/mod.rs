pub mod config;
pub mod persistence;
pub mod security;
pub mod time;
