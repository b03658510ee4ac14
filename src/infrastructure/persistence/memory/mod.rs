//! In-process adapters backed by `tokio::sync::RwLock`, used for local runs
//! (`storage.backend = "memory"`) and tests.

mod account_repository;
mod task_repository;

pub use account_repository::InMemoryAccountRepository;
pub use task_repository::InMemoryTaskRepository;
