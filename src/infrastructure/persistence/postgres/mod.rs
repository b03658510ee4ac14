pub mod account_repository;
pub mod task_repository;

pub use account_repository::PostgresAccountRepository;
pub use task_repository::PostgresTaskRepository;
