//! Task use cases

mod create_task;
mod delete_task;
mod get_task;
mod list_tasks;
mod update_task;

pub use create_task::{CreateTaskUseCase, TaskCommand};
pub use delete_task::DeleteTaskUseCase;
pub use get_task::GetTaskUseCase;
pub use list_tasks::ListTasksUseCase;
pub use update_task::UpdateTaskUseCase;
