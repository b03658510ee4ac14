pub mod entities;
pub mod errors;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use entities::Task;
pub use errors::TaskError;
pub use ports::TaskRepository;
pub use services::TaskService;
pub use value_objects::{TaskDetails, TaskId};
