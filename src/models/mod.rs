pub mod task;

// Export the task types for use throughout the app
pub use task::{NewTask, Task, TaskPatch, TaskStatus};
