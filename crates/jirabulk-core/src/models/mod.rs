pub mod config;
pub mod credentials;
pub mod task;

pub use config::{Config, JiraConfig, TasksConfig};
pub use credentials::Credentials;
pub use task::{Subtask, Task, TaskCategory};
