//! Everything resolved once before the menu starts

use jirabulk_core::{
    models::{Config, Task},
    storage::{EnvSource, TaskStorage},
    Result,
};

pub struct Startup {
    pub config: Config,
    pub backend: Vec<Task>,
    pub frontend: Vec<Task>,
    /// `None` when the environment file does not exist
    pub env: Option<EnvSource>,
}

impl Startup {
    /// Load both task lists, then look for the environment file
    pub fn load(config: Config) -> Result<Self> {
        let (backend, frontend) = TaskStorage::new(config.tasks.clone()).load_all()?;
        let env = EnvSource::discover(&config.env_file)?;

        Ok(Self {
            config,
            backend,
            frontend,
            env,
        })
    }
}
