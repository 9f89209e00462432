//! jirabulk
//!
//! Bulk-create Jira issues from local backend and frontend task lists.

use anyhow::Result;
use jirabulk_cli::{logging::setup_logging, App, Startup, TerminalPrompter};
use jirabulk_core::{
    credentials::resolve_credentials,
    storage::{get_config_path, ConfigStorage},
};
use jirabulk_jira::JiraClient;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        tracing::error!(error = %e, "Fatal error");
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = ConfigStorage::new(get_config_path()).load()?;

    let log_path = setup_logging(&config.log_level)?;
    tracing::info!(log = %log_path.display(), "jirabulk starting");

    let startup = Startup::load(config)?;
    let mut prompter = TerminalPrompter::new();

    if startup.env.is_none() {
        println!(
            "No {} file found, enter credentials manually.",
            startup.config.env_file.display()
        );
    }
    let credentials = resolve_credentials(startup.env.as_ref(), &mut prompter)?;
    let client = JiraClient::new(&startup.config.jira, &credentials)?;

    let app = App::new(startup.backend, startup.frontend, credentials, client);
    app.run(&mut prompter, &mut std::io::stdout()).await
}
