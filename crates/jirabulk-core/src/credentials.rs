//! Credential resolution from the environment file or interactive prompts

use crate::{
    models::Credentials,
    prompt::Prompter,
    storage::{
        env::{API_TOKEN_VAR, CREDENTIAL_VARS, EMAIL_VAR, PROJECT_KEY_VAR},
        EnvSource,
    },
    Error, Result,
};

/// Produce a complete credential set or fail.
///
/// With an environment file present, all three variables must be set there;
/// otherwise the user is prompted for each value.
pub fn resolve_credentials(
    env: Option<&EnvSource>,
    prompter: &mut dyn Prompter,
) -> Result<Credentials> {
    match env {
        Some(source) => from_env(source),
        None => {
            tracing::info!("No environment file, prompting for credentials");
            from_prompts(prompter)
        }
    }
}

fn from_env(source: &EnvSource) -> Result<Credentials> {
    if let (Some(email), Some(api_token), Some(project_key)) = (
        source.get(EMAIL_VAR),
        source.get(API_TOKEN_VAR),
        source.get(PROJECT_KEY_VAR),
    ) {
        tracing::info!(path = %source.path().display(), "Using credentials from environment file");
        return Ok(Credentials::new(email, api_token, project_key));
    }

    let missing: Vec<String> = CREDENTIAL_VARS
        .iter()
        .filter(|var| source.get(var).is_none())
        .map(|var| var.to_string())
        .collect();

    tracing::warn!(?missing, "Environment file is incomplete");
    Err(Error::ConfigurationIncomplete { missing })
}

fn from_prompts(prompter: &mut dyn Prompter) -> Result<Credentials> {
    let email = prompter.input("Jira email")?;
    let api_token = prompter.secret("Jira API token")?;
    let project_key = prompter.input("Jira project key (e.g. FLIC)")?;

    // The token is used exactly as typed.
    Ok(Credentials::new(email.trim(), api_token, project_key.trim()))
}
