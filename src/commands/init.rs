//! Interactive configuration setup.
//!
//! Runs the configuration wizard and then validates the API key against
//! the current-user endpoint, so a bad key fails loudly at setup time
//! instead of at the first export.

use crate::api::clockify::Clockify;
use crate::libs::{config::Config, messages::Message};
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Skip the API key validation request after saving the configuration
    #[arg(short, long)]
    skip_validation: bool,
}

pub async fn cmd(init_args: InitArgs) -> Result<()> {
    // Run interactive configuration wizard
    let config = Config::init()?;
    config.save()?;
    msg_success!(Message::ConfigSaved);

    if init_args.skip_validation {
        return Ok(());
    }

    // Prompt for the API key (if not already stored) and check it against
    // the API. A rejected key surfaces as an Authentication error here.
    let clockify_config = config.clockify.clone().unwrap_or_default();
    let client = Clockify::new(&clockify_config)?;
    let user = client.current_user().await?;
    msg_success!(Message::ApiKeyValidated(user.name));

    Ok(())
}
