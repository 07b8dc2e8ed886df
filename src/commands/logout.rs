//! Deletes the stored API key, forcing a fresh prompt on the next command.

use crate::api::clockify::Clockify;
use crate::libs::messages::Message;
use crate::{msg_info, msg_success};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    if Clockify::secret().delete()? {
        msg_success!(Message::ApiKeyDeleted);
    } else {
        msg_info!(Message::NoStoredApiKey);
    }
    Ok(())
}
