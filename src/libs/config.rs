//! Configuration management for the clocksheet application.
//!
//! Settings are stored as pretty-printed JSON in the platform data
//! directory and edited through an interactive wizard. Two modules exist:
//! the Clockify API connection and the timesheet preferences (resource
//! code, default call number, project-name prefixing). The API key itself
//! never lands in this file; it goes through [`crate::libs::secret`].
//!
//! The export pipeline never reads configuration on its own: commands load
//! the config once and pass plain parameters down.

use super::data_storage::DataStorage;
use crate::api::clockify::ClockifyConfig;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name inside the application data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// A configurable module shown in the interactive setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Unique identifier for the module used in configuration routing
    pub key: String,
    /// Display name shown to users during interactive setup
    pub name: String,
}

/// Timesheet preferences applied to every export.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TimesheetConfig {
    /// Three-letter payroll resource code identifying the user.
    pub resource: String,

    /// Default call number booked for non-billable entries.
    pub call_no: String,

    /// Whether descriptions are prefixed with the entry's project name.
    pub include_project_name: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    pub clockify: Option<ClockifyConfig>,
    pub timesheet: Option<TimesheetConfig>,
}

impl Config {
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        // A missing file is not an error; the wizard has simply not run yet.
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Interactive configuration wizard. Existing values are offered as
    /// defaults so re-running the wizard only changes what the user edits.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let module_descriptions = vec![
            ClockifyConfig::module(),
            ConfigModule {
                key: "timesheet".to_string(),
                name: "Timesheet".to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&module_descriptions.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match module_descriptions[selection].key.as_str() {
                "clockify" => config.clockify = Some(ClockifyConfig::init(&config.clockify)?),
                "timesheet" => {
                    let default = config.timesheet.clone().unwrap_or(TimesheetConfig {
                        resource: "".to_string(),
                        call_no: "".to_string(),
                        include_project_name: false,
                    });
                    msg_print!(Message::ConfigModuleTimesheet);

                    let resource: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptResource.to_string())
                        .default(default.resource)
                        .validate_with(|input: &String| -> Result<(), String> {
                            if input.len() == 3 && input.chars().all(|c| c.is_ascii_alphabetic()) {
                                Ok(())
                            } else {
                                Err(Message::ResourceFormatInvalid.to_string())
                            }
                        })
                        .interact_text()?;

                    config.timesheet = Some(TimesheetConfig {
                        // Payroll expects the resource code in upper case
                        resource: resource.to_uppercase(),

                        call_no: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptCallNo.to_string())
                            .default(default.call_no)
                            .interact_text()?,

                        include_project_name: Confirm::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptIncludeProject.to_string())
                            .default(default.include_project_name)
                            .interact()?,
                    });
                }
                _ => {} // Unknown module keys are safely ignored
            }
        }

        Ok(config)
    }
}
