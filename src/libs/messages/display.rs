use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleClockify => "Clockify settings".to_string(),
            Message::ConfigModuleTimesheet => "Timesheet settings".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptApiUrl => "Enter the Clockify API URL".to_string(),
            Message::PromptResource => "Enter your payroll resource code (three letters)".to_string(),
            Message::PromptCallNo => "Enter the default call number for non-billable work".to_string(),
            Message::PromptIncludeProject => "Prefix descriptions with the project name?".to_string(),
            Message::PromptApiKey => "Enter your Clockify API key".to_string(),
            Message::ResourceFormatInvalid => "Resource code must be exactly three letters".to_string(),
            Message::TimesheetConfigMissing => "Timesheet settings not found. Run 'clocksheet init' first.".to_string(),

            // === SETUP MESSAGES ===
            Message::ApiKeyValidated(name) => format!("API key accepted. Hello, {}!", name),
            Message::ApiKeyDeleted => "Stored API key deleted.".to_string(),
            Message::NoStoredApiKey => "No stored API key found.".to_string(),

            // === EXPORT MESSAGES ===
            Message::FetchingWeek(date) => format!("Fetching time entries for week ending {}", date),
            Message::EntriesFetched(count) => format!("Fetched {} time entries", count),
            Message::NoEntriesForWeek(date) => format!("No time entries found for week ending {}", date),
            Message::TimesheetSaved(path) => format!("Timesheet saved to {}", path),
            Message::PreviewHeader(date) => format!("Timesheet preview, week ending {}", date),
            Message::WeekTotalHours(hours) => format!("Total hours: {:.2}", hours),
        };
        write!(f, "{}", text)
    }
}
