//! Clockify REST API client.
//!
//! Authentication is a static `X-Api-Key` header; there is no session to
//! establish or refresh. A rejected key (401/403) surfaces as
//! [`TimesheetError::Authentication`] so the caller can re-prompt, any
//! other non-success status propagates with the upstream response text.
//!
//! The client fetches exactly what one export needs: the current user (to
//! validate the key and address the per-user endpoints), one week of time
//! entries bounded by the week-ending Friday, and the workspace project
//! list for description prefixing.

use crate::libs::config::ConfigModule;
use crate::libs::error::TimesheetError;
use crate::libs::messages::Message;
use crate::libs::secret::Secret;
use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use dialoguer::{theme::ColorfulTheme, Input};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

const DEFAULT_API_URL: &str = "https://api.clockify.me/api/v1";
const API_KEY_HEADER: &str = "X-Api-Key";
const SECRET_FILE: &str = ".clockify_api_key";

/// Interval of one time entry. `duration` is an ISO-8601 `PT..` string and
/// is absent or empty while the entry's timer is still running.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeInterval {
    pub start: DateTime<Utc>,
    pub end: Option<DateTime<Utc>>,
    #[serde(default)]
    pub duration: Option<String>,
}

/// One raw time-tracking record as returned by the API. Fields the
/// pipeline does not consume are left out of the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    pub billable: bool,
    #[serde(default)]
    pub description: String,
    pub project_id: Option<String>,
    pub time_interval: TimeInterval,
}

/// A workspace project, used only to resolve names from project ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
}

/// The authenticated user behind the API key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    pub id: String,
    pub name: String,
    pub default_workspace: String,
}

pub struct Clockify {
    client: Client,
    config: ClockifyConfig,
    api_key: String,
}

impl Clockify {
    /// Creates a client, loading the API key from encrypted storage or
    /// prompting for it on first use.
    pub fn new(config: &ClockifyConfig) -> Result<Self> {
        let api_key = Self::secret().get_or_prompt()?;
        Ok(Self::with_api_key(config, &api_key))
    }

    /// Creates a client with an explicit key, bypassing secret storage.
    pub fn with_api_key(config: &ClockifyConfig, api_key: &str) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
            api_key: api_key.to_owned(),
        }
    }

    /// The secret store slot holding the API key.
    pub fn secret() -> Secret {
        Secret::new(SECRET_FILE, &Message::PromptApiKey.to_string())
    }

    /// Fetches the authenticated user. Used to validate the API key during
    /// setup and to address the per-user endpoints.
    pub async fn current_user(&self) -> Result<CurrentUser> {
        self.execute(self.request("user")).await
    }

    /// Fetches the week of entries closing at 23:59:59.999 UTC on the
    /// week-ending date.
    pub async fn time_entries(&self, user: &CurrentUser, week_ending: NaiveDate) -> Result<Vec<TimeEntry>> {
        let cutoff = format!("{}T23:59:59.999Z", week_ending.format("%Y-%m-%d"));
        let endpoint = format!("workspaces/{}/user/{}/time-entries", user.default_workspace, user.id);
        self.execute(self.request(&endpoint).query(&[("get-week-before", cutoff.as_str())])).await
    }

    /// Fetches the workspace project list.
    pub async fn projects(&self, user: &CurrentUser) -> Result<Vec<Project>> {
        let endpoint = format!("workspaces/{}/projects", user.default_workspace);
        self.execute(self.request(&endpoint)).await
    }

    fn request(&self, endpoint: &str) -> RequestBuilder {
        let url = format!("{}/{}", self.config.api_url.trim_end_matches('/'), endpoint);
        self.client.get(url).header(API_KEY_HEADER, &self.api_key)
    }

    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let res = request.send().await?;

        match res.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(TimesheetError::Authentication(res.status()).into()),
            status if !status.is_success() => {
                let text = res.text().await.unwrap_or_default();
                anyhow::bail!("Clockify API error ({}): {}", status, text)
            }
            _ => Ok(res.json::<T>().await?),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ClockifyConfig {
    pub api_url: String,
}

impl Default for ClockifyConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl ClockifyConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "clockify".to_string(),
            name: "Clockify".to_string(),
        }
    }

    pub fn init(config: &Option<Self>) -> Result<Self> {
        let config = config.clone().unwrap_or_default();
        crate::msg_print!(Message::ConfigModuleClockify);
        Ok(Self {
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptApiUrl.to_string())
                .default(config.api_url)
                .interact_text()?,
        })
    }
}
