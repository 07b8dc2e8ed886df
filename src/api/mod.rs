//! API client modules for external service integrations.
//!
//! A single client lives here: the Clockify time-tracking API, addressed
//! with a per-user API key. The key is held in encrypted storage and
//! prompted for on first use; see [`crate::libs::secret`].

pub mod clockify;

// Re-export the configuration struct for easier access from other modules
pub use clockify::ClockifyConfig;
