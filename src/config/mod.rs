//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is loaded with the
//! `AI_NAVIGATOR` prefix and nested values use double underscores as
//! separators.
//!
//! # Example
//!
//! ```no_run
//! use ai_navigator::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod analytics;
mod chat;
mod demo;
mod error;

pub use analytics::AnalyticsConfig;
pub use chat::ChatConfig;
pub use demo::DemoConfig;
pub use error::{ConfigError, ValidationError};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Chat pacing (typing speeds, floors, jitter, dwell tracking)
    #[serde(default)]
    pub chat: ChatConfig,

    /// Demo walkthrough settings
    #[serde(default)]
    pub demo: DemoConfig,

    /// Tracking store and mock fixture settings
    #[serde(default)]
    pub analytics: AnalyticsConfig,

    /// Rust log filter directive
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with the `AI_NAVIGATOR` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `AI_NAVIGATOR__CHAT__AGENT_MIN_DELAY_MS=500`
    /// - `AI_NAVIGATOR__DEMO__ENABLED=true`
    /// - `AI_NAVIGATOR__ANALYTICS__MOCK_SEED=42`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into the
    /// expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("AI_NAVIGATOR")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.chat.validate()?;
        self.demo.validate()?;
        self.analytics.validate()?;
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            chat: ChatConfig::default(),
            demo: DemoConfig::default(),
            analytics: AnalyticsConfig::default(),
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info,ai_navigator=debug".to_string()
}
