//! Demo walkthrough configuration.

use serde::Deserialize;

use super::error::ValidationError;

/// Scripted-demo settings.
#[derive(Debug, Clone, Deserialize)]
pub struct DemoConfig {
    /// Whether demo mode is active at all.
    #[serde(default)]
    pub enabled: bool,

    /// Automatic chaining versus manual "next" advancement.
    #[serde(default = "default_auto")]
    pub auto: bool,

    /// Pause before each self-scheduled demo turn, in milliseconds.
    #[serde(default = "default_step_delay_ms")]
    pub step_delay_ms: u64,
}

impl DemoConfig {
    /// Validate demo configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.step_delay_ms == 0 {
            return Err(ValidationError::InvalidDemoDelay);
        }
        Ok(())
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            auto: default_auto(),
            step_delay_ms: default_step_delay_ms(),
        }
    }
}

fn default_auto() -> bool {
    true
}

fn default_step_delay_ms() -> u64 {
    1500
}
