//! Chat pacing configuration.

use serde::Deserialize;

use super::error::ValidationError;

/// Typing-simulation and dwell-tracking settings.
///
/// The agent reads and types faster in the simulation, so it gets a
/// higher speed and a lower floor than the visitor echo.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatConfig {
    /// Simulated agent typing speed.
    #[serde(default = "default_agent_chars_per_minute")]
    pub agent_chars_per_minute: u32,

    /// Minimum agent typing delay in milliseconds.
    #[serde(default = "default_agent_min_delay_ms")]
    pub agent_min_delay_ms: u64,

    /// Agent delay jitter, percent of the computed delay.
    #[serde(default = "default_agent_jitter_pct")]
    pub agent_jitter_pct: u8,

    /// Simulated visitor typing speed.
    #[serde(default = "default_user_chars_per_minute")]
    pub user_chars_per_minute: u32,

    /// Minimum visitor typing delay in milliseconds.
    #[serde(default = "default_user_min_delay_ms")]
    pub user_min_delay_ms: u64,

    /// Visitor delay jitter, percent of the computed delay.
    #[serde(default = "default_user_jitter_pct")]
    pub user_jitter_pct: u8,

    /// Dwell tracker tick interval in seconds.
    #[serde(default = "default_dwell_tick_secs")]
    pub dwell_tick_secs: u64,

    /// Ticks more than this long after the last interaction are not
    /// counted as dwell time.
    #[serde(default = "default_inactivity_cutoff_secs")]
    pub inactivity_cutoff_secs: u64,
}

impl ChatConfig {
    /// Validate chat configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.agent_chars_per_minute == 0 || self.user_chars_per_minute == 0 {
            return Err(ValidationError::InvalidTypingSpeed);
        }
        if self.agent_jitter_pct > 50 || self.user_jitter_pct > 50 {
            return Err(ValidationError::JitterTooLarge);
        }
        if self.dwell_tick_secs == 0 {
            return Err(ValidationError::InvalidDwellTick);
        }
        if self.inactivity_cutoff_secs < self.dwell_tick_secs {
            return Err(ValidationError::InvalidInactivityCutoff);
        }
        Ok(())
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            agent_chars_per_minute: default_agent_chars_per_minute(),
            agent_min_delay_ms: default_agent_min_delay_ms(),
            agent_jitter_pct: default_agent_jitter_pct(),
            user_chars_per_minute: default_user_chars_per_minute(),
            user_min_delay_ms: default_user_min_delay_ms(),
            user_jitter_pct: default_user_jitter_pct(),
            dwell_tick_secs: default_dwell_tick_secs(),
            inactivity_cutoff_secs: default_inactivity_cutoff_secs(),
        }
    }
}

fn default_agent_chars_per_minute() -> u32 {
    1500
}

fn default_agent_min_delay_ms() -> u64 {
    500
}

fn default_agent_jitter_pct() -> u8 {
    10
}

fn default_user_chars_per_minute() -> u32 {
    400
}

fn default_user_min_delay_ms() -> u64 {
    800
}

fn default_user_jitter_pct() -> u8 {
    20
}

fn default_dwell_tick_secs() -> u64 {
    1
}

fn default_inactivity_cutoff_secs() -> u64 {
    30
}
