//! Analytics configuration.

use serde::Deserialize;

use super::error::ValidationError;

const MAX_MOCK_SESSIONS: usize = 1000;

/// Tracking store and fixture settings.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyticsConfig {
    /// Seed for mock fixtures and enrichment; unset means OS entropy.
    #[serde(default)]
    pub mock_seed: Option<u64>,

    /// Historical mock sessions seeded into the store at startup.
    #[serde(default = "default_mock_session_count")]
    pub mock_session_count: usize,

    /// Simulated delay for each lead-form submission stage, in
    /// milliseconds.
    #[serde(default = "default_lead_capture_delay_ms")]
    pub lead_capture_delay_ms: u64,
}

impl AnalyticsConfig {
    /// Validate analytics configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.mock_session_count > MAX_MOCK_SESSIONS {
            return Err(ValidationError::TooManyMockSessions);
        }
        Ok(())
    }
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            mock_seed: None,
            mock_session_count: default_mock_session_count(),
            lead_capture_delay_ms: default_lead_capture_delay_ms(),
        }
    }
}

fn default_mock_session_count() -> usize {
    100
}

fn default_lead_capture_delay_ms() -> u64 {
    1000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_seed_one_hundred_sessions() {
        let config = AnalyticsConfig::default();
        assert_eq!(config.mock_session_count, 100);
        assert!(config.mock_seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn oversized_fixture_count_is_rejected() {
        let config = AnalyticsConfig {
            mock_session_count: 5000,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::TooManyMockSessions)
        ));
    }
}
