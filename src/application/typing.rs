//! Synthetic typing delays.
//!
//! The widget has no real latency, so the conversational rhythm is
//! simulated: delays scale with text length, floored per sender class,
//! and widened by uniform jitter. The agent profile is faster with a
//! lower floor than the visitor echo.

use rand::Rng;
use std::time::Duration;

use crate::config::ChatConfig;

/// Delay parameters for one sender class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingProfile {
    chars_per_minute: u32,
    min_delay_ms: u64,
    jitter_pct: u8,
}

impl TypingProfile {
    /// The agent's profile from config.
    pub fn agent(config: &ChatConfig) -> Self {
        Self {
            chars_per_minute: config.agent_chars_per_minute,
            min_delay_ms: config.agent_min_delay_ms,
            jitter_pct: config.agent_jitter_pct,
        }
    }

    /// The visitor echo profile from config.
    pub fn visitor(config: &ChatConfig) -> Self {
        Self {
            chars_per_minute: config.user_chars_per_minute,
            min_delay_ms: config.user_min_delay_ms,
            jitter_pct: config.user_jitter_pct,
        }
    }

    /// The unjittered delay: `max(min_delay, len / cpm * 60000)` ms.
    pub fn base_delay(&self, text: &str) -> Duration {
        let typed_ms = text.chars().count() as f64 / f64::from(self.chars_per_minute) * 60_000.0;
        Duration::from_millis((typed_ms as u64).max(self.min_delay_ms))
    }

    /// The jittered delay: the base widened by a uniform factor of up
    /// to `jitter_pct` in either direction, never below the floor.
    pub fn delay(&self, text: &str, rng: &mut impl Rng) -> Duration {
        let base_ms = self.base_delay(text).as_millis() as f64;
        let jitter = f64::from(self.jitter_pct) / 100.0;
        let factor = 1.0 + rng.gen_range(-jitter..=jitter);
        Duration::from_millis(((base_ms * factor) as u64).max(self.min_delay_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn agent() -> TypingProfile {
        TypingProfile::agent(&ChatConfig::default())
    }

    fn visitor() -> TypingProfile {
        TypingProfile::visitor(&ChatConfig::default())
    }

    #[test]
    fn short_text_hits_the_floor() {
        let config = ChatConfig::default();
        assert_eq!(
            agent().base_delay(""),
            Duration::from_millis(config.agent_min_delay_ms)
        );
        assert_eq!(
            agent().base_delay("ok"),
            Duration::from_millis(config.agent_min_delay_ms)
        );
    }

    #[test]
    fn long_text_scales_with_length() {
        // 1500 chars/minute means 1000 chars take 40 seconds.
        let text = "x".repeat(1000);
        assert_eq!(agent().base_delay(&text), Duration::from_secs(40));
    }

    #[test]
    fn visitor_echo_is_slower_than_the_agent() {
        let text = "a medium length visitor answer about AI adoption";
        assert!(visitor().base_delay(text) >= agent().base_delay(text));
    }

    proptest! {
        #[test]
        fn jittered_delay_never_dips_below_the_floor(
            len in 0usize..4000,
            seed in any::<u64>(),
        ) {
            let text = "y".repeat(len);
            let mut rng = StdRng::seed_from_u64(seed);
            let config = ChatConfig::default();
            let agent_delay = agent().delay(&text, &mut rng);
            prop_assert!(agent_delay >= Duration::from_millis(config.agent_min_delay_ms));
            let visitor_delay = visitor().delay(&text, &mut rng);
            prop_assert!(visitor_delay >= Duration::from_millis(config.user_min_delay_ms));
        }

        #[test]
        fn jitter_stays_within_its_band(len in 1usize..2000, seed in any::<u64>()) {
            let text = "z".repeat(len);
            let mut rng = StdRng::seed_from_u64(seed);
            let profile = visitor();
            let base = profile.base_delay(&text).as_millis() as f64;
            let jittered = profile.delay(&text, &mut rng).as_millis() as f64;
            // 20% band plus a millisecond of truncation slack.
            prop_assert!(jittered >= (base * 0.8 - 1.0).max(0.0));
            prop_assert!(jittered <= base * 1.2 + 1.0);
        }
    }
}
