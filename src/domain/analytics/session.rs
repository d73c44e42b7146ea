//! Visitor session records and lead-scoring arithmetic.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::foundation::{SessionId, Timestamp, VisitorId};

/// Per-session engagement counters, updated as interactions arrive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngagementMetrics {
    /// Average visitor response time in seconds.
    pub response_time_avg: f64,
    /// Total dwell time in seconds.
    pub dwell_time_total: f64,
    /// CTA clicks recorded in the session.
    pub click_count: u32,
    /// Questions answered in the session.
    pub question_count: u32,
}

/// Behavioral sentiment derived from session signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }
}

/// Interaction-derived flags used by scoring and sentiment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSignals {
    pub email_collected: bool,
    pub lead_qualified: bool,
    pub cta_clicked: bool,
}

/// One visitor session in the tracking store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitorSession {
    pub id: SessionId,
    pub visitor_id: VisitorId,
    pub started_at: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<Timestamp>,
    pub user_agent: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referrer: Option<String>,
    pub completed_flow: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead_score: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<Sentiment>,
    pub engagement_metrics: EngagementMetrics,
}

impl VisitorSession {
    /// Opens a new session starting now.
    pub fn open(visitor_id: VisitorId, user_agent: String, referrer: Option<String>) -> Self {
        Self {
            id: SessionId::new(),
            visitor_id,
            started_at: Timestamp::now(),
            ended_at: None,
            user_agent,
            referrer,
            completed_flow: false,
            profile: None,
            lead_score: None,
            sentiment: None,
            engagement_metrics: EngagementMetrics::default(),
        }
    }

    /// Returns the session duration, if the session has ended.
    pub fn duration(&self) -> Option<chrono::Duration> {
        self.ended_at
            .as_ref()
            .map(|end| end.duration_since(&self.started_at))
    }

    /// Returns a profile field, if the profile was captured.
    pub fn profile_value(&self, key: &str) -> Option<&str> {
        self.profile
            .as_ref()
            .and_then(|p| p.get(key))
            .map(String::as_str)
    }

    /// Computes the lead score for this session.
    ///
    /// Base 30; +20 for flow completion; +10 for each of role, journey
    /// stage and interest captured; +20 email, +15 qualification, +15
    /// CTA click; +5 each for more than 3 questions answered and more
    /// than 2 clicks. Capped at 100.
    pub fn compute_lead_score(&self, signals: &SessionSignals) -> u8 {
        let mut score: u32 = 30;

        if self.completed_flow {
            score += 20;
        }
        for key in ["role", "journeyStage", "interest"] {
            if self.profile_value(key).is_some() {
                score += 10;
            }
        }
        if signals.email_collected {
            score += 20;
        }
        if signals.lead_qualified {
            score += 15;
        }
        if signals.cta_clicked {
            score += 15;
        }
        if self.engagement_metrics.question_count > 3 {
            score += 5;
        }
        if self.engagement_metrics.click_count > 2 {
            score += 5;
        }

        score.min(100) as u8
    }

    /// Derives behavioral sentiment from positive signals: completing
    /// the flow, providing an email, and clicking a CTA. Two or more
    /// is positive, one is neutral, none is negative.
    pub fn derive_sentiment(&self, signals: &SessionSignals) -> Sentiment {
        let positives = [
            self.completed_flow,
            signals.email_collected,
            signals.cta_clicked,
        ]
        .iter()
        .filter(|b| **b)
        .count();

        match positives {
            n if n >= 2 => Sentiment::Positive,
            1 => Sentiment::Neutral,
            _ => Sentiment::Negative,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> VisitorSession {
        VisitorSession::open(VisitorId::anonymous(), "test agent".to_string(), None)
    }

    fn full_profile() -> HashMap<String, String> {
        HashMap::from([
            ("role".to_string(), "technical".to_string()),
            ("journeyStage".to_string(), "exploring".to_string()),
            ("interest".to_string(), "data_analysis".to_string()),
        ])
    }

    mod lead_score {
        use super::*;

        #[test]
        fn bare_session_scores_the_base() {
            let s = session();
            assert_eq!(s.compute_lead_score(&SessionSignals::default()), 30);
        }

        #[test]
        fn completed_session_with_full_profile_scores_eighty() {
            let mut s = session();
            s.completed_flow = true;
            s.profile = Some(full_profile());
            assert_eq!(s.compute_lead_score(&SessionSignals::default()), 80);
        }

        #[test]
        fn all_signals_cap_at_one_hundred() {
            let mut s = session();
            s.completed_flow = true;
            s.profile = Some(full_profile());
            s.engagement_metrics.question_count = 5;
            s.engagement_metrics.click_count = 4;
            let signals = SessionSignals {
                email_collected: true,
                lead_qualified: true,
                cta_clicked: true,
            };
            assert_eq!(s.compute_lead_score(&signals), 100);
        }

        #[test]
        fn engagement_thresholds_are_strict() {
            let mut s = session();
            s.engagement_metrics.question_count = 3;
            s.engagement_metrics.click_count = 2;
            assert_eq!(s.compute_lead_score(&SessionSignals::default()), 30);
            s.engagement_metrics.question_count = 4;
            s.engagement_metrics.click_count = 3;
            assert_eq!(s.compute_lead_score(&SessionSignals::default()), 40);
        }
    }

    mod sentiment {
        use super::*;

        #[test]
        fn two_signals_are_positive() {
            let mut s = session();
            s.completed_flow = true;
            let signals = SessionSignals {
                email_collected: true,
                ..Default::default()
            };
            assert_eq!(s.derive_sentiment(&signals), Sentiment::Positive);
        }

        #[test]
        fn one_signal_is_neutral() {
            let s = session();
            let signals = SessionSignals {
                cta_clicked: true,
                ..Default::default()
            };
            assert_eq!(s.derive_sentiment(&signals), Sentiment::Neutral);
        }

        #[test]
        fn no_signals_are_negative() {
            let s = session();
            assert_eq!(
                s.derive_sentiment(&SessionSignals::default()),
                Sentiment::Negative
            );
        }

        #[test]
        fn lead_qualification_alone_does_not_count() {
            let s = session();
            let signals = SessionSignals {
                lead_qualified: true,
                ..Default::default()
            };
            assert_eq!(s.derive_sentiment(&signals), Sentiment::Negative);
        }
    }
}
