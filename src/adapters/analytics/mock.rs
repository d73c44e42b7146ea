//! Seedable mock analytics fixtures.
//!
//! Generates the historical sessions and interactions the admin
//! dashboard renders. Deterministic given a seed, so tests can request
//! fixed fixtures instead of relying on process-start randomness.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::Value;
use std::collections::HashMap;

use crate::domain::analytics::{
    EngagementMetrics, Interaction, InteractionKind, Sentiment, VisitorSession,
};
use crate::domain::foundation::{SessionId, Timestamp, VisitorId};

const MOCK_USER_AGENT: &str = "Mozilla/5.0 (Mock Browser)";

const ROLES: &[&str] = &["founder", "technical", "marketing", "hr", "other"];
const STAGES: &[&str] = &["starting", "exploring", "piloting", "scaling"];
const INTERESTS: &[&str] = &["customer_support", "marketing", "data_analysis", "other"];

const RANDOM_KINDS: &[InteractionKind] = &[
    InteractionKind::ChatStart,
    InteractionKind::ChatEnd,
    InteractionKind::QuestionAnswered,
    InteractionKind::EmailCollected,
    InteractionKind::LeadQualified,
    InteractionKind::RecommendationViewed,
    InteractionKind::CtaClicked,
    InteractionKind::MessageReaction,
];

/// Deterministic fixture generator.
pub struct MockDataGenerator {
    rng: StdRng,
}

impl MockDataGenerator {
    /// Creates a generator with a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a generator seeded from the OS.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    fn pick<'a>(&mut self, pool: &[&'a str]) -> &'a str {
        pool[self.rng.gen_range(0..pool.len())]
    }

    /// Generates both fixture collections: `count` sessions spread over
    /// the past 30 days plus their interaction logs.
    pub fn fixtures(&mut self, count: usize) -> (Vec<VisitorSession>, Vec<Interaction>) {
        let sessions = self.sessions(count);
        let interactions = self.interactions(&sessions);
        (sessions, interactions)
    }

    /// Generates mock sessions spread over the past 30 days. Roughly
    /// 70% complete the flow, lasting 1 to 15 minutes.
    pub fn sessions(&mut self, count: usize) -> Vec<VisitorSession> {
        let now = Timestamp::now();
        (0..count)
            .map(|_| {
                let started_at = now
                    .minus_days(self.rng.gen_range(0..30))
                    .plus_minutes(-self.rng.gen_range(0..1440));
                let completed_flow = self.rng.gen_bool(0.7);
                let ended_at =
                    completed_flow.then(|| started_at.plus_minutes(self.rng.gen_range(1..=15)));

                let profile = completed_flow.then(|| {
                    HashMap::from([
                        ("role".to_string(), self.pick(ROLES).to_string()),
                        ("journeyStage".to_string(), self.pick(STAGES).to_string()),
                        ("interest".to_string(), self.pick(INTERESTS).to_string()),
                    ])
                });

                let lead_score = completed_flow.then(|| self.rng.gen_range(0..100));
                let sentiment = if self.rng.gen_bool(0.3) {
                    Sentiment::Positive
                } else if self.rng.gen_bool(0.5) {
                    Sentiment::Neutral
                } else {
                    Sentiment::Negative
                };

                let engagement_metrics = EngagementMetrics {
                    response_time_avg: 2.0 + self.rng.gen::<f64>() * 8.0,
                    dwell_time_total: 30.0 + self.rng.gen::<f64>() * 300.0,
                    click_count: self.rng.gen_range(0..10),
                    question_count: 2 + self.rng.gen_range(0..5),
                };

                let referrer = if self.rng.gen_bool(0.5) {
                    "https://google.com"
                } else {
                    "https://linkedin.com"
                };

                VisitorSession {
                    id: SessionId::new(),
                    visitor_id: VisitorId::anonymous(),
                    started_at,
                    ended_at,
                    user_agent: MOCK_USER_AGENT.to_string(),
                    referrer: Some(referrer.to_string()),
                    completed_flow,
                    profile,
                    lead_score,
                    sentiment: Some(sentiment),
                    engagement_metrics,
                }
            })
            .collect()
    }

    /// Generates the interaction log for the given sessions: every
    /// session opened with `chat_start`, completed ones carrying 3 to 12
    /// in-flight events (mostly answered questions) and a closing
    /// `chat_end`.
    pub fn interactions(&mut self, sessions: &[VisitorSession]) -> Vec<Interaction> {
        let mut interactions = Vec::new();

        for session in sessions {
            interactions.push(Interaction::recorded_at(
                InteractionKind::ChatStart,
                session.started_at,
                session.id,
                session.visitor_id.clone(),
                HashMap::new(),
            ));

            let Some(ended_at) = session.ended_at else {
                continue;
            };
            let duration_ms = ended_at
                .duration_since(&session.started_at)
                .num_milliseconds()
                .max(0) as u64;

            let event_count = self.rng.gen_range(3..=12);
            for i in 0..event_count {
                let offset_ms = duration_ms * i as u64 / event_count as u64;
                let occurred_at = session.started_at.plus_secs(offset_ms / 1000);

                let kind = if self.rng.gen_bool(0.2) {
                    RANDOM_KINDS[self.rng.gen_range(0..RANDOM_KINDS.len())]
                } else {
                    InteractionKind::QuestionAnswered
                };

                interactions.push(Interaction::recorded_at(
                    kind,
                    occurred_at,
                    session.id,
                    session.visitor_id.clone(),
                    self.mock_data_for(kind),
                ));
            }

            interactions.push(Interaction::recorded_at(
                InteractionKind::ChatEnd,
                ended_at,
                session.id,
                session.visitor_id.clone(),
                HashMap::new(),
            ));
        }

        interactions
    }

    fn mock_data_for(&mut self, kind: InteractionKind) -> HashMap<String, Value> {
        match kind {
            InteractionKind::QuestionAnswered => HashMap::from([
                (
                    "questionIndex".to_string(),
                    Value::from(self.rng.gen_range(1..=4)),
                ),
                ("answer".to_string(), Value::from("mock answer")),
            ]),
            InteractionKind::EmailCollected => HashMap::from([(
                "email".to_string(),
                Value::from(format!("mock-{}@example.com", self.rng.gen_range(0..1000))),
            )]),
            InteractionKind::LeadQualified => HashMap::from([
                (
                    "email".to_string(),
                    Value::from(format!("mock-{}@example.com", self.rng.gen_range(0..1000))),
                ),
                ("name".to_string(), Value::from("Mock User")),
                ("company".to_string(), Value::from("Mock Company")),
            ]),
            InteractionKind::CtaClicked => HashMap::from([(
                "ctaType".to_string(),
                Value::from(if self.rng.gen_bool(0.5) {
                    "schedule_call"
                } else {
                    "download_resources"
                }),
            )]),
            InteractionKind::MessageReaction => HashMap::from([(
                "reaction".to_string(),
                Value::from(if self.rng.gen_bool(0.3) {
                    "helpful"
                } else {
                    "not-helpful"
                }),
            )]),
            _ => HashMap::new(),
        }
    }
}
