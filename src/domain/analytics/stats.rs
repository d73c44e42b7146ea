//! Aggregate statistics and funnel arithmetic.
//!
//! Pure functions over session and interaction slices. All aggregations
//! are order-independent (counts, averages, filters), so callers need
//! no ordering guarantees across appends.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use super::interaction::{Interaction, InteractionKind};
use super::session::VisitorSession;

/// Lead scores strictly above this mark a high-value lead.
pub const HIGH_VALUE_LEAD_THRESHOLD: u8 = 70;

/// Conversion counts through the engagement funnel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunnelData {
    pub total_sessions: usize,
    pub started_chat: usize,
    pub answered_questions: usize,
    pub viewed_recommendations: usize,
    pub provided_email: usize,
    pub qualified_leads: usize,
    pub booked_calls: usize,
}

/// Read-only aggregated view for the admin dashboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateStats {
    pub total_sessions: usize,
    pub completed_sessions: usize,
    pub completion_rate: f64,
    pub email_capture_rate: f64,
    pub lead_qualification_rate: f64,
    /// Average completed-session duration in minutes.
    pub average_session_duration: f64,
    pub sessions_by_journey_stage: HashMap<String, usize>,
    pub sessions_by_role: HashMap<String, usize>,
    pub sessions_by_interest: HashMap<String, usize>,
    pub sessions_by_sentiment: HashMap<String, usize>,
    pub high_value_leads: usize,
    pub avg_response_time: f64,
    pub avg_dwell_time: f64,
    pub funnel: FunnelData,
}

/// Computes funnel counts from the interaction log.
pub fn funnel(sessions: &[VisitorSession], interactions: &[Interaction]) -> FunnelData {
    let count_kind = |kind: InteractionKind| {
        interactions.iter().filter(|i| i.kind() == kind).count()
    };

    FunnelData {
        total_sessions: sessions.len(),
        started_chat: count_kind(InteractionKind::ChatStart),
        answered_questions: count_kind(InteractionKind::QuestionAnswered),
        viewed_recommendations: count_kind(InteractionKind::RecommendationViewed),
        provided_email: count_kind(InteractionKind::EmailCollected),
        qualified_leads: count_kind(InteractionKind::LeadQualified),
        booked_calls: interactions
            .iter()
            .filter(|i| {
                i.kind() == InteractionKind::CtaClicked
                    && i.data_str("ctaType") == Some("schedule_call")
            })
            .count(),
    }
}

/// Computes the full aggregate view.
pub fn aggregate(sessions: &[VisitorSession], interactions: &[Interaction]) -> AggregateStats {
    let total_sessions = sessions.len();
    let completed_sessions = sessions.iter().filter(|s| s.completed_flow).count();

    let rate = |count: usize| {
        if total_sessions > 0 {
            (count as f64 / total_sessions as f64) * 100.0
        } else {
            0.0
        }
    };

    let distinct_sessions_with = |kind: InteractionKind| {
        interactions
            .iter()
            .filter(|i| i.kind() == kind)
            .map(|i| i.session_id())
            .collect::<HashSet<_>>()
            .len()
    };

    let durations: Vec<f64> = sessions
        .iter()
        .filter(|s| s.completed_flow)
        .filter_map(|s| s.duration())
        .map(|d| d.num_milliseconds() as f64 / 1000.0 / 60.0)
        .collect();
    let average_session_duration = if durations.is_empty() {
        0.0
    } else {
        durations.iter().sum::<f64>() / durations.len() as f64
    };

    let group_by_profile = |key: &str| {
        let mut groups: HashMap<String, usize> = HashMap::new();
        for session in sessions {
            let value = session.profile_value(key).unwrap_or("unknown");
            *groups.entry(value.to_string()).or_insert(0) += 1;
        }
        groups
    };

    let mut sessions_by_sentiment: HashMap<String, usize> = HashMap::new();
    for session in sessions {
        let sentiment = session
            .sentiment
            .map(|s| s.as_str())
            .unwrap_or("neutral");
        *sessions_by_sentiment.entry(sentiment.to_string()).or_insert(0) += 1;
    }

    let high_value_leads = sessions
        .iter()
        .filter(|s| s.lead_score.unwrap_or(0) > HIGH_VALUE_LEAD_THRESHOLD)
        .count();

    let metric_avg = |f: fn(&VisitorSession) -> f64| {
        let divisor = total_sessions.max(1) as f64;
        sessions.iter().map(f).sum::<f64>() / divisor
    };

    AggregateStats {
        total_sessions,
        completed_sessions,
        completion_rate: rate(completed_sessions),
        email_capture_rate: rate(distinct_sessions_with(InteractionKind::EmailCollected)),
        lead_qualification_rate: rate(distinct_sessions_with(InteractionKind::LeadQualified)),
        average_session_duration,
        sessions_by_journey_stage: group_by_profile("journeyStage"),
        sessions_by_role: group_by_profile("role"),
        sessions_by_interest: group_by_profile("interest"),
        sessions_by_sentiment,
        high_value_leads,
        avg_response_time: metric_avg(|s| s.engagement_metrics.response_time_avg),
        avg_dwell_time: metric_avg(|s| s.engagement_metrics.dwell_time_total),
        funnel: funnel(sessions, interactions),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analytics::session::Sentiment;
    use crate::domain::foundation::VisitorId;
    use serde_json::Value;

    fn completed_session(stage: &str, score: u8) -> VisitorSession {
        let mut session = VisitorSession::open(
            VisitorId::anonymous(),
            "test agent".to_string(),
            None,
        );
        session.completed_flow = true;
        session.ended_at = Some(session.started_at.plus_minutes(5));
        session.profile = Some(HashMap::from([(
            "journeyStage".to_string(),
            stage.to_string(),
        )]));
        session.lead_score = Some(score);
        session.sentiment = Some(Sentiment::Positive);
        session
    }

    fn interaction(kind: InteractionKind, session: &VisitorSession) -> Interaction {
        Interaction::new(
            kind,
            session.id.clone(),
            session.visitor_id.clone(),
            HashMap::new(),
        )
    }

    #[test]
    fn empty_store_aggregates_to_zeroes() {
        let stats = aggregate(&[], &[]);
        assert_eq!(stats.total_sessions, 0);
        assert_eq!(stats.completion_rate, 0.0);
        assert_eq!(stats.average_session_duration, 0.0);
    }

    #[test]
    fn completion_rate_is_a_percentage() {
        let completed = completed_session("exploring", 80);
        let open = VisitorSession::open(
            VisitorId::anonymous(),
            "test agent".to_string(),
            None,
        );
        let stats = aggregate(&[completed, open], &[]);
        assert_eq!(stats.completed_sessions, 1);
        assert!((stats.completion_rate - 50.0).abs() < 1e-9);
    }

    #[test]
    fn average_duration_only_counts_completed_sessions() {
        let completed = completed_session("starting", 50);
        let open = VisitorSession::open(
            VisitorId::anonymous(),
            "test agent".to_string(),
            None,
        );
        let stats = aggregate(&[completed, open], &[]);
        assert!((stats.average_session_duration - 5.0).abs() < 0.01);
    }

    #[test]
    fn email_rate_counts_distinct_sessions() {
        let session = completed_session("piloting", 60);
        let interactions = vec![
            interaction(InteractionKind::EmailCollected, &session),
            interaction(InteractionKind::EmailCollected, &session),
        ];
        let stats = aggregate(&[session], &interactions);
        assert!((stats.email_capture_rate - 100.0).abs() < 1e-9);
    }

    #[test]
    fn missing_profile_groups_as_unknown() {
        let open = VisitorSession::open(
            VisitorId::anonymous(),
            "test agent".to_string(),
            None,
        );
        let stats = aggregate(&[open], &[]);
        assert_eq!(stats.sessions_by_role.get("unknown"), Some(&1));
    }

    #[test]
    fn high_value_threshold_is_strictly_above_seventy() {
        let at = completed_session("scaling", 70);
        let above = completed_session("scaling", 71);
        let stats = aggregate(&[at, above], &[]);
        assert_eq!(stats.high_value_leads, 1);
    }

    #[test]
    fn booked_calls_filter_on_cta_type() {
        let session = completed_session("exploring", 80);
        let schedule = Interaction::new(
            InteractionKind::CtaClicked,
            session.id.clone(),
            session.visitor_id.clone(),
            HashMap::from([("ctaType".to_string(), Value::from("schedule_call"))]),
        );
        let download = Interaction::new(
            InteractionKind::CtaClicked,
            session.id.clone(),
            session.visitor_id.clone(),
            HashMap::from([("ctaType".to_string(), Value::from("download_resources"))]),
        );
        let data = funnel(&[session], &[schedule, download]);
        assert_eq!(data.booked_calls, 1);
    }
}
