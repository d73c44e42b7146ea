//! In-memory tracking store.
//!
//! The analytics event sink behind the widget and the admin dashboard.
//! All state lives in process memory and is lost on shutdown; there is
//! deliberately no persistence layer. Created explicitly at app start
//! and passed by reference, never a global.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, info};

use crate::domain::analytics::{
    aggregate, funnel, AggregateStats, EngagementMetrics, FunnelData, Interaction,
    InteractionKind, SessionSignals, Sentiment, VisitorSession,
};
use crate::domain::conversation::VisitorProfile;
use crate::domain::foundation::{DomainError, ErrorCode, SessionId, VisitorId};
use crate::ports::EventSink;

const DEFAULT_USER_AGENT: &str = "ai-navigator/embedded";

/// Append-only analytics store with interior mutability.
///
/// Sessions and interactions are plain vectors behind `RwLock`s; every
/// operation is a single atomic append or in-place update, which is all
/// the ordering the aggregation arithmetic needs.
pub struct TrackingStore {
    visitor_id: VisitorId,
    user_agent: String,
    sessions: RwLock<Vec<VisitorSession>>,
    interactions: RwLock<Vec<Interaction>>,
}

impl TrackingStore {
    /// Creates an empty store for an anonymous visitor.
    pub fn new() -> Self {
        Self {
            visitor_id: VisitorId::anonymous(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            sessions: RwLock::new(Vec::new()),
            interactions: RwLock::new(Vec::new()),
        }
    }

    /// Creates a store pre-seeded with fixture data, used to back the
    /// admin dashboard with mock history.
    pub fn with_fixtures(sessions: Vec<VisitorSession>, interactions: Vec<Interaction>) -> Self {
        Self {
            visitor_id: VisitorId::anonymous(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            sessions: RwLock::new(sessions),
            interactions: RwLock::new(interactions),
        }
    }

    fn sessions_read(&self) -> Result<RwLockReadGuard<'_, Vec<VisitorSession>>, DomainError> {
        self.sessions.read().map_err(|_| Self::lock_error())
    }

    fn sessions_write(&self) -> Result<RwLockWriteGuard<'_, Vec<VisitorSession>>, DomainError> {
        self.sessions.write().map_err(|_| Self::lock_error())
    }

    fn interactions_read(&self) -> Result<RwLockReadGuard<'_, Vec<Interaction>>, DomainError> {
        self.interactions.read().map_err(|_| Self::lock_error())
    }

    fn interactions_write(&self) -> Result<RwLockWriteGuard<'_, Vec<Interaction>>, DomainError> {
        self.interactions.write().map_err(|_| Self::lock_error())
    }

    fn lock_error() -> DomainError {
        DomainError::new(ErrorCode::SinkError, "Tracking store lock poisoned")
    }

    fn not_found(session_id: &SessionId) -> DomainError {
        DomainError::new(ErrorCode::SessionNotFound, "Session not found")
            .with_detail("session_id", session_id.to_string())
    }

    fn append(
        &self,
        session_id: &SessionId,
        kind: InteractionKind,
        data: HashMap<String, Value>,
    ) -> Result<(), DomainError> {
        let interaction = Interaction::new(kind, *session_id, self.visitor_id.clone(), data);
        self.interactions_write()?.push(interaction);
        debug!(session_id = %session_id, kind = kind.as_str(), "interaction recorded");
        Ok(())
    }

    fn signals_for(&self, session_id: &SessionId) -> Result<SessionSignals, DomainError> {
        let interactions = self.interactions_read()?;
        let mut signals = SessionSignals::default();
        for interaction in interactions.iter().filter(|i| i.session_id() == session_id) {
            match interaction.kind() {
                InteractionKind::EmailCollected => signals.email_collected = true,
                InteractionKind::LeadQualified => signals.lead_qualified = true,
                InteractionKind::CtaClicked => signals.cta_clicked = true,
                _ => {}
            }
        }
        Ok(signals)
    }

    // === Query surface (admin dashboard) ===

    /// Returns a session by ID.
    pub fn session(&self, session_id: &SessionId) -> Result<Option<VisitorSession>, DomainError> {
        Ok(self
            .sessions_read()?
            .iter()
            .find(|s| &s.id == session_id)
            .cloned())
    }

    /// Returns all sessions.
    pub fn sessions(&self) -> Result<Vec<VisitorSession>, DomainError> {
        Ok(self.sessions_read()?.clone())
    }

    /// Returns the interactions recorded for a session.
    pub fn interactions_for(&self, session_id: &SessionId) -> Result<Vec<Interaction>, DomainError> {
        Ok(self
            .interactions_read()?
            .iter()
            .filter(|i| i.session_id() == session_id)
            .cloned()
            .collect())
    }

    /// Returns the engagement metrics for a session.
    pub fn engagement_metrics(
        &self,
        session_id: &SessionId,
    ) -> Result<EngagementMetrics, DomainError> {
        self.session(session_id)?
            .map(|s| s.engagement_metrics)
            .ok_or_else(|| Self::not_found(session_id))
    }

    /// Computes the current lead score for a session.
    pub fn lead_score(&self, session_id: &SessionId) -> Result<u8, DomainError> {
        let session = self
            .session(session_id)?
            .ok_or_else(|| Self::not_found(session_id))?;
        let signals = self.signals_for(session_id)?;
        Ok(session.compute_lead_score(&signals))
    }

    /// Derives the current behavioral sentiment for a session.
    pub fn sentiment(&self, session_id: &SessionId) -> Result<Sentiment, DomainError> {
        let session = self
            .session(session_id)?
            .ok_or_else(|| Self::not_found(session_id))?;
        let signals = self.signals_for(session_id)?;
        Ok(session.derive_sentiment(&signals))
    }

    /// Computes the aggregated dashboard view.
    pub fn aggregate_stats(&self) -> Result<AggregateStats, DomainError> {
        let sessions = self.sessions_read()?;
        let interactions = self.interactions_read()?;
        Ok(aggregate(&sessions, &interactions))
    }

    /// Computes the engagement funnel counts.
    pub fn funnel(&self) -> Result<FunnelData, DomainError> {
        let sessions = self.sessions_read()?;
        let interactions = self.interactions_read()?;
        Ok(funnel(&sessions, &interactions))
    }
}

impl Default for TrackingStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventSink for TrackingStore {
    async fn start_session(&self, referrer: Option<String>) -> Result<SessionId, DomainError> {
        let session = VisitorSession::open(
            self.visitor_id.clone(),
            self.user_agent.clone(),
            referrer,
        );
        let session_id = session.id;
        self.sessions_write()?.push(session);
        self.append(&session_id, InteractionKind::ChatStart, HashMap::new())?;
        info!(session_id = %session_id, "tracking session started");
        Ok(session_id)
    }

    async fn record(
        &self,
        session_id: &SessionId,
        kind: InteractionKind,
        data: HashMap<String, Value>,
    ) -> Result<(), DomainError> {
        {
            let mut sessions = self.sessions_write()?;
            let session = sessions
                .iter_mut()
                .find(|s| &s.id == session_id)
                .ok_or_else(|| Self::not_found(session_id))?;
            match kind {
                InteractionKind::QuestionAnswered => {
                    session.engagement_metrics.question_count += 1;
                }
                InteractionKind::CtaClicked => {
                    session.engagement_metrics.click_count += 1;
                }
                _ => {}
            }
        }
        self.append(session_id, kind, data)
    }

    async fn end_session(
        &self,
        session_id: &SessionId,
        profile: &VisitorProfile,
        completed_flow: bool,
    ) -> Result<(), DomainError> {
        let signals = self.signals_for(session_id)?;
        {
            let mut sessions = self.sessions_write()?;
            let session = sessions
                .iter_mut()
                .find(|s| &s.id == session_id)
                .ok_or_else(|| Self::not_found(session_id))?;
            session.ended_at = Some(crate::domain::foundation::Timestamp::now());
            session.completed_flow = completed_flow;
            if !profile.is_empty() {
                session.profile = Some(profile.as_key_values());
            }
            session.lead_score = Some(session.compute_lead_score(&signals));
            session.sentiment = Some(session.derive_sentiment(&signals));
            info!(
                session_id = %session_id,
                completed_flow,
                lead_score = session.lead_score,
                "tracking session ended"
            );
        }
        self.append(session_id, InteractionKind::ChatEnd, HashMap::new())
    }

    async fn add_dwell_time(
        &self,
        session_id: &SessionId,
        seconds: f64,
    ) -> Result<(), DomainError> {
        let mut sessions = self.sessions_write()?;
        let session = sessions
            .iter_mut()
            .find(|s| &s.id == session_id)
            .ok_or_else(|| Self::not_found(session_id))?;
        session.engagement_metrics.dwell_time_total += seconds;
        Ok(())
    }
}
