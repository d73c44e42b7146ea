//! Interaction records for the engagement analytics store.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::domain::foundation::{InteractionId, SessionId, Timestamp, VisitorId};

/// The closed set of tracked interaction kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionKind {
    ChatStart,
    ChatEnd,
    QuestionAnswered,
    EmailCollected,
    LeadQualified,
    RecommendationViewed,
    CtaClicked,
    MessageReaction,
}

impl InteractionKind {
    /// Returns the kind as its tracked wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ChatStart => "chat_start",
            Self::ChatEnd => "chat_end",
            Self::QuestionAnswered => "question_answered",
            Self::EmailCollected => "email_collected",
            Self::LeadQualified => "lead_qualified",
            Self::RecommendationViewed => "recommendation_viewed",
            Self::CtaClicked => "cta_clicked",
            Self::MessageReaction => "message_reaction",
        }
    }
}

/// One appended analytics event.
///
/// Immutable after construction; the store is append-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interaction {
    id: InteractionId,
    kind: InteractionKind,
    occurred_at: Timestamp,
    session_id: SessionId,
    visitor_id: VisitorId,
    #[serde(skip_serializing_if = "HashMap::is_empty", default)]
    data: HashMap<String, Value>,
}

impl Interaction {
    /// Creates an interaction occurring now.
    pub fn new(
        kind: InteractionKind,
        session_id: SessionId,
        visitor_id: VisitorId,
        data: HashMap<String, Value>,
    ) -> Self {
        Self {
            id: InteractionId::new(),
            kind,
            occurred_at: Timestamp::now(),
            session_id,
            visitor_id,
            data,
        }
    }

    /// Creates an interaction with an explicit timestamp, used by the
    /// mock fixture generator to backdate events.
    pub fn recorded_at(
        kind: InteractionKind,
        occurred_at: Timestamp,
        session_id: SessionId,
        visitor_id: VisitorId,
        data: HashMap<String, Value>,
    ) -> Self {
        Self {
            id: InteractionId::new(),
            kind,
            occurred_at,
            session_id,
            visitor_id,
            data,
        }
    }

    pub fn id(&self) -> &InteractionId {
        &self.id
    }

    pub fn kind(&self) -> InteractionKind {
        self.kind
    }

    pub fn occurred_at(&self) -> &Timestamp {
        &self.occurred_at
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn visitor_id(&self) -> &VisitorId {
        &self.visitor_id
    }

    pub fn data(&self) -> &HashMap<String, Value> {
        &self.data
    }

    /// Returns a string field from the attached data, if present.
    pub fn data_str(&self, key: &str) -> Option<&str> {
        self.data.get(key).and_then(Value::as_str)
    }
}
