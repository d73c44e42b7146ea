//! Turn phases and outcomes for the chat scheduler.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::Recommendation;
use crate::domain::conversation::Message;
use crate::domain::foundation::StateMachine;

/// Phase of the turn currently in flight.
///
/// Phases move strictly forward through one turn and come back to
/// `Idle`, or to `Completed` once the recommendation is delivered.
/// Agent-initiated turns (the opening greeting) have no echo leg and
/// enter at `AgentTyping` directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TurnPhase {
    /// No turn in flight; input accepted.
    #[default]
    Idle,

    /// Visitor input accepted, echo delay pending.
    UserEchoPending,

    /// Visitor message appended to the transcript.
    UserEchoed,

    /// Typing indicator up, agent delay pending.
    AgentTyping,

    /// Agent reply appended.
    AgentResponded,

    /// Recommendation delivered; terminal.
    Completed,
}

impl StateMachine for TurnPhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        matches!(
            (self, target),
            (Self::Idle, Self::UserEchoPending)
                | (Self::Idle, Self::AgentTyping)
                | (Self::UserEchoPending, Self::UserEchoed)
                | (Self::UserEchoed, Self::AgentTyping)
                | (Self::AgentTyping, Self::AgentResponded)
                | (Self::AgentResponded, Self::Idle)
                | (Self::AgentResponded, Self::Completed)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        match self {
            Self::Idle => vec![Self::UserEchoPending, Self::AgentTyping],
            Self::UserEchoPending => vec![Self::UserEchoed],
            Self::UserEchoed => vec![Self::AgentTyping],
            Self::AgentTyping => vec![Self::AgentResponded],
            Self::AgentResponded => vec![Self::Idle, Self::Completed],
            Self::Completed => vec![],
        }
    }
}

/// What one resolved turn produced.
#[derive(Debug, Clone)]
pub struct TurnOutcome {
    /// Agent messages appended by this turn, in order.
    pub agent_messages: Vec<Message>,
    /// The recommendation, present only on the completing turn.
    pub recommendation: Option<Recommendation>,
    /// Progress through the flow after this turn, 0 to 100.
    pub progress_percent: f64,
    /// True once the conversation has completed.
    pub completed: bool,
}
