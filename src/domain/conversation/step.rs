//! Conversation step state machine.
//!
//! Identifies which scripted question is active. Steps only ever advance
//! by one; the transcript never moves backwards.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

use super::profile::ProfileTag;

/// The active step of the scripted assessment dialogue.
///
/// Conversations move strictly forward:
/// - `Opening`: greeting not yet delivered
/// - `Question1`..`Question5`: one of the five profile questions asked
/// - `Final`: recommendation delivered, conversation is read-only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConversationStep {
    /// Conversation created, opening greeting pending.
    #[default]
    Opening,

    /// Journey stage question asked.
    Question1,

    /// Role question asked.
    Question2,

    /// Interest area question asked.
    Question3,

    /// Help need question asked.
    Question4,

    /// Industry question asked.
    Question5,

    /// Recommendation delivered, no further input accepted.
    Final,
}

impl ConversationStep {
    /// Returns the numeric index of this step (0 through 6).
    pub fn index(&self) -> u8 {
        match self {
            Self::Opening => 0,
            Self::Question1 => 1,
            Self::Question2 => 2,
            Self::Question3 => 3,
            Self::Question4 => 4,
            Self::Question5 => 5,
            Self::Final => 6,
        }
    }

    /// Creates a step from its numeric index, if in range.
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Opening),
            1 => Some(Self::Question1),
            2 => Some(Self::Question2),
            3 => Some(Self::Question3),
            4 => Some(Self::Question4),
            5 => Some(Self::Question5),
            6 => Some(Self::Final),
            _ => None,
        }
    }

    /// Returns the step that follows this one, if any.
    pub fn next(&self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// Returns the profile tag this step's answer resolves to.
    ///
    /// The opening greeting and the final state collect nothing.
    pub fn tag(&self) -> Option<ProfileTag> {
        match self {
            Self::Question1 => Some(ProfileTag::JourneyStage),
            Self::Question2 => Some(ProfileTag::Role),
            Self::Question3 => Some(ProfileTag::Interest),
            Self::Question4 => Some(ProfileTag::HelpNeed),
            Self::Question5 => Some(ProfileTag::Industry),
            _ => None,
        }
    }

    /// Returns true if visitor input is accepted at this step.
    pub fn accepts_input(&self) -> bool {
        !matches!(self, Self::Opening | Self::Final)
    }

    /// Returns true if answering this step ends the question flow.
    pub fn is_last_question(&self) -> bool {
        matches!(self, Self::Question5)
    }

    /// Progress through the flow as a percentage, for the widget's
    /// progress indicator: `min(step / 6, 1) * 100`.
    pub fn progress_percent(&self) -> f64 {
        (f64::from(self.index()) / 6.0).min(1.0) * 100.0
    }
}

impl StateMachine for ConversationStep {
    fn can_transition_to(&self, target: &Self) -> bool {
        self.next() == Some(*target)
    }

    fn valid_transitions(&self) -> Vec<Self> {
        self.next().into_iter().collect()
    }
}
