//! The dialogue resolver.
//!
//! Pure turn logic: given the active step, the accumulated profile and
//! the visitor's raw input, produce the agent's reply. All mutation
//! (profile merge, step advance, transcript append) belongs to the
//! caller, which keeps this trivially unit-testable.

use crate::domain::catalog::{
    base_recommendation, competitor_analysis, cost_estimate, implementation_difficulty,
    industry_insights, time_to_value, Recommendation,
};

use super::classifier::classify;
use super::message::ResponseType;
use super::profile::{ProfileTag, VisitorProfile};
use super::script::{demo_answer_for_step, question_for_step, OPENING_GREETING};
use super::step::ConversationStep;

/// Fallback copy for input arriving outside the scripted flow.
const FALLBACK_MESSAGE: &str =
    "Let me help you with your AI journey. What specifically are you looking to achieve?";

/// One agent utterance to deliver to the transcript.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentUtterance {
    /// The agent copy, final form.
    pub content: String,
    /// How the widget collects the answer.
    pub response_type: ResponseType,
    /// Choice buttons, empty for plain text.
    pub choices: Vec<String>,
}

impl AgentUtterance {
    fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            response_type: ResponseType::Text,
            choices: Vec::new(),
        }
    }

    fn question(content: impl Into<String>, choices: &[&str]) -> Self {
        Self {
            content: content.into(),
            response_type: ResponseType::MultiChoice,
            choices: choices.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// The resolver's verdict for one turn.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentReply {
    /// Utterances to deliver, in order.
    pub utterances: Vec<AgentUtterance>,
    /// Tag value classified from the input, for the caller to merge
    /// into the profile.
    pub classified: Option<(ProfileTag, &'static str)>,
    /// The step the conversation advances to once delivered.
    pub next_step: ConversationStep,
    /// The assembled recommendation, present only on the final turn.
    pub recommendation: Option<Recommendation>,
}

impl AgentReply {
    /// Returns true if this reply ends the conversation.
    pub fn is_final(&self) -> bool {
        self.recommendation.is_some()
    }
}

/// Resolves visitor turns against the scripted flow.
///
/// Stateless; every call is a pure function of its arguments.
#[derive(Debug, Clone, Copy, Default)]
pub struct DialogueResolver;

impl DialogueResolver {
    pub fn new() -> Self {
        Self
    }

    /// Produces the agent's reply for one visitor turn.
    ///
    /// - `Opening` ignores the input and delivers the greeting plus the
    ///   first question.
    /// - `Question1`..`Question4` classify the input into the step's tag
    ///   and deliver the next question.
    /// - `Question5` classifies the industry, assembles the single
    ///   recommendation and delivers the closing message.
    /// - `Final` returns a fallback that re-presents the last question's
    ///   choices; the scheduler gates input before this is reachable.
    ///
    /// When `demo_active` is set and the step has a canned answer, that
    /// answer replaces `raw_input` before classification so scripted
    /// walkthroughs are deterministic.
    pub fn resolve(
        &self,
        raw_input: &str,
        step: ConversationStep,
        profile: &VisitorProfile,
        demo_active: bool,
    ) -> AgentReply {
        let input = if demo_active {
            demo_answer_for_step(step).unwrap_or(raw_input)
        } else {
            raw_input
        };

        match step {
            ConversationStep::Opening => Self::opening(),
            ConversationStep::Question5 => Self::closing(input, profile),
            ConversationStep::Final => Self::fallback(),
            question_step => Self::advance(input, question_step),
        }
    }

    fn opening() -> AgentReply {
        let first = question_for_step(ConversationStep::Question1);
        let mut utterances = vec![AgentUtterance::text(OPENING_GREETING)];
        if let Some(q) = first {
            utterances.push(AgentUtterance::question(q.content, q.choices));
        }
        AgentReply {
            utterances,
            classified: None,
            next_step: ConversationStep::Question1,
            recommendation: None,
        }
    }

    fn advance(input: &str, step: ConversationStep) -> AgentReply {
        let tag = step.tag();
        let classified = tag.map(|t| (t, classify(t, input)));
        let next_step = step.next().unwrap_or(ConversationStep::Final);

        let utterances = match question_for_step(next_step) {
            Some(q) => vec![AgentUtterance::question(q.content, q.choices)],
            None => vec![AgentUtterance::text(FALLBACK_MESSAGE)],
        };

        AgentReply {
            utterances,
            classified,
            next_step,
            recommendation: None,
        }
    }

    fn closing(input: &str, profile: &VisitorProfile) -> AgentReply {
        let industry = classify(ProfileTag::Industry, input);
        let recommendation = Self::assemble_recommendation(profile, industry);

        let role = profile.get(ProfileTag::Role).unwrap_or("");
        let role_label = match role {
            "founder" => "founder/CEO",
            "technical" => "technical leader",
            "marketing" => "marketing professional",
            "hr" => "HR professional",
            _ => "business professional",
        };
        let content = format!(
            "Thanks for sharing your AI journey with me! Based on your responses, \
             I've created a personalized AI readiness assessment and recommendations \
             specifically tailored to your needs as a {role_label} in the {industry} industry."
        );

        AgentReply {
            utterances: vec![AgentUtterance::text(content)],
            classified: Some((ProfileTag::Industry, industry)),
            next_step: ConversationStep::Final,
            recommendation: Some(recommendation),
        }
    }

    fn fallback() -> AgentReply {
        let last = question_for_step(ConversationStep::Question5);
        let utterances = match last {
            Some(q) => vec![AgentUtterance::question(FALLBACK_MESSAGE, q.choices)],
            None => vec![AgentUtterance::text(FALLBACK_MESSAGE)],
        };
        AgentReply {
            utterances,
            classified: None,
            next_step: ConversationStep::Final,
            recommendation: None,
        }
    }

    /// Two-level catalog lookup: base entry by profile key, then the
    /// industry, competitor and estimate supplements. Every lookup has
    /// a default, so assembly never fails.
    fn assemble_recommendation(profile: &VisitorProfile, industry: &str) -> Recommendation {
        let mut rec = base_recommendation(&profile.recommendation_key()).clone();

        rec.industry_insights = Some(industry_insights(industry).to_vec());

        let stage = profile.get(ProfileTag::JourneyStage).unwrap_or("");
        let interest = profile.get(ProfileTag::Interest).unwrap_or("");

        if rec.competitor_analysis.is_none() {
            rec.competitor_analysis = Some(competitor_analysis(interest).to_vec());
        }

        if !stage.is_empty() && !interest.is_empty() {
            rec.implementation_difficulty = Some(implementation_difficulty(stage, interest));
            rec.estimated_time_to_value = Some(time_to_value(stage, interest).to_string());
            rec.estimated_cost = Some(cost_estimate(stage, interest).to_string());
        }

        rec.sort_by_rank();
        rec
    }
}
