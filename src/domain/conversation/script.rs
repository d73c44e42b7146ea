//! The scripted question catalog.
//!
//! Fixed agent copy for the five-question assessment, plus the canned
//! answers the demo walkthrough feeds back in. Static, read-only data.

use super::message::ResponseType;
use super::step::ConversationStep;

/// The fixed opening greeting delivered before step 1.
pub const OPENING_GREETING: &str =
    "Hi there \u{1f44b} Ready to explore how AI fits into your journey?";

/// One scripted agent question with its choice list.
#[derive(Debug, Clone, Copy)]
pub struct ScriptedQuestion {
    /// The agent copy shown verbatim.
    pub content: &'static str,
    /// How the widget collects the answer.
    pub response_type: ResponseType,
    /// Choice buttons, in display order.
    pub choices: &'static [&'static str],
}

const QUESTIONS: [ScriptedQuestion; 5] = [
    ScriptedQuestion {
        content: "Great! What best describes your current AI journey?",
        response_type: ResponseType::MultiChoice,
        choices: &[
            "Just Starting - New to AI implementation",
            "Exploring - Researching potential applications",
            "Piloting - Testing specific use cases",
            "Scaling - Expanding existing AI solutions",
        ],
    },
    ScriptedQuestion {
        content: "Thanks for sharing! What's your role?",
        response_type: ResponseType::MultiChoice,
        choices: &[
            "Founder/CEO - Business leadership",
            "CTO/Technical Leader - Technology focus",
            "Marketing/Growth - Customer acquisition",
            "HR/People Operations - Team management",
            "Operations/Finance - Business processes",
            "Other Business Function",
        ],
    },
    ScriptedQuestion {
        content: "What area are you most excited to use AI in?",
        response_type: ResponseType::MultiChoice,
        choices: &[
            "Customer Support - Automate responses",
            "Marketing - Content and campaigns",
            "Data Analysis - Business insights",
            "Product Development - Smart features",
            "Knowledge Management - Internal systems",
            "Not Sure Yet - Exploring options",
        ],
    },
    ScriptedQuestion {
        content: "What kind of help do you need most right now?",
        response_type: ResponseType::MultiChoice,
        choices: &[
            "Tutorials & Learning - Educational resources",
            "Use Cases - Real-world examples",
            "Strategic Planning - Roadmap development",
            "Technical Guidance - Implementation help",
            "Business Case - ROI calculation",
        ],
    },
    ScriptedQuestion {
        content: "What industry is your business in?",
        response_type: ResponseType::MultiChoice,
        choices: &[
            "Technology - Software or hardware",
            "Financial Services - Banking, insurance, etc.",
            "Healthcare - Medical services or products",
            "Retail & E-commerce - Consumer goods",
            "Manufacturing - Industrial production",
            "Other",
        ],
    },
];

/// Returns the question asked at a step, if the step asks one.
///
/// `Question1` returns the first question and so on; `Opening` and
/// `Final` have no question entry.
pub fn question_for_step(step: ConversationStep) -> Option<&'static ScriptedQuestion> {
    match step {
        ConversationStep::Question1 => Some(&QUESTIONS[0]),
        ConversationStep::Question2 => Some(&QUESTIONS[1]),
        ConversationStep::Question3 => Some(&QUESTIONS[2]),
        ConversationStep::Question4 => Some(&QUESTIONS[3]),
        ConversationStep::Question5 => Some(&QUESTIONS[4]),
        _ => None,
    }
}

/// The canned answer the demo walkthrough submits at a step.
///
/// Each step answers with its first scripted choice, which keeps the
/// walkthrough deterministic and classifiable by construction.
pub fn demo_answer_for_step(step: ConversationStep) -> Option<&'static str> {
    question_for_step(step).map(|q| q.choices[0])
}
