//! Conversation domain module.
//!
//! The scripted assessment dialogue: step state machine, immutable
//! transcript messages, the visitor profile accumulator, keyword
//! classification, and the pure dialogue resolver.

mod classifier;
mod message;
mod profile;
mod resolver;
mod script;
mod step;

pub use classifier::{classify, ClassifierRule};
pub use message::{Message, ResponseType, Sender};
pub use profile::{ProfileTag, VisitorProfile};
pub use resolver::{AgentReply, AgentUtterance, DialogueResolver};
pub use script::{demo_answer_for_step, question_for_step, ScriptedQuestion, OPENING_GREETING};
pub use step::ConversationStep;
