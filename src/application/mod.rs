//! Application layer.
//!
//! Orchestrates the domain: the turn scheduler that owns a live
//! conversation, the synthetic typing delay model, and the background
//! dwell tracker.

mod chat_session;
mod dwell;
mod turn;
mod typing;

pub use chat_session::ChatSession;
pub use dwell::DwellTracker;
pub use turn::{TurnOutcome, TurnPhase};
pub use typing::TypingProfile;
