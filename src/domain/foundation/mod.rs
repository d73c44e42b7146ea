//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the AI Navigator domain.

mod errors;
mod ids;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{InteractionId, MessageId, SessionId, VisitorId};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
