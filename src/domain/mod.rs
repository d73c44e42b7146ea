//! Domain layer.
//!
//! Pure business logic with no I/O: the scripted conversation, the
//! static response catalog, engagement analytics arithmetic, and the
//! shared foundation primitives.

pub mod analytics;
pub mod catalog;
pub mod conversation;
pub mod foundation;
