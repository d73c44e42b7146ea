//! AI Navigator - Scripted AI-readiness assessment chat engine.
//!
//! This crate drives the embedded chat widget: a fixed five-question
//! dialogue that accumulates a visitor profile, resolves a canned
//! recommendation from static lookup tables, and reports engagement
//! analytics to an in-memory tracking store.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
