//! Core data models for Roundtable.
//!
//! This crate provides the fundamental data types used throughout the
//! Roundtable system: the closed set of debate personas, their static
//! profile registry, and the turns that make up a debate transcript.

pub mod agent;
pub mod turn;

// Re-export main types
pub use agent::{lookup, AgentName, AgentProfile, UnknownAgent, ALL_AGENTS};
pub use turn::{render_transcript, Turn};
