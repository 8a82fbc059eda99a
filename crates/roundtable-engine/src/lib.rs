//! Debate engine for Roundtable.
//!
//! This crate drives the whole PRD-improvement pipeline against an injected
//! [`roundtable_oracle::Oracle`]:
//!
//! - agent selection (one oracle call, validated against the closed registry)
//! - debate orchestration (per-turn incremental or single structured call)
//! - structured-output validation of single-call transcripts
//! - synthesis of the improved PRD from the transcript
//! - deployment-plan generation with markup cleanup
//!
//! Every operation is scoped to one invocation: failures abort that
//! operation and discard any partial transcript; nothing here is fatal to
//! the hosting process.

pub mod debate;
pub mod deployment;
pub mod error;
pub mod prompts;
pub mod selector;
pub mod synthesis;
pub mod validate;

#[cfg(test)]
pub(crate) mod testing;

pub use debate::{run_debate, DebateConfig, DebateProtocol};
pub use deployment::generate_deployment_plan;
pub use error::{EngineError, Result};
pub use selector::select_agents;
pub use synthesis::synthesize_prd;
pub use validate::{extract_json_array, parse_structured_transcript, validate_debate_order};
