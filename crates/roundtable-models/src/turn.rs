//! Debate turns and transcript rendering.

use serde::{Deserialize, Serialize};

use crate::agent::AgentName;

/// A single contribution to a debate.
///
/// Turns are appended to a transcript in chronological speaking order and
/// never mutated after creation. The round number is 1-based and required
/// only in the structured single-call debate variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// Persona that spoke.
    pub name: AgentName,

    /// What was said.
    pub message: String,

    /// 1-based round this turn belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub round: Option<u32>,
}

impl Turn {
    /// Creates a turn without a round number.
    pub fn new(name: AgentName, message: impl Into<String>) -> Self {
        Self {
            name,
            message: message.into(),
            round: None,
        }
    }

    /// Creates a turn belonging to the given 1-based round.
    pub fn in_round(name: AgentName, message: impl Into<String>, round: u32) -> Self {
        Self {
            name,
            message: message.into(),
            round: Some(round),
        }
    }
}

/// Renders a transcript as "name: message" lines for prompt embedding.
pub fn render_transcript(turns: &[Turn]) -> String {
    turns
        .iter()
        .map(|turn| format!("{}: {}", turn.name, turn.message))
        .collect::<Vec<_>>()
        .join("\n")
}
