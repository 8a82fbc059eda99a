//! Structured-output parsing and speaking-order validation.
//!
//! The single-call debate protocol asks the oracle for an entire multi-round
//! transcript as one JSON array. That output is never trusted: it is parsed
//! against a strict schema (exact field set, exact types) and then checked
//! against the expected speaking order. Parsing first attempts the raw text
//! directly; if that fails, the first bracketed array embedded in the text
//! is extracted and parsed instead. Validation fails closed: any deviation
//! is rejected with the precise reason rather than recovered further.

use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::Deserialize;
use tracing::debug;

use roundtable_models::{AgentName, Turn};

use crate::error::{EngineError, Result};

/// Strict schema for one element of the oracle's transcript array.
///
/// `deny_unknown_fields` makes any extra field a parse failure.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct StructuredTurn {
    name: String,
    message: String,
    round: u32,
}

fn fence_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"```[a-zA-Z]*").expect("static regex"))
}

fn array_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Greedy: first `[` through last `]`, spanning newlines.
    RE.get_or_init(|| Regex::new(r"(?s)\[.*\]").expect("static regex"))
}

/// Strips markdown code fences from oracle output.
pub fn strip_code_fences(text: &str) -> String {
    fence_re().replace_all(text, "").trim().to_string()
}

/// Extracts the first top-level bracketed array embedded in free text.
///
/// Returns `None` when the text contains no bracketed span at all.
pub fn extract_json_array(text: &str) -> Option<&str> {
    array_re().find(text).map(|m| m.as_str())
}

/// Parses oracle output into a transcript, with the bracketed-array
/// fallback, against the strict turn schema.
pub fn parse_structured_transcript(raw: &str) -> Result<Vec<Turn>> {
    let clean = strip_code_fences(raw);

    let parsed: Vec<StructuredTurn> = match serde_json::from_str(&clean) {
        Ok(turns) => turns,
        Err(direct_err) => {
            debug!(raw, "Direct transcript parse failed, trying embedded array");
            let embedded = extract_json_array(&clean).ok_or_else(|| {
                EngineError::MalformedDebateOutput(format!(
                    "no JSON array in oracle output: {}",
                    direct_err
                ))
            })?;
            serde_json::from_str(embedded).map_err(|e| {
                EngineError::MalformedDebateOutput(format!("transcript does not parse: {}", e))
            })?
        }
    };

    parsed
        .into_iter()
        .map(|t| {
            let name = AgentName::from_str(&t.name).map_err(|e| {
                EngineError::MalformedDebateOutput(format!("transcript names {}", e))
            })?;
            Ok(Turn::in_round(name, t.message, t.round))
        })
        .collect()
}

/// Verifies that a transcript matches the configured speaking order.
///
/// Requirements: length equals `agents.len() * rounds`; the transcript
/// partitions into contiguous round blocks of `agents.len()` turns; within
/// block `r` (0-indexed), the turn at position `i` names agent `i` and
/// declares round `r + 1`. Returns the first violation as the error reason.
pub fn validate_debate_order(
    turns: &[Turn],
    agents: &[AgentName],
    rounds: u32,
) -> std::result::Result<(), String> {
    let expected = agents.len() * rounds as usize;
    if turns.len() != expected {
        return Err(format!(
            "expected {} turns ({} agents x {} rounds), got {}",
            expected,
            agents.len(),
            rounds,
            turns.len()
        ));
    }

    for (index, turn) in turns.iter().enumerate() {
        let round = index / agents.len();
        let slot = index % agents.len();
        let expected_agent = agents[slot];

        if turn.name != expected_agent {
            return Err(format!(
                "turn {} should be {} but is {}",
                index, expected_agent, turn.name
            ));
        }
        let expected_round = round as u32 + 1;
        if turn.round != Some(expected_round) {
            return Err(format!(
                "turn {} should declare round {} but declares {:?}",
                index, expected_round, turn.round
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use roundtable_models::AgentName::*;

    fn turn(name: AgentName, round: u32) -> Turn {
        Turn::in_round(name, format!("{} speaks", name), round)
    }

    fn ordered_transcript(agents: &[AgentName], rounds: u32) -> Vec<Turn> {
        let mut turns = Vec::new();
        for round in 1..=rounds {
            for agent in agents {
                turns.push(turn(*agent, round));
            }
        }
        turns
    }

    #[test]
    fn test_valid_order_accepted() {
        let agents = [UxLead, BackendEngineer];
        let turns = ordered_transcript(&agents, 2);
        assert!(validate_debate_order(&turns, &agents, 2).is_ok());
    }

    #[test]
    fn test_wrong_length_rejected() {
        let agents = [UxLead, BackendEngineer];
        let mut turns = ordered_transcript(&agents, 2);
        turns.pop();
        let err = validate_debate_order(&turns, &agents, 2).unwrap_err();
        assert!(err.contains("expected 4 turns"));
    }

    #[test]
    fn test_transposed_pair_rejected() {
        let agents = [UxLead, BackendEngineer, DataScientist];
        let mut turns = ordered_transcript(&agents, 2);
        turns.swap(4, 5); // within the second round block
        assert!(validate_debate_order(&turns, &agents, 2).is_err());
    }

    #[test]
    fn test_round_label_off_by_one_rejected() {
        let agents = [UxLead, BackendEngineer];
        let mut turns = ordered_transcript(&agents, 2);
        turns[2].round = Some(1);
        let err = validate_debate_order(&turns, &agents, 2).unwrap_err();
        assert!(err.contains("round 2"));
    }

    #[test]
    fn test_missing_round_rejected() {
        let agents = [UxLead];
        let turns = vec![Turn::new(UxLead, "no round")];
        assert!(validate_debate_order(&turns, &agents, 1).is_err());
    }

    #[test]
    fn test_extract_array_from_prose() {
        let text = "Here is the debate you asked for:\n[1, 2, 3]\nHope that helps!";
        assert_eq!(extract_json_array(text), Some("[1, 2, 3]"));
    }

    #[test]
    fn test_extract_array_none_without_brackets() {
        assert_eq!(extract_json_array("no array here"), None);
    }

    #[test]
    fn test_fallback_equivalent_to_direct_parse() {
        let array = r#"[{"name": "UX Lead", "message": "hi", "round": 1}]"#;
        let wrapped = format!("Sure! Here's the transcript:\n{}\nLet me know.", array);

        let direct = parse_structured_transcript(array).unwrap();
        let fallback = parse_structured_transcript(&wrapped).unwrap();
        assert_eq!(direct, fallback);
    }

    #[test]
    fn test_parse_strips_code_fences() {
        let raw = "```json\n[{\"name\": \"UX Lead\", \"message\": \"hi\", \"round\": 1}]\n```";
        let turns = parse_structured_transcript(raw).unwrap();
        assert_eq!(turns.len(), 1);
        assert_eq!(turns[0].name, UxLead);
    }

    #[test]
    fn test_parse_rejects_unknown_fields() {
        let raw = r#"[{"name": "UX Lead", "message": "hi", "round": 1, "mood": "angry"}]"#;
        let err = parse_structured_transcript(raw).unwrap_err();
        assert!(matches!(err, EngineError::MalformedDebateOutput(_)));
    }

    #[test]
    fn test_parse_rejects_unknown_agent_name() {
        let raw = r#"[{"name": "Astrologer", "message": "hi", "round": 1}]"#;
        let err = parse_structured_transcript(raw).unwrap_err();
        assert!(err.to_string().contains("unknown agent"));
    }

    #[test]
    fn test_parse_rejects_prose_without_array() {
        let err = parse_structured_transcript("I cannot answer that.").unwrap_err();
        assert!(matches!(err, EngineError::MalformedDebateOutput(_)));
    }

    #[test]
    fn test_parse_rejects_wrong_types() {
        let raw = r#"[{"name": "UX Lead", "message": "hi", "round": "one"}]"#;
        assert!(parse_structured_transcript(raw).is_err());
    }
}
