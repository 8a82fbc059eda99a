//! Debate orchestration.
//!
//! One orchestrator, two protocols behind a tagged selector:
//!
//! - [`DebateProtocol::PerTurn`] — one oracle call per turn, strictly
//!   sequential so every turn's prompt includes everything said before it.
//! - [`DebateProtocol::SingleCall`] — one oracle call for the entire
//!   multi-round transcript, validated against the expected speaking order.
//!
//! Either way the transcript is owned by the invocation that builds it; any
//! failure aborts the whole orchestration and the partial transcript is
//! discarded.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use roundtable_models::{AgentName, Turn};
use roundtable_oracle::{GenerationConfig, Oracle};

use crate::error::{EngineError, Result};
use crate::prompts;
use crate::validate::{parse_structured_transcript, validate_debate_order};

/// How the oracle is consulted during a debate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DebateProtocol {
    /// One oracle call per agent turn.
    #[default]
    PerTurn,
    /// One oracle call for the whole multi-round transcript.
    SingleCall,
}

/// Configuration for the debate orchestrator.
///
/// `max_rounds` and `max_panel` exist to control oracle cost and latency,
/// not for correctness; both are plain configuration.
#[derive(Debug, Clone)]
pub struct DebateConfig {
    /// Which protocol to run.
    pub protocol: DebateProtocol,
    /// Requested number of rounds.
    pub rounds: u32,
    /// Upper bound on rounds for the per-turn protocol.
    pub max_rounds: u32,
    /// Upper bound on panel size for the single-call protocol.
    pub max_panel: usize,
    /// Minimum delay between consecutive oracle calls (per-turn protocol),
    /// skipped after the final turn. Respects oracle request-rate ceilings.
    pub turn_delay: Duration,
}

impl Default for DebateConfig {
    fn default() -> Self {
        Self {
            protocol: DebateProtocol::PerTurn,
            rounds: 2,
            max_rounds: 2,
            max_panel: 4,
            turn_delay: Duration::from_millis(2500),
        }
    }
}

impl DebateConfig {
    /// Sets the protocol.
    pub fn with_protocol(mut self, protocol: DebateProtocol) -> Self {
        self.protocol = protocol;
        self
    }

    /// Sets the requested round count.
    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }

    /// Sets the per-turn round bound.
    pub fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    /// Sets the single-call panel bound.
    pub fn with_max_panel(mut self, max_panel: usize) -> Self {
        self.max_panel = max_panel;
        self
    }

    /// Sets the inter-call delay.
    pub fn with_turn_delay(mut self, delay: Duration) -> Self {
        self.turn_delay = delay;
        self
    }
}

/// Runs a debate over the PRD among the given agents.
///
/// Inputs are validated before any oracle call. Cancellation is honored
/// between turns, never mid-call; a cancelled debate fails with
/// [`EngineError::Cancelled`] and its partial transcript is discarded.
pub async fn run_debate(
    oracle: &dyn Oracle,
    prd: &str,
    agents: &[AgentName],
    config: &DebateConfig,
    cancel: &CancellationToken,
) -> Result<Vec<Turn>> {
    if prd.trim().is_empty() {
        return Err(EngineError::MissingInput("prd"));
    }
    if agents.is_empty() {
        return Err(EngineError::MissingInput("agents"));
    }

    match config.protocol {
        DebateProtocol::PerTurn => run_per_turn(oracle, prd, agents, config, cancel).await,
        DebateProtocol::SingleCall => run_single_call(oracle, prd, agents, config).await,
    }
}

/// Protocol A: one strictly ordered oracle call per turn.
async fn run_per_turn(
    oracle: &dyn Oracle,
    prd: &str,
    agents: &[AgentName],
    config: &DebateConfig,
    cancel: &CancellationToken,
) -> Result<Vec<Turn>> {
    let rounds = config.rounds.min(config.max_rounds);
    let total = agents.len() as u32 * rounds;
    info!(
        agents = agents.len(),
        rounds, "Starting per-turn debate orchestration"
    );

    let mut transcript: Vec<Turn> = Vec::with_capacity(total as usize);

    for round in 0..rounds {
        for agent in agents {
            if cancel.is_cancelled() {
                info!(completed_turns = transcript.len(), "Debate cancelled between turns");
                return Err(EngineError::Cancelled);
            }

            let prompt = prompts::debate_turn_prompt(prd, agent.profile(), &transcript);
            let reply = oracle
                .generate(&prompt, &GenerationConfig::default())
                .await
                .map_err(|source| EngineError::DebateFailed { source })?;

            debug!(%agent, round = round + 1, reply_len = reply.len(), "Turn completed");
            transcript.push(Turn::in_round(*agent, reply.trim().to_string(), round + 1));

            // Rate limiting: skipped only after the very last turn.
            let is_last = transcript.len() as u32 == total;
            if !is_last && !config.turn_delay.is_zero() {
                tokio::time::sleep(config.turn_delay).await;
            }
        }
    }

    Ok(transcript)
}

/// Protocol B: one structured-output call for the whole transcript.
async fn run_single_call(
    oracle: &dyn Oracle,
    prd: &str,
    agents: &[AgentName],
    config: &DebateConfig,
) -> Result<Vec<Turn>> {
    let panel = if agents.len() > config.max_panel {
        warn!(
            requested = agents.len(),
            max_panel = config.max_panel,
            "Panel larger than single-call bound, truncating"
        );
        &agents[..config.max_panel]
    } else {
        agents
    };

    info!(
        agents = panel.len(),
        rounds = config.rounds,
        "Starting single-call debate orchestration"
    );

    let prompt = prompts::structured_debate_prompt(prd, panel, config.rounds);
    let raw = oracle
        .generate(&prompt, &GenerationConfig::default())
        .await
        .map_err(|source| EngineError::DebateFailed { source })?;

    let transcript = parse_structured_transcript(&raw).map_err(|e| {
        debug!(%raw, "Structured debate output rejected");
        e
    })?;
    validate_debate_order(&transcript, panel, config.rounds).map_err(|reason| {
        debug!(%raw, %reason, "Structured debate order rejected");
        EngineError::MalformedDebateOutput(reason)
    })?;

    Ok(transcript)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FailingOracle, ScriptedOracle};
    use roundtable_models::AgentName::*;
    use roundtable_oracle::OracleError;
    use serde_json::json;

    fn fast_config() -> DebateConfig {
        DebateConfig::default().with_turn_delay(Duration::ZERO)
    }

    #[tokio::test]
    async fn test_per_turn_length_and_order() {
        let agents = [UxLead, BackendEngineer];
        let oracle = ScriptedOracle::new(["m1", "m2", "m3", "m4"]);
        let config = fast_config().with_rounds(2);

        let transcript = run_debate(&oracle, "PRD", &agents, &config, &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(transcript.len(), 4);
        // Round-major, agent-order-minor.
        assert_eq!(transcript[0].name, UxLead);
        assert_eq!(transcript[1].name, BackendEngineer);
        assert_eq!(transcript[2].name, UxLead);
        assert_eq!(transcript[3].name, BackendEngineer);
        assert_eq!(transcript[0].round, Some(1));
        assert_eq!(transcript[3].round, Some(2));
        assert_eq!(oracle.calls(), 4);
    }

    #[tokio::test]
    async fn test_per_turn_prompts_accumulate_history() {
        let agents = [UxLead, BackendEngineer];
        let oracle = ScriptedOracle::new(["first point", "second point"]);
        let config = fast_config().with_rounds(1);

        run_debate(&oracle, "PRD", &agents, &config, &CancellationToken::new())
            .await
            .unwrap();

        assert!(oracle.prompt(0).contains("Previous Debate:\nNone"));
        assert!(oracle.prompt(1).contains("UX Lead: first point"));
    }

    #[tokio::test]
    async fn test_per_turn_caps_rounds() {
        let agents = [UxLead];
        let oracle = ScriptedOracle::new(["a", "b"]);
        let config = fast_config().with_rounds(10).with_max_rounds(2);

        let transcript = run_debate(&oracle, "PRD", &agents, &config, &CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(transcript.len(), 2);
    }

    #[tokio::test]
    async fn test_per_turn_oracle_failure_discards_partial() {
        let agents = [UxLead, BackendEngineer];
        // Only one response scripted; the second call fails.
        let oracle = ScriptedOracle::new(["only turn"]);
        let config = fast_config().with_rounds(1);

        let err = run_debate(&oracle, "PRD", &agents, &config, &CancellationToken::new())
            .await
            .unwrap_err();
        assert!(matches!(err, EngineError::DebateFailed { .. }));
    }

    #[tokio::test]
    async fn test_per_turn_cancellation_before_first_turn() {
        let agents = [UxLead];
        let oracle = ScriptedOracle::new(["never used"]);
        let cancel = CancellationToken::new();
        cancel.cancel();

        let err = run_debate(&oracle, "PRD", &agents, &fast_config(), &cancel)
            .await
            .unwrap_err();
        assert!(matches!(err, EngineError::Cancelled));
        assert_eq!(oracle.calls(), 0);
    }

    #[tokio::test]
    async fn test_empty_prd_rejected_before_oracle() {
        let oracle = FailingOracle {
            error: || OracleError::Empty,
        };
        let err = run_debate(
            &oracle,
            "   ",
            &[UxLead],
            &fast_config(),
            &CancellationToken::new(),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, EngineError::MissingInput("prd")));
    }

    #[tokio::test]
    async fn test_empty_panel_rejected_before_oracle() {
        let oracle = ScriptedOracle::new(["never used"]);
        let err = run_debate(&oracle, "PRD", &[], &fast_config(), &CancellationToken::new())
            .await
            .unwrap_err();
        assert!(matches!(err, EngineError::MissingInput("agents")));
        assert_eq!(oracle.calls(), 0);
    }

    fn structured_response(agents: &[AgentName], rounds: u32) -> String {
        let mut turns = Vec::new();
        for round in 1..=rounds {
            for agent in agents {
                turns.push(json!({
                    "name": agent.as_str(),
                    "message": format!("{} in round {}", agent, round),
                    "round": round,
                }));
            }
        }
        serde_json::to_string(&turns).unwrap()
    }

    #[tokio::test]
    async fn test_single_call_valid_transcript() {
        let agents = [UxLead, DataScientist];
        let oracle = ScriptedOracle::new([structured_response(&agents, 2)]);
        let config = fast_config()
            .with_protocol(DebateProtocol::SingleCall)
            .with_rounds(2);

        let transcript = run_debate(&oracle, "PRD", &agents, &config, &CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(transcript.len(), 4);
        assert_eq!(oracle.calls(), 1);
    }

    #[tokio::test]
    async fn test_single_call_wrong_order_rejected() {
        let agents = [UxLead, DataScientist];
        // Swapped speaking order inside round 1.
        let response = structured_response(&[DataScientist, UxLead], 1);
        let oracle = ScriptedOracle::new([response]);
        let config = fast_config()
            .with_protocol(DebateProtocol::SingleCall)
            .with_rounds(1);

        let err = run_debate(&oracle, "PRD", &agents, &config, &CancellationToken::new())
            .await
            .unwrap_err();
        assert!(matches!(err, EngineError::MalformedDebateOutput(_)));
    }

    #[tokio::test]
    async fn test_single_call_prose_wrapped_array_accepted() {
        let agents = [UxLead];
        let wrapped = format!(
            "Here you go:\n{}\nEnjoy.",
            structured_response(&agents, 1)
        );
        let oracle = ScriptedOracle::new([wrapped]);
        let config = fast_config()
            .with_protocol(DebateProtocol::SingleCall)
            .with_rounds(1);

        let transcript = run_debate(&oracle, "PRD", &agents, &config, &CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(transcript.len(), 1);
    }

    #[tokio::test]
    async fn test_single_call_truncates_panel() {
        let agents = [UxLead, BackendEngineer, DataScientist];
        let oracle = ScriptedOracle::new([structured_response(&agents[..2], 1)]);
        let config = fast_config()
            .with_protocol(DebateProtocol::SingleCall)
            .with_rounds(1)
            .with_max_panel(2);

        let transcript = run_debate(&oracle, "PRD", &agents, &config, &CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(transcript.len(), 2);
    }

    #[test]
    fn test_protocol_serde_tags() {
        assert_eq!(
            serde_json::to_string(&DebateProtocol::PerTurn).unwrap(),
            "\"per-turn\""
        );
        let parsed: DebateProtocol = serde_json::from_str("\"single-call\"").unwrap();
        assert_eq!(parsed, DebateProtocol::SingleCall);
    }

    #[test]
    fn test_config_defaults() {
        let config = DebateConfig::default();
        assert_eq!(config.protocol, DebateProtocol::PerTurn);
        assert_eq!(config.rounds, 2);
        assert_eq!(config.max_rounds, 2);
        assert_eq!(config.max_panel, 4);
        assert_eq!(config.turn_delay, Duration::from_millis(2500));
    }
}
