//! Agent selection.
//!
//! One oracle call chooses the debate panel for a PRD. The oracle is asked
//! to return only names from the closed registry set, and the result is
//! validated against that set before use.

use std::str::FromStr;

use tracing::{debug, info};

use roundtable_models::AgentName;
use roundtable_oracle::{GenerationConfig, Oracle};

use crate::error::{EngineError, Result};
use crate::prompts;
use crate::validate::strip_code_fences;

/// Asks the oracle to pick a panel of personas relevant to the PRD.
///
/// Fails with [`EngineError::InvalidSelection`] when the oracle returns
/// malformed output or an identifier outside the registry. No retry; the
/// error is reportable, not fatal.
pub async fn select_agents(oracle: &dyn Oracle, prd: &str) -> Result<Vec<AgentName>> {
    if prd.trim().is_empty() {
        return Err(EngineError::MissingInput("prd"));
    }

    let prompt = prompts::selection_prompt(prd);
    let raw = oracle
        .generate(&prompt, &GenerationConfig::default().with_temperature(0.4))
        .await
        .map_err(|source| EngineError::SelectionFailed { source })?;

    let clean = strip_code_fences(&raw);
    let names: Vec<String> = serde_json::from_str(&clean).map_err(|e| {
        debug!(%raw, "Agent selection output rejected");
        EngineError::InvalidSelection(format!("output does not parse as a role list: {}", e))
    })?;

    // Ordered set: first occurrence wins, repeats are dropped.
    let mut agents: Vec<AgentName> = Vec::with_capacity(names.len());
    for name in &names {
        let agent = AgentName::from_str(name).map_err(|_| {
            debug!(%raw, role = %name, "Agent selection named a role outside the registry");
            EngineError::InvalidSelection(format!("role not in registry: {}", name))
        })?;
        if !agents.contains(&agent) {
            agents.push(agent);
        }
    }

    info!(panel = agents.len(), "Agent selection completed");
    Ok(agents)
}
