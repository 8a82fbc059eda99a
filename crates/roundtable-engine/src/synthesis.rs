//! PRD synthesis.
//!
//! Merges the original PRD and the full debate transcript into one
//! consolidated improved document. The result is opaque text; no internal
//! structure is validated.

use tracing::info;

use roundtable_models::Turn;
use roundtable_oracle::{GenerationConfig, Oracle};

use crate::error::{EngineError, Result};
use crate::prompts;

/// Generation parameters for synthesis: bounded length, focused sampling.
fn synthesis_config() -> GenerationConfig {
    GenerationConfig::default()
        .with_max_output_tokens(1500)
        .with_temperature(0.3)
        .with_top_p(0.7)
        .with_top_k(20)
}

/// Produces the consolidated improved PRD from a debate transcript.
pub async fn synthesize_prd(
    oracle: &dyn Oracle,
    prd: &str,
    transcript: &[Turn],
) -> Result<String> {
    if prd.trim().is_empty() {
        return Err(EngineError::MissingInput("prd"));
    }
    if transcript.is_empty() {
        return Err(EngineError::MissingInput("debate"));
    }

    let prompt = prompts::synthesis_prompt(prd, transcript);
    let improved = oracle
        .generate(&prompt, &synthesis_config())
        .await
        .map_err(|source| EngineError::SynthesisFailed { source })?;

    info!(
        turns = transcript.len(),
        output_len = improved.len(),
        "PRD synthesis completed"
    );
    Ok(improved.trim().to_string())
}
