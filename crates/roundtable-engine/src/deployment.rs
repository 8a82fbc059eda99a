//! Deployment-plan generation.
//!
//! A secondary synthesis step that turns a finalized PRD into an operational
//! rollout plan. The oracle is instructed to answer in plain text; because
//! it may not comply, residual markup is stripped afterwards. The cleanup is
//! idempotent.

use std::sync::OnceLock;

use regex::Regex;
use tracing::info;

use roundtable_oracle::{GenerationConfig, Oracle};

use crate::error::{EngineError, Result};
use crate::prompts;

/// Generation parameters for plan generation: bounded length, low variance.
fn plan_config() -> GenerationConfig {
    GenerationConfig::default()
        .with_max_output_tokens(1024)
        .with_temperature(0.2)
        .with_top_p(0.7)
        .with_top_k(20)
}

fn fence_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"```[a-zA-Z]*").expect("static regex"))
}

fn heading_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)^#+[ \t]*").expect("static regex"))
}

fn blank_run_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n{4,}").expect("static regex"))
}

/// Strips residual markup and collapses blank-line runs.
///
/// Removes code fences and backticks, drops leading heading markers, and
/// collapses runs of 3+ blank lines to exactly one blank line. Running it
/// twice yields the same output as running it once.
pub fn clean_plan_text(text: &str) -> String {
    let text = fence_re().replace_all(text, "");
    let text = text.replace('`', "");
    let text = heading_re().replace_all(&text, "");
    let text = blank_run_re().replace_all(&text, "\n\n");
    text.trim().to_string()
}

/// Generates a plain-text deployment plan for the given final PRD.
pub async fn generate_deployment_plan(oracle: &dyn Oracle, prd: &str) -> Result<String> {
    if prd.trim().is_empty() {
        return Err(EngineError::MissingInput("prdContent"));
    }

    let prompt = prompts::deployment_plan_prompt(prd);
    let raw = oracle
        .generate(&prompt, &plan_config())
        .await
        .map_err(|source| EngineError::PlanGenerationFailed { source })?;

    let plan = clean_plan_text(&raw);
    info!(output_len = plan.len(), "Deployment plan generated");
    Ok(plan)
}
