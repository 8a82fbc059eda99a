//! The oracle trait — the seam between the core and the LLM service.

use async_trait::async_trait;

use crate::config::GenerationConfig;
use crate::error::Result;

/// A text-completion oracle.
///
/// Implementations accept a prompt plus optional generation parameters and
/// return generated text. Calls may fail transiently (callers decide whether
/// to retry; the core never retries internally) or return text that does not
/// match the requested format — output must always be validated, never
/// trusted.
#[async_trait]
pub trait Oracle: Send + Sync {
    /// Generates text for the given prompt.
    async fn generate(&self, prompt: &str, config: &GenerationConfig) -> Result<String>;
}
