//! Per-call generation parameters.

use serde::Serialize;

/// Sampling and length parameters for a single oracle call.
///
/// All fields are optional; unset fields are omitted from the request so the
/// oracle applies its own defaults. Callers that need low-variance output
/// (synthesis, deployment planning) tighten these per call.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Maximum tokens to generate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,

    /// Sampling temperature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Nucleus sampling cutoff.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,

    /// Top-k sampling cutoff.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
}

impl GenerationConfig {
    /// Sets the maximum output length.
    pub fn with_max_output_tokens(mut self, tokens: u32) -> Self {
        self.max_output_tokens = Some(tokens);
        self
    }

    /// Sets the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Sets the nucleus sampling cutoff.
    pub fn with_top_p(mut self, top_p: f32) -> Self {
        self.top_p = Some(top_p);
        self
    }

    /// Sets the top-k sampling cutoff.
    pub fn with_top_k(mut self, top_k: u32) -> Self {
        self.top_k = Some(top_k);
        self
    }

    /// Whether every field is unset.
    pub fn is_empty(&self) -> bool {
        self.max_output_tokens.is_none()
            && self.temperature.is_none()
            && self.top_p.is_none()
            && self.top_k.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert!(GenerationConfig::default().is_empty());
    }

    #[test]
    fn test_builders() {
        let config = GenerationConfig::default()
            .with_max_output_tokens(1500)
            .with_temperature(0.3)
            .with_top_p(0.7)
            .with_top_k(20);
        assert_eq!(config.max_output_tokens, Some(1500));
        assert_eq!(config.temperature, Some(0.3));
        assert!(!config.is_empty());
    }

    #[test]
    fn test_serializes_camel_case_and_skips_unset() {
        let config = GenerationConfig::default().with_temperature(0.4);
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["temperature"], 0.4);
        assert!(json.get("maxOutputTokens").is_none());
        assert!(json.get("topP").is_none());
    }
}
