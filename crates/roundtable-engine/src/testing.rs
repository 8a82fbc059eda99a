//! Shared test doubles for engine tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use roundtable_oracle::{GenerationConfig, Oracle, OracleError};

/// Oracle that replays a scripted list of responses and records every call.
pub(crate) struct ScriptedOracle {
    responses: Mutex<VecDeque<String>>,
    prompts: Mutex<Vec<String>>,
    configs: Mutex<Vec<GenerationConfig>>,
}

impl ScriptedOracle {
    pub fn new<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            responses: Mutex::new(responses.into_iter().map(Into::into).collect()),
            prompts: Mutex::new(Vec::new()),
            configs: Mutex::new(Vec::new()),
        }
    }

    /// Number of oracle calls made so far.
    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    /// Prompt of the n-th call.
    pub fn prompt(&self, n: usize) -> String {
        self.prompts.lock().unwrap()[n].clone()
    }

    /// Generation config of the n-th call.
    pub fn config(&self, n: usize) -> GenerationConfig {
        self.configs.lock().unwrap()[n].clone()
    }
}

#[async_trait]
impl Oracle for ScriptedOracle {
    async fn generate(
        &self,
        prompt: &str,
        config: &GenerationConfig,
    ) -> roundtable_oracle::Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.configs.lock().unwrap().push(config.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| OracleError::Transport("scripted oracle exhausted".into()))
    }
}

/// Oracle whose every call fails with the given error constructor.
pub(crate) struct FailingOracle {
    pub error: fn() -> OracleError,
}

#[async_trait]
impl Oracle for FailingOracle {
    async fn generate(
        &self,
        _prompt: &str,
        _config: &GenerationConfig,
    ) -> roundtable_oracle::Result<String> {
        Err((self.error)())
    }
}
