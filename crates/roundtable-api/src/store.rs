//! PRD persistence collaborator boundary.
//!
//! Durable storage is explicitly out of scope for the core; the save
//! operation is an external interface. The default implementation accepts
//! and discards.

use async_trait::async_trait;
use thiserror::Error;
use tracing::info;

/// Errors from the persistence collaborator.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store rejected or could not complete the save.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Saves finalized PRD documents.
#[async_trait]
pub trait PrdStore: Send + Sync {
    /// Persists the given PRD content.
    async fn save(&self, content: &str) -> Result<(), StoreError>;
}

/// Store that accepts every save without persisting anything.
pub struct NoopStore;

#[async_trait]
impl PrdStore for NoopStore {
    async fn save(&self, content: &str) -> Result<(), StoreError> {
        info!(content_len = content.len(), "PRD save accepted (no-op store)");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_noop_store_accepts() {
        assert!(NoopStore.save("final PRD").await.is_ok());
    }
}
