//! Application state shared across handlers.

use std::sync::Arc;

use roundtable_engine::DebateConfig;
use roundtable_oracle::Oracle;

use crate::config::ApiConfig;
use crate::pdf::PdfRenderer;
use crate::store::PrdStore;

/// Application state shared across all handlers.
///
/// Every collaborator is an explicitly constructed, injected handle: the
/// oracle client is built once at startup and passed in here, never held as
/// hidden process-wide state. Sessions do not share mutable state; each
/// request works on values it owns.
#[derive(Clone)]
pub struct AppState {
    /// API configuration.
    pub config: Arc<ApiConfig>,
    /// The text-generation oracle.
    pub oracle: Arc<dyn Oracle>,
    /// Debate orchestration defaults; requests may override rounds and
    /// protocol.
    pub debate: Arc<DebateConfig>,
    /// PDF rendering collaborator.
    pub renderer: Arc<dyn PdfRenderer>,
    /// PRD persistence collaborator (external interface; no-op by default).
    pub store: Arc<dyn PrdStore>,
}

impl AppState {
    /// Creates a new AppState with all collaborators.
    pub fn new(
        config: ApiConfig,
        oracle: Arc<dyn Oracle>,
        debate: DebateConfig,
        renderer: Arc<dyn PdfRenderer>,
        store: Arc<dyn PrdStore>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            oracle,
            debate: Arc::new(debate),
            renderer,
            store,
        }
    }
}
