//! REST API for Roundtable.
//!
//! This crate provides the HTTP surface over the debate engine:
//! - agent selection, debate, synthesis, and deployment-plan endpoints
//! - text/PDF export of the final document
//! - the save-PRD collaborator boundary
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use roundtable_api::{serve, ApiConfig, AppState, ChromiumRenderer, NoopStore};
//! use roundtable_engine::DebateConfig;
//! use roundtable_oracle::GeminiClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let oracle = Arc::new(GeminiClient::from_env()?);
//!     let state = AppState::new(
//!         ApiConfig::default(),
//!         oracle,
//!         DebateConfig::default(),
//!         Arc::new(ChromiumRenderer::discover()?),
//!         Arc::new(NoopStore),
//!     );
//!     serve(ApiConfig::default(), state).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod html;
pub mod pdf;
pub mod router;
pub mod state;
pub mod store;
pub mod types;

pub use config::ApiConfig;
pub use error::{ApiError, Result};
pub use pdf::{ChromiumRenderer, PdfRenderer, RenderError, UnavailableRenderer};
pub use router::{create_router, serve};
pub use state::AppState;
pub use store::{NoopStore, PrdStore, StoreError};
