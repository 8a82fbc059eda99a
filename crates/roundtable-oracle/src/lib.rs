//! Oracle boundary for Roundtable.
//!
//! The "oracle" is the external text-generation service. This crate defines
//! the [`Oracle`] trait that the rest of the system programs against, the
//! generation parameters passed per call, and a Gemini-backed client.
//!
//! The client is an explicitly constructed object: it is built once at
//! service startup with an injected API key and passed by handle into each
//! component that needs it. There is no hidden process-wide client.

pub mod config;
pub mod error;
pub mod gemini;
pub mod oracle;

pub use config::GenerationConfig;
pub use error::{OracleError, Result};
pub use gemini::{GeminiClient, GEMINI_API_KEY_ENV};
pub use oracle::Oracle;
