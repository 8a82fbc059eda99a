//! API request handlers.

pub mod agents;
pub mod debate;
pub mod deployment;
pub mod export;
pub mod health;
pub mod save;
pub mod synthesize;

pub use agents::*;
pub use debate::*;
pub use deployment::*;
pub use export::*;
pub use health::*;
pub use save::*;
pub use synthesize::*;
