//! Shared types for the zone check-in platform
//!
//! Domain models, the unified error system and small utilities used by
//! `zone-server` and its clients.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};
