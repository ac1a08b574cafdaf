//! Data models
//!
//! Shared between zone-server and its clients (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` snowflakes, timestamps are Unix milliseconds.

pub mod access;
pub mod attendee;
pub mod checkin;
pub mod event;
pub mod staff;
pub mod zone;

// Re-exports
pub use access::*;
pub use attendee::*;
pub use checkin::*;
pub use event::*;
pub use staff::*;
pub use zone::*;
