//! zone-server: conference zone access control and check-in
//!
//! Staff scan an attendee badge at a zone checkpoint; the server checks the
//! zone is open, applies the registration prerequisite and access rules, and
//! records at most one check-in per attendee, zone and event day.

pub mod api;
pub mod auth;
pub mod config;
pub mod services;
pub mod db;
pub mod error;
pub mod logger;
pub mod state;

pub use api::build_router;
pub use config::Config;
pub use state::AppState;
