//! Zone access and check-in operations
//!
//! Each operation takes the pool (and the [`Caller`](crate::auth::Caller)
//! where identity matters) and returns [`ServiceResult`](crate::error::ServiceResult).

pub mod access;
pub mod checkin;
pub mod days;
pub mod registration;
pub mod registry;
pub mod resolver;
pub mod staff;
