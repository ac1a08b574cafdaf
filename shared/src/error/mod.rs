//! Unified error system for the zone check-in platform
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ApiResponse`]: Unified API response format
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Event errors
//! - 4xxx: Zone errors
//! - 5xxx: Attendee access errors
//! - 6xxx: Staff assignment errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ApiResponse};
//!
//! let err = AppError::new(ErrorCode::ZoneClosed);
//! assert_eq!(err.message, "Zone is closed at this time");
//!
//! let err = AppError::with_message(ErrorCode::AccessDenied, "Access denied for category: Press")
//!     .with_detail("category", "Press");
//!
//! let response = ApiResponse::<()>::error(&err);
//! assert_eq!(response.code, Some(5003));
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
