//! Unified error codes for the zone check-in platform
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Event errors
//! - 4xxx: Zone errors
//! - 5xxx: Attendee access errors
//! - 6xxx: Staff assignment errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so staff apps and the web
/// console can switch on them without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,

    // ==================== 1xxx: Auth ====================
    /// Caller is not authenticated
    NotAuthenticated = 1001,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is invalid
    TokenInvalid = 1004,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Specific role required
    RoleRequired = 2002,

    // ==================== 3xxx: Event ====================
    /// Event not found
    EventNotFound = 3001,

    // ==================== 4xxx: Zone ====================
    /// Zone not found
    ZoneNotFound = 4001,
    /// Zone is not active
    ZoneInactive = 4002,
    /// Zone is outside its opening window
    ZoneClosed = 4003,
    /// Zone opening window is malformed
    ZoneInvalidTimeWindow = 4004,

    // ==================== 5xxx: Attendee access ====================
    /// Attendee not found
    AttendeeNotFound = 5001,
    /// Attendee is blocked
    AttendeeBlocked = 5002,
    /// Access to the zone was denied
    AccessDenied = 5003,
    /// Attendee must pass a registration zone first
    RegistrationRequired = 5004,
    /// Access rule not found
    AccessRuleNotFound = 5005,
    /// Individual access override not found
    AccessOverrideNotFound = 5006,

    // ==================== 6xxx: Staff ====================
    /// Staff assignment not found
    StaffAssignmentNotFound = 6001,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Operation timed out
    TimeoutError = 9004,
    /// Configuration error
    ConfigError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",

            // Auth
            ErrorCode::NotAuthenticated => "User is not authenticated",
            ErrorCode::TokenExpired => "Authentication token has expired",
            ErrorCode::TokenInvalid => "Authentication token is invalid",

            // Permission
            ErrorCode::PermissionDenied => "Permission denied",
            ErrorCode::RoleRequired => "Specific role is required",

            // Event
            ErrorCode::EventNotFound => "Event not found",

            // Zone
            ErrorCode::ZoneNotFound => "Zone not found",
            ErrorCode::ZoneInactive => "Zone is not active",
            ErrorCode::ZoneClosed => "Zone is closed at this time",
            ErrorCode::ZoneInvalidTimeWindow => "Zone time must use HH:MM format",

            // Attendee access
            ErrorCode::AttendeeNotFound => "Attendee not found",
            ErrorCode::AttendeeBlocked => "Attendee is blocked",
            ErrorCode::AccessDenied => "Access denied",
            ErrorCode::RegistrationRequired => "Attendee must register first",
            ErrorCode::AccessRuleNotFound => "Access rule not found",
            ErrorCode::AccessOverrideNotFound => "Access override not found",

            // Staff
            ErrorCode::StaffAssignmentNotFound => "Staff assignment not found",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::TimeoutError => "Operation timed out",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),
            1003 => Ok(ErrorCode::TokenExpired),
            1004 => Ok(ErrorCode::TokenInvalid),

            // Permission
            2001 => Ok(ErrorCode::PermissionDenied),
            2002 => Ok(ErrorCode::RoleRequired),

            // Event
            3001 => Ok(ErrorCode::EventNotFound),

            // Zone
            4001 => Ok(ErrorCode::ZoneNotFound),
            4002 => Ok(ErrorCode::ZoneInactive),
            4003 => Ok(ErrorCode::ZoneClosed),
            4004 => Ok(ErrorCode::ZoneInvalidTimeWindow),

            // Attendee access
            5001 => Ok(ErrorCode::AttendeeNotFound),
            5002 => Ok(ErrorCode::AttendeeBlocked),
            5003 => Ok(ErrorCode::AccessDenied),
            5004 => Ok(ErrorCode::RegistrationRequired),
            5005 => Ok(ErrorCode::AccessRuleNotFound),
            5006 => Ok(ErrorCode::AccessOverrideNotFound),

            // Staff
            6001 => Ok(ErrorCode::StaffAssignmentNotFound),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9004 => Ok(ErrorCode::TimeoutError),
            9005 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
