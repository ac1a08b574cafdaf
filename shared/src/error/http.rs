//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound
            | Self::EventNotFound
            | Self::ZoneNotFound
            | Self::AttendeeNotFound
            | Self::AccessRuleNotFound
            | Self::AccessOverrideNotFound
            | Self::StaffAssignmentNotFound => StatusCode::NOT_FOUND,

            // 409 Conflict
            Self::AlreadyExists => StatusCode::CONFLICT,

            // 401 Unauthorized
            Self::NotAuthenticated | Self::TokenExpired | Self::TokenInvalid => {
                StatusCode::UNAUTHORIZED
            }

            // 403 Forbidden
            Self::PermissionDenied
            | Self::RoleRequired
            | Self::ZoneInactive
            | Self::ZoneClosed
            | Self::AttendeeBlocked
            | Self::AccessDenied
            | Self::RegistrationRequired => StatusCode::FORBIDDEN,

            // 503 Service Unavailable (transient, caller may retry)
            Self::TimeoutError => StatusCode::SERVICE_UNAVAILABLE,

            // 500 Internal Server Error
            Self::Unknown | Self::InternalError | Self::DatabaseError | Self::ConfigError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            // 400 Bad Request (validation)
            Self::ValidationFailed
            | Self::InvalidRequest
            | Self::InvalidFormat
            | Self::RequiredField
            | Self::ZoneInvalidTimeWindow => StatusCode::BAD_REQUEST,
        }
    }
}
