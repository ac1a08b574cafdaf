//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Authentication errors
/// - 2xxx: Permission errors
/// - 3xxx: Event errors
/// - 4xxx: Zone errors
/// - 5xxx: Attendee access errors
/// - 6xxx: Staff assignment errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Authentication errors (1xxx)
    Auth,
    /// Permission errors (2xxx)
    Permission,
    /// Event errors (3xxx)
    Event,
    /// Zone errors (4xxx)
    Zone,
    /// Attendee access errors (5xxx)
    Access,
    /// Staff assignment errors (6xxx)
    Staff,
    /// System errors (7xxx and above)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Auth,
            2000..3000 => Self::Permission,
            3000..4000 => Self::Event,
            4000..5000 => Self::Zone,
            5000..6000 => Self::Access,
            6000..7000 => Self::Staff,
            _ => Self::System,
        }
    }

    /// Get the category name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Auth => "auth",
            Self::Permission => "permission",
            Self::Event => "event",
            Self::Zone => "zone",
            Self::Access => "access",
            Self::Staff => "staff",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category of this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(ErrorCategory::from_code(3), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(1004), ErrorCategory::Auth);
        assert_eq!(ErrorCategory::from_code(4003), ErrorCategory::Zone);
        assert_eq!(ErrorCategory::from_code(5002), ErrorCategory::Access);
        assert_eq!(ErrorCategory::from_code(9001), ErrorCategory::System);
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::ZoneClosed.category(), ErrorCategory::Zone);
        assert_eq!(ErrorCode::AttendeeBlocked.category(), ErrorCategory::Access);
        assert_eq!(ErrorCode::DatabaseError.category(), ErrorCategory::System);
        assert_eq!(ErrorCategory::Staff.name(), "staff");
    }
}
