//! Registration gate

use shared::error::{AppError, ErrorCode};
use shared::models::{Attendee, EventZone};

/// What a check-in into a zone must do about registration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationPlan {
    /// Registration zone: register the attendee inside the check-in transaction
    /// (conditional, first registration wins)
    Register,
    /// Zone admits registered attendees only
    RequireRegistered,
    Skip,
}

impl RegistrationPlan {
    pub fn for_zone(zone: &EventZone) -> Self {
        if zone.is_registration_zone {
            Self::Register
        } else if zone.requires_registration {
            Self::RequireRegistered
        } else {
            Self::Skip
        }
    }

    /// Read-only prerequisite check, run before access resolution
    pub fn check(self, attendee: &Attendee) -> Result<(), AppError> {
        if self == Self::RequireRegistered && !attendee.is_registered() {
            return Err(AppError::new(ErrorCode::RegistrationRequired));
        }
        Ok(())
    }
}
