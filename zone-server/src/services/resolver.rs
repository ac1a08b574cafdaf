//! Access resolver
//!
//! Pure decision over an attendee, their optional individual override and the
//! zone's category rules. Stages run in order; the first stage that returns
//! anything other than [`Verdict::Continue`] decides.

use serde::Serialize;
use shared::error::AppError;
use shared::models::{Attendee, AttendeeZoneAccess, ZoneAccessRule};

pub const REASON_BLOCKED: &str = "Attendee is blocked";
pub const REASON_OVERRIDE_GRANTED: &str = "Access granted (individual override)";
pub const REASON_OVERRIDE_DENIED: &str = "Access denied (individual override)";
pub const REASON_CATEGORY_GRANTED: &str = "Access granted by category";
pub const REASON_CATEGORY_UNLISTED: &str = "Category not authorized for this zone";
pub const REASON_DEFAULT: &str = "Access granted (default)";

/// Inputs of one access decision
#[derive(Debug, Clone, Copy)]
pub struct AccessContext<'a> {
    pub attendee: &'a Attendee,
    pub override_row: Option<&'a AttendeeZoneAccess>,
    pub rules: &'a [ZoneAccessRule],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Allow(String),
    Deny(String),
    Continue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessDecision {
    pub allowed: bool,
    pub reason: String,
    /// Name of the stage that decided
    pub stage: &'static str,
}

impl AccessDecision {
    /// `Ok` when allowed, otherwise a 403 carrying the reason
    pub fn into_result(self) -> Result<Self, AppError> {
        if self.allowed {
            return Ok(self);
        }
        let err = if self.stage == "blocked" {
            AppError::attendee_blocked()
        } else {
            AppError::access_denied(self.reason)
        };
        Err(err.with_detail("stage", self.stage))
    }
}

type Stage = (&'static str, fn(&AccessContext<'_>) -> Verdict);

/// Evaluation order
pub const STAGES: &[Stage] = &[
    ("blocked", blocked),
    ("individual_override", individual_override),
    ("category_rule", category_rule),
    ("default", default_allow),
];

pub fn resolve(ctx: &AccessContext<'_>) -> AccessDecision {
    STAGES
        .iter()
        .find_map(|&(name, stage)| match stage(ctx) {
            Verdict::Allow(reason) => Some(AccessDecision {
                allowed: true,
                reason,
                stage: name,
            }),
            Verdict::Deny(reason) => Some(AccessDecision {
                allowed: false,
                reason,
                stage: name,
            }),
            Verdict::Continue => None,
        })
        .unwrap_or_else(|| AccessDecision {
            allowed: true,
            reason: REASON_DEFAULT.to_string(),
            stage: "default",
        })
}

fn blocked(ctx: &AccessContext<'_>) -> Verdict {
    if ctx.attendee.blocked {
        Verdict::Deny(REASON_BLOCKED.to_string())
    } else {
        Verdict::Continue
    }
}

fn individual_override(ctx: &AccessContext<'_>) -> Verdict {
    match ctx.override_row {
        Some(row) if row.allowed => Verdict::Allow(REASON_OVERRIDE_GRANTED.to_string()),
        Some(_) => Verdict::Deny(REASON_OVERRIDE_DENIED.to_string()),
        None => Verdict::Continue,
    }
}

/// Uncategorized attendees and zones without rules fall through to the default.
fn category_rule(ctx: &AccessContext<'_>) -> Verdict {
    let Some(category) = ctx.attendee.category() else {
        return Verdict::Continue;
    };
    if ctx.rules.is_empty() {
        return Verdict::Continue;
    }
    match ctx.rules.iter().find(|r| r.category == category) {
        Some(rule) if rule.allowed => Verdict::Allow(REASON_CATEGORY_GRANTED.to_string()),
        Some(_) => Verdict::Deny(format!("Access denied for category: {category}")),
        None => Verdict::Deny(REASON_CATEGORY_UNLISTED.to_string()),
    }
}

fn default_allow(_: &AccessContext<'_>) -> Verdict {
    Verdict::Allow(REASON_DEFAULT.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use shared::error::ErrorCode;

    fn attendee(category: Option<&str>, blocked: bool) -> Attendee {
        Attendee {
            id: 1,
            event_id: 1,
            code: "A-1".into(),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            blocked,
            block_reason: blocked.then(|| "chargeback".to_string()),
            registered_at: None,
            registration_zone_id: None,
            packet_delivered: false,
            custom_fields: category.map_or(json!({}), |c| json!({ "category": c })),
            created_at: 0,
            updated_at: 0,
        }
    }

    fn rule(category: &str, allowed: bool) -> ZoneAccessRule {
        ZoneAccessRule {
            id: 1,
            zone_id: 1,
            category: category.into(),
            allowed,
            created_at: 0,
        }
    }

    fn override_row(allowed: bool) -> AttendeeZoneAccess {
        AttendeeZoneAccess {
            id: 1,
            attendee_id: 1,
            zone_id: 1,
            allowed,
            notes: None,
            created_at: 0,
            updated_at: 0,
        }
    }

    fn decide(
        attendee: &Attendee,
        override_row: Option<&AttendeeZoneAccess>,
        rules: &[ZoneAccessRule],
    ) -> AccessDecision {
        resolve(&AccessContext {
            attendee,
            override_row,
            rules,
        })
    }

    #[test]
    fn blocked_beats_everything() {
        let a = attendee(Some("VIP"), true);
        let granted = override_row(true);
        let d = decide(&a, Some(&granted), &[rule("VIP", true)]);
        assert!(!d.allowed);
        assert_eq!(d.reason, "Attendee is blocked");
        assert_eq!(d.stage, "blocked");
    }

    #[test]
    fn override_deny_beats_category_allow() {
        let a = attendee(Some("VIP"), false);
        let denied = override_row(false);
        let d = decide(&a, Some(&denied), &[rule("VIP", true)]);
        assert!(!d.allowed);
        assert_eq!(d.reason, "Access denied (individual override)");
    }

    #[test]
    fn override_allow_beats_category_deny() {
        let a = attendee(Some("Press"), false);
        let granted = override_row(true);
        let d = decide(&a, Some(&granted), &[rule("VIP", true)]);
        assert!(d.allowed);
        assert_eq!(d.reason, "Access granted (individual override)");
        assert_eq!(d.stage, "individual_override");
    }

    #[test]
    fn category_rules() {
        let rules = [rule("VIP", true), rule("Press", false)];

        let d = decide(&attendee(Some("VIP"), false), None, &rules);
        assert_eq!((d.allowed, d.reason.as_str()), (true, "Access granted by category"));

        let d = decide(&attendee(Some("Press"), false), None, &rules);
        assert_eq!(
            (d.allowed, d.reason.as_str()),
            (false, "Access denied for category: Press")
        );

        let d = decide(&attendee(Some("Student"), false), None, &rules);
        assert_eq!(
            (d.allowed, d.reason.as_str()),
            (false, "Category not authorized for this zone")
        );
    }

    #[test]
    fn uncategorized_or_ruleless_defaults_to_allow() {
        let d = decide(&attendee(None, false), None, &[rule("VIP", true)]);
        assert_eq!((d.allowed, d.stage), (true, "default"));
        assert_eq!(d.reason, "Access granted (default)");

        let d = decide(&attendee(Some("Press"), false), None, &[]);
        assert_eq!((d.allowed, d.stage), (true, "default"));
    }

    #[test]
    fn denial_maps_to_forbidden_error() {
        let d = decide(&attendee(Some("Press"), false), None, &[rule("VIP", true)]);
        let err = d.into_result().unwrap_err();
        assert_eq!(err.code, ErrorCode::AccessDenied);
        assert_eq!(err.message, "Category not authorized for this zone");

        let d = decide(&attendee(None, true), None, &[]);
        let err = d.into_result().unwrap_err();
        assert_eq!(err.code, ErrorCode::AttendeeBlocked);
        assert_eq!(err.message, REASON_BLOCKED);
        assert_eq!(err.http_status(), http::StatusCode::FORBIDDEN);
        assert_eq!(err.details.unwrap()["stage"], "blocked");
    }

    #[test]
    fn stage_order_is_fixed() {
        let names: Vec<_> = STAGES.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            ["blocked", "individual_override", "category_rule", "default"]
        );
    }
}
