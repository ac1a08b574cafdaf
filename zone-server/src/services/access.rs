//! Category rules and individual overrides

use shared::error::{AppError, ErrorCode};
use shared::models::{
    Attendee, AttendeeZoneAccess, AttendeeZoneAccessCreate, AttendeeZoneAccessUpdate,
    ZoneAccessRule, ZoneAccessRuleInput,
};
use sqlx::SqlitePool;

use super::registry;
use crate::db;
use crate::error::ServiceResult;

/// Rule with its category trimmed; categories match attendee fields exactly
fn normalize_rule(input: &ZoneAccessRuleInput) -> Result<ZoneAccessRuleInput, AppError> {
    let category = input.category.trim();
    if category.is_empty() {
        return Err(AppError::new(ErrorCode::RequiredField).with_detail("field", "category"));
    }
    Ok(ZoneAccessRuleInput {
        category: category.to_string(),
        allowed: input.allowed,
    })
}

pub async fn list_rules(pool: &SqlitePool, zone_id: i64) -> ServiceResult<Vec<ZoneAccessRule>> {
    registry::get_zone(pool, zone_id).await?;
    Ok(db::access::list_rules(pool, zone_id).await?)
}

pub async fn upsert_rule(
    pool: &SqlitePool,
    zone_id: i64,
    input: &ZoneAccessRuleInput,
) -> ServiceResult<ZoneAccessRule> {
    let input = normalize_rule(input)?;
    registry::get_zone(pool, zone_id).await?;
    let rule = db::access::upsert_rule(pool, zone_id, &input).await?;
    tracing::info!(zone_id, category = %rule.category, allowed = rule.allowed, "Access rule saved");
    Ok(rule)
}

/// Replace every rule of a zone in one transaction
pub async fn replace_rules(
    pool: &SqlitePool,
    zone_id: i64,
    rules: &[ZoneAccessRuleInput],
) -> ServiceResult<Vec<ZoneAccessRule>> {
    let rules = rules
        .iter()
        .map(normalize_rule)
        .collect::<Result<Vec<_>, _>>()?;
    registry::get_zone(pool, zone_id).await?;
    let saved = db::access::replace_rules(pool, zone_id, &rules).await?;
    tracing::info!(zone_id, count = saved.len(), "Access rules replaced");
    Ok(saved)
}

pub async fn delete_rule(pool: &SqlitePool, rule_id: i64) -> ServiceResult<()> {
    if !db::access::delete_rule(pool, rule_id).await? {
        return Err(AppError::new(ErrorCode::AccessRuleNotFound).into());
    }
    Ok(())
}

async fn get_attendee(pool: &SqlitePool, attendee_id: i64) -> ServiceResult<Attendee> {
    db::attendees::find_by_id(pool, attendee_id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::AttendeeNotFound).into())
}

pub async fn list_overrides(
    pool: &SqlitePool,
    attendee_id: i64,
) -> ServiceResult<Vec<AttendeeZoneAccess>> {
    get_attendee(pool, attendee_id).await?;
    Ok(db::access::list_overrides(pool, attendee_id).await?)
}

/// Grant or revoke one attendee's access to one zone of their own event
pub async fn upsert_override(
    pool: &SqlitePool,
    attendee_id: i64,
    input: &AttendeeZoneAccessCreate,
) -> ServiceResult<AttendeeZoneAccess> {
    let attendee = get_attendee(pool, attendee_id).await?;
    let zone = registry::get_zone(pool, input.zone_id).await?;
    if zone.event_id != attendee.event_id {
        return Err(AppError::validation("Zone belongs to a different event")
            .with_detail("zone_id", zone.id)
            .into());
    }
    let row = db::access::upsert_override(
        pool,
        attendee_id,
        zone.id,
        input.allowed,
        input.notes.as_deref(),
    )
    .await?;
    tracing::info!(attendee_id, zone_id = zone.id, allowed = row.allowed, "Access override saved");
    Ok(row)
}

pub async fn update_override(
    pool: &SqlitePool,
    override_id: i64,
    input: &AttendeeZoneAccessUpdate,
) -> ServiceResult<AttendeeZoneAccess> {
    db::access::update_override(pool, override_id, input.allowed, input.notes.as_deref())
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::AccessOverrideNotFound).into())
}

pub async fn delete_override(pool: &SqlitePool, override_id: i64) -> ServiceResult<()> {
    if !db::access::delete_override(pool, override_id).await? {
        return Err(AppError::new(ErrorCode::AccessOverrideNotFound).into());
    }
    Ok(())
}
