//! Access rule and individual override queries

use shared::models::{AttendeeZoneAccess, ZoneAccessRule, ZoneAccessRuleInput};
use shared::util::{now_millis, snowflake_id};
use sqlx::SqlitePool;

const RULE_COLUMNS: &str = "id, zone_id, category, allowed, created_at";
const OVERRIDE_COLUMNS: &str = "id, attendee_id, zone_id, allowed, notes, created_at, updated_at";

// ── Category rules ──────────────────────────────────────────────

/// Rules of a zone, ordered by category
pub async fn list_rules(pool: &SqlitePool, zone_id: i64) -> Result<Vec<ZoneAccessRule>, sqlx::Error> {
    sqlx::query_as::<_, ZoneAccessRule>(&format!(
        "SELECT {RULE_COLUMNS} FROM zone_access_rule WHERE zone_id = ? ORDER BY category ASC"
    ))
    .bind(zone_id)
    .fetch_all(pool)
    .await
}

/// Insert a rule, or update `allowed` of the existing (zone, category) rule
pub async fn upsert_rule(
    pool: &SqlitePool,
    zone_id: i64,
    input: &ZoneAccessRuleInput,
) -> Result<ZoneAccessRule, sqlx::Error> {
    sqlx::query_as::<_, ZoneAccessRule>(&format!(
        "INSERT INTO zone_access_rule ({RULE_COLUMNS}) VALUES (?, ?, ?, ?, ?) \
         ON CONFLICT (zone_id, category) DO UPDATE SET allowed = excluded.allowed \
         RETURNING {RULE_COLUMNS}"
    ))
    .bind(snowflake_id())
    .bind(zone_id)
    .bind(&input.category)
    .bind(input.allowed)
    .bind(now_millis())
    .fetch_one(pool)
    .await
}

/// Replace the whole rule set of a zone atomically
pub async fn replace_rules(
    pool: &SqlitePool,
    zone_id: i64,
    rules: &[ZoneAccessRuleInput],
) -> Result<Vec<ZoneAccessRule>, sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM zone_access_rule WHERE zone_id = ?")
        .bind(zone_id)
        .execute(&mut *tx)
        .await?;

    let now = now_millis();
    for rule in rules {
        sqlx::query(
            "INSERT INTO zone_access_rule (id, zone_id, category, allowed, created_at) \
             VALUES (?, ?, ?, ?, ?) \
             ON CONFLICT (zone_id, category) DO UPDATE SET allowed = excluded.allowed",
        )
        .bind(snowflake_id())
        .bind(zone_id)
        .bind(&rule.category)
        .bind(rule.allowed)
        .bind(now)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    list_rules(pool, zone_id).await
}

pub async fn delete_rule(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM zone_access_rule WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

// ── Individual overrides ────────────────────────────────────────

pub async fn find_override(
    pool: &SqlitePool,
    attendee_id: i64,
    zone_id: i64,
) -> Result<Option<AttendeeZoneAccess>, sqlx::Error> {
    sqlx::query_as::<_, AttendeeZoneAccess>(&format!(
        "SELECT {OVERRIDE_COLUMNS} FROM attendee_zone_access WHERE attendee_id = ? AND zone_id = ?"
    ))
    .bind(attendee_id)
    .bind(zone_id)
    .fetch_optional(pool)
    .await
}

pub async fn list_overrides(
    pool: &SqlitePool,
    attendee_id: i64,
) -> Result<Vec<AttendeeZoneAccess>, sqlx::Error> {
    sqlx::query_as::<_, AttendeeZoneAccess>(&format!(
        "SELECT {OVERRIDE_COLUMNS} FROM attendee_zone_access WHERE attendee_id = ? ORDER BY created_at ASC"
    ))
    .bind(attendee_id)
    .fetch_all(pool)
    .await
}

/// Insert an override, or replace `allowed`/`notes` of the existing one
pub async fn upsert_override(
    pool: &SqlitePool,
    attendee_id: i64,
    zone_id: i64,
    allowed: bool,
    notes: Option<&str>,
) -> Result<AttendeeZoneAccess, sqlx::Error> {
    let now = now_millis();
    sqlx::query_as::<_, AttendeeZoneAccess>(&format!(
        "INSERT INTO attendee_zone_access ({OVERRIDE_COLUMNS}) VALUES (?, ?, ?, ?, ?, ?, ?) \
         ON CONFLICT (attendee_id, zone_id) DO UPDATE SET \
           allowed = excluded.allowed, notes = excluded.notes, updated_at = excluded.updated_at \
         RETURNING {OVERRIDE_COLUMNS}"
    ))
    .bind(snowflake_id())
    .bind(attendee_id)
    .bind(zone_id)
    .bind(allowed)
    .bind(notes)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
}

pub async fn update_override(
    pool: &SqlitePool,
    id: i64,
    allowed: bool,
    notes: Option<&str>,
) -> Result<Option<AttendeeZoneAccess>, sqlx::Error> {
    sqlx::query_as::<_, AttendeeZoneAccess>(&format!(
        "UPDATE attendee_zone_access SET allowed = ?, notes = ?, updated_at = ? WHERE id = ? \
         RETURNING {OVERRIDE_COLUMNS}"
    ))
    .bind(allowed)
    .bind(notes)
    .bind(now_millis())
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete_override(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM attendee_zone_access WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
