//! Attendee lookups and the registration write

use shared::models::Attendee;
use sqlx::{SqliteConnection, SqlitePool};

const COLUMNS: &str = "id, event_id, code, first_name, last_name, blocked, block_reason, \
    registered_at, registration_zone_id, packet_delivered, custom_fields, created_at, updated_at";

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Attendee>, sqlx::Error> {
    sqlx::query_as::<_, Attendee>(&format!("SELECT {COLUMNS} FROM attendee WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Badge scan lookup: codes are unique per event
pub async fn find_by_code(
    pool: &SqlitePool,
    event_id: i64,
    code: &str,
) -> Result<Option<Attendee>, sqlx::Error> {
    sqlx::query_as::<_, Attendee>(&format!(
        "SELECT {COLUMNS} FROM attendee WHERE event_id = ? AND code = ?"
    ))
    .bind(event_id)
    .bind(code)
    .fetch_optional(pool)
    .await
}

/// Insert an attendee row (used by provisioning and fixtures)
pub async fn insert(pool: &SqlitePool, a: &Attendee) -> Result<(), sqlx::Error> {
    sqlx::query(&format!(
        "INSERT INTO attendee ({COLUMNS}) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"
    ))
    .bind(a.id)
    .bind(a.event_id)
    .bind(&a.code)
    .bind(&a.first_name)
    .bind(&a.last_name)
    .bind(a.blocked)
    .bind(&a.block_reason)
    .bind(a.registered_at)
    .bind(a.registration_zone_id)
    .bind(a.packet_delivered)
    .bind(sqlx::types::Json(&a.custom_fields))
    .bind(a.created_at)
    .bind(a.updated_at)
    .execute(pool)
    .await?;
    Ok(())
}

/// Mark an attendee registered at `zone_id`.
///
/// Only transitions an unregistered attendee; returns `false` when the
/// attendee was already registered (fields untouched).
pub async fn mark_registered(
    conn: &mut SqliteConnection,
    attendee_id: i64,
    zone_id: i64,
    now: i64,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE attendee \
         SET registered_at = ?, registration_zone_id = ?, packet_delivered = 1, updated_at = ? \
         WHERE id = ? AND registered_at IS NULL",
    )
    .bind(now)
    .bind(zone_id)
    .bind(now)
    .bind(attendee_id)
    .execute(conn)
    .await?;
    Ok(result.rows_affected() == 1)
}
