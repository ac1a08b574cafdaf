//! Check-in ledger queries

use chrono::NaiveDate;
use shared::models::{MovementHistoryEntry, ZoneCheckin};
use shared::util::snowflake_id;
use sqlx::{SqliteConnection, SqlitePool};

const COLUMNS: &str = "id, attendee_id, zone_id, checked_in_at, checked_in_by, event_day, metadata";

/// Ledger key plus the fields recorded on a novel row
#[derive(Debug, Clone)]
pub struct NewCheckin {
    pub attendee_id: i64,
    pub zone_id: i64,
    pub event_day: NaiveDate,
    pub checked_in_at: i64,
    pub checked_in_by: Option<i64>,
    pub metadata: serde_json::Value,
}

/// Insert the row unless (attendee, zone, day) is already recorded.
///
/// Returns the stored row and whether this call created it. A concurrent
/// duplicate hits the UNIQUE constraint and falls through to the existing row.
pub async fn insert_or_get(
    conn: &mut SqliteConnection,
    new: &NewCheckin,
) -> Result<(ZoneCheckin, bool), sqlx::Error> {
    let inserted = sqlx::query_as::<_, ZoneCheckin>(&format!(
        "INSERT INTO zone_checkin ({COLUMNS}) VALUES (?, ?, ?, ?, ?, ?, ?) \
         ON CONFLICT (attendee_id, zone_id, event_day) DO NOTHING \
         RETURNING {COLUMNS}"
    ))
    .bind(snowflake_id())
    .bind(new.attendee_id)
    .bind(new.zone_id)
    .bind(new.checked_in_at)
    .bind(new.checked_in_by)
    .bind(new.event_day)
    .bind(sqlx::types::Json(&new.metadata))
    .fetch_optional(&mut *conn)
    .await?;

    if let Some(row) = inserted {
        return Ok((row, true));
    }

    let existing = sqlx::query_as::<_, ZoneCheckin>(&format!(
        "SELECT {COLUMNS} FROM zone_checkin WHERE attendee_id = ? AND zone_id = ? AND event_day = ?"
    ))
    .bind(new.attendee_id)
    .bind(new.zone_id)
    .bind(new.event_day)
    .fetch_one(&mut *conn)
    .await?;
    Ok((existing, false))
}

/// Check-ins of a zone on one day, newest first
pub async fn list_by_zone_day(
    pool: &SqlitePool,
    zone_id: i64,
    day: NaiveDate,
) -> Result<Vec<ZoneCheckin>, sqlx::Error> {
    sqlx::query_as::<_, ZoneCheckin>(&format!(
        "SELECT {COLUMNS} FROM zone_checkin WHERE zone_id = ? AND event_day = ? \
         ORDER BY checked_in_at DESC, id DESC"
    ))
    .bind(zone_id)
    .bind(day)
    .fetch_all(pool)
    .await
}

#[derive(sqlx::FromRow)]
struct HistoryRow {
    #[sqlx(flatten)]
    checkin: ZoneCheckin,
    zone_name: String,
    zone_type: String,
}

/// Movement history of an attendee across zones, newest first
pub async fn history(
    pool: &SqlitePool,
    attendee_id: i64,
) -> Result<Vec<MovementHistoryEntry>, sqlx::Error> {
    let rows = sqlx::query_as::<_, HistoryRow>(
        "SELECT c.id, c.attendee_id, c.zone_id, c.checked_in_at, c.checked_in_by, c.event_day, \
                c.metadata, z.name AS zone_name, z.zone_type AS zone_type \
         FROM zone_checkin c JOIN event_zone z ON z.id = c.zone_id \
         WHERE c.attendee_id = ? \
         ORDER BY c.checked_in_at DESC, c.id DESC",
    )
    .bind(attendee_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|r| MovementHistoryEntry {
            checkin: r.checkin,
            zone_name: r.zone_name,
            zone_type: r.zone_type,
        })
        .collect())
}
