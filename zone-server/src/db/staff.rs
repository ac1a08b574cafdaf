//! Staff zone assignment queries

use shared::models::{EventZone, StaffZoneAssignment};
use shared::util::{now_millis, snowflake_id};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, user_id, zone_id, assigned_at, assigned_by";

/// Assign a user to a zone; an existing assignment is returned unchanged
pub async fn assign(
    pool: &SqlitePool,
    user_id: i64,
    zone_id: i64,
    assigned_by: Option<i64>,
) -> Result<StaffZoneAssignment, sqlx::Error> {
    sqlx::query(
        "INSERT INTO staff_zone_assignment (id, user_id, zone_id, assigned_at, assigned_by) \
         VALUES (?, ?, ?, ?, ?) ON CONFLICT (user_id, zone_id) DO NOTHING",
    )
    .bind(snowflake_id())
    .bind(user_id)
    .bind(zone_id)
    .bind(now_millis())
    .bind(assigned_by)
    .execute(pool)
    .await?;

    sqlx::query_as::<_, StaffZoneAssignment>(&format!(
        "SELECT {COLUMNS} FROM staff_zone_assignment WHERE user_id = ? AND zone_id = ?"
    ))
    .bind(user_id)
    .bind(zone_id)
    .fetch_one(pool)
    .await
}

pub async fn list_by_zone(
    pool: &SqlitePool,
    zone_id: i64,
) -> Result<Vec<StaffZoneAssignment>, sqlx::Error> {
    sqlx::query_as::<_, StaffZoneAssignment>(&format!(
        "SELECT {COLUMNS} FROM staff_zone_assignment WHERE zone_id = ? ORDER BY assigned_at ASC"
    ))
    .bind(zone_id)
    .fetch_all(pool)
    .await
}

pub async fn list_by_user(
    pool: &SqlitePool,
    user_id: i64,
) -> Result<Vec<StaffZoneAssignment>, sqlx::Error> {
    sqlx::query_as::<_, StaffZoneAssignment>(&format!(
        "SELECT {COLUMNS} FROM staff_zone_assignment WHERE user_id = ? ORDER BY assigned_at ASC"
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await
}

pub async fn remove(pool: &SqlitePool, user_id: i64, zone_id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM staff_zone_assignment WHERE user_id = ? AND zone_id = ?")
        .bind(user_id)
        .bind(zone_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Zones of an event the user is assigned to, in display order
pub async fn assigned_zones(
    pool: &SqlitePool,
    event_id: i64,
    user_id: i64,
) -> Result<Vec<EventZone>, sqlx::Error> {
    sqlx::query_as::<_, EventZone>(
        "SELECT z.id, z.event_id, z.name, z.zone_type, z.order_index, z.open_time, z.close_time, \
                z.is_registration_zone, z.requires_registration, z.is_active, z.settings, \
                z.created_at, z.updated_at \
         FROM event_zone z JOIN staff_zone_assignment s ON s.zone_id = z.id \
         WHERE z.event_id = ? AND s.user_id = ? \
         ORDER BY z.order_index ASC, z.id ASC",
    )
    .bind(event_id)
    .bind(user_id)
    .fetch_all(pool)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::*;

    #[tokio::test]
    async fn test_assign_is_idempotent() {
        let pool = test_pool().await;
        let event = seed_event(&pool).await;
        let zone = seed_zone(&pool, event.id, zone_input("Main Hall")).await;

        let first = assign(&pool, 501, zone.id, Some(1)).await.unwrap();
        let second = assign(&pool, 501, zone.id, Some(2)).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(second.assigned_by, Some(1));
        assert_eq!(list_by_zone(&pool, zone.id).await.unwrap().len(), 1);
        assert_eq!(list_by_user(&pool, 501).await.unwrap(), vec![first]);
    }

    #[tokio::test]
    async fn test_assigned_zones_scoped_to_event() {
        let pool = test_pool().await;
        let event = seed_event(&pool).await;
        let other = seed_event(&pool).await;
        let hall = seed_zone(&pool, event.id, zone_input("Main Hall")).await;
        let _vip = seed_zone(&pool, event.id, zone_input("VIP Lounge")).await;
        let elsewhere = seed_zone(&pool, other.id, zone_input("Expo")).await;

        assign(&pool, 7, hall.id, None).await.unwrap();
        assign(&pool, 7, elsewhere.id, None).await.unwrap();

        let zones = assigned_zones(&pool, event.id, 7).await.unwrap();
        assert_eq!(zones, vec![hall.clone()]);

        assert!(remove(&pool, 7, hall.id).await.unwrap());
        assert!(!remove(&pool, 7, hall.id).await.unwrap());
        assert!(assigned_zones(&pool, event.id, 7).await.unwrap().is_empty());
    }
}
