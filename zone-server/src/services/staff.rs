//! Staff assignment index

use shared::error::{AppError, ErrorCode};
use shared::models::{EventZone, StaffZoneAssignment};
use sqlx::SqlitePool;

use super::registry;
use crate::auth::Caller;
use crate::db;
use crate::error::ServiceResult;

/// Zones of an event the caller may operate: every zone for admins and
/// managers, the assigned ones for everyone else.
pub async fn available_zones(
    pool: &SqlitePool,
    event_id: i64,
    caller: Caller,
) -> ServiceResult<Vec<EventZone>> {
    let zones = if caller.is_elevated() {
        db::zones::list_by_event(pool, event_id).await?
    } else {
        db::staff::assigned_zones(pool, event_id, caller.user_id).await?
    };
    Ok(zones)
}

pub async fn assign_staff(
    pool: &SqlitePool,
    zone_id: i64,
    user_id: i64,
    caller: Caller,
) -> ServiceResult<StaffZoneAssignment> {
    registry::get_zone(pool, zone_id).await?;
    let assignment = db::staff::assign(pool, user_id, zone_id, Some(caller.user_id)).await?;
    tracing::info!(zone_id, user_id, assigned_by = caller.user_id, "Staff assigned to zone");
    Ok(assignment)
}

pub async fn list_zone_staff(pool: &SqlitePool, zone_id: i64) -> ServiceResult<Vec<StaffZoneAssignment>> {
    registry::get_zone(pool, zone_id).await?;
    Ok(db::staff::list_by_zone(pool, zone_id).await?)
}

pub async fn list_user_assignments(
    pool: &SqlitePool,
    user_id: i64,
) -> ServiceResult<Vec<StaffZoneAssignment>> {
    Ok(db::staff::list_by_user(pool, user_id).await?)
}

pub async fn remove_staff(pool: &SqlitePool, zone_id: i64, user_id: i64) -> ServiceResult<()> {
    if !db::staff::remove(pool, user_id, zone_id).await? {
        return Err(AppError::new(ErrorCode::StaffAssignmentNotFound).into());
    }
    tracing::info!(zone_id, user_id, "Staff removed from zone");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Role;
    use crate::db::test_support::*;

    fn caller(user_id: i64, role: Role) -> Caller {
        Caller { user_id, role }
    }

    #[tokio::test]
    async fn test_available_zones_by_role() {
        let pool = test_pool().await;
        let event = seed_event(&pool).await;
        let hall = seed_zone(&pool, event.id, zone_input("Main Hall")).await;
        let mut input = zone_input("VIP Lounge");
        input.order_index = 1;
        let lounge = seed_zone(&pool, event.id, input).await;
        let admin = caller(1, Role::Admin);

        assign_staff(&pool, lounge.id, 501, admin).await.unwrap();

        let staff = available_zones(&pool, event.id, caller(501, Role::Staff)).await.unwrap();
        assert_eq!(staff, vec![lounge.clone()]);

        let nobody = available_zones(&pool, event.id, caller(502, Role::Staff)).await.unwrap();
        assert!(nobody.is_empty());

        for role in [Role::Admin, Role::Manager] {
            let all = available_zones(&pool, event.id, caller(9, role)).await.unwrap();
            assert_eq!(all, vec![hall.clone(), lounge.clone()]);
        }
    }

    #[tokio::test]
    async fn test_assignment_management() {
        let pool = test_pool().await;
        let event = seed_event(&pool).await;
        let zone = seed_zone(&pool, event.id, zone_input("Main Hall")).await;
        let admin = caller(1, Role::Admin);

        let a = assign_staff(&pool, zone.id, 501, admin).await.unwrap();
        assert_eq!(a.assigned_by, Some(1));
        assert_eq!(list_zone_staff(&pool, zone.id).await.unwrap(), vec![a.clone()]);
        assert_eq!(list_user_assignments(&pool, 501).await.unwrap(), vec![a]);

        remove_staff(&pool, zone.id, 501).await.unwrap();
        let err: AppError = remove_staff(&pool, zone.id, 501).await.unwrap_err().into();
        assert_eq!(err.code, ErrorCode::StaffAssignmentNotFound);

        let err: AppError = assign_staff(&pool, 404, 501, admin).await.unwrap_err().into();
        assert_eq!(err.code, ErrorCode::ZoneNotFound);
    }
}
