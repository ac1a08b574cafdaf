//! Staff Zone Assignment Model

use serde::{Deserialize, Serialize};

/// Staff member assigned to work a zone
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct StaffZoneAssignment {
    pub id: i64,
    pub user_id: i64,
    pub zone_id: i64,
    pub assigned_at: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_by: Option<i64>,
}

/// Assign staff payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffAssignRequest {
    pub user_id: i64,
}
