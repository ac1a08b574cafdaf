use serde::{Deserialize, Serialize};

use super::Claims;
use super::JwtError;

/// Role carried in the token. Unknown roles are treated as staff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    Staff,
}

impl Role {
    pub fn from_claim(role: &str) -> Self {
        match role {
            "admin" => Role::Admin,
            "manager" => Role::Manager,
            _ => Role::Staff,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::Staff => "staff",
        }
    }
}

/// Authenticated caller, inserted into request extensions by `require_auth`
/// and passed explicitly into core operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
    pub user_id: i64,
    pub role: Role,
}

impl Caller {
    /// Admins and managers see every zone of an event
    pub fn is_elevated(&self) -> bool {
        matches!(self.role, Role::Admin | Role::Manager)
    }
}

impl TryFrom<Claims> for Caller {
    type Error = JwtError;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        let user_id = claims
            .sub
            .parse()
            .map_err(|_| JwtError::InvalidToken(format!("non-numeric subject: {}", claims.sub)))?;
        Ok(Self {
            user_id,
            role: Role::from_claim(&claims.role),
        })
    }
}
