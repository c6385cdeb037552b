use crate::models::tier::Tier;
use serde::Serialize;

/// Access level of a custom role. Stored as a closed set in the DB.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum RoleLevel {
    Staff,
    Gerente,
    Dueno,
}

impl RoleLevel {
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "staff" => Some(RoleLevel::Staff),
            "gerente" => Some(RoleLevel::Gerente),
            "dueno" => Some(RoleLevel::Dueno),
            _ => None,
        }
    }

    pub fn to_db_str(&self) -> &'static str {
        match self {
            RoleLevel::Staff => "staff",
            RoleLevel::Gerente => "gerente",
            RoleLevel::Dueno => "dueno",
        }
    }

    /// CLI spelling is the DB spelling, case-insensitive.
    pub fn from_cli_str(s: &str) -> Option<Self> {
        Self::from_db_str(s.to_lowercase().as_str())
    }

    /// The effective tier granted to a staff member holding a role
    /// of this level.
    pub fn tier(&self) -> Tier {
        match self {
            RoleLevel::Staff => Tier::Staff,
            RoleLevel::Gerente => Tier::Manager,
            RoleLevel::Dueno => Tier::Owner,
        }
    }
}

/// Manager/owner-defined role name with an access level.
/// Staff `role` fields may reference it by `name`.
#[derive(Debug, Clone, Serialize)]
pub struct CustomRole {
    pub id: i64,
    pub name: String,
    pub level: RoleLevel,
    pub created_at: String,
}
