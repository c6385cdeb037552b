use super::session::ShiftState;
use serde::Serialize;

/// Built-in role names, matched verbatim on the staff `role` field.
/// Any other value is either a custom role name or plain staff.
pub const ROLE_OWNER: &str = "Dueño";
pub const ROLE_MANAGER: &str = "Gerente";
pub const ROLE_STAFF: &str = "Staff";

/// One employed person on the venue roster.
#[derive(Debug, Clone, Serialize)]
pub struct StaffMember {
    pub id: i64,
    /// Lowercased, unique. Join key to the authenticated identity.
    pub email: String,
    pub name: String,
    /// Free text: a built-in role name or the name of a custom role.
    pub role: String,
    #[serde(skip)]
    pub session: ShiftState,
    pub created_at: String,
}

impl StaffMember {
    /// Normalize an email the way the roster stores it.
    /// Returns None for values that cannot possibly be an address.
    pub fn normalize_email(raw: &str) -> Option<String> {
        let e = raw.trim().to_lowercase();
        let (local, domain) = e.split_once('@')?;
        if local.is_empty() || domain.is_empty() || !domain.contains('.') {
            return None;
        }
        Some(e)
    }
}
