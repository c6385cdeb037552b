use serde::Serialize;

/// Aggregated rating figures for one staff member. Individual scores
/// (1..=5, enforced at the CLI boundary and by a DB CHECK) are written
/// once and only ever read back aggregated.
#[derive(Debug, Clone, Serialize)]
pub struct RatingStats {
    pub staff_id: i64,
    /// Current roster name, or "(removed)" when the staff member is gone.
    pub staff_name: String,
    pub average: f64,
    pub count: i64,
}
