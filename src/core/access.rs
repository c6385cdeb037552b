//! Access gate: per-action minimum tiers plus the clock ownership rule.

use crate::models::tier::Tier;

/// Every mutating (or restricted read) operation the gate knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    EditMenu,
    DeleteMenuItem,
    AddStaff,
    EditStaff,
    DeleteStaff,
    CreateCustomRole,
    DeleteCustomRole,
    /// Start/pause/resume/finish one's own clock session.
    /// Additionally requires identity ownership, see [`authorize_clock`].
    ClockSelf,
    ViewShiftHistory,
}

impl Action {
    pub const ALL: [Action; 9] = [
        Action::EditMenu,
        Action::DeleteMenuItem,
        Action::AddStaff,
        Action::EditStaff,
        Action::DeleteStaff,
        Action::CreateCustomRole,
        Action::DeleteCustomRole,
        Action::ClockSelf,
        Action::ViewShiftHistory,
    ];

    pub fn min_tier(&self) -> Tier {
        match self {
            Action::ClockSelf => Tier::Staff,
            Action::EditMenu
            | Action::DeleteMenuItem
            | Action::AddStaff
            | Action::EditStaff
            | Action::DeleteStaff
            | Action::ViewShiftHistory => Tier::Manager,
            Action::CreateCustomRole | Action::DeleteCustomRole => Tier::Owner,
        }
    }
}

/// A tier may perform an action when it meets the action's minimum.
/// The tier order is linear, so any higher tier is always permitted too.
pub fn authorize(tier: Tier, action: Action) -> bool {
    tier >= action.min_tier()
}

/// Clock transitions additionally require identity ownership: a caller
/// may only move their own session, never another's, independent of tier.
pub fn authorize_clock(tier: Tier, caller_email: &str, target_email: &str) -> bool {
    authorize(tier, Action::ClockSelf) && caller_email.eq_ignore_ascii_case(target_email)
}
