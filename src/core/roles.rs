//! Effective tier resolution and custom-role management.

use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::{
    delete_custom_role, insert_custom_role, load_custom_roles, load_staff,
};
use crate::db::{db_utils::with_write_retry, log::ttlog};
use crate::errors::{AppError, AppResult};
use crate::models::custom_role::{CustomRole, RoleLevel};
use crate::models::staff::{ROLE_MANAGER, ROLE_OWNER, StaffMember};
use crate::models::tier::Tier;
use crate::ui::messages::success;

/// Map an identity to its effective permission tier.
///
/// Pure and total: no I/O, never fails, identical inputs yield the
/// identical tier. First match wins; emails compare case-insensitively.
///
/// 1. bootstrap owner list → Owner
/// 2. bootstrap manager list → Manager
/// 3. roster entry by email:
///    built-in role names first, then custom roles by name, then any
///    other role value is plain staff
/// 4. no match → None
pub fn resolve_tier(
    email: &str,
    staff: &[StaffMember],
    custom_roles: &[CustomRole],
    bootstrap_owners: &[String],
    bootstrap_managers: &[String],
) -> Tier {
    let low = email.trim().to_lowercase();
    if low.is_empty() {
        return Tier::None;
    }

    if bootstrap_owners.iter().any(|e| e.to_lowercase() == low) {
        return Tier::Owner;
    }
    if bootstrap_managers.iter().any(|e| e.to_lowercase() == low) {
        return Tier::Manager;
    }

    let Some(member) = staff.iter().find(|s| s.email.to_lowercase() == low) else {
        return Tier::None;
    };

    match member.role.as_str() {
        ROLE_OWNER => Tier::Owner,
        ROLE_MANAGER => Tier::Manager,
        other => custom_roles
            .iter()
            .find(|r| r.name == other)
            .map(|r| r.level.tier())
            .unwrap_or(Tier::Staff),
    }
}

/// Resolve the acting identity's tier from the current store contents.
pub fn resolve_actor(pool: &DbPool, cfg: &Config, email: &str) -> AppResult<Tier> {
    let staff = load_staff(&pool.conn)?;
    let roles = load_custom_roles(&pool.conn)?;
    Ok(resolve_tier(
        email,
        &staff,
        &roles,
        &cfg.bootstrap_owners,
        &cfg.bootstrap_managers,
    ))
}

/// Custom-role administration (owner only).
pub struct RolesLogic;

impl RolesLogic {
    pub fn add(
        pool: &mut DbPool,
        cfg: &Config,
        actor: &str,
        name: &str,
        level_raw: &str,
    ) -> AppResult<()> {
        let tier = resolve_actor(pool, cfg, actor)?;
        if !crate::core::access::authorize(tier, crate::core::access::Action::CreateCustomRole) {
            return Err(AppError::Unauthorized);
        }

        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Other("role name cannot be empty".into()));
        }
        let level = RoleLevel::from_cli_str(level_raw)
            .ok_or_else(|| AppError::InvalidRoleLevel(level_raw.to_string()))?;

        with_write_retry(|| insert_custom_role(&pool.conn, name, level))?;
        ttlog(&pool.conn, "role_add", name, level.to_db_str())?;
        success(format!("Custom role '{}' created (level: {}).", name, level.to_db_str()));
        Ok(())
    }

    pub fn del(pool: &mut DbPool, cfg: &Config, actor: &str, name: &str) -> AppResult<()> {
        let tier = resolve_actor(pool, cfg, actor)?;
        if !crate::core::access::authorize(tier, crate::core::access::Action::DeleteCustomRole) {
            return Err(AppError::Unauthorized);
        }

        with_write_retry(|| delete_custom_role(&pool.conn, name))?;
        ttlog(&pool.conn, "role_del", name, "custom role removed")?;
        success(format!("Custom role '{}' removed.", name));
        Ok(())
    }

    pub fn list(pool: &mut DbPool) -> AppResult<()> {
        let roles = load_custom_roles(&pool.conn)?;
        if roles.is_empty() {
            println!("No custom roles defined.");
            return Ok(());
        }

        let mut table = crate::utils::table::Table::new(vec!["Role", "Level", "Created"]);
        for r in &roles {
            table.add_row(vec![
                r.name.clone(),
                r.level.to_db_str().to_string(),
                r.created_at.clone(),
            ]);
        }
        print!("{}", table.render());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::session::ShiftState;

    fn member(email: &str, role: &str) -> StaffMember {
        StaffMember {
            id: 1,
            email: email.to_string(),
            name: email.split('@').next().unwrap_or("x").to_string(),
            role: role.to_string(),
            session: ShiftState::Off,
            created_at: String::new(),
        }
    }

    fn custom(name: &str, level: RoleLevel) -> CustomRole {
        CustomRole {
            id: 1,
            name: name.to_string(),
            level,
            created_at: String::new(),
        }
    }

    fn owners() -> Vec<String> {
        vec!["dueno@bar.com".to_string()]
    }

    fn managers() -> Vec<String> {
        vec!["Gerencia@Bar.com".to_string()]
    }

    #[test]
    fn bootstrap_owner_wins_even_outside_roster() {
        let tier = resolve_tier("dueno@bar.com", &[], &[], &owners(), &managers());
        assert_eq!(tier, Tier::Owner);
    }

    #[test]
    fn bootstrap_lists_beat_roster_role() {
        // Whitelisted owner demoted to waiter on the roster stays owner.
        let staff = vec![member("dueno@bar.com", "Mesero")];
        let tier = resolve_tier("dueno@bar.com", &staff, &[], &owners(), &managers());
        assert_eq!(tier, Tier::Owner);
    }

    #[test]
    fn email_match_is_case_insensitive() {
        let staff = vec![member("ana@bar.com", ROLE_MANAGER)];
        assert_eq!(
            resolve_tier("ANA@BAR.COM", &staff, &[], &owners(), &managers()),
            Tier::Manager
        );
        assert_eq!(
            resolve_tier("gerencia@bar.com", &[], &[], &owners(), &managers()),
            Tier::Manager
        );
    }

    #[test]
    fn builtin_role_names_resolve_directly() {
        let staff = vec![
            member("a@bar.com", ROLE_OWNER),
            member("b@bar.com", ROLE_MANAGER),
            member("c@bar.com", "Mesero"),
        ];
        assert_eq!(resolve_tier("a@bar.com", &staff, &[], &[], &[]), Tier::Owner);
        assert_eq!(resolve_tier("b@bar.com", &staff, &[], &[], &[]), Tier::Manager);
        assert_eq!(resolve_tier("c@bar.com", &staff, &[], &[], &[]), Tier::Staff);
    }

    #[test]
    fn custom_role_grants_its_level() {
        let staff = vec![member("dj@bar.com", "DJ")];
        let roles = vec![custom("DJ", RoleLevel::Gerente)];
        assert_eq!(
            resolve_tier("dj@bar.com", &staff, &roles, &[], &[]),
            Tier::Manager
        );

        let roles = vec![custom("DJ", RoleLevel::Dueno)];
        assert_eq!(
            resolve_tier("dj@bar.com", &staff, &roles, &[], &[]),
            Tier::Owner
        );

        let roles = vec![custom("DJ", RoleLevel::Staff)];
        assert_eq!(
            resolve_tier("dj@bar.com", &staff, &roles, &[], &[]),
            Tier::Staff
        );
    }

    #[test]
    fn builtin_name_beats_custom_role_collision() {
        // A custom role must not redefine a built-in name.
        let staff = vec![member("g@bar.com", ROLE_MANAGER)];
        let roles = vec![custom(ROLE_MANAGER, RoleLevel::Staff)];
        assert_eq!(
            resolve_tier("g@bar.com", &staff, &roles, &[], &[]),
            Tier::Manager
        );
    }

    #[test]
    fn unknown_identity_resolves_to_none() {
        assert_eq!(resolve_tier("ghost@bar.com", &[], &[], &[], &[]), Tier::None);
        assert_eq!(resolve_tier("", &[], &[], &owners(), &managers()), Tier::None);
    }

    #[test]
    fn resolution_is_pure_and_order_independent() {
        let mut staff = vec![
            member("a@bar.com", "Mesero"),
            member("dj@bar.com", "DJ"),
            member("z@bar.com", ROLE_OWNER),
        ];
        let roles = vec![custom("DJ", RoleLevel::Gerente)];

        let first = resolve_tier("dj@bar.com", &staff, &roles, &owners(), &managers());
        let second = resolve_tier("dj@bar.com", &staff, &roles, &owners(), &managers());
        assert_eq!(first, second);

        staff.reverse();
        let reversed = resolve_tier("dj@bar.com", &staff, &roles, &owners(), &managers());
        assert_eq!(first, reversed);
        assert_eq!(first, Tier::Manager);
    }
}
