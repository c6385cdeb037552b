use serde::Serialize;
use std::fmt;

/// Effective permission tier granted to an identity.
///
/// The declaration order IS the privilege order: every action permitted
/// to a lower tier is permitted to every higher one, so authorization
/// checks are plain `>=` comparisons.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    None,
    Staff,
    Manager,
    Owner,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::None => "none",
            Tier::Staff => "staff",
            Tier::Manager => "manager",
            Tier::Owner => "owner",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_are_linearly_ordered() {
        assert!(Tier::None < Tier::Staff);
        assert!(Tier::Staff < Tier::Manager);
        assert!(Tier::Manager < Tier::Owner);
    }
}
