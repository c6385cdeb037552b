pub mod access;
pub mod audit;
pub mod clock;
pub mod history;
pub mod roles;
pub mod roster;
pub mod shift;
pub mod stats;
