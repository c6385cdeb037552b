//! Synchronization adapter: the store's change feed as snapshot sequences.
//!
//! Remote sessions mutate the roster and role table at any time; instead
//! of exposing raw change events, the feed delivers the full current
//! contents of both collections whenever anything changed. Consumers
//! (tier resolution, the live roster view) only ever see complete,
//! eventually-consistent snapshots, so they need no delta logic and can
//! be tested with canned sequences.

use crate::db::pool::DbPool;
use crate::db::queries::{load_custom_roles, load_staff};
use crate::errors::AppResult;
use crate::models::custom_role::CustomRole;
use crate::models::staff::StaffMember;
use chrono::{DateTime, Utc};
use std::collections::VecDeque;

/// Full contents of the roster and custom-role collections at one point
/// in time.
#[derive(Debug, Clone)]
pub struct RosterSnapshot {
    pub staff: Vec<StaffMember>,
    pub roles: Vec<CustomRole>,
    pub taken_at: DateTime<Utc>,
}

/// A lazy, infinite, non-restartable sequence of snapshots.
///
/// `poll` returns `Ok(None)` when nothing changed since the last call;
/// it never replays an already-delivered snapshot.
pub trait SnapshotFeed {
    fn poll(&mut self) -> AppResult<Option<RosterSnapshot>>;
}

/// Store-backed feed. SQLite bumps `PRAGMA data_version` whenever
/// another connection commits, which is exactly the "someone else wrote"
/// signal the subscription needs; the feed then re-reads the full
/// collections.
pub struct StoreFeed<'a> {
    pool: &'a DbPool,
    last_version: Option<i64>,
}

impl<'a> StoreFeed<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self {
            pool,
            last_version: None,
        }
    }
}

impl SnapshotFeed for StoreFeed<'_> {
    fn poll(&mut self) -> AppResult<Option<RosterSnapshot>> {
        let version: i64 = self
            .pool
            .conn
            .query_row("PRAGMA data_version", [], |row| row.get(0))?;

        if self.last_version == Some(version) {
            return Ok(None);
        }

        let staff = load_staff(&self.pool.conn)?;
        let roles = load_custom_roles(&self.pool.conn)?;
        self.last_version = Some(version);

        Ok(Some(RosterSnapshot {
            staff,
            roles,
            taken_at: Utc::now(),
        }))
    }
}

/// Canned feed for tests: yields its snapshots in order, then stays
/// quiet forever.
pub struct ScriptedFeed {
    snapshots: VecDeque<RosterSnapshot>,
}

impl ScriptedFeed {
    pub fn new<I: IntoIterator<Item = RosterSnapshot>>(snapshots: I) -> Self {
        Self {
            snapshots: snapshots.into_iter().collect(),
        }
    }
}

impl SnapshotFeed for ScriptedFeed {
    fn poll(&mut self) -> AppResult<Option<RosterSnapshot>> {
        Ok(self.snapshots.pop_front())
    }
}
