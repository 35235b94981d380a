//! In-memory data access layer.
//!
//! All tables live behind one `RwLock`; repositories take the lock once per
//! logical operation, so a profile mutation and the alliance aggregate
//! adjustments it triggers are applied as a single unit and no reader ever
//! observes a half-updated aggregate. Tables are BTreeMaps keyed by
//! sequentially allocated ids, which makes iteration order equal insertion
//! order, which the ranking queries rely on for tie stability.

pub mod alliance;
pub mod profile;
pub mod user;

use std::{collections::BTreeMap, sync::Arc};

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::model::{alliance::Alliance, profile::GameProfile, user::User};

#[derive(Default)]
pub struct Tables {
    pub users: BTreeMap<i32, User>,
    pub profiles: BTreeMap<i32, GameProfile>,
    pub alliances: BTreeMap<i32, Alliance>,
    next_user_id: i32,
    next_profile_id: i32,
    next_alliance_id: i32,
}

impl Tables {
    pub(crate) fn next_user_id(&mut self) -> i32 {
        self.next_user_id += 1;
        self.next_user_id
    }

    pub(crate) fn next_profile_id(&mut self) -> i32 {
        self.next_profile_id += 1;
        self.next_profile_id
    }

    pub(crate) fn next_alliance_id(&mut self) -> i32 {
        self.next_alliance_id += 1;
        self.next_alliance_id
    }
}

/// Handle to the shared in-memory tables. Cheap to clone; everything is
/// lost on process exit.
#[derive(Clone, Default)]
pub struct Storage {
    tables: Arc<RwLock<Tables>>,
}

impl Storage {
    pub(crate) async fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().await
    }

    pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().await
    }
}
