use crate::{
    data::{Storage, Tables},
    model::alliance::Alliance,
};

/// Applies a member/power delta to the aggregate row for `(name, server)`,
/// creating the row lazily when the pair is seen for the first time.
///
/// Rows are never removed: an alliance whose last member leaves stays
/// behind with `member_count` 0 and shows up in listings as a zero row.
pub(crate) fn adjust_alliance_stats(
    tables: &mut Tables,
    name: &str,
    server: &str,
    power_diff: i64,
    member_diff: i64,
) {
    if let Some(alliance) = tables
        .alliances
        .values_mut()
        .find(|a| a.name == name && a.server == server)
    {
        alliance.member_count += member_diff;
        alliance.total_power += power_diff;
        return;
    }

    let id = tables.next_alliance_id();
    tables.alliances.insert(
        id,
        Alliance {
            id,
            name: name.to_string(),
            server: server.to_string(),
            member_count: member_diff,
            total_power: power_diff,
        },
    );
}

pub struct AllianceRepository<'a> {
    storage: &'a Storage,
}

impl<'a> AllianceRepository<'a> {
    /// Creates a new instance of [`AllianceRepository`]
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// All aggregate rows in insertion order, zero rows included.
    pub async fn list(&self) -> Vec<Alliance> {
        self.storage
            .read()
            .await
            .alliances
            .values()
            .cloned()
            .collect()
    }

    pub async fn get_by_name_and_server(&self, name: &str, server: &str) -> Option<Alliance> {
        self.storage
            .read()
            .await
            .alliances
            .values()
            .find(|a| a.name == name && a.server == server)
            .cloned()
    }
}
