use crate::{
    data::{alliance::AllianceRepository, profile::ProfileRepository, Storage},
    model::{
        alliance::AllianceStatsDto,
        profile::GameProfile,
        ranking::{AllianceQuery, AllianceSortKey, PlayerQuery, PlayerSortKey, SortOrder},
    },
};

/// Read side of the leaderboards: exact-match filters, then a stable total
/// order over the chosen key. Missing numeric fields rank as 0 and ties
/// keep their insertion order; there is no secondary sort key.
pub struct RankingService<'a> {
    storage: &'a Storage,
}

impl<'a> RankingService<'a> {
    /// Creates a new instance of [`RankingService`]
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub async fn players(&self, query: PlayerQuery) -> Vec<GameProfile> {
        let mut players: Vec<GameProfile> = ProfileRepository::new(self.storage)
            .list()
            .await
            .into_iter()
            .filter(|p| {
                query
                    .server
                    .as_deref()
                    .map_or(true, |server| p.server.as_deref() == Some(server))
            })
            .filter(|p| {
                query
                    .alliance
                    .as_deref()
                    .map_or(true, |alliance| p.alliance.as_deref() == Some(alliance))
            })
            .collect();

        let key = |p: &GameProfile| match query.sort_by {
            PlayerSortKey::PowerNow => p.power_now.unwrap_or(0),
            PlayerSortKey::PowerMax => p.power_max.unwrap_or(0),
            PlayerSortKey::Level => p.level.map(i64::from).unwrap_or(0),
        };
        sort_ranked(&mut players, key, query.sort_order);

        players
    }

    pub async fn alliances(&self, query: AllianceQuery) -> Vec<AllianceStatsDto> {
        let mut alliances: Vec<AllianceStatsDto> = AllianceRepository::new(self.storage)
            .list()
            .await
            .into_iter()
            .filter(|a| {
                query
                    .server
                    .as_deref()
                    .map_or(true, |server| a.server == server)
            })
            .map(AllianceStatsDto::from)
            .collect();

        let key = |a: &AllianceStatsDto| match query.sort_by {
            AllianceSortKey::TotalPower => a.alliance.total_power,
            AllianceSortKey::MemberCount => a.alliance.member_count,
            AllianceSortKey::AveragePower => a.average_power,
        };
        sort_ranked(&mut alliances, key, query.sort_order);

        alliances
    }
}

// Stable sorts, so equal keys preserve insertion order in both directions.
fn sort_ranked<T>(items: &mut [T], key: impl Fn(&T) -> i64, order: SortOrder) {
    match order {
        SortOrder::Asc => items.sort_by(|a, b| key(a).cmp(&key(b))),
        SortOrder::Desc => items.sort_by(|a, b| key(b).cmp(&key(a))),
    }
}
