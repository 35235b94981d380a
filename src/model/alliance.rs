use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Per-(name, server) aggregate derived entirely from game profiles: the
/// materialized sum of `power_now` over members plus the member count.
/// Rows are created lazily and never deleted; an alliance whose last member
/// leaves remains as a zero row.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Alliance {
    pub id: i32,
    pub name: String,
    pub server: String,
    pub member_count: i64,
    pub total_power: i64,
}

impl Alliance {
    /// Floor of total power over member count, 0 for empty alliances.
    /// Computed on read, never stored. `div_euclid` floors toward negative
    /// infinity, so a transiently negative `total_power` still rounds down.
    pub fn average_power(&self) -> i64 {
        if self.member_count > 0 {
            self.total_power.div_euclid(self.member_count)
        } else {
            0
        }
    }
}

/// An alliance row plus its derived average, as served by the rankings API.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AllianceStatsDto {
    #[serde(flatten)]
    pub alliance: Alliance,
    pub average_power: i64,
}

impl From<Alliance> for AllianceStatsDto {
    fn from(alliance: Alliance) -> Self {
        let average_power = alliance.average_power();

        Self {
            alliance,
            average_power,
        }
    }
}
