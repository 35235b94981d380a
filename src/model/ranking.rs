use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

/// Query string for `GET /api/rankings/players`. Absent filters mean no
/// constraint; an unrecognized sort key fails deserialization.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct PlayerQuery {
    pub server: Option<String>,
    pub alliance: Option<String>,
    #[serde(default)]
    pub sort_by: PlayerSortKey,
    #[serde(default)]
    pub sort_order: SortOrder,
}

/// Query string for `GET /api/rankings/alliances`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct AllianceQuery {
    pub server: Option<String>,
    #[serde(default)]
    pub sort_by: AllianceSortKey,
    #[serde(default)]
    pub sort_order: SortOrder,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum PlayerSortKey {
    #[default]
    PowerNow,
    PowerMax,
    Level,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum AllianceSortKey {
    #[default]
    TotalPower,
    MemberCount,
    AveragePower,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}
