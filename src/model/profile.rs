use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A user's linked game character. At most one profile exists per user;
/// created on the first game-data submission, mutated on later submissions
/// or alliance edits.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GameProfile {
    pub id: i32,
    pub user_id: i32,
    pub character_id: String,
    pub nickname: String,
    pub server: Option<String>,
    pub alliance: Option<String>,
    pub level: Option<i32>,
    pub power_now: Option<i64>,
    pub power_max: Option<i64>,
    pub hidden_power: Option<i64>,
}

/// Character snapshot submitted by the client after a successful gateway
/// fetch. `character_id` and `nickname` are required even for updates.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GameDataDto {
    pub character_id: String,
    pub nickname: String,
    pub server: Option<String>,
    pub alliance: Option<String>,
    pub level: Option<i32>,
    pub power_now: Option<i64>,
    pub power_max: Option<i64>,
    pub hidden_power: Option<i64>,
}

/// Body of `PATCH /api/profile/alliance`. An absent alliance leaves the
/// profile untouched; there is no way to clear an alliance back to null.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateAllianceDto {
    pub alliance: Option<String>,
}

/// Fields for a profile being created for the first time.
#[derive(Debug, Clone)]
pub struct NewGameProfile {
    pub user_id: i32,
    pub character_id: String,
    pub nickname: String,
    pub server: Option<String>,
    pub alliance: Option<String>,
    pub level: Option<i32>,
    pub power_now: Option<i64>,
    pub power_max: Option<i64>,
    pub hidden_power: Option<i64>,
}

/// Field-level patch applied to a stored profile. `None` means "field
/// absent, leave as is"; optional profile fields can be set but never
/// cleared through a patch.
#[derive(Debug, Clone, Default)]
pub struct ProfilePatch {
    pub server: Option<String>,
    pub alliance: Option<String>,
    pub level: Option<i32>,
    pub power_now: Option<i64>,
    pub power_max: Option<i64>,
    pub hidden_power: Option<i64>,
}

impl From<GameDataDto> for ProfilePatch {
    fn from(data: GameDataDto) -> Self {
        Self {
            server: data.server,
            alliance: data.alliance,
            level: data.level,
            power_now: data.power_now,
            power_max: data.power_max,
            hidden_power: data.hidden_power,
        }
    }
}
