use crate::{
    data::{profile::ProfileRepository, Storage},
    error::{profile::ProfileError, Error},
    model::profile::{GameDataDto, GameProfile, NewGameProfile, ProfilePatch},
};

pub struct ProfileService<'a> {
    storage: &'a Storage,
}

impl<'a> ProfileService<'a> {
    /// Creates a new instance of [`ProfileService`]
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create-or-update from a submitted gateway snapshot. Character id and
    /// nickname are fixed at first submission; later submissions only merge
    /// the stat fields.
    pub async fn submit_game_data(
        &self,
        user_id: i32,
        data: GameDataDto,
    ) -> Result<GameProfile, Error> {
        let profiles = ProfileRepository::new(self.storage);

        match profiles.get_by_user_id(user_id).await {
            Some(existing) => {
                tracing::debug!(user_id, profile_id = existing.id, "updating game profile");

                profiles
                    .update(existing.id, ProfilePatch::from(data))
                    .await
                    .ok_or_else(|| {
                        Error::InternalError(format!(
                            "Profile ID {} vanished mid-update",
                            existing.id
                        ))
                    })
            }
            None => {
                tracing::debug!(user_id, "creating game profile");

                Ok(profiles
                    .create(NewGameProfile {
                        user_id,
                        character_id: data.character_id,
                        nickname: data.nickname,
                        server: data.server,
                        alliance: data.alliance,
                        level: data.level,
                        power_now: data.power_now,
                        power_max: data.power_max,
                        hidden_power: data.hidden_power,
                    })
                    .await)
            }
        }
    }

    /// Applies an alliance edit to the user's existing profile.
    pub async fn update_alliance(
        &self,
        user_id: i32,
        alliance: Option<String>,
    ) -> Result<GameProfile, Error> {
        let profiles = ProfileRepository::new(self.storage);

        let Some(existing) = profiles.get_by_user_id(user_id).await else {
            return Err(ProfileError::NotFound(user_id).into());
        };

        profiles
            .update(
                existing.id,
                ProfilePatch {
                    alliance,
                    ..ProfilePatch::default()
                },
            )
            .await
            .ok_or_else(|| {
                Error::InternalError(format!("Profile ID {} vanished mid-update", existing.id))
            })
    }
}
