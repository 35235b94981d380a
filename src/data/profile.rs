use crate::{
    data::{alliance::adjust_alliance_stats, Storage},
    model::profile::{GameProfile, NewGameProfile, ProfilePatch},
};

/// Store for game profiles, and the only trigger for alliance aggregate
/// updates. Every mutation here adjusts the affected aggregate rows inside
/// the same write lock, so profiles and aggregates can never be observed
/// out of step.
pub struct ProfileRepository<'a> {
    storage: &'a Storage,
}

impl<'a> ProfileRepository<'a> {
    /// Creates a new instance of [`ProfileRepository`]
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub async fn get_by_user_id(&self, user_id: i32) -> Option<GameProfile> {
        self.storage
            .read()
            .await
            .profiles
            .values()
            .find(|profile| profile.user_id == user_id)
            .cloned()
    }

    /// All profiles in insertion order.
    pub async fn list(&self) -> Vec<GameProfile> {
        self.storage
            .read()
            .await
            .profiles
            .values()
            .cloned()
            .collect()
    }

    /// Creates the profile and, when it already carries both an alliance
    /// and a server, folds it into that aggregate in the same step.
    pub async fn create(&self, new: NewGameProfile) -> GameProfile {
        let mut tables = self.storage.write().await;

        let id = tables.next_profile_id();
        let profile = GameProfile {
            id,
            user_id: new.user_id,
            character_id: new.character_id,
            nickname: new.nickname,
            server: new.server,
            alliance: new.alliance,
            level: new.level,
            power_now: new.power_now,
            power_max: new.power_max,
            hidden_power: new.hidden_power,
        };

        if let (Some(alliance), Some(server)) = (profile.alliance.as_deref(), profile.server.as_deref())
        {
            adjust_alliance_stats(
                &mut tables,
                alliance,
                server,
                profile.power_now.unwrap_or(0),
                1,
            );
        }

        tables.profiles.insert(id, profile.clone());

        profile
    }

    /// Applies a patch to the profile, adjusting alliance aggregates from
    /// the pre-merge snapshot first.
    ///
    /// Ordering is load-bearing: an alliance move migrates the *old* power
    /// out of the old row and into the new one, and a power change in the
    /// same call lands as a delta on whichever row the profile ends up in.
    /// Only after both adjustments is the patch merged into the stored
    /// profile.
    pub async fn update(&self, id: i32, patch: ProfilePatch) -> Option<GameProfile> {
        let mut tables = self.storage.write().await;

        let old = tables.profiles.get(&id)?.clone();
        let old_power = old.power_now.unwrap_or(0);
        let alliance_changed = patch.alliance.is_some() && patch.alliance != old.alliance;

        if alliance_changed {
            if let (Some(new_alliance), Some(server)) =
                (patch.alliance.as_deref(), old.server.as_deref())
            {
                if let Some(old_alliance) = old.alliance.as_deref() {
                    adjust_alliance_stats(&mut tables, old_alliance, server, -old_power, -1);
                }
                adjust_alliance_stats(&mut tables, new_alliance, server, old_power, 1);
            }
        }

        if let Some(new_power) = patch.power_now {
            if old.power_now != Some(new_power) {
                let current_alliance = if alliance_changed {
                    patch.alliance.as_deref()
                } else {
                    old.alliance.as_deref()
                };

                if let (Some(alliance), Some(server)) = (current_alliance, old.server.as_deref()) {
                    adjust_alliance_stats(
                        &mut tables,
                        alliance,
                        server,
                        new_power - old_power,
                        0,
                    );
                }
            }
        }

        let profile = tables.profiles.get_mut(&id)?;
        if let Some(server) = patch.server {
            profile.server = Some(server);
        }
        if let Some(alliance) = patch.alliance {
            profile.alliance = Some(alliance);
        }
        if let Some(level) = patch.level {
            profile.level = Some(level);
        }
        if let Some(power_now) = patch.power_now {
            profile.power_now = Some(power_now);
        }
        if let Some(power_max) = patch.power_max {
            profile.power_max = Some(power_max);
        }
        if let Some(hidden_power) = patch.hidden_power {
            profile.hidden_power = Some(hidden_power);
        }

        Some(profile.clone())
    }
}
