//! Profile service
//!
//! Every endpoint here requires an API key. The `cached_*` helpers keep
//! results for the client's TTL.

use std::collections::HashMap;
use std::sync::Arc;

use crate::client::Client;
use crate::error::ApiResult;
use crate::models::{
    BingoParticipation, BingoResponse, Garden, GardenResponse, MuseumMember, MuseumResponse,
    Profile, ProfileResponse, ProfilesResponse,
};
use crate::transport::with_query;

#[derive(Debug, Clone)]
pub struct Profiles {
    client: Client,
}

impl Profiles {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// A profile by its UUID
    pub async fn profile(&self, profile_id: &str) -> ApiResult<Option<Profile>> {
        let path = with_query("skyblock/profile", &[("profile", profile_id)]);
        let response: ProfileResponse = self.client.get(&path, true).await?;
        Ok(response.profile)
    }

    /// All profiles of a player; empty if the player never joined SkyBlock
    pub async fn profiles(&self, player_uuid: &str) -> ApiResult<Vec<Profile>> {
        let path = with_query("skyblock/profiles", &[("uuid", player_uuid)]);
        let response: ProfilesResponse = self.client.get(&path, true).await?;
        Ok(response.profiles.unwrap_or_default())
    }

    /// Museum data of every member, keyed by member UUID
    pub async fn museum(&self, profile_id: &str) -> ApiResult<HashMap<String, MuseumMember>> {
        let path = with_query("skyblock/museum", &[("profile", profile_id)]);
        let response: MuseumResponse = self.client.get(&path, true).await?;
        Ok(response.members)
    }

    pub async fn garden(&self, profile_id: &str) -> ApiResult<Option<Garden>> {
        let path = with_query("skyblock/garden", &[("profile", profile_id)]);
        let response: GardenResponse = self.client.get(&path, true).await?;
        Ok(response.garden)
    }

    /// Bingo events the player took part in
    pub async fn bingo(&self, player_uuid: &str) -> ApiResult<Vec<BingoParticipation>> {
        let path = with_query("skyblock/bingo", &[("uuid", player_uuid)]);
        let response: BingoResponse = self.client.get(&path, true).await?;
        Ok(response.events)
    }

    /// Cached [`Profiles::profiles`]
    pub async fn cached_profiles(&self, player_uuid: &str) -> ApiResult<Arc<Vec<Profile>>> {
        let key = format!("profiles:{player_uuid}");
        self.client
            .cached(&key, move || self.profiles(player_uuid))
            .await
    }

    /// Cached [`Profiles::profile`]
    pub async fn cached_profile(&self, profile_id: &str) -> ApiResult<Arc<Option<Profile>>> {
        let key = format!("profile:{profile_id}");
        self.client
            .cached(&key, move || self.profile(profile_id))
            .await
    }

    /// The profile the player currently has selected
    pub async fn active_profile(&self, player_uuid: &str) -> ApiResult<Option<Profile>> {
        let profiles = self.cached_profiles(player_uuid).await?;
        Ok(profiles.iter().find(|p| p.selected).cloned())
    }
}
