//! SkyBlock profiles, museum, garden and bingo participation

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A SkyBlock profile
///
/// Member data is deeply nested and changes often upstream, so it is kept
/// as raw JSON keyed by member UUID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub profile_id: String,
    #[serde(default)]
    pub cute_name: Option<String>,
    /// Whether this is the player's active profile (only set on `profiles`)
    #[serde(default)]
    pub selected: bool,
    #[serde(default)]
    pub members: HashMap<String, Value>,
    #[serde(default)]
    pub banking: Option<Banking>,
    #[serde(default)]
    pub community_upgrades: Option<Value>,
    #[serde(flatten)]
    pub extra_fields: HashMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Banking {
    pub balance: f64,
    #[serde(default)]
    pub transactions: Vec<BankTransaction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankTransaction {
    pub amount: f64,
    pub timestamp: i64,
    pub action: String,
    pub initiator_name: String,
}

/// Museum state of a single profile member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MuseumMember {
    #[serde(default)]
    pub value: f64,
    #[serde(default)]
    pub appraisal: bool,
    #[serde(default)]
    pub items: HashMap<String, Value>,
    #[serde(default)]
    pub special: Vec<Value>,
}

/// Garden of a profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Garden {
    pub uuid: String,
    #[serde(default)]
    pub unlocked_plot_ids: Vec<String>,
    #[serde(default)]
    pub garden_experience: f64,
    #[serde(default)]
    pub resources_collected: HashMap<String, f64>,
    #[serde(default)]
    pub crop_upgrade_levels: HashMap<String, u32>,
    #[serde(default)]
    pub selected_barn_skin: Option<String>,
    #[serde(flatten)]
    pub extra_fields: HashMap<String, Value>,
}

/// Participation in one bingo event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BingoParticipation {
    pub key: u32,
    #[serde(default)]
    pub points: u32,
    #[serde(default)]
    pub completed_goals: Vec<String>,
}

/// Response of `skyblock/profile`
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileResponse {
    pub success: bool,
    pub profile: Option<Profile>,
}

/// Response of `skyblock/profiles`
#[derive(Debug, Clone, Deserialize)]
pub struct ProfilesResponse {
    pub success: bool,
    /// `null` when the player has never played SkyBlock
    pub profiles: Option<Vec<Profile>>,
}

/// Response of `skyblock/museum`
#[derive(Debug, Clone, Deserialize)]
pub struct MuseumResponse {
    pub success: bool,
    #[serde(default)]
    pub members: HashMap<String, MuseumMember>,
}

/// Response of `skyblock/garden`
#[derive(Debug, Clone, Deserialize)]
pub struct GardenResponse {
    pub success: bool,
    pub garden: Option<Garden>,
}

/// Response of `skyblock/bingo`
#[derive(Debug, Clone, Deserialize)]
pub struct BingoResponse {
    pub success: bool,
    #[serde(default)]
    pub events: Vec<BingoParticipation>,
}
