use serde::Deserialize;
use serde_json::Value;

use crate::error::AppError;

/// Riot's queueId for Ranked Solo/Duo on Summoner's Rift.
pub const RANKED_SOLO_QUEUE_ID: u16 = 420;

/// A resolved player: the identifier every later call needs plus the name
/// used to label the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summoner {
    pub puuid: String,
    pub display_name: String,
}

// ============================================================================
// Account-v1
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    pub puuid: String,
    pub game_name: Option<String>,
    pub tag_line: Option<String>,
}

// ============================================================================
// Summoner-v4
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummonerDto {
    pub puuid: String,
    #[serde(default)]
    pub name: Option<String>,
}

// ============================================================================
// Match-v5
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchDto {
    pub metadata: MetadataDto,
    pub info: InfoDto,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataDto {
    pub match_id: String,
    /// Participant PUUIDs, in the same order as `info.participants`.
    pub participants: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoDto {
    #[serde(default)]
    pub queue_id: Option<u16>,
    /// Kept untyped: every field the API sends ends up as a column.
    pub participants: Vec<Value>,
}

impl MatchDto {
    /// Participant record of `puuid` in this match.
    pub fn participant(&self, puuid: &str) -> Result<&Value, AppError> {
        self.metadata
            .participants
            .iter()
            .position(|p| p == puuid)
            .and_then(|index| self.info.participants.get(index))
            .or_else(|| {
                self.info
                    .participants
                    .iter()
                    .find(|p| p.get("puuid").and_then(Value::as_str) == Some(puuid))
            })
            .ok_or_else(|| AppError::PuuidNotInMatch {
                puuid: puuid.to_string(),
                match_id: self.metadata.match_id.clone(),
            })
    }
}
