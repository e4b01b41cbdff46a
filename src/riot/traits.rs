use async_trait::async_trait;

use crate::error::AppError;

use super::ddragon::NameTables;
use super::region::{Platform, Region};
use super::types::{MatchDto, Summoner};

/// The Riot API calls a ranked stats collection needs.
#[async_trait]
pub trait RankedStatsApi: Send + Sync {
    /// Resolve a summoner name, or a `GameName#TAG` Riot ID, to its PUUID.
    async fn resolve_summoner(
        &self,
        platform: Platform,
        summoner_name: &str,
    ) -> Result<Summoner, AppError>;

    async fn get_ranked_match_ids(
        &self,
        region: Region,
        puuid: &str,
        count: u32,
    ) -> Result<Vec<String>, AppError>;

    async fn get_match(&self, region: Region, match_id: &str) -> Result<MatchDto, AppError>;
}

/// Source of ID to name translations.
#[async_trait]
pub trait StaticDataApi: Send + Sync {
    async fn get_name_tables(&self) -> Result<NameTables, AppError>;
}
