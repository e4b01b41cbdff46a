//! Thin Riot API client: account/summoner resolution, Match-v5 and Data Dragon.

use async_trait::async_trait;

pub mod client;
pub mod ddragon;
mod endpoints;
pub mod metrics;
pub mod region;
pub mod traits;
pub mod types;

pub use client::RiotClient;
pub use ddragon::NameTables;
pub use region::{Platform, Region};
pub use traits::{RankedStatsApi, StaticDataApi};
pub use types::{AccountDto, MatchDto, RANKED_SOLO_QUEUE_ID, Summoner, SummonerDto};

use crate::error::AppError;

#[async_trait]
impl RankedStatsApi for RiotClient {
    async fn resolve_summoner(
        &self,
        platform: Platform,
        summoner_name: &str,
    ) -> Result<Summoner, AppError> {
        if let Some((game_name, tag_line)) = summoner_name.split_once('#') {
            if game_name.trim().is_empty() || tag_line.trim().is_empty() {
                return Err(AppError::SummonerNotFound(summoner_name.to_string()));
            }

            let account = self
                .get_account_by_riot_id(platform.account_region(), game_name, tag_line)
                .await?;
            let display_name = match (account.game_name, account.tag_line) {
                (Some(game_name), Some(tag_line)) => format!("{game_name}#{tag_line}"),
                _ => summoner_name.to_string(),
            };

            return Ok(Summoner {
                puuid: account.puuid,
                display_name,
            });
        }

        let summoner = self.get_summoner_by_name(platform, summoner_name).await?;

        Ok(Summoner {
            puuid: summoner.puuid,
            display_name: summoner.name.unwrap_or_else(|| summoner_name.to_string()),
        })
    }

    async fn get_ranked_match_ids(
        &self,
        region: Region,
        puuid: &str,
        count: u32,
    ) -> Result<Vec<String>, AppError> {
        self.get_match_ids(region, puuid, RANKED_SOLO_QUEUE_ID, count)
            .await
    }

    async fn get_match(&self, region: Region, match_id: &str) -> Result<MatchDto, AppError> {
        RiotClient::get_match(self, region, match_id).await
    }
}

#[async_trait]
impl StaticDataApi for RiotClient {
    async fn get_name_tables(&self) -> Result<NameTables, AppError> {
        RiotClient::get_name_tables(self).await
    }
}
