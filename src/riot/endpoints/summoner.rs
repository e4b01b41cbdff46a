use crate::error::AppError;
use crate::riot::{Platform, RiotClient, SummonerDto};

impl RiotClient {
    /// Get summoner by display name
    /// Uses platform routing (euw1, na1, kr, etc.)
    pub async fn get_summoner_by_name(
        &self,
        platform: Platform,
        summoner_name: &str,
    ) -> Result<SummonerDto, AppError> {
        let url = format!(
            "{}/lol/summoner/v4/summoners/by-name/{}",
            self.platform_url(platform),
            urlencoding::encode(summoner_name)
        );

        self.get(&url).await.map_err(|e| {
            if matches!(&e, AppError::RiotApi { status: 404, .. }) {
                AppError::SummonerNotFound(summoner_name.to_string())
            } else {
                e
            }
        })
    }
}
