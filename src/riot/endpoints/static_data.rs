use crate::error::AppError;
use crate::riot::RiotClient;
use crate::riot::ddragon::{ItemFile, NameTables, RuneTree, SummonerSpellFile};

impl RiotClient {
    fn ddragon_url(&self, file: &str) -> String {
        format!(
            "{}/cdn/{}/data/en_US/{}",
            self.ddragon_base_url, self.ddragon_version, file
        )
    }

    /// Download item, summoner spell and rune names for the configured
    /// Data Dragon version.
    pub async fn get_name_tables(&self) -> Result<NameTables, AppError> {
        let items: ItemFile = self.get_static(&self.ddragon_url("item.json")).await?;
        let spells: SummonerSpellFile = self.get_static(&self.ddragon_url("summoner.json")).await?;
        let runes: Vec<RuneTree> = self
            .get_static(&self.ddragon_url("runesReforged.json"))
            .await?;

        Ok(NameTables::from_static_data(items, spells, runes))
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;

    use crate::config::Config;
    use crate::riot::RiotClient;

    #[tokio::test]
    async fn downloads_all_three_files_for_the_configured_version() {
        let server = MockServer::start_async().await;
        let items = server
            .mock_async(|when, then| {
                when.method(GET).path("/cdn/14.1.1/data/en_US/item.json");
                then.status(200)
                    .json_body(json!({ "data": { "1001": { "name": "Boots" } } }));
            })
            .await;
        let spells = server
            .mock_async(|when, then| {
                when.method(GET).path("/cdn/14.1.1/data/en_US/summoner.json");
                then.status(200).json_body(json!({
                    "data": { "SummonerFlash": { "key": "4", "name": "Flash" } }
                }));
            })
            .await;
        let runes = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/cdn/14.1.1/data/en_US/runesReforged.json");
                then.status(200).json_body(json!([
                    { "id": 8000, "name": "Precision", "slots": [
                        { "runes": [ { "id": 8005, "name": "Press the Attack" } ] }
                    ] }
                ]));
            })
            .await;
        let mut config = Config::with_key("RGAPI-test");
        config.ddragon_base_url = server.base_url();
        config.ddragon_version = "14.1.1".into();
        let client = RiotClient::new(&config).unwrap();

        let tables = client.get_name_tables().await.unwrap();

        items.assert_async().await;
        spells.assert_async().await;
        runes.assert_async().await;
        assert_eq!(tables.item(1001), Some("Boots"));
        assert_eq!(tables.summoner_spell(4), Some("Flash"));
        assert_eq!(tables.rune(8005), Some("Press the Attack"));
        // Static data does not count against the Riot API budget.
        assert_eq!(client.metrics().total(), 0);
    }
}
