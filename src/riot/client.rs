use std::sync::Arc;

use governor::{
    Quota, RateLimiter,
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::trace;

use crate::config::Config;
use crate::error::AppError;

use super::metrics::RequestMetrics;
use super::region::{Platform, Region};

pub struct RiotClient {
    http: reqwest::Client,
    limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
    /// Riot API Key
    key: String,
    base_url: Option<String>,
    pub(super) ddragon_base_url: String,
    pub(super) ddragon_version: String,
    metrics: Arc<RequestMetrics>,
}

impl RiotClient {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("rankedstats/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            limiter: RateLimiter::direct(Quota::per_second(config.riot_rate_limit_per_second)),
            key: config.riot_api_key.clone(),
            base_url: config
                .riot_api_base_url
                .as_ref()
                .map(|url| url.trim_end_matches('/').to_string()),
            ddragon_base_url: config.ddragon_base_url.trim_end_matches('/').to_string(),
            ddragon_version: config.ddragon_version.clone(),
            metrics: RequestMetrics::new(),
        })
    }

    pub fn metrics(&self) -> &RequestMetrics {
        &self.metrics
    }

    pub(super) fn platform_url(&self, platform: Platform) -> String {
        self.base_url
            .clone()
            .unwrap_or_else(|| platform.base_url())
    }

    pub(super) fn region_url(&self, region: Region) -> String {
        self.base_url.clone().unwrap_or_else(|| region.base_url())
    }

    /// Authenticated GET against the Riot API.
    pub(super) async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        // Ensure we do not exceed the Riot API rate limits before doing any request
        self.limiter.until_ready().await;
        self.metrics.inc();

        trace!(url, "🛰️ GET");

        let res = self
            .http
            .get(url)
            .header("X-Riot-Token", &self.key)
            .send()
            .await?;

        Self::decode(res).await
    }

    /// Unauthenticated GET, used for Data Dragon static files.
    pub(super) async fn get_static<T: DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        trace!(url, "🐉 GET");

        let res = self.http.get(url).send().await?;

        Self::decode(res).await
    }

    async fn decode<T: DeserializeOwned>(res: reqwest::Response) -> Result<T, AppError> {
        match res.status() {
            StatusCode::OK => Ok(res.json().await?),
            status => {
                let message = res.text().await.unwrap_or_default();
                Err(AppError::RiotApi {
                    status: status.as_u16(),
                    message,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::{Value, json};

    use super::RiotClient;
    use crate::config::Config;
    use crate::error::AppError;

    fn client_for(server: &MockServer) -> RiotClient {
        let mut config = Config::with_key("RGAPI-test");
        config.riot_api_base_url = Some(server.base_url());
        RiotClient::new(&config).unwrap()
    }

    #[tokio::test]
    async fn get_sends_token_and_decodes_body() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/ping")
                    .header("X-Riot-Token", "RGAPI-test");
                then.status(200).json_body(json!({ "ok": true }));
            })
            .await;
        let client = client_for(&server);

        let body: Value = client.get(&server.url("/ping")).await.unwrap();

        mock.assert_async().await;
        assert_eq!(body, json!({ "ok": true }));
        assert_eq!(client.metrics().total(), 1);
    }

    #[tokio::test]
    async fn non_ok_status_maps_to_riot_api_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/limited");
                then.status(429).body("Rate limit exceeded");
            })
            .await;
        let client = client_for(&server);

        let res: Result<Value, AppError> = client.get(&server.url("/limited")).await;

        assert!(matches!(
            res,
            Err(AppError::RiotApi { status: 429, ref message }) if message == "Rate limit exceeded"
        ));
    }

    #[tokio::test]
    async fn request_propagates_reqwest_error() {
        let client = RiotClient::new(&Config::with_key("RGAPI-INVALID-KEY")).unwrap();

        let res: Result<(), AppError> = client.get("ht!tp://invalid-url").await;

        assert!(matches!(res, Err(AppError::Http(_))));
    }
}
