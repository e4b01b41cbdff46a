use std::env;
use std::num::NonZeroU32;
use std::path::PathBuf;

use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct Config {
    pub riot_api_key: String,
    pub match_count: u32,
    pub output_dir: PathBuf,
    pub ddragon_version: String,
    pub decode_ids: bool,
    pub riot_rate_limit_per_second: NonZeroU32,
    /// Replaces every Riot routing host when set.
    pub riot_api_base_url: Option<String>,
    pub ddragon_base_url: String,
}

pub const DEFAULT_MATCH_COUNT: u32 = 20;
pub const DEFAULT_DDRAGON_VERSION: &str = "16.1.1";
pub const DEFAULT_DDRAGON_BASE_URL: &str = "https://ddragon.leagueoflegends.com";
const DEFAULT_RIOT_RATE_LIMIT_PER_SECOND: u32 = 20;

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let riot_api_key = env::var("RIOT_API_KEY")
            .map_err(|_| AppError::Config("RIOT_API_KEY must be set".into()))?;

        let match_count = match env::var("MATCH_COUNT") {
            Ok(v) => v
                .parse::<u32>()
                .ok()
                .filter(|n| (1..=100).contains(n))
                .ok_or_else(|| {
                    AppError::Config(format!("MATCH_COUNT must be between 1 and 100, got {v}"))
                })?,
            Err(_) => DEFAULT_MATCH_COUNT,
        };

        let output_dir = env::var("OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."));

        let ddragon_version =
            env::var("DDRAGON_VERSION").unwrap_or_else(|_| DEFAULT_DDRAGON_VERSION.into());

        let decode_ids = env::var("DECODE_IDS")
            .ok()
            .map(|v| parse_flag(&v))
            .unwrap_or(true);

        let riot_rate_limit_per_second = env::var("RIOT_RATE_LIMIT_PER_SECOND")
            .ok()
            .and_then(|v| v.parse().ok())
            .and_then(NonZeroU32::new)
            .unwrap_or_else(|| {
                NonZeroU32::new(DEFAULT_RIOT_RATE_LIMIT_PER_SECOND).unwrap_or(NonZeroU32::MIN)
            });

        let riot_api_base_url = env::var("RIOT_API_BASE_URL").ok();

        let ddragon_base_url =
            env::var("DDRAGON_BASE_URL").unwrap_or_else(|_| DEFAULT_DDRAGON_BASE_URL.into());

        Ok(Self {
            riot_api_key,
            match_count,
            output_dir,
            ddragon_version,
            decode_ids,
            riot_rate_limit_per_second,
            riot_api_base_url,
            ddragon_base_url,
        })
    }

    /// Configuration with defaults for everything but the key.
    pub fn with_key(riot_api_key: impl Into<String>) -> Self {
        Self {
            riot_api_key: riot_api_key.into(),
            match_count: DEFAULT_MATCH_COUNT,
            output_dir: PathBuf::from("."),
            ddragon_version: DEFAULT_DDRAGON_VERSION.into(),
            decode_ids: true,
            riot_rate_limit_per_second: NonZeroU32::new(DEFAULT_RIOT_RATE_LIMIT_PER_SECOND)
                .unwrap_or(NonZeroU32::MIN),
            riot_api_base_url: None,
            ddragon_base_url: DEFAULT_DDRAGON_BASE_URL.into(),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}
