use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Riot API error: {status} - {message}")]
    RiotApi { status: u16, message: String },

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Summoner not found: {0}")]
    SummonerNotFound(String),

    #[error("Invalid region: {0}")]
    InvalidRegion(String),

    #[error("Player {puuid} is not part of match {match_id}")]
    PuuidNotInMatch { puuid: String, match_id: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Process exit code for this error: `2` for bad user input, `1` otherwise.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::InvalidRegion(_) | AppError::SummonerNotFound(_) => 2,
            _ => 1,
        }
    }
}
