use clap::Parser;

/// Save a player's recent ranked Solo/Duo matches to a CSV file.
///
/// The Riot API key is read from RIOT_API_KEY (environment or .env file).
#[derive(Debug, Parser)]
#[command(name = "rankedstats", version, about)]
pub struct Args {
    /// Platform the account plays on (e.g. NA1, EUW1, KR)
    pub region: String,

    /// Summoner name, or a Riot ID written as GameName#TAG
    pub summoner_name: String,
}
