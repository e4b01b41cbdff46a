//! Ranked stats collection: resolve the player, walk their ranked history and
//! turn every match into one table row.

use std::path::PathBuf;

use tracing::{Span, debug, field, info, instrument};

use crate::config::Config;
use crate::error::AppError;
use crate::output;
use crate::riot::{Platform, RankedStatsApi, StaticDataApi, Summoner};
use crate::table::{Table, flatten, transform};

/// What to collect, validated from user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub platform: Platform,
    pub summoner_name: String,
}

impl Query {
    pub fn parse(region: &str, summoner_name: &str) -> Result<Self, AppError> {
        let platform = region.parse()?;
        let summoner_name = summoner_name.trim();
        if summoner_name.is_empty() {
            return Err(AppError::SummonerNotFound(summoner_name.to_string()));
        }

        Ok(Self {
            platform,
            summoner_name: summoner_name.to_string(),
        })
    }
}

/// Raw collection result, before any reshaping.
#[derive(Debug, Clone)]
pub struct Collected {
    pub summoner: Summoner,
    pub table: Table,
}

pub struct Collector<'a, A> {
    api: &'a A,
    match_count: u32,
}

impl<'a, A: RankedStatsApi> Collector<'a, A> {
    pub fn new(api: &'a A, match_count: u32) -> Self {
        Self { api, match_count }
    }

    /// Fetch every ranked match of the queried player and flatten the
    /// player's own record of each one. Any failed call aborts.
    #[instrument(
        skip(self, query),
        fields(
            region = %query.platform,
            summoner = %query.summoner_name,
            match_count = field::Empty
        )
    )]
    pub async fn collect(&self, query: &Query) -> Result<Collected, AppError> {
        let summoner = self
            .api
            .resolve_summoner(query.platform, &query.summoner_name)
            .await?;
        debug!(puuid = %summoner.puuid, "🔎 Summoner resolved");

        let region = query.platform.to_region();
        let match_ids = self
            .api
            .get_ranked_match_ids(region, &summoner.puuid, self.match_count)
            .await?;

        Span::current().record("match_count", match_ids.len());
        info!("📥 Fetching {} ranked match(es)", match_ids.len());

        let mut table = Table::new();
        for (index, match_id) in match_ids.iter().enumerate() {
            let match_data = self.api.get_match(region, match_id).await?;
            let participant = match_data.participant(&summoner.puuid)?;

            debug!(match_id, index, "📥 Match fetched");
            table.push(flatten(participant));
        }

        Ok(Collected { summoner, table })
    }
}

/// Full run: validate input, collect, reshape and write the CSV. Returns the
/// path of the written file.
pub async fn run<A>(
    api: &A,
    config: &Config,
    region: &str,
    summoner_name: &str,
) -> Result<PathBuf, AppError>
where
    A: RankedStatsApi + StaticDataApi,
{
    let query = Query::parse(region, summoner_name)?;

    let Collected {
        summoner,
        mut table,
    } = Collector::new(api, config.match_count).collect(&query).await?;

    let names = if config.decode_ids {
        Some(api.get_name_tables().await?)
    } else {
        None
    };
    transform::apply(&mut table, names.as_ref());

    let path = output::output_path(&config.output_dir, &summoner.display_name, query.platform);
    output::write_table(&table, &path)?;

    info!(
        path = %path.display(),
        rows = table.len(),
        "✅ Ranked stats saved"
    );

    Ok(path)
}
