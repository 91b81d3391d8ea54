// One full dashboard load.
//
// Rosters and season stats are both required; either failing aborts the
// load. The prior-day snapshot and the category map are secondary: a
// failure there only marks that section unavailable.

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

use hoopsboard_basketball::category::{categories_from_labels, CategoryMap, CategorySummary};
use hoopsboard_basketball::daily::{DailyEntry, SnapshotRow};
use hoopsboard_basketball::roster::RawTeamEntry;
use hoopsboard_basketball::stats::{drop_excluded, RawPlayerRecord};
use hoopsboard_basketball::Standings;
use hoopsboard_core::config::Config;
use hoopsboard_core::fetch::{fetch_json, FetchError, Fetcher};

use crate::protocol::Section;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("team rosters: {0}")]
    Rosters(#[source] FetchError),

    #[error("player statistics: {0}")]
    Players(#[source] FetchError),
}

/// The stats endpoint wraps its rows in `{"data": [...]}`; exported files
/// are a bare array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StatsPayload {
    Bare(Vec<RawPlayerRecord>),
    Wrapped { data: Vec<RawPlayerRecord> },
}

impl StatsPayload {
    fn into_records(self) -> Vec<RawPlayerRecord> {
        match self {
            StatsPayload::Bare(rows) => rows,
            StatsPayload::Wrapped { data } => data,
        }
    }
}

/// Result of a successful load.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub standings: Standings,
    pub categories: Section<CategorySummary>,
    pub daily: Section<Vec<DailyEntry>>,
    pub snapshot_date: NaiveDate,
    pub loaded_at: NaiveDateTime,
}

/// Date key of the snapshot to read. Before `cutover_hour` the newest
/// snapshot is still the previous day's.
pub fn snapshot_date(now: NaiveDateTime, cutover_hour: u32) -> NaiveDate {
    let today = now.date();
    if now.hour() < cutover_hour {
        today.pred_opt().unwrap_or(today)
    } else {
        today
    }
}

/// Fetch every source and build the dashboard.
pub async fn load(
    config: &Config,
    fetcher: &dyn Fetcher,
    now: NaiveDateTime,
) -> Result<Dashboard, LoadError> {
    let sources = &config.sources;
    let rosters_request = sources.rosters.request();
    let players_request = sources.players.request();
    info!(
        "loading rosters from {} and stats from {}",
        rosters_request.location, players_request.location
    );

    let (rosters, stats) = tokio::join!(
        fetch_json::<Vec<RawTeamEntry>>(fetcher, &rosters_request),
        fetch_json::<StatsPayload>(fetcher, &players_request),
    );
    let rosters = rosters.map_err(LoadError::Rosters)?;
    let records = stats.map_err(LoadError::Players)?.into_records();
    info!("fetched {} rosters and {} stat rows", rosters.len(), records.len());

    let records = drop_excluded(records, &config.league.excluded_names);
    let standings = Standings::build(rosters, &records);

    let date = snapshot_date(now, sources.snapshot.cutover_hour);
    let daily = load_daily(config, fetcher, &standings, date).await;
    let categories = load_categories(config, fetcher, &standings).await;

    Ok(Dashboard {
        standings,
        categories,
        daily,
        snapshot_date: date,
        loaded_at: now,
    })
}

async fn load_daily(
    config: &Config,
    fetcher: &dyn Fetcher,
    standings: &Standings,
    date: NaiveDate,
) -> Section<Vec<DailyEntry>> {
    let key = date.format("%Y-%m-%d").to_string();
    let request = config.sources.snapshot.request_for(&key);
    match fetch_json::<Vec<SnapshotRow>>(fetcher, &request).await {
        Ok(rows) => {
            let daily = standings.daily(rows);
            info!("snapshot {}: {} daily entries", key, daily.len());
            Section::Ready(daily)
        }
        Err(e) => {
            warn!("daily snapshot unavailable: {}", e);
            Section::Unavailable(e.to_string())
        }
    }
}

async fn load_categories(
    config: &Config,
    fetcher: &dyn Fetcher,
    standings: &Standings,
) -> Section<CategorySummary> {
    let request = config.sources.categories.request();
    match fetch_json::<CategoryMap>(fetcher, &request).await {
        Ok(membership) => {
            let categories = categories_from_labels(&config.league.category_labels);
            Section::Ready(standings.category_summary(&categories, &membership))
        }
        Err(e) => {
            warn!("category map unavailable: {}", e);
            Section::Unavailable(e.to_string())
        }
    }
}
