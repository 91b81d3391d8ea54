// Configuration loading and parsing (league.toml, sources.toml).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::fetch::{Location, Request};

/// Number of category labels league.toml must provide.
pub const CATEGORY_LABEL_COUNT: usize = 10;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },

    #[error("failed to initialize config from defaults: {message}")]
    DefaultsCopyError { message: String },
}

// ---------------------------------------------------------------------------
// Top-level assembled Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Config {
    pub league: LeagueConfig,
    pub sources: SourcesConfig,
}

// ---------------------------------------------------------------------------
// league.toml structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
struct LeagueFile {
    league: LeagueConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LeagueConfig {
    pub name: String,
    /// Rows shown in the top teams / top players views.
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    /// Stat rows with these names are placeholders, not players.
    #[serde(default = "default_excluded_names")]
    pub excluded_names: Vec<String>,
    /// Display labels for category keys `p1`..`p10`, in order.
    pub category_labels: Vec<String>,
}

fn default_top_n() -> usize {
    5
}

fn default_excluded_names() -> Vec<String> {
    vec!["DoNot Use".to_string()]
}

// ---------------------------------------------------------------------------
// sources.toml structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct SourcesConfig {
    pub rosters: SourceConfig,
    pub players: PlayersSource,
    pub snapshot: SnapshotSource,
    pub categories: SourceConfig,
}

/// A source that is just a URL or a file path.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    pub location: String,
}

impl SourceConfig {
    pub fn request(&self) -> Request {
        Request::new(Location::parse(&self.location))
    }
}

/// The season stats table. Query parameters are only sent over HTTP.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayersSource {
    pub location: String,
    pub conference: String,
    pub season: String,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    1000
}

impl PlayersSource {
    pub fn query(&self) -> Vec<(String, String)> {
        let fixed = [
            ("split", "all"),
            ("level", "season"),
            ("teams", "all"),
            ("category", "player"),
            ("section", "totals"),
            ("view", "table"),
            ("type", "player"),
            ("orderBy", "default_rank"),
            ("order", "asc"),
        ];
        let mut query: Vec<(String, String)> = fixed
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        query.push(("conference".into(), self.conference.clone()));
        query.push(("seasons".into(), self.season.clone()));
        query.push(("limit".into(), self.limit.to_string()));
        query
    }

    pub fn request(&self) -> Request {
        let location = Location::parse(&self.location);
        match location {
            Location::Http(_) => Request::new(location).with_query(self.query()),
            Location::File(_) => Request::new(location),
        }
    }
}

/// The prior-day snapshot. `location` contains a `{date}` placeholder.
#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotSource {
    pub location: String,
    /// Local hour before which "today" still means the previous day.
    #[serde(default = "default_cutover_hour")]
    pub cutover_hour: u32,
}

fn default_cutover_hour() -> u32 {
    9
}

impl SnapshotSource {
    /// Request for the snapshot keyed by `date` (`YYYY-MM-DD`).
    pub fn request_for(&self, date: &str) -> Request {
        Request::new(Location::parse(&self.location.replace("{date}", date)))
    }
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate `config/league.toml` and `config/sources.toml`
/// relative to `base_dir`. Does not copy defaults.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let config_dir = base_dir.join("config");

    let league_path = config_dir.join("league.toml");
    let league_text = read_file(&league_path)?;
    let league_file: LeagueFile =
        toml::from_str(&league_text).map_err(|e| ConfigError::ParseError {
            path: league_path.clone(),
            source: e,
        })?;

    let sources_path = config_dir.join("sources.toml");
    let sources_text = read_file(&sources_path)?;
    let sources: SourcesConfig =
        toml::from_str(&sources_text).map_err(|e| ConfigError::ParseError {
            path: sources_path.clone(),
            source: e,
        })?;

    let config = Config {
        league: league_file.league,
        sources,
    };

    validate(&config)?;

    Ok(config)
}

/// Ensure all config files exist by copying missing ones from `defaults/`.
/// Existing files are never overwritten. Returns the files that were copied.
pub fn ensure_config_files(base_dir: &Path) -> Result<Vec<PathBuf>, ConfigError> {
    let defaults_dir = base_dir.join("defaults");
    let config_dir = base_dir.join("config");

    if !defaults_dir.exists() {
        if !config_dir.exists() {
            return Err(ConfigError::DefaultsCopyError {
                message: format!(
                    "neither defaults/ nor config/ directory found in {}; \
                     run from the project root or ensure defaults/ is present",
                    base_dir.display()
                ),
            });
        }
        return Ok(vec![]);
    }

    std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::DefaultsCopyError {
        message: format!("failed to create config directory: {e}"),
    })?;

    let entries = std::fs::read_dir(&defaults_dir).map_err(|e| ConfigError::DefaultsCopyError {
        message: format!("failed to read defaults directory: {e}"),
    })?;

    let mut copied = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ConfigError::DefaultsCopyError {
            message: format!("failed to read defaults entry: {e}"),
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(file_name) = path.file_name() else {
            continue;
        };
        let target = config_dir.join(file_name);

        // create_new refuses an existing file: user edits always survive.
        match std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&target)
        {
            Ok(mut dest) => {
                let content = std::fs::read(&path).map_err(|e| ConfigError::DefaultsCopyError {
                    message: format!("failed to read {}: {e}", path.display()),
                })?;
                std::io::Write::write_all(&mut dest, &content).map_err(|e| {
                    ConfigError::DefaultsCopyError {
                        message: format!("failed to write {}: {e}", target.display()),
                    }
                })?;
                copied.push(target);
            }
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {}
            Err(e) => {
                return Err(ConfigError::DefaultsCopyError {
                    message: format!("failed to create {}: {e}", target.display()),
                });
            }
        }
    }

    Ok(copied)
}

/// Load config relative to the current working directory, copying defaults
/// first.
pub fn load_config() -> Result<Config, ConfigError> {
    let cwd = std::env::current_dir().map_err(|_| ConfigError::FileNotFound {
        path: PathBuf::from("."),
    })?;
    ensure_config_files(&cwd)?;
    load_config_from(&cwd)
}

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn invalid(field: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::ValidationError {
        field: field.to_string(),
        message: message.into(),
    }
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    let league = &config.league;
    if league.top_n == 0 {
        return Err(invalid("league.top_n", "must be greater than 0"));
    }
    if league.category_labels.len() != CATEGORY_LABEL_COUNT {
        return Err(invalid(
            "league.category_labels",
            format!(
                "expected {CATEGORY_LABEL_COUNT} labels, got {}",
                league.category_labels.len()
            ),
        ));
    }

    let sources = &config.sources;
    let locations: &[(&str, &str)] = &[
        ("rosters.location", sources.rosters.location.as_str()),
        ("players.location", sources.players.location.as_str()),
        ("snapshot.location", sources.snapshot.location.as_str()),
        ("categories.location", sources.categories.location.as_str()),
    ];
    for (field, value) in locations {
        if value.trim().is_empty() {
            return Err(invalid(field, "must not be empty"));
        }
    }

    if sources.players.limit == 0 {
        return Err(invalid("players.limit", "must be greater than 0"));
    }
    if sources.snapshot.cutover_hour > 23 {
        return Err(invalid(
            "snapshot.cutover_hour",
            format!("must be between 0 and 23, got {}", sources.snapshot.cutover_hour),
        ));
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const LEAGUE_TOML: &str = r#"
[league]
name = "Test League"
top_n = 3
category_labels = ["G1", "G2", "G3", "G4", "G5", "G6", "G7", "G8", "G9", "G10"]
"#;

    const SOURCES_TOML: &str = r#"
[rosters]
location = "data/entries.json"

[players]
location = "https://stats.example.com/api/table"
conference = "Big Ten"
season = "2025"

[snapshot]
location = "daily-outputs/{date}_daily.json"

[categories]
location = "data/categories.json"
"#;

    /// Fresh scratch directory under the system temp dir.
    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "hoopsboard-config-{name}-{}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn write_config(base: &Path, league: &str, sources: &str) {
        let config_dir = base.join("config");
        fs::create_dir_all(&config_dir).unwrap();
        fs::write(config_dir.join("league.toml"), league).unwrap();
        fs::write(config_dir.join("sources.toml"), sources).unwrap();
    }

    fn project_root() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("../..")
    }

    #[test]
    fn loads_valid_config() {
        let base = scratch("valid");
        write_config(&base, LEAGUE_TOML, SOURCES_TOML);
        let config = load_config_from(&base).unwrap();

        assert_eq!(config.league.name, "Test League");
        assert_eq!(config.league.top_n, 3);
        assert_eq!(config.league.excluded_names, vec!["DoNot Use".to_string()]);
        assert_eq!(config.league.category_labels.len(), 10);
        assert_eq!(config.sources.players.limit, 1000);
        assert_eq!(config.sources.snapshot.cutover_hour, 9);
        assert_eq!(config.sources.rosters.location, "data/entries.json");
        fs::remove_dir_all(&base).ok();
    }

    #[test]
    fn shipped_defaults_are_valid() {
        let base = scratch("defaults");
        let defaults = project_root().join("defaults");
        fs::create_dir_all(base.join("config")).unwrap();
        for file in ["league.toml", "sources.toml"] {
            fs::copy(defaults.join(file), base.join("config").join(file)).unwrap();
        }
        let config = load_config_from(&base).unwrap();
        assert_eq!(config.league.top_n, 5);
        assert_eq!(config.sources.players.conference, "Big Ten");
        fs::remove_dir_all(&base).ok();
    }

    #[test]
    fn missing_file_is_reported() {
        let base = scratch("missing");
        match load_config_from(&base) {
            Err(ConfigError::FileNotFound { path }) => {
                assert!(path.ends_with("league.toml"));
            }
            other => panic!("expected FileNotFound, got {other:?}"),
        }
        fs::remove_dir_all(&base).ok();
    }

    #[test]
    fn bad_toml_is_parse_error() {
        let base = scratch("parse");
        write_config(&base, "[league\nname = ", SOURCES_TOML);
        assert!(matches!(
            load_config_from(&base),
            Err(ConfigError::ParseError { .. })
        ));
        fs::remove_dir_all(&base).ok();
    }

    #[test]
    fn rejects_zero_top_n() {
        let base = scratch("top-n");
        write_config(&base, &LEAGUE_TOML.replace("top_n = 3", "top_n = 0"), SOURCES_TOML);
        match load_config_from(&base) {
            Err(ConfigError::ValidationError { field, .. }) => assert_eq!(field, "league.top_n"),
            other => panic!("expected ValidationError, got {other:?}"),
        }
        fs::remove_dir_all(&base).ok();
    }

    #[test]
    fn rejects_wrong_label_count() {
        let base = scratch("labels");
        let league = LEAGUE_TOML.replace(r#", "G10""#, "");
        write_config(&base, &league, SOURCES_TOML);
        match load_config_from(&base) {
            Err(ConfigError::ValidationError { field, message }) => {
                assert_eq!(field, "league.category_labels");
                assert!(message.contains("got 9"));
            }
            other => panic!("expected ValidationError, got {other:?}"),
        }
        fs::remove_dir_all(&base).ok();
    }

    #[test]
    fn rejects_bad_cutover_hour() {
        let base = scratch("cutover");
        let sources = SOURCES_TOML.replace(
            "location = \"daily-outputs/{date}_daily.json\"",
            "location = \"daily-outputs/{date}_daily.json\"\ncutover_hour = 24",
        );
        write_config(&base, LEAGUE_TOML, &sources);
        match load_config_from(&base) {
            Err(ConfigError::ValidationError { field, .. }) => {
                assert_eq!(field, "snapshot.cutover_hour")
            }
            other => panic!("expected ValidationError, got {other:?}"),
        }
        fs::remove_dir_all(&base).ok();
    }

    #[test]
    fn rejects_empty_location() {
        let base = scratch("empty-location");
        let sources = SOURCES_TOML.replace("data/entries.json", " ");
        write_config(&base, LEAGUE_TOML, &sources);
        match load_config_from(&base) {
            Err(ConfigError::ValidationError { field, .. }) => assert_eq!(field, "rosters.location"),
            other => panic!("expected ValidationError, got {other:?}"),
        }
        fs::remove_dir_all(&base).ok();
    }

    #[test]
    fn ensure_copies_missing_and_keeps_existing() {
        let base = scratch("ensure");
        fs::create_dir_all(base.join("defaults")).unwrap();
        fs::write(base.join("defaults/league.toml"), "default league").unwrap();
        fs::write(base.join("defaults/sources.toml"), "default sources").unwrap();
        fs::create_dir_all(base.join("config")).unwrap();
        fs::write(base.join("config/league.toml"), "my league").unwrap();

        let copied = ensure_config_files(&base).unwrap();
        assert_eq!(copied, vec![base.join("config/sources.toml")]);
        assert_eq!(fs::read_to_string(base.join("config/league.toml")).unwrap(), "my league");
        assert_eq!(
            fs::read_to_string(base.join("config/sources.toml")).unwrap(),
            "default sources"
        );
        fs::remove_dir_all(&base).ok();
    }

    #[test]
    fn ensure_twice_copies_once() {
        let base = scratch("ensure-twice");
        fs::create_dir_all(base.join("defaults")).unwrap();
        fs::write(base.join("defaults/league.toml"), "default league").unwrap();

        assert_eq!(ensure_config_files(&base).unwrap().len(), 1);
        fs::write(base.join("config/league.toml"), "edited").unwrap();
        assert!(ensure_config_files(&base).unwrap().is_empty());
        assert_eq!(fs::read_to_string(base.join("config/league.toml")).unwrap(), "edited");
        fs::remove_dir_all(&base).ok();
    }

    #[test]
    fn ensure_without_any_dirs_errors() {
        let base = scratch("no-dirs");
        assert!(matches!(
            ensure_config_files(&base),
            Err(ConfigError::DefaultsCopyError { .. })
        ));
        fs::remove_dir_all(&base).ok();
    }

    #[test]
    fn players_query_over_http_only() {
        let source = PlayersSource {
            location: "https://stats.example.com/api/table".into(),
            conference: "Big Ten".into(),
            season: "2025".into(),
            limit: 1000,
        };
        let request = source.request();
        assert!(request.query.contains(&("conference".to_string(), "Big Ten".to_string())));
        assert!(request.query.contains(&("seasons".to_string(), "2025".to_string())));
        assert!(request.query.contains(&("limit".to_string(), "1000".to_string())));
        assert!(request.query.contains(&("orderBy".to_string(), "default_rank".to_string())));

        let local = PlayersSource {
            location: "data/stats.json".into(),
            ..source
        };
        assert!(local.request().query.is_empty());
    }

    #[test]
    fn snapshot_location_substitutes_date() {
        let source = SnapshotSource {
            location: "daily-outputs/{date}_daily.json".into(),
            cutover_hour: 9,
        };
        assert_eq!(
            source.request_for("2025-02-01").location,
            Location::File(PathBuf::from("daily-outputs/2025-02-01_daily.json"))
        );
    }
}
