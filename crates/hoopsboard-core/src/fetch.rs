// Data source retrieval over HTTP or from local files.
//
// Every source (rosters, season stats, prior-day snapshot, category map) is
// just a location that yields a JSON document. The `Fetcher` trait is the
// seam tests use to substitute in-memory data.

use std::fmt;
use std::path::PathBuf;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("{url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid JSON from {origin}: {source}")]
    Json {
        origin: String,
        source: serde_json::Error,
    },

    #[error("{0} not found")]
    NotFound(String),
}

/// Where a document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Http(String),
    File(PathBuf),
}

impl Location {
    /// `http://` and `https://` prefixes mean a URL; anything else is a path.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.starts_with("http://") || raw.starts_with("https://") {
            Location::Http(raw.to_string())
        } else {
            Location::File(PathBuf::from(raw))
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Http(url) => write!(f, "{url}"),
            Location::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// A location plus the query parameters to send with it (HTTP only).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub location: Location,
    pub query: Vec<(String, String)>,
}

impl Request {
    pub fn new(location: Location) -> Self {
        Request {
            location,
            query: Vec::new(),
        }
    }

    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }
}

/// Retrieves the raw body of a document.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, request: &Request) -> Result<String, FetchError>;
}

/// Fetch a document and decode it as JSON.
pub async fn fetch_json<T: DeserializeOwned>(
    fetcher: &dyn Fetcher,
    request: &Request,
) -> Result<T, FetchError> {
    let body = fetcher.fetch(request).await?;
    debug!("fetched {} bytes from {}", body.len(), request.location);
    serde_json::from_str(&body).map_err(|source| FetchError::Json {
        origin: request.location.to_string(),
        source,
    })
}

// ---------------------------------------------------------------------------
// SourceFetcher
// ---------------------------------------------------------------------------

/// Production fetcher: `reqwest` for URLs, `tokio::fs` for files.
#[derive(Debug, Clone)]
pub struct SourceFetcher {
    http: reqwest::Client,
}

impl Default for SourceFetcher {
    fn default() -> Self {
        SourceFetcher {
            http: reqwest::Client::builder()
                .user_agent(concat!("hoopsboard/", env!("CARGO_PKG_VERSION")))
                .build()
                .unwrap_or_default(),
        }
    }
}

impl SourceFetcher {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Fetcher for SourceFetcher {
    async fn fetch(&self, request: &Request) -> Result<String, FetchError> {
        match &request.location {
            Location::Http(url) => {
                let response = self
                    .http
                    .get(url)
                    .query(&request.query)
                    .send()
                    .await
                    .map_err(|source| FetchError::Http {
                        url: url.clone(),
                        source,
                    })?;
                let status = response.status();
                if !status.is_success() {
                    return Err(FetchError::Status {
                        url: url.clone(),
                        status,
                    });
                }
                response.text().await.map_err(|source| FetchError::Http {
                    url: url.clone(),
                    source,
                })
            }
            Location::File(path) => {
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| match source.kind() {
                        std::io::ErrorKind::NotFound => {
                            FetchError::NotFound(path.display().to_string())
                        }
                        _ => FetchError::Io {
                            path: path.clone(),
                            source,
                        },
                    })
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Doc {
        team: String,
    }

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("hoopsboard-fetch-{name}-{}", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn parses_locations() {
        assert_eq!(
            Location::parse("https://example.com/a.json"),
            Location::Http("https://example.com/a.json".into())
        );
        assert_eq!(
            Location::parse(" http://localhost:8080 "),
            Location::Http("http://localhost:8080".into())
        );
        assert_eq!(
            Location::parse("data/entries.json"),
            Location::File(PathBuf::from("data/entries.json"))
        );
    }

    #[test]
    fn display_is_the_raw_location() {
        assert_eq!(Location::parse("data/x.json").to_string(), "data/x.json");
        assert_eq!(Location::parse("https://a.b/c").to_string(), "https://a.b/c");
    }

    #[tokio::test]
    async fn reads_json_file() {
        let path = temp_file("ok", r#"[{"team": "Hoop Dreams"}]"#);
        let fetcher = SourceFetcher::new();
        let request = Request::new(Location::File(path.clone()));
        let docs: Vec<Doc> = fetch_json(&fetcher, &request).await.unwrap();
        assert_eq!(docs, vec![Doc { team: "Hoop Dreams".into() }]);
        std::fs::remove_file(path).ok();
    }

    #[tokio::test]
    async fn missing_file_is_not_found() {
        let fetcher = SourceFetcher::new();
        let request = Request::new(Location::File(PathBuf::from("/definitely/not/here.json")));
        let err = fetch_json::<Vec<Doc>>(&fetcher, &request).await.unwrap_err();
        assert!(matches!(err, FetchError::NotFound(ref p) if p == "/definitely/not/here.json"));
        assert_eq!(err.to_string(), "/definitely/not/here.json not found");
    }

    #[tokio::test]
    async fn unreadable_path_is_io_error() {
        let dir = std::env::temp_dir();
        let fetcher = SourceFetcher::new();
        let request = Request::new(Location::File(dir));
        let err = fetch_json::<Vec<Doc>>(&fetcher, &request).await.unwrap_err();
        assert!(matches!(err, FetchError::Io { .. }));
    }

    #[tokio::test]
    async fn malformed_json_names_origin() {
        let path = temp_file("bad", "{not json");
        let fetcher = SourceFetcher::new();
        let request = Request::new(Location::File(path.clone()));
        let err = fetch_json::<Vec<Doc>>(&fetcher, &request).await.unwrap_err();
        match err {
            FetchError::Json { origin, .. } => assert!(origin.contains("hoopsboard-fetch-bad")),
            other => panic!("expected Json error, got {other:?}"),
        }
        std::fs::remove_file(path).ok();
    }
}
