use crate::spotify::models::{AccessToken, SearchResponse, Track};
use anyhow::Context;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

/// The Web API rejects limits outside this range.
const MAX_SEARCH_LIMIT: u32 = 50;
const USER_AGENT: &str = concat!("dashtune/", env!("CARGO_PKG_VERSION"));

/// HTTP client shared by the Web API and auth server calls.
pub(crate) fn http_client() -> anyhow::Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(10))
        .build()
        .context("build reqwest client")
}

#[derive(Debug)]
struct Inner {
    http: reqwest::Client,
    api_base: String,
    search_limit: u32,
}

/// Search and remote-play client for the streaming Web API.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    inner: Arc<Inner>,
}

impl SpotifyClient {
    pub fn new(api_base: &str, search_limit: u32) -> anyhow::Result<Self> {
        let http = http_client()?;
        Ok(Self {
            inner: Arc::new(Inner {
                http,
                api_base: api_base.trim_end_matches('/').to_string(),
                search_limit: search_limit.clamp(1, MAX_SEARCH_LIMIT),
            }),
        })
    }

    pub async fn search_tracks(&self, query: &str, token: &AccessToken) -> anyhow::Result<Vec<Track>> {
        let v = self.search_raw(query, token).await?;
        let resp: SearchResponse =
            serde_json::from_value(v).context("decode search response")?;
        Ok(resp.into_tracks())
    }

    pub async fn search_raw(&self, query: &str, token: &AccessToken) -> anyhow::Result<serde_json::Value> {
        let url = format!(
            "{}/search?q={}&type=track&limit={}",
            self.inner.api_base,
            urlencoding::encode(query),
            self.inner.search_limit
        );
        tracing::debug!(query, "search request");

        let v = self
            .inner
            .http
            .get(&url)
            .bearer_auth(token.as_str())
            .send()
            .await
            .context("send search request")?
            .error_for_status()
            .context("search http status")?
            .json()
            .await
            .context("parse search json")?;
        Ok(v)
    }

    /// Ask the account's active device to play `track_uri`.
    ///
    /// An empty URI means nothing is selected and is a no-op.
    pub async fn start_playback(&self, token: &AccessToken, track_uri: &str) -> anyhow::Result<()> {
        if track_uri.is_empty() {
            return Ok(());
        }
        let url = format!("{}/me/player/play", self.inner.api_base);
        self.inner
            .http
            .put(&url)
            .bearer_auth(token.as_str())
            .json(&json!({ "uris": [track_uri] }))
            .send()
            .await
            .context("send play request")?
            .error_for_status()
            .context("play http status")?;
        tracing::info!(track_uri, "playback started");
        Ok(())
    }
}
