//! Client for the track-id keyed lyrics service.
//!
//! The service answers `GET /?trackid=<id>` with a JSON body that carries its
//! own `error` flag. "No lyrics" comes back as an error-flagged body, often
//! with a non-2xx status, so the body is decoded before the status is judged.

use super::LyricsError;
use super::models::{Lyrics, LyricsResponse, SyncType};
use anyhow::Context;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct LyricsClient {
    client: reqwest::Client,
    base_url: String,
}

impl LyricsClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://spotify-lyrics-api-pi.vercel.app";
    const USER_AGENT: &'static str = concat!("dashtune/", env!("CARGO_PKG_VERSION"));

    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(Self::USER_AGENT)
            .timeout(Duration::from_secs(10))
            .build()
            .context("build reqwest client")?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url_for(&self, track_id: &str) -> String {
        format!("{}/?trackid={}", self.base_url, urlencoding::encode(track_id))
    }

    /// Fetch lyrics for a track id.
    pub async fn show(&self, track_id: &str) -> Result<Lyrics, LyricsError> {
        let url = self.url_for(track_id);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| LyricsError::Request(format!("lyrics request failed: {e}")))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| LyricsError::Request(format!("read lyrics body: {e}")))?;

        match serde_json::from_str::<LyricsResponse>(&body) {
            Ok(parsed) => parsed.into_lyrics(),
            Err(_) if !status.is_success() => {
                Err(LyricsError::Request(format!("lyrics API error: {status}")))
            }
            Err(e) => Err(LyricsError::Request(format!("parse lyrics json: {e}"))),
        }
    }
}

impl LyricsResponse {
    pub fn into_lyrics(self) -> Result<Lyrics, LyricsError> {
        if self.error {
            let message = self
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| "Lyrics unavailable".to_string());
            return Err(LyricsError::Unavailable(message));
        }
        Ok(Lyrics {
            sync_type: SyncType::parse(&self.sync_type),
            lines: self.lines,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lyrics::models::LyricLine;
    use crate::testutil::{refused_url, CannedServer};

    #[test]
    fn test_url_for_encodes_id() {
        let c = LyricsClient::new("https://lyrics.example.test/").unwrap();
        assert_eq!(c.url_for("abc123"), "https://lyrics.example.test/?trackid=abc123");
        assert_eq!(c.url_for("a b"), "https://lyrics.example.test/?trackid=a%20b");
    }

    #[test]
    fn test_error_flag_becomes_unavailable() {
        let r: LyricsResponse =
            serde_json::from_str(r#"{"error": true, "message": "No lyrics found"}"#).unwrap();
        assert_eq!(
            r.into_lyrics(),
            Err(LyricsError::Unavailable("No lyrics found".into()))
        );

        let r: LyricsResponse = serde_json::from_str(r#"{"error": true}"#).unwrap();
        assert_eq!(
            r.into_lyrics(),
            Err(LyricsError::Unavailable("Lyrics unavailable".into()))
        );
    }

    #[test]
    fn test_success_keeps_payload() {
        let r: LyricsResponse = serde_json::from_str(
            r#"{"error": false, "syncType": "LINE_SYNCED", "lines": [{"words": "la la"}]}"#,
        )
        .unwrap();
        let lyrics = r.into_lyrics().unwrap();
        assert_eq!(lyrics.sync_type, SyncType::LineSynced);
        assert_eq!(
            lyrics.lines,
            vec![LyricLine { words: "la la".into(), start_time_ms: None }]
        );
    }

    #[tokio::test]
    async fn test_error_body_read_despite_404() {
        let mut server = CannedServer::start(
            404,
            "application/json",
            r#"{"error": true, "message": "No lyrics found"}"#,
        )
        .await;
        let c = LyricsClient::new(&server.base_url).unwrap();

        assert_eq!(
            c.show("abc123").await,
            Err(LyricsError::Unavailable("No lyrics found".into()))
        );
        let request = server.request().await;
        assert!(request.starts_with("GET /?trackid=abc123 HTTP/1.1\r\n"), "{request}");
    }

    #[tokio::test]
    async fn test_non_json_error_reports_status() {
        let server = CannedServer::start(404, "text/html", "<h1>Not here</h1>").await;
        let c = LyricsClient::new(&server.base_url).unwrap();

        match c.show("abc123").await {
            Err(LyricsError::Request(msg)) => {
                assert!(msg.starts_with("lyrics API error: 404"), "{msg}")
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_non_json_success_is_parse_error() {
        let server = CannedServer::start(200, "text/plain", "lyrics go here").await;
        let c = LyricsClient::new(&server.base_url).unwrap();

        match c.show("abc123").await {
            Err(LyricsError::Request(msg)) => assert!(msg.starts_with("parse lyrics json"), "{msg}"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_connection_refused_is_request_error() {
        let c = LyricsClient::new(&refused_url().await).unwrap();

        match c.show("abc123").await {
            Err(LyricsError::Request(msg)) => {
                assert!(msg.starts_with("lyrics request failed"), "{msg}")
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
