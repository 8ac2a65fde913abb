//! Lyrics lookup for the playing track
//!
//! This module provides:
//! - a client for the track-id keyed lyrics service
//! - an LRU cache of successful lookups
//! - the display models the UI renders

pub mod cache;
pub mod client;
pub mod models;

pub use cache::LyricsCache;
pub use client::LyricsClient;
pub use models::{LyricLine, Lyrics, SyncType};

/// Why a lyrics lookup produced nothing to show.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LyricsError {
    /// The service answered with its error flag set; the message is user-facing.
    #[error("{0}")]
    Unavailable(String),
    /// Transport or decoding failure.
    #[error("{0}")]
    Request(String),
}

/// Get lyrics for a track id, consulting the cache first.
pub async fn fetch_lyrics(
    client: &LyricsClient,
    cache: &LyricsCache,
    track_id: &str,
) -> Result<Lyrics, LyricsError> {
    if let Some(hit) = cache.get(track_id) {
        tracing::debug!(track_id, "lyrics cache hit");
        return Ok(hit);
    }

    let lyrics = client.show(track_id).await?;
    cache.put(track_id, lyrics.clone());
    Ok(lyrics)
}
