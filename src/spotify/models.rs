use serde::Deserialize;
use std::fmt;

/// A search hit, in the shape the rest of the app works with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub artist: String,
    pub title: String,
    pub uri: String,
    pub album_url: String,
}

/// Bearer token for the streaming API. Never printed in full.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Returns `None` for blank input so an empty config value counts as "no token".
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tail: String = self.0.chars().rev().take(4).collect::<Vec<_>>().into_iter().rev().collect();
        write!(f, "AccessToken(…{tail})")
    }
}

// Wire types for GET /search?type=track. Only the fields we map are declared.

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    pub tracks: Option<TrackPage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TrackPage {
    #[serde(default)]
    pub items: Vec<FullTrack>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FullTrack {
    pub name: String,
    pub uri: String,
    #[serde(default)]
    pub artists: Vec<SimpleArtist>,
    pub album: Option<SimpleAlbum>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SimpleArtist {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SimpleAlbum {
    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Image {
    pub url: String,
    pub height: Option<u32>,
}

impl From<FullTrack> for Track {
    fn from(t: FullTrack) -> Self {
        let artist = t
            .artists
            .into_iter()
            .next()
            .map(|a| a.name)
            .unwrap_or_default();
        // Smallest artwork by height; images without a height sort last.
        let album_url = t
            .album
            .and_then(|a| {
                a.images
                    .into_iter()
                    .min_by_key(|img| img.height.unwrap_or(u32::MAX))
            })
            .map(|img| img.url)
            .unwrap_or_default();
        Self {
            artist,
            title: t.name,
            uri: t.uri,
            album_url,
        }
    }
}

impl SearchResponse {
    pub(crate) fn into_tracks(self) -> Vec<Track> {
        self.tracks
            .map(|page| page.items.into_iter().map(Track::from).collect())
            .unwrap_or_default()
    }
}
