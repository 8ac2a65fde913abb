//! Track URIs look like `spotify:track:<id>`; only the positional id matters here.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrackUriError {
    #[error("invalid track identifier: {0}")]
    Malformed(String),
}

/// Extract the id (third `:`-separated segment) from a track URI.
pub fn track_id(uri: &str) -> Result<&str, TrackUriError> {
    match uri.split(':').nth(2) {
        Some(id) if !id.is_empty() => Ok(id),
        _ => Err(TrackUriError::Malformed(uri.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_id() {
        assert_eq!(track_id("spotify:track:abc123"), Ok("abc123"));
        // Extra segments are ignored, same as a fixed index.
        assert_eq!(track_id("spotify:track:abc123:extra"), Ok("abc123"));
    }

    #[test]
    fn test_malformed() {
        for bad in ["", "spotify", "spotify:track", "spotify:track:"] {
            assert_eq!(
                track_id(bad),
                Err(TrackUriError::Malformed(bad.to_string())),
                "{bad:?}"
            );
        }
        assert_eq!(
            TrackUriError::Malformed("x:y".into()).to_string(),
            "invalid track identifier: x:y"
        );
    }
}
