use serde::{Deserialize, Deserializer, Serialize};

/// Body returned by the lyrics service, success or not.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LyricsResponse {
    #[serde(default)]
    pub error: bool,
    pub message: Option<String>,
    #[serde(default)]
    pub sync_type: String,
    #[serde(default)]
    pub lines: Vec<LyricLine>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LyricLine {
    pub words: String,
    /// Present (and non-zero) only for line-synced lyrics.
    #[serde(default, deserialize_with = "de_opt_millis")]
    pub start_time_ms: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncType {
    LineSynced,
    Unsynced,
    Other(String),
}

impl SyncType {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "LINE_SYNCED" => SyncType::LineSynced,
            "UNSYNCED" | "" => SyncType::Unsynced,
            other => SyncType::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            SyncType::LineSynced => "LINE_SYNCED",
            SyncType::Unsynced => "UNSYNCED",
            SyncType::Other(s) => s,
        }
    }
}

/// Display-ready lyrics for one track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lyrics {
    pub sync_type: SyncType,
    pub lines: Vec<LyricLine>,
}

/// The service sends timestamps as strings ("960"); accept numbers too.
fn de_opt_millis<'de, D>(de: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(u64),
        Str(String),
    }

    Ok(match Option::<Raw>::deserialize(de)? {
        Some(Raw::Num(n)) => Some(n),
        Some(Raw::Str(s)) => s.trim().parse().ok(),
        None => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_synced_body() {
        let raw = r#"{
            "error": false,
            "syncType": "LINE_SYNCED",
            "lines": [
                {"startTimeMs": "960", "words": "la la", "syllables": [], "endTimeMs": "0"},
                {"startTimeMs": 4200, "words": "oh"}
            ]
        }"#;
        let r: LyricsResponse = serde_json::from_str(raw).unwrap();
        assert!(!r.error);
        assert_eq!(SyncType::parse(&r.sync_type), SyncType::LineSynced);
        assert_eq!(r.lines[0].start_time_ms, Some(960));
        assert_eq!(r.lines[0].words, "la la");
        assert_eq!(r.lines[1].start_time_ms, Some(4200));
    }

    #[test]
    fn test_parse_error_body() {
        let r: LyricsResponse =
            serde_json::from_str(r#"{"error": true, "message": "No lyrics found"}"#).unwrap();
        assert!(r.error);
        assert_eq!(r.message.as_deref(), Some("No lyrics found"));
        assert!(r.lines.is_empty());
    }

    #[test]
    fn test_sync_type_labels() {
        assert_eq!(SyncType::parse("UNSYNCED").label(), "UNSYNCED");
        assert_eq!(SyncType::parse("SYLLABLE_SYNCED").label(), "SYLLABLE_SYNCED");
    }
}
