use anyhow::Context;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub spotify: SpotifyConfig,
    pub auth: AuthConfig,
    pub lyrics: LyricsConfig,
    pub search: SearchConfig,
    pub player: PlayerConfig,
    pub input: InputConfig,
    pub paths: PathsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpotifyConfig {
    pub api_base: String,
    /// Page size for track searches (1-50).
    pub search_limit: u32,
    /// Bearer token; `DASHTUNE_ACCESS_TOKEN` takes precedence.
    pub access_token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Base URL of the server that exchanges an authorization code for tokens.
    pub server: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LyricsConfig {
    pub api_base: String,
    /// What the lyrics pane shows once nothing is playing.
    pub on_deselect: DeselectPolicy,
    /// Number of tracks whose lyrics are kept in memory. 0 disables.
    pub cache_size: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeselectPolicy {
    /// Keep showing the last track's lyrics.
    #[default]
    Keep,
    /// Return the pane to its idle state.
    Clear,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub debounce_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Start playback on the active device when a track is chosen.
    pub autoplay: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub mouse: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub data_dir: PathBuf,
}

impl Default for SpotifyConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.spotify.com/v1".to_string(),
            search_limit: 20,
            access_token: None,
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            server: "http://localhost:3001".to_string(),
        }
    }
}

impl Default for LyricsConfig {
    fn default() -> Self {
        Self {
            api_base: crate::lyrics::LyricsClient::DEFAULT_BASE_URL.to_string(),
            on_deselect: DeselectPolicy::Keep,
            cache_size: 64,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { debounce_ms: 150 }
    }
}

impl SearchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self { autoplay: true }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self { mouse: true }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        let proj = ProjectDirs::from("dev", "dashtune", "dashtune");
        let data_dir = proj
            .as_ref()
            .map(|p| p.data_dir().to_path_buf())
            .unwrap_or_else(|| std::env::temp_dir().join("dashtune"));
        Self { data_dir }
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    let proj = ProjectDirs::from("dev", "dashtune", "dashtune").context("ProjectDirs unavailable")?;
    Ok(proj.config_dir().join("config.toml"))
}

fn resolve_path(override_path: Option<&Path>) -> anyhow::Result<PathBuf> {
    match override_path {
        Some(p) => Ok(p.to_path_buf()),
        None => default_config_path(),
    }
}

fn write_private(path: &Path, raw: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create dir {}", parent.display()))?;
    }
    fs::write(path, raw).with_context(|| format!("write {}", path.display()))?;
    // May hold an access token.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let _ = fs::set_permissions(path, fs::Permissions::from_mode(0o600));
    }
    Ok(())
}

pub fn save(cfg: &Config, override_path: Option<&Path>) -> anyhow::Result<()> {
    let path = resolve_path(override_path)?;
    let raw = toml::to_string_pretty(cfg).context("serialize config")?;
    write_private(&path, &raw)
}

pub fn load(override_path: Option<&Path>) -> anyhow::Result<Config> {
    let path = resolve_path(override_path)?;

    if !path.exists() {
        let cfg = Config::default();
        let raw = toml::to_string_pretty(&cfg).context("serialize default config")?;
        write_private(&path, &raw)?;
        return Ok(cfg);
    }

    let raw = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let cfg = toml::from_str::<Config>(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_fills_defaults() {
        let cfg: Config = toml::from_str(
            r#"
[lyrics]
on_deselect = "clear"

[search]
debounce_ms = 300
"#,
        )
        .unwrap();
        assert_eq!(cfg.lyrics.on_deselect, DeselectPolicy::Clear);
        assert_eq!(cfg.lyrics.cache_size, 64);
        assert_eq!(cfg.search.debounce(), Duration::from_millis(300));
        assert_eq!(cfg.spotify.search_limit, 20);
        assert!(cfg.player.autoplay);
    }

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.search.debounce_ms, 150);
        assert_eq!(cfg.lyrics.on_deselect, DeselectPolicy::Keep);
        assert!(cfg.spotify.access_token.is_none());
    }

    #[test]
    fn test_load_creates_then_round_trips() {
        let dir = std::env::temp_dir().join(format!("dashtune-cfg-{}", std::process::id()));
        let path = dir.join("config.toml");
        let _ = fs::remove_dir_all(&dir);

        let mut cfg = load(Some(&path)).unwrap();
        assert!(path.exists());

        cfg.spotify.access_token = Some("tok".into());
        cfg.lyrics.on_deselect = DeselectPolicy::Clear;
        save(&cfg, Some(&path)).unwrap();

        let back = load(Some(&path)).unwrap();
        assert_eq!(back.spotify.access_token.as_deref(), Some("tok"));
        assert_eq!(back.lyrics.on_deselect, DeselectPolicy::Clear);

        let _ = fs::remove_dir_all(&dir);
    }
}
