use serde::{Deserialize, Serialize};
use std::fs;
use tracing::log;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default="default_port")]
    pub port: u16,

    #[serde(default="default_api_url")]
    pub api_url: String,
    #[serde(default="default_platform")]
    pub platform: String,
    #[serde(default="default_club_id")]
    pub club_id: String,
    #[serde(default="default_club_name")]
    pub club_name: String,

    #[serde(default="default_excluded_player")]
    pub excluded_player: String,

    #[serde(default="default_user_agent")]
    pub user_agent: String,

    /// Staleness tolerance for upstream responses, None => never cached
    #[serde(default)]
    pub cache_ttl_s: Option<u64>,

    #[serde(default="default_db_path")]
    pub db_path: String,

    #[serde(default="default_false")]
    pub poll: bool,

    #[serde(default="default_poll_interval")]
    pub poll_interval_s: u64,
}

fn default_port() -> u16 {
    8000
}

fn default_api_url() -> String {
    "https://proclubs.ea.com/api/nhl".to_string()
}

fn default_platform() -> String {
    "common-gen5".to_string()
}

fn default_club_id() -> String {
    "34385".to_string()
}

fn default_club_name() -> String {
    "PTP".to_string()
}

fn default_excluded_player() -> String {
    "JP0271".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".to_string()
}

fn default_db_path() -> String {
    "./db".to_string()
}

fn default_false() -> bool {
    false
}

fn default_poll_interval() -> u64 {
    300
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: default_port(),
            api_url: default_api_url(),
            platform: default_platform(),
            club_id: default_club_id(),
            club_name: default_club_name(),
            excluded_player: default_excluded_player(),
            user_agent: default_user_agent(),
            cache_ttl_s: None,
            db_path: default_db_path(),
            poll: default_false(),
            poll_interval_s: default_poll_interval(),
        }
    }
}

impl Config {
    pub fn get_members_url(&self) -> String {
        format!("{}/members/stats?platform={}&clubId={}", self.api_url, self.platform, self.club_id)
    }

    pub fn get_club_search_url(&self) -> String {
        format!("{}/clubs/search?platform={}&clubName={}", self.api_url, self.platform, self.club_name)
    }

    pub fn cache_ttl(&self) -> Option<std::time::Duration> {
        self.cache_ttl_s.map(std::time::Duration::from_secs)
    }

    /// Interval for the refresh loop. Polling only fills the cache, so it
    /// stays off unless a cache ttl is configured.
    pub fn poll_interval(&self) -> Option<std::time::Duration> {
        if !self.poll {
            return None;
        }
        if self.cache_ttl_s.is_none() {
            log::warn!("[CONFIG] poll is set without cache_ttl_s, not polling");
            return None;
        }
        Some(std::time::Duration::from_secs(self.poll_interval_s))
    }
}

pub fn load_config(path: &str) -> anyhow::Result<Config> {
    let data = fs::read_to_string(path)?;
    let config = serde_json::from_str(&data)
        .map_err(|e| anyhow::anyhow!("Could not parse JSON at {path}: {e}"))?;
    Ok(config)
}

pub fn get_config() -> anyhow::Result<Config> {
    let path = std::env::var("CONFIG_PATH").ok()
        .unwrap_or_else(|| "./deployment/config.json".to_string());
    let mut result = if std::path::Path::new(&path).exists() {
        load_config(&path)?
    } else {
        log::info!("[CONFIG] No config at {path}, using defaults");
        Config::default()
    };
    if let Ok(db_path) = std::env::var("DB_PATH") {
        result.db_path = db_path;
        log::info!("[CONFIG] DB_PATH {}", result.db_path);
    }
    if let Some(port) = std::env::var("PORT").ok().and_then(|e| e.parse().ok()) {
        result.port = port;
    }
    log::info!("[CONFIG] {:?}", result);
    Ok(result)
}
