use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::header::{ACCEPT, ORIGIN, USER_AGENT};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::log;

use crate::config_handler::Config;
use crate::db::Db;
use crate::error::{FetchFailure, LogResult, StatsError};

#[derive(Clone)]
pub struct RestClient {
    client: reqwest::Client,
    config: Arc<Config>,
}

impl RestClient {
    pub fn new(config: Arc<Config>) -> RestClient {
        RestClient { client: reqwest::Client::new(), config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub async fn get_members(&self) -> Result<Value, StatsError> {
        let url = self.config.get_members_url();
        self.throttle_call(&url, self.config.cache_ttl()).await
    }

    pub async fn get_clubs(&self) -> Result<Value, StatsError> {
        let url = self.config.get_club_search_url();
        self.throttle_call(&url, self.config.cache_ttl()).await
    }

    /// Serves `url` from the disk cache while it is younger than `throttle_s`.
    /// `None` disables the cache entirely.
    pub async fn throttle_call<T: DeserializeOwned + Serialize>(&self, url: &str, throttle_s: Option<Duration>) -> Result<T, StatsError> {
        let Some(throttle_s) = throttle_s else {
            return self.get_call(url).await;
        };
        let db = Db::<String, T>::new(&self.config.db_path, "rest");
        let key = url.to_string();

        if !db.is_stale(&key, Some(throttle_s)) {
            if let Some(cached) = db.read(&key) {
                log::debug!("[REST] Cached {url}");
                return Ok(cached);
            }
        }
        let rsp: T = self.get_call(url).await?;
        db.write(&key, &rsp).ok_log("[REST] Cache write failed");
        Ok(rsp)
    }

    /// Refetches both upstream payloads into the cache regardless of age.
    /// Each url is refreshed on its own, errors only if none succeeded.
    pub async fn refresh(&self) -> Result<(), StatsError> {
        let db = Db::<String, Value>::new(&self.config.db_path, "rest");
        let mut last_err = None;
        let mut refreshed = 0;
        for url in [self.config.get_members_url(), self.config.get_club_search_url()] {
            match self.get_call::<Value>(&url).await {
                Ok(rsp) => {
                    db.write(&url, &rsp).ok_log("[REST] Cache write failed");
                    refreshed += 1;
                },
                Err(e) => {
                    log::error!("[REST] Refresh failed {url}: {e}");
                    last_err = Some(e);
                },
            }
        }
        match last_err {
            Some(e) if refreshed == 0 => Err(e),
            _ => Ok(()),
        }
    }

    pub async fn get_call<T: DeserializeOwned>(&self, url: &str) -> Result<T, StatsError> {
        let before = Instant::now();
        let rsp = self.client.get(url)
            .header(USER_AGENT, self.config.user_agent.as_str())
            .header(ACCEPT, "application/json")
            .header(ORIGIN, "https://www.ea.com")
            .send()
            .await
            .map_err(|e| FetchFailure::Network(e.to_string()))?;

        let status = rsp.status();
        log::info!("[REST] Call {url} {} {:.2?}", status.as_u16(), before.elapsed());
        if !status.is_success() {
            return Err(FetchFailure::Status(status.as_u16()).into());
        }
        let body = rsp.json().await
            .map_err(|e| FetchFailure::Network(format!("invalid body: {e}")))?;
        Ok(body)
    }
}
