use std::collections::HashSet;
use std::time::Instant;

use serde_json::Value;
use tracing::log;

use crate::error::StatsError;
use crate::models::RawEntity;
use crate::models_api::player::PlayerRecord;
use crate::models_external::members::MembersRsp;
use crate::rest_client::RestClient;

#[derive(Clone)]
pub struct PlayerStatsService {
    client: RestClient,
}

impl PlayerStatsService {
    pub fn new(client: RestClient) -> PlayerStatsService {
        PlayerStatsService { client }
    }

    /// Upstream members payload with the excluded account already removed.
    pub async fn read_raw(&self) -> Result<Value, StatsError> {
        let mut rsp = self.client.get_members().await?;
        let removed = MembersRsp::remove_member(&mut rsp, &self.client.config().excluded_player);
        if removed > 0 {
            log::debug!("[PLAYERS] Removed {removed} excluded entries");
        }
        Ok(rsp)
    }

    pub async fn read(&self) -> Result<Vec<PlayerRecord>, StatsError> {
        let rsp = self.client.get_members().await?;
        PlayerStatsService::normalize(&rsp, &self.client.config().excluded_player)
    }

    pub fn normalize(rsp: &Value, excluded: &str) -> Result<Vec<PlayerRecord>, StatsError> {
        let before = Instant::now();
        let members = MembersRsp::parse(rsp)?;
        let players = PlayerStatsService::normalize_members(&members, excluded);
        log::info!("[PLAYERS] Normalized {} of {} members in {:.2?}", players.len(), members.len(), before.elapsed());
        Ok(players)
    }

    /// One record per distinct name, first occurrence wins.
    pub fn normalize_members(members: &[RawEntity], excluded: &str) -> Vec<PlayerRecord> {
        let mut seen = HashSet::new();
        members.iter()
            .map(PlayerRecord::from)
            .filter(|e| e.name != excluded)
            .filter(|e| seen.insert(e.name.clone()))
            .collect()
    }
}
