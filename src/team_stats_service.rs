use serde_json::Value;
use tracing::log;

use crate::error::StatsError;
use crate::models_api::team::TeamRecord;
use crate::models_external::clubs::ClubsRsp;
use crate::rest_client::RestClient;

#[derive(Clone)]
pub struct TeamStatsService {
    client: RestClient,
}

impl TeamStatsService {
    pub fn new(client: RestClient) -> TeamStatsService {
        TeamStatsService { client }
    }

    pub async fn read_raw(&self) -> Result<Value, StatsError> {
        self.client.get_clubs().await
    }

    pub async fn read(&self) -> Result<TeamRecord, StatsError> {
        let rsp = self.client.get_clubs().await?;
        TeamStatsService::normalize(&rsp, &self.client.config().club_name)
    }

    pub fn normalize(rsp: &Value, club_name: &str) -> Result<TeamRecord, StatsError> {
        let club = ClubsRsp::select(rsp, club_name)?;
        let team = TeamRecord::from(&club);
        log::info!("[TEAM] Normalized {} {}", team.name, team.record);
        Ok(team)
    }
}
