/*
type MembersResponse = {
    members: Member[],
    positionCount?: Record<string, number>,
}

type Member = {
    name: string,
    favoritePosition: string,
    gamesplayed: string,
    record: string,
    winpct: string,
    goals: string,
    assists: string,
    plusmin: string,
    skbs: string,
    glsaves: string,
    skpasspct: string,
    ...
}
 */

use serde_json::Value;
use tracing::log;

use crate::error::StatsError;
use crate::models::RawEntity;

pub struct MembersRsp;

impl MembersRsp {
    /// The `members` array, `NoData` when it is missing or not an array.
    pub fn parse(rsp: &Value) -> Result<Vec<RawEntity>, StatsError> {
        let members = rsp.get("members")
            .and_then(|e| e.as_array())
            .ok_or_else(|| StatsError::NoData("No player statistics found".to_string()))?;

        Ok(members.iter()
            .filter_map(|e| match serde_json::from_value::<RawEntity>(e.clone()) {
                Ok(raw) => Some(raw),
                Err(_) => {
                    log::debug!("[PLAYERS] Skip non-object member {e}");
                    None
                }
            })
            .collect())
    }

    /// Removes every member named `name`, leaving the rest of the payload untouched.
    pub fn remove_member(rsp: &mut Value, name: &str) -> usize {
        let Some(members) = rsp.get_mut("members").and_then(|e| e.as_array_mut()) else {
            return 0;
        };
        let before = members.len();
        members.retain(|e| e.get("name").and_then(|n| n.as_str()) != Some(name));
        before - members.len()
    }
}
