/*
type ClubSearchResponse = Record<string, Club> | { clubs: Record<string, Club> | Club[] }

type Club = {
    name: string,
    seasons: number,
    wins: number,
    losses: number,
    ties: number,
    otl: number,
    goals: number,
    goalsAgainst: number,
    record: string,
    rankingPoints: string,
    bestDivision: number,
    currentDivision: number,
    divGroupsWon: string,
    ...
}
 */

use serde_json::Value;
use tracing::log;

use crate::error::StatsError;
use crate::models::RawEntity;

pub struct ClubsRsp;

impl ClubsRsp {
    /// Every object-shaped club entry with its key (club id, or index for arrays).
    pub fn entries(rsp: &Value) -> Vec<(String, RawEntity)> {
        let container = rsp.get("clubs").unwrap_or(rsp);
        let entries: Vec<(String, &Value)> = match container {
            Value::Object(map) => map.iter().map(|(k, v)| (k.clone(), v)).collect(),
            Value::Array(arr) => arr.iter().enumerate().map(|(i, v)| (i.to_string(), v)).collect(),
            _ => vec![],
        };
        entries.into_iter()
            .filter(|(_, v)| v.is_object())
            .filter_map(|(k, v)| serde_json::from_value::<RawEntity>(v.clone()).ok().map(|raw| (k, raw)))
            .collect()
    }

    /// Picks the single club of the response.
    ///
    /// With several entries the one named `preferred_name` wins, otherwise the
    /// lowest numeric club id, otherwise the first in response order.
    pub fn select(rsp: &Value, preferred_name: &str) -> Result<RawEntity, StatsError> {
        let mut entries = ClubsRsp::entries(rsp);
        if entries.is_empty() {
            return Err(StatsError::NoData("No club data found".to_string()));
        }
        if entries.len() > 1 {
            log::warn!("[TEAM] {} clubs in response, expected one: {:?}", entries.len(), entries.iter().map(|e| &e.0).collect::<Vec<_>>());
            if let Some(i) = entries.iter().position(|(_, raw)| raw.text(&["name"], "").eq_ignore_ascii_case(preferred_name)) {
                return Ok(entries.swap_remove(i).1);
            }
            entries.sort_by_key(|(k, _)| k.parse::<u64>().unwrap_or(u64::MAX));
        }
        Ok(entries.swap_remove(0).1)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::error::StatsError;

    use super::ClubsRsp;

    #[test]
    fn club_keyed_object() {
        let rsp = json!({"34385": {"name": "PTP", "wins": 10}});
        let club = ClubsRsp::select(&rsp, "PTP").unwrap();
        assert_eq!(club.text(&["name"], "Unknown"), "PTP");
        assert_eq!(club.num(&["wins"]), 10.0);
    }

    #[test]
    fn clubs_field_as_array() {
        let rsp = json!({"clubs": [{"name": "PTP"}]});
        assert_eq!(ClubsRsp::select(&rsp, "PTP").unwrap().text(&["name"], ""), "PTP");
    }

    #[test]
    fn empty_is_no_data() {
        assert!(matches!(ClubsRsp::select(&json!({}), "PTP"), Err(StatsError::NoData(_))));
        assert!(matches!(ClubsRsp::select(&json!([]), "PTP"), Err(StatsError::NoData(_))));
        assert!(matches!(ClubsRsp::select(&json!({"clubs": {}}), "PTP"), Err(StatsError::NoData(_))));
        assert!(matches!(ClubsRsp::select(&json!({"error": "oops"}), "PTP"), Err(StatsError::NoData(_))));
    }

    #[test]
    fn several_clubs_prefer_name() {
        let rsp = json!({
            "100": {"name": "Other"},
            "34385": {"name": "ptp"},
        });
        assert_eq!(ClubsRsp::select(&rsp, "PTP").unwrap().text(&["name"], ""), "ptp");
    }

    #[test]
    fn several_clubs_lowest_id() {
        let rsp = json!({
            "900": {"name": "Nine"},
            "12": {"name": "Twelve"},
        });
        assert_eq!(ClubsRsp::select(&rsp, "PTP").unwrap().text(&["name"], ""), "Twelve");
    }
}
