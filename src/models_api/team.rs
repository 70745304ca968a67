use serde::{Deserialize, Serialize};

use crate::models::RawEntity;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TeamRecord {
    pub name: String,
    pub seasons: f64,
    pub wins: f64,
    pub losses: f64,
    pub ties: f64,
    pub otl: f64,
    pub goals: f64,
    pub goals_against: f64,
    pub record: String,
    pub ranking_points: String,
    pub promotions: String,
    pub relegations: String,
    pub best_division: f64,
    pub current_division: f64,
    pub div_groups_won: String,
    pub leagues_won: String,
    pub titles_won: String,
    pub star_level: String,
}

impl From<&RawEntity> for TeamRecord {
    fn from(raw: &RawEntity) -> Self {
        TeamRecord {
            name: raw.text(&["name"], "Unknown"),
            seasons: raw.num(&["seasons"]),
            wins: raw.num(&["wins"]),
            losses: raw.num(&["losses"]),
            ties: raw.num(&["ties"]),
            otl: raw.num(&["otl"]),
            goals: raw.num(&["goals"]),
            goals_against: raw.num(&["goalsAgainst", "goalsagainst"]),
            record: raw.text(&["record"], "0-0-0"),
            ranking_points: raw.text(&["rankingPoints", "rankingpoints"], "0"),
            promotions: raw.text(&["promotions"], "0"),
            relegations: raw.text(&["relegations"], "0"),
            best_division: raw.num(&["bestDivision", "bestdivision"]),
            current_division: raw.num(&["currentDivision", "currentdivision"]),
            div_groups_won: raw.text(&["divGroupsWon", "divgroupswon"], "0"),
            leagues_won: raw.text(&["leaguesWon", "leagueswon"], "0"),
            titles_won: raw.text(&["titlesWon", "titleswon"], "0"),
            star_level: raw.text(&["starLevel", "starlevel"], "0"),
        }
    }
}

impl TeamRecord {
    fn decided_games(&self) -> f64 {
        (self.wins + self.losses + self.otl).max(1.0)
    }

    pub fn win_pct(&self) -> f64 {
        self.wins / self.decided_games() * 100.0
    }

    pub fn goal_diff(&self) -> f64 {
        self.goals - self.goals_against
    }

    pub fn goals_per_game(&self) -> f64 {
        self.goals / self.decided_games()
    }
}

/// Team record with the derived numbers shown next to it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TeamSummary {
    #[serde(flatten)]
    pub team: TeamRecord,
    pub win_pct: String,
    pub goal_diff: String,
    pub goals_per_game: String,
}

impl From<TeamRecord> for TeamSummary {
    fn from(team: TeamRecord) -> Self {
        TeamSummary {
            win_pct: format!("{:.1}", team.win_pct()),
            goal_diff: format!("{:.0}", team.goal_diff() + 0.0),
            goals_per_game: format!("{:.2}", team.goals_per_game()),
            team,
        }
    }
}
