use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::{position_code, RawEntity};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    pub name: String,
    pub favorite_position: String,
    pub games_played: f64,
    pub record: String,
    pub win_pct: f64,
    pub goals: f64,
    pub assists: f64,
    pub points: f64,
    #[serde(rename = "pointspg")]
    pub points_pg: f64,
    pub plus_minus: f64,
    pub gwg: f64,
    pub shots: f64,
    pub shot_pct: f64,
    pub breakaways: f64,
    pub breakaway_pct: f64,
    pub passes: f64,
    pub passes_attempted: f64,
    pub pass_pct: f64,
    pub hits: f64,
    #[serde(rename = "hitspg")]
    pub hits_pg: f64,
    pub takeaways: f64,
    pub interceptions: f64,
    pub blocks: f64,
    pub faceoffs_won: f64,
    pub faceoffs_lost: f64,
    pub saves: f64,
    pub saves_pct: f64,
    pub gaa: f64,
    pub breakaways_saved: f64,
}

impl From<&RawEntity> for PlayerRecord {
    fn from(raw: &RawEntity) -> Self {
        let goals = raw.num(&["goals"]);
        let assists = raw.num(&["assists"]);
        PlayerRecord {
            name: raw.text(&["name"], "Unknown"),
            favorite_position: position_code(&raw.text(&["favoritePosition", "favoriteposition"], "N/A")),
            games_played: raw.num(&["gamesplayed", "gamesPlayed"]),
            record: raw.text(&["record"], "0-0-0"),
            win_pct: raw.num(&["winpct", "winPct"]),
            goals,
            assists,
            // never trusted from upstream
            points: goals + assists,
            points_pg: raw.num(&["pointspg", "pointsPg"]),
            plus_minus: raw.num(&["plusmin", "plusMinus"]),
            gwg: raw.num(&["gwg"]),
            shots: raw.num(&["shots"]),
            shot_pct: raw.num(&["shotpct", "shotPct"]),
            breakaways: raw.num(&["breakaways"]),
            breakaway_pct: raw.num(&["skbreakawaypct", "breakawayPct"]),
            passes: raw.num(&["passes"]),
            passes_attempted: raw.num(&["skpassattempts", "passesAttempted"]),
            pass_pct: raw.num(&["skpasspct", "passPct"]),
            hits: raw.num(&["hits"]),
            hits_pg: raw.num(&["hitspg", "hitsPg"]),
            takeaways: raw.num(&["takeaways"]),
            interceptions: raw.num(&["interceptions"]),
            blocks: raw.num(&["skbs", "blocks"]),
            faceoffs_won: raw.num(&["skfow", "faceoffsWon"]),
            faceoffs_lost: raw.num(&["skfol", "faceoffsLost"]),
            saves: raw.num(&["glsaves", "saves"]),
            saves_pct: raw.num(&["glsavepct", "savesPct"]),
            gaa: raw.num(&["glgaa", "gaa"]),
            breakaways_saved: raw.num(&["glbrksaves", "breakawaysSaved"]),
        }
    }
}

pub enum FieldValue<'a> {
    Num(f64),
    Text(&'a str),
}

/// Serialized names match `key()`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum PlayerField {
    Name,
    FavoritePosition,
    GamesPlayed,
    Record,
    WinPct,
    Goals,
    Assists,
    Points,
    #[serde(rename = "pointspg")]
    PointsPg,
    PlusMinus,
    Gwg,
    Shots,
    ShotPct,
    Breakaways,
    BreakawayPct,
    Passes,
    PassesAttempted,
    PassPct,
    Hits,
    #[serde(rename = "hitspg")]
    HitsPg,
    Takeaways,
    Interceptions,
    Blocks,
    FaceoffsWon,
    FaceoffsLost,
    Saves,
    SavesPct,
    Gaa,
    BreakawaysSaved,
}

impl PlayerField {
    /// Table columns in display order, the name column excluded.
    pub fn columns() -> Vec<PlayerField> {
        use PlayerField::*;
        vec![
            FavoritePosition, GamesPlayed, Record, WinPct, Goals, Assists, Points, PointsPg,
            PlusMinus, Gwg, Shots, ShotPct, Breakaways, BreakawayPct, Passes, PassesAttempted,
            PassPct, Hits, HitsPg, Takeaways, Interceptions, Blocks, FaceoffsWon, FaceoffsLost,
            Saves, SavesPct, Gaa, BreakawaysSaved,
        ]
    }

    pub fn key(&self) -> &'static str {
        match self {
            PlayerField::Name => "name",
            PlayerField::FavoritePosition => "favoritePosition",
            PlayerField::GamesPlayed => "gamesPlayed",
            PlayerField::Record => "record",
            PlayerField::WinPct => "winPct",
            PlayerField::Goals => "goals",
            PlayerField::Assists => "assists",
            PlayerField::Points => "points",
            PlayerField::PointsPg => "pointspg",
            PlayerField::PlusMinus => "plusMinus",
            PlayerField::Gwg => "gwg",
            PlayerField::Shots => "shots",
            PlayerField::ShotPct => "shotPct",
            PlayerField::Breakaways => "breakaways",
            PlayerField::BreakawayPct => "breakawayPct",
            PlayerField::Passes => "passes",
            PlayerField::PassesAttempted => "passesAttempted",
            PlayerField::PassPct => "passPct",
            PlayerField::Hits => "hits",
            PlayerField::HitsPg => "hitspg",
            PlayerField::Takeaways => "takeaways",
            PlayerField::Interceptions => "interceptions",
            PlayerField::Blocks => "blocks",
            PlayerField::FaceoffsWon => "faceoffsWon",
            PlayerField::FaceoffsLost => "faceoffsLost",
            PlayerField::Saves => "saves",
            PlayerField::SavesPct => "savesPct",
            PlayerField::Gaa => "gaa",
            PlayerField::BreakawaysSaved => "breakawaysSaved",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PlayerField::Name => "Player",
            PlayerField::FavoritePosition => "Position",
            PlayerField::GamesPlayed => "Games Played",
            PlayerField::Record => "Record",
            PlayerField::WinPct => "Win %",
            PlayerField::Goals => "Goals",
            PlayerField::Assists => "Assists",
            PlayerField::Points => "Points",
            PlayerField::PointsPg => "Points/Game",
            PlayerField::PlusMinus => "+/-",
            PlayerField::Gwg => "GWG",
            PlayerField::Shots => "Shots",
            PlayerField::ShotPct => "Shot %",
            PlayerField::Breakaways => "Breakaways",
            PlayerField::BreakawayPct => "Breakaway %",
            PlayerField::Passes => "Passes",
            PlayerField::PassesAttempted => "Passes Attempted",
            PlayerField::PassPct => "Pass %",
            PlayerField::Hits => "Hits",
            PlayerField::HitsPg => "Hits/Game",
            PlayerField::Takeaways => "Takeaways",
            PlayerField::Interceptions => "Interceptions",
            PlayerField::Blocks => "Blocks",
            PlayerField::FaceoffsWon => "Faceoffs Won",
            PlayerField::FaceoffsLost => "Faceoffs Lost",
            PlayerField::Saves => "Saves",
            PlayerField::SavesPct => "Save %",
            PlayerField::Gaa => "GAA",
            PlayerField::BreakawaysSaved => "Breakaways Saved",
        }
    }
}

impl FromStr for PlayerField {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        std::iter::once(PlayerField::Name)
            .chain(PlayerField::columns())
            .find(|e| e.key() == s)
            .ok_or_else(|| ParseFieldError(s.to_string()))
    }
}

impl Display for PlayerField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ParseFieldError(pub String);

impl Display for ParseFieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown field {}", self.0)
    }
}

impl PlayerRecord {
    pub fn value(&self, field: PlayerField) -> FieldValue<'_> {
        use FieldValue::{Num, Text};
        match field {
            PlayerField::Name => Text(&self.name),
            PlayerField::FavoritePosition => Text(&self.favorite_position),
            PlayerField::GamesPlayed => Num(self.games_played),
            PlayerField::Record => Text(&self.record),
            PlayerField::WinPct => Num(self.win_pct),
            PlayerField::Goals => Num(self.goals),
            PlayerField::Assists => Num(self.assists),
            PlayerField::Points => Num(self.points),
            PlayerField::PointsPg => Num(self.points_pg),
            PlayerField::PlusMinus => Num(self.plus_minus),
            PlayerField::Gwg => Num(self.gwg),
            PlayerField::Shots => Num(self.shots),
            PlayerField::ShotPct => Num(self.shot_pct),
            PlayerField::Breakaways => Num(self.breakaways),
            PlayerField::BreakawayPct => Num(self.breakaway_pct),
            PlayerField::Passes => Num(self.passes),
            PlayerField::PassesAttempted => Num(self.passes_attempted),
            PlayerField::PassPct => Num(self.pass_pct),
            PlayerField::Hits => Num(self.hits),
            PlayerField::HitsPg => Num(self.hits_pg),
            PlayerField::Takeaways => Num(self.takeaways),
            PlayerField::Interceptions => Num(self.interceptions),
            PlayerField::Blocks => Num(self.blocks),
            PlayerField::FaceoffsWon => Num(self.faceoffs_won),
            PlayerField::FaceoffsLost => Num(self.faceoffs_lost),
            PlayerField::Saves => Num(self.saves),
            PlayerField::SavesPct => Num(self.saves_pct),
            PlayerField::Gaa => Num(self.gaa),
            PlayerField::BreakawaysSaved => Num(self.breakaways_saved),
        }
    }
}
