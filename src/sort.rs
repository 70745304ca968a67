use std::cmp::Ordering;
use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models_api::player::{FieldValue, PlayerField, PlayerRecord};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn toggle(self) -> SortDirection {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn indicator(&self) -> &'static str {
        match self {
            SortDirection::Asc => "↑",
            SortDirection::Desc => "↓",
        }
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(format!("unknown direction {s}")),
        }
    }
}

impl Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "asc"),
            SortDirection::Desc => write!(f, "desc"),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub field: PlayerField,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        SortState { field: PlayerField::Points, direction: SortDirection::Desc }
    }
}

impl SortState {
    /// Same field flips the direction, a new field starts descending.
    pub fn select(&mut self, field: PlayerField) {
        if self.field == field {
            self.direction = self.direction.toggle();
        } else {
            self.field = field;
            self.direction = SortDirection::Desc;
        }
    }

    pub fn apply(&self, records: &[PlayerRecord]) -> Vec<PlayerRecord> {
        sort_records(records, self.field, self.direction)
    }
}

fn compare(a: &PlayerRecord, b: &PlayerRecord, field: PlayerField) -> Ordering {
    match (a.value(field), b.value(field)) {
        (FieldValue::Num(a), FieldValue::Num(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        (FieldValue::Text(a), FieldValue::Text(b)) => a.cmp(b),
        // a field is always either numeric or text
        _ => Ordering::Equal,
    }
}

/// Stable, full re-sort into a new vec.
pub fn sort_records(records: &[PlayerRecord], field: PlayerField, direction: SortDirection) -> Vec<PlayerRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| match direction {
        SortDirection::Asc => compare(a, b, field),
        SortDirection::Desc => compare(b, a, field),
    });
    sorted
}

#[cfg(test)]
mod tests {
    use crate::models_api::player::{PlayerField, PlayerRecord};

    use super::{sort_records, SortDirection, SortState};

    fn player(name: &str, goals: f64, position: &str) -> PlayerRecord {
        PlayerRecord {
            name: name.to_string(),
            favorite_position: position.to_string(),
            goals,
            ..Default::default()
        }
    }

    fn names(records: &[PlayerRecord]) -> Vec<&str> {
        records.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn numeric_both_directions() {
        let records = vec![player("A", 3.0, "C"), player("B", 10.0, "D"), player("C", 1.0, "LW")];
        assert_eq!(names(&sort_records(&records, PlayerField::Goals, SortDirection::Desc)), vec!["B", "A", "C"]);
        assert_eq!(names(&sort_records(&records, PlayerField::Goals, SortDirection::Asc)), vec!["C", "A", "B"]);
    }

    #[test]
    fn asc_is_reverse_of_desc() {
        let records = vec![player("A", 3.0, "C"), player("B", 10.0, "D"), player("C", 1.0, "LW"), player("D", 7.0, "RW")];
        let asc = sort_records(&records, PlayerField::Goals, SortDirection::Asc);
        let mut desc = sort_records(&asc, PlayerField::Goals, SortDirection::Desc);
        desc.reverse();
        assert_eq!(asc, desc);
    }

    #[test]
    fn text_field_is_lexicographic() {
        let records = vec![player("A", 0.0, "RW"), player("B", 0.0, "C"), player("C", 0.0, "LW")];
        assert_eq!(names(&sort_records(&records, PlayerField::FavoritePosition, SortDirection::Asc)), vec!["B", "C", "A"]);
        assert_eq!(names(&sort_records(&records, PlayerField::FavoritePosition, SortDirection::Desc)), vec!["A", "C", "B"]);
    }

    #[test]
    fn ties_keep_input_order() {
        let records = vec![player("A", 1.0, "C"), player("B", 1.0, "C"), player("C", 2.0, "C")];
        assert_eq!(names(&sort_records(&records, PlayerField::Goals, SortDirection::Desc)), vec!["C", "A", "B"]);
        assert_eq!(names(&sort_records(&records, PlayerField::Goals, SortDirection::Asc)), vec!["A", "B", "C"]);
    }

    #[test]
    fn signed_zeros_tie() {
        let records = vec![player("A", -0.0, "C"), player("B", 0.0, "C")];
        assert_eq!(names(&sort_records(&records, PlayerField::Goals, SortDirection::Asc)), vec!["A", "B"]);
        assert_eq!(names(&sort_records(&records, PlayerField::Goals, SortDirection::Desc)), vec!["A", "B"]);
    }

    #[test]
    fn select_toggles() {
        let mut state = SortState::default();
        assert_eq!(state, SortState { field: PlayerField::Points, direction: SortDirection::Desc });
        state.select(PlayerField::Points);
        assert_eq!(state.direction, SortDirection::Asc);
        state.select(PlayerField::Goals);
        assert_eq!(state, SortState { field: PlayerField::Goals, direction: SortDirection::Desc });
        state.select(PlayerField::Goals);
        state.select(PlayerField::Goals);
        assert_eq!(state.direction, SortDirection::Desc);
    }

    #[test]
    fn parse_direction() {
        assert_eq!("ASC".parse::<SortDirection>(), Ok(SortDirection::Asc));
        assert_eq!("desc".parse::<SortDirection>(), Ok(SortDirection::Desc));
        assert!("up".parse::<SortDirection>().is_err());
    }
}
