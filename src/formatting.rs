use serde::{Deserialize, Serialize};

use crate::models_api::player::{FieldValue, PlayerField, PlayerRecord};
use crate::sort::SortState;

/// Rate stats (percentages and per-game averages) get one decimal.
pub fn is_rate_stat(key: &str) -> bool {
    let key = key.to_ascii_lowercase();
    key.contains("pct") || key.ends_with("pg")
}

pub fn format_num(key: &str, value: f64) -> String {
    // + 0.0 turns -0.0 into 0.0
    if is_rate_stat(key) {
        format!("{:.1}", value + 0.0)
    } else {
        format!("{:.0}", value + 0.0)
    }
}

pub fn format_text(value: &str) -> String {
    if value.is_empty() {
        "0".to_string()
    } else {
        value.to_string()
    }
}

pub fn format_cell(record: &PlayerRecord, field: PlayerField) -> String {
    match record.value(field) {
        FieldValue::Num(n) => format_num(field.key(), n),
        FieldValue::Text(s) => format_text(s),
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Column {
    pub key: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indicator: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TableRow {
    pub name: String,
    pub cells: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PlayerTable {
    pub sort: SortState,
    pub columns: Vec<Column>,
    pub rows: Vec<TableRow>,
}

impl PlayerTable {
    /// `records` are expected to be sorted by `sort` already.
    pub fn new(records: &[PlayerRecord], sort: SortState) -> PlayerTable {
        let fields = PlayerField::columns();
        let columns = fields.iter()
            .map(|f| Column {
                key: f.key().to_string(),
                label: f.label().to_string(),
                indicator: (sort.field == *f).then(|| sort.direction.indicator().to_string()),
            })
            .collect();
        let rows = records.iter()
            .map(|r| TableRow {
                name: r.name.clone(),
                cells: fields.iter().map(|f| format_cell(r, *f)).collect(),
            })
            .collect();
        PlayerTable { sort, columns, rows }
    }
}
