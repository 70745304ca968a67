use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models_api::player::{FieldValue, PlayerField, PlayerRecord};
use crate::sort::{sort_records, SortDirection};

/// Metrics selectable for the bar chart.
pub const CHART_METRICS: [PlayerField; 4] = [
    PlayerField::GamesPlayed,
    PlayerField::Goals,
    PlayerField::Assists,
    PlayerField::Points,
];

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Bar {
    pub name: String,
    pub value: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub metric: PlayerField,
    pub label: String,
    pub bars: Vec<Bar>,
}

pub fn parse_metric(s: &str) -> Result<PlayerField, String> {
    PlayerField::from_str(s).ok()
        .filter(|e| CHART_METRICS.contains(e))
        .ok_or_else(|| format!("unknown metric {s}"))
}

impl ChartSeries {
    /// Bars for `metric`, highest first.
    pub fn new(records: &[PlayerRecord], metric: PlayerField) -> ChartSeries {
        let bars = sort_records(records, metric, SortDirection::Desc).into_iter()
            .map(|r| {
                let value = match r.value(metric) {
                    FieldValue::Num(n) => n,
                    FieldValue::Text(_) => 0.0,
                };
                Bar { name: r.name, value }
            })
            .collect();
        ChartSeries { metric, label: metric.label().to_string(), bars }
    }
}
