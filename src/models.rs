use std::collections::HashMap;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Upstream values come as numbers, numeric strings, or anything else.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum StringOrNum {
    Number(f64),
    String(String),
    Bool(bool),
    Other(Value),
}

impl StringOrNum {
    /// Non-numeric input becomes 0, and -0 becomes 0.
    pub fn to_num(&self) -> f64 {
        let n = match self {
            StringOrNum::Number(n) => *n,
            StringOrNum::String(str) => {
                let str = str.trim();
                if str.is_empty() { 0.0 } else { str.parse::<f64>().unwrap_or(0.0) }
            },
            StringOrNum::Bool(b) => if *b { 1.0 } else { 0.0 },
            StringOrNum::Other(_) => 0.0,
        };
        if n.is_finite() { n + 0.0 } else { 0.0 }
    }

    /// None when there is nothing usable as text.
    pub fn to_str(&self) -> Option<String> {
        match self {
            StringOrNum::String(str) if !str.is_empty() => Some(str.to_owned()),
            StringOrNum::String(_) => None,
            StringOrNum::Number(n) => Some(format_plain(*n)),
            StringOrNum::Bool(b) => Some(b.to_string()),
            StringOrNum::Other(_) => None,
        }
    }
}

fn format_plain(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

/// One loosely typed upstream object (a member or a club).
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(transparent)]
pub struct RawEntity(pub HashMap<String, StringOrNum>);

impl RawEntity {
    /// First alias present with a non-null value wins.
    fn lookup(&self, keys: &[&str]) -> Option<&StringOrNum> {
        keys.iter()
            .filter_map(|k| self.0.get(*k))
            .find(|v| !matches!(v, StringOrNum::Other(Value::Null)))
    }

    pub fn num(&self, keys: &[&str]) -> f64 {
        self.lookup(keys).map(|e| e.to_num()).unwrap_or(0.0)
    }

    pub fn text(&self, keys: &[&str], default: &str) -> String {
        self.lookup(keys)
            .and_then(|e| e.to_str())
            .unwrap_or_else(|| default.to_string())
    }
}

lazy_static! {
    static ref POSITION_CODES: HashMap<&'static str, &'static str> = HashMap::from([
        ("leftWing", "LW"),
        ("center", "C"),
        ("defenseMen", "D"),
        ("rightWing", "RW"),
    ]);
}

/// Unmapped positions pass through unchanged.
pub fn position_code(position: &str) -> String {
    POSITION_CODES.get(position)
        .map(|e| e.to_string())
        .unwrap_or_else(|| position.to_string())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{position_code, RawEntity, StringOrNum};

    #[test]
    fn coerce_numbers() {
        assert_eq!(StringOrNum::Number(3.5).to_num(), 3.5);
        assert_eq!(StringOrNum::String("3".to_string()).to_num(), 3.0);
        assert_eq!(StringOrNum::String(" 12.5 ".to_string()).to_num(), 12.5);
        assert_eq!(StringOrNum::String("".to_string()).to_num(), 0.0);
        assert_eq!(StringOrNum::String("abc".to_string()).to_num(), 0.0);
        assert_eq!(StringOrNum::String("NaN".to_string()).to_num(), 0.0);
        assert_eq!(StringOrNum::Bool(true).to_num(), 1.0);
        assert_eq!(StringOrNum::Other(json!(null)).to_num(), 0.0);
        assert_eq!(StringOrNum::Other(json!({"a": 1})).to_num(), 0.0);
    }

    #[test]
    fn negative_zero_is_zero() {
        assert!(StringOrNum::String("-0".to_string()).to_num().is_sign_positive());
        assert!(StringOrNum::Number(-0.0).to_num().is_sign_positive());
        assert_eq!(StringOrNum::String("-2".to_string()).to_num(), -2.0);
    }

    #[test]
    fn coerce_strings() {
        assert_eq!(StringOrNum::String("3-2-1".to_string()).to_str(), Some("3-2-1".to_string()));
        assert_eq!(StringOrNum::String("".to_string()).to_str(), None);
        assert_eq!(StringOrNum::Number(1200.0).to_str(), Some("1200".to_string()));
        assert_eq!(StringOrNum::Other(json!(null)).to_str(), None);
    }

    #[test]
    fn raw_entity_aliases() {
        let raw: RawEntity = serde_json::from_value(json!({
            "gamesplayed": "10",
            "plusMinus": -3,
            "shotpct": null,
            "shotPct": "40.5",
            "name": "Skater",
        })).unwrap();

        assert_eq!(raw.num(&["gamesplayed", "gamesPlayed"]), 10.0);
        assert_eq!(raw.num(&["plusmin", "plusMinus"]), -3.0);
        assert_eq!(raw.num(&["shotpct", "shotPct"]), 40.5);
        assert_eq!(raw.num(&["hits"]), 0.0);
        assert_eq!(raw.text(&["name"], "Unknown"), "Skater");
        assert_eq!(raw.text(&["record"], "0-0-0"), "0-0-0");
    }

    #[test]
    fn positions() {
        assert_eq!(position_code("leftWing"), "LW");
        assert_eq!(position_code("center"), "C");
        assert_eq!(position_code("defenseMen"), "D");
        assert_eq!(position_code("rightWing"), "RW");
        assert_eq!(position_code("goalie"), "goalie");
    }
}
