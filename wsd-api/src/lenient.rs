//! Tolerant decoding for fields the API is inconsistent about.
//!
//! Decimal columns (`avg_sentiment`, `*_pct`, `sentiment_score`) arrive either
//! as JSON numbers or as decimal strings. Text columns sometimes carry the
//! literal string `"null"` where a JSON `null` was meant.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decode a number, a numeric string, or null into `Option<f64>`.
///
/// Unparsable strings and non-finite values decode to `None`.
pub fn decimal<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| number_from_value(&v)))
}

/// Interpret a JSON value as a finite float the way a browser `parseFloat` would
/// for well-formed input.
pub fn number_from_value(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}

/// Treat `None`, `""` and `"null"` identically as missing.
pub fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty() && *s != "null")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "decimal")]
        score: Option<f64>,
    }

    fn score(body: Value) -> Option<f64> {
        serde_json::from_value::<Row>(body).unwrap().score
    }

    #[test]
    fn decimal_accepts_numbers_and_strings() {
        assert_eq!(score(json!({"score": 0.75})), Some(0.75));
        assert_eq!(score(json!({"score": "0.6250"})), Some(0.625));
        assert_eq!(score(json!({"score": 3})), Some(3.0));
    }

    #[test]
    fn decimal_missing_or_garbage_is_none() {
        assert_eq!(score(json!({})), None);
        assert_eq!(score(json!({"score": null})), None);
        assert_eq!(score(json!({"score": "n/a"})), None);
        assert_eq!(score(json!({"score": "NaN"})), None);
        assert_eq!(score(json!({"score": true})), None);
    }

    #[test]
    fn null_string_is_not_present() {
        assert_eq!(present(Some("null")), None);
        assert_eq!(present(Some("")), None);
        assert_eq!(present(None), None);
        assert_eq!(present(Some("400 Broad St")), Some("400 Broad St"));
    }
}
