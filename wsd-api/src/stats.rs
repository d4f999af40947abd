//! Sentiment aggregates served under `/businesses/{id}/stats/*`.

use serde::{Deserialize, Serialize};

use crate::lenient;

/// Response of `/stats/total`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StatsTotal {
    #[serde(default)]
    pub total_reviews: u64,
    #[serde(default)]
    pub positive_count: u64,
    #[serde(default)]
    pub neutral_count: u64,
    #[serde(default)]
    pub negative_count: u64,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub positive_pct: Option<f64>,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub neutral_pct: Option<f64>,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub negative_pct: Option<f64>,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub avg_sentiment: Option<f64>,
}

/// One row of `/stats/yearly`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyStat {
    pub year: i32,
    #[serde(default)]
    pub total_reviews: u64,
    #[serde(default)]
    pub positive_count: u64,
    #[serde(default)]
    pub neutral_count: u64,
    #[serde(default)]
    pub negative_count: u64,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub avg_sentiment: Option<f64>,
}

/// One row of `/stats/monthly`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyStat {
    pub year: i32,
    pub month: u32,
    #[serde(default)]
    pub total_reviews: u64,
    #[serde(default)]
    pub positive_count: u64,
    #[serde(default)]
    pub neutral_count: u64,
    #[serde(default)]
    pub negative_count: u64,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub avg_sentiment: Option<f64>,
}

/// `{business_id, data: [...]}` envelope shared by the yearly and monthly endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsSeries<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}
