use serde::{Deserialize, Serialize};

use crate::lenient::{self, present};

/// One customer review with its upstream sentiment classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub review_id: String,
    pub business_id: String,
    #[serde(default)]
    pub customer_id: Option<String>,
    /// ISO-8601 timestamp as sent by the server.
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub sentiment_score: Option<f64>,
    #[serde(default)]
    pub sentiment_label: Option<String>,
}

/// Sentiment classes assigned upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Review {
    pub fn text(&self) -> &str {
        present(self.text.as_deref()).unwrap_or_default()
    }

    /// Unknown or missing labels read as neutral.
    pub fn sentiment(&self) -> Sentiment {
        match self.sentiment_label.as_deref() {
            Some("positive") => Sentiment::Positive,
            Some("negative") => Sentiment::Negative,
            _ => Sentiment::Neutral,
        }
    }
}

/// Review count for one star rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingBucket {
    pub rating: u8,
    #[serde(default)]
    pub count: u64,
}

/// Response of `/businesses/{id}/reviews/summary`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReviewSummary {
    #[serde(default)]
    pub business_id: String,
    #[serde(default)]
    pub total_reviews: u64,
    #[serde(default)]
    pub rating_distribution: Vec<RatingBucket>,
}

impl ReviewSummary {
    /// Count for a rating; absent buckets are zero.
    pub fn count_for(&self, rating: u8) -> u64 {
        self.rating_distribution
            .iter()
            .find(|bucket| bucket.rating == rating)
            .map(|bucket| bucket.count)
            .unwrap_or(0)
    }
}
