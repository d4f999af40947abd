//! Chart-ready series derived from the stats and summary endpoints.
//!
//! All structs derive `Serialize` so they can be handed to D3.js as JSON
//! from the Dioxus WASM frontend.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use wsd_api::review::ReviewSummary;
use wsd_api::stats::{MonthlyStat, YearlyStat};

/// Ratings in display order, best first.
pub const RATING_ROWS: [u8; 5] = [5, 4, 3, 2, 1];

/// One year of sentiment aggregates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearlyPoint {
    pub year: i32,
    /// Mean sentiment score; 0 when upstream had none.
    pub avg_sentiment: f64,
    pub total_reviews: u64,
    pub positive_count: u64,
    pub neutral_count: u64,
    pub negative_count: u64,
}

/// One month of sentiment aggregates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyPoint {
    pub year: i32,
    pub month: u32,
    /// `"month/year"`, e.g. `"3/2021"`.
    pub label: String,
    pub avg_sentiment: f64,
    pub total_reviews: u64,
    pub positive_count: u64,
    pub neutral_count: u64,
    pub negative_count: u64,
}

/// Yearly rows sorted ascending by year, scores coerced to `f64`.
pub fn yearly_series(rows: Vec<YearlyStat>) -> Vec<YearlyPoint> {
    let mut points: Vec<YearlyPoint> = rows
        .into_iter()
        .map(|row| YearlyPoint {
            year: row.year,
            avg_sentiment: row.avg_sentiment.unwrap_or(0.0),
            total_reviews: row.total_reviews,
            positive_count: row.positive_count,
            neutral_count: row.neutral_count,
            negative_count: row.negative_count,
        })
        .collect();
    points.sort_by_key(|p| p.year);
    points
}

/// Monthly rows sorted ascending by `year * 12 + month`, labelled `"m/yyyy"`.
pub fn monthly_series(rows: Vec<MonthlyStat>) -> Vec<MonthlyPoint> {
    let mut points: Vec<MonthlyPoint> = rows
        .into_iter()
        .map(|row| MonthlyPoint {
            year: row.year,
            month: row.month,
            label: format!("{}/{}", row.month, row.year),
            avg_sentiment: row.avg_sentiment.unwrap_or(0.0),
            total_reviews: row.total_reviews,
            positive_count: row.positive_count,
            neutral_count: row.neutral_count,
            negative_count: row.negative_count,
        })
        .collect();
    points.sort_by_key(|p| i64::from(p.year) * 12 + i64::from(p.month));
    points
}

/// Distinct years of the yearly series, ascending.
pub fn available_years(yearly: &[YearlyPoint]) -> Vec<i32> {
    yearly
        .iter()
        .map(|p| p.year)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Chart granularity: every year, or the months of one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Period {
    #[default]
    All,
    Year(i32),
}

impl FromStr for Period {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "all" => Ok(Period::All),
            year => Ok(Period::Year(year.parse()?)),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::All => write!(f, "all"),
            Period::Year(year) => write!(f, "{}", year),
        }
    }
}

/// A point on either sentiment chart.
///
/// `x` is the year in the yearly view and the month in the monthly view;
/// `label` is what the tooltip shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub x: i32,
    pub label: String,
    pub avg_sentiment: f64,
    pub positive_count: u64,
    pub neutral_count: u64,
    pub negative_count: u64,
}

/// Points for `period`: the whole yearly series, or the monthly entries of
/// the selected year.
pub fn chart_points(period: Period, yearly: &[YearlyPoint], monthly: &[MonthlyPoint]) -> Vec<ChartPoint> {
    match period {
        Period::All => yearly
            .iter()
            .map(|p| ChartPoint {
                x: p.year,
                label: p.year.to_string(),
                avg_sentiment: p.avg_sentiment,
                positive_count: p.positive_count,
                neutral_count: p.neutral_count,
                negative_count: p.negative_count,
            })
            .collect(),
        Period::Year(year) => monthly
            .iter()
            .filter(|p| p.year == year)
            .map(|p| ChartPoint {
                x: i32::try_from(p.month).unwrap_or_default(),
                label: p.label.clone(),
                avg_sentiment: p.avg_sentiment,
                positive_count: p.positive_count,
                neutral_count: p.neutral_count,
                negative_count: p.negative_count,
            })
            .collect(),
    }
}

/// One row of the rating-distribution bar chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatingBar {
    pub rating: u8,
    pub count: u64,
    /// Bar width relative to the largest bucket, 0–100.
    pub width_pct: f64,
}

/// Bars for ratings 5 → 1, normalized against the largest bucket.
/// Missing buckets (or a missing summary) render as zero-width bars.
pub fn rating_bars(summary: Option<&ReviewSummary>) -> Vec<RatingBar> {
    let counts: Vec<(u8, u64)> = RATING_ROWS
        .iter()
        .map(|&rating| (rating, summary.map(|s| s.count_for(rating)).unwrap_or(0)))
        .collect();
    let max = counts.iter().map(|&(_, count)| count).max().unwrap_or(0);

    counts
        .into_iter()
        .map(|(rating, count)| RatingBar {
            rating,
            count,
            width_pct: if max == 0 {
                0.0
            } else {
                count as f64 / max as f64 * 100.0
            },
        })
        .collect()
}
