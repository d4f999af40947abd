//! Display formatting for cards, tooltips and stats boxes.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Longest category text shown on a list card before truncation.
pub const CATEGORY_PREVIEW_CHARS: usize = 40;

/// `1234567` → `"1,234,567"`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Average rating to one decimal, or `"N/A"`.
pub fn format_rating(rating: Option<f64>) -> String {
    match rating {
        Some(r) => format!("{:.1}", r),
        None => "N/A".to_string(),
    }
}

/// Number of filled stars out of five.
pub fn filled_stars(rating: Option<f64>) -> u8 {
    rating.unwrap_or(0.0).round().clamp(0.0, 5.0) as u8
}

/// Category text for a list card: at most [`CATEGORY_PREVIEW_CHARS`]
/// characters plus `"..."`, or `"Uncategorized"`.
pub fn card_category(category: Option<&str>) -> String {
    match category {
        None => "Uncategorized".to_string(),
        Some(c) if c.chars().count() > CATEGORY_PREVIEW_CHARS => {
            let head: String = c.chars().take(CATEGORY_PREVIEW_CHARS).collect();
            format!("{}...", head)
        }
        Some(c) => c.to_string(),
    }
}

/// Review timestamp as `MM/DD/YYYY`. Unparsable input is returned as-is.
pub fn review_date(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };
    parse_date(raw)
        .map(|date| date.format("%m/%d/%Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Sentiment score in `[0, 1]` as a tooltip percentage, `0.734` → `"73.4%"`.
pub fn sentiment_pct(score: f64) -> String {
    format!("{:.1}%", score * 100.0)
}

/// Stats-box percentage; missing reads as `0`. `62.5` → `"62.5"`, `40.0` → `"40"`.
pub fn pct(value: Option<f64>) -> String {
    let value = value.unwrap_or(0.0);
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{:.0}", rounded)
    } else {
        rounded.to_string()
    }
}

/// `"Coordinates: 47.6097, -122.3422"`, or `None` without a usable position.
pub fn coordinates_line(coordinates: Option<(f64, f64)>) -> Option<String> {
    coordinates.map(|(lat, lon)| format!("Coordinates: {}, {}", lat, lon))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(10842), "10,842");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn rating_and_stars() {
        assert_eq!(format_rating(Some(4.26)), "4.3");
        assert_eq!(format_rating(None), "N/A");
        assert_eq!(filled_stars(Some(4.5)), 5);
        assert_eq!(filled_stars(Some(4.4)), 4);
        assert_eq!(filled_stars(None), 0);
    }

    #[test]
    fn long_categories_are_truncated() {
        let long = "Seafood restaurant, Oyster bar restaurant, Fish and chips";
        let shown = card_category(Some(long));
        assert_eq!(shown, "Seafood restaurant, Oyster bar restauran...");
        assert_eq!(card_category(Some("Park")), "Park");
        assert_eq!(card_category(None), "Uncategorized");
    }

    #[test]
    fn review_dates() {
        assert_eq!(review_date(Some("2021-07-04T18:22:10")), "07/04/2021");
        assert_eq!(review_date(Some("2019-12-31T23:59:59.120000")), "12/31/2019");
        assert_eq!(review_date(Some("2020-02-29T10:00:00Z")), "02/29/2020");
        assert_eq!(review_date(Some("2018-05-01")), "05/01/2018");
        assert_eq!(review_date(Some("yesterday")), "yesterday");
        assert_eq!(review_date(None), "");
    }

    #[test]
    fn percentages() {
        assert_eq!(sentiment_pct(0.734), "73.4%");
        assert_eq!(sentiment_pct(0.0), "0.0%");
        assert_eq!(pct(Some(62.5)), "62.5");
        assert_eq!(pct(Some(40.0)), "40");
        assert_eq!(pct(Some(33.333)), "33.33");
        assert_eq!(pct(None), "0");
    }

    #[test]
    fn coordinates_are_printed_verbatim() {
        assert_eq!(
            coordinates_line(Some((47.6097, -122.3422))).as_deref(),
            Some("Coordinates: 47.6097, -122.3422")
        );
        assert_eq!(coordinates_line(None), None);
    }
}
