//! Filter/option state for the business list.
//!
//! The county → city cascade is an explicit dependent query: selecting a
//! county clears the city and yields a [`CityScope`]; the caller runs
//! [`cities_for`] with it and hands the answer back through
//! [`FilterState::apply_cities`], which drops answers for a county that is no
//! longer selected.

use log::warn;
use wsd_api::transport::Transport;
use wsd_api::ApiClient;

pub use wsd_api::filters::{FilterOptions, Filters, RATING_OPTIONS};

/// Which county a city-option list belongs to; `None` is the unscoped list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CityScope {
    pub county: Option<String>,
}

/// Active filters plus the option lists offered for them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub filters: Filters,
    pub options: FilterOptions,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_field(&mut self, value: &str) {
        self.filters.field = non_blank(value);
    }

    /// Select a county (blank clears it). The city is always reset, and the
    /// returned scope is the city-option query to run next.
    pub fn select_county(&mut self, value: &str) -> CityScope {
        self.filters.county = non_blank(value);
        self.filters.city = None;
        self.city_scope()
    }

    pub fn set_city(&mut self, value: &str) {
        self.filters.city = non_blank(value);
    }

    /// Accepts `"1"`–`"5"`; anything else clears the bound.
    pub fn set_min_rating(&mut self, value: &str) {
        self.filters.min_rating = parse_rating(value);
    }

    pub fn set_max_rating(&mut self, value: &str) {
        self.filters.max_rating = parse_rating(value);
    }

    /// Kept verbatim (not trimmed) so the text box can hold inner spaces
    /// while the user is typing.
    pub fn set_search(&mut self, value: &str) {
        self.filters.search = if value.trim().is_empty() {
            None
        } else {
            Some(value.to_string())
        };
    }

    pub fn city_scope(&self) -> CityScope {
        CityScope {
            county: self.filters.county.clone(),
        }
    }

    /// Install the initial option lists. If a county was picked before they
    /// arrived, its scoped city list is kept.
    pub fn apply_options(&mut self, options: FilterOptions) {
        let cities = if self.filters.county.is_some() {
            std::mem::take(&mut self.options.cities)
        } else {
            options.cities
        };
        self.options = FilterOptions { cities, ..options };
    }

    /// Install a city list fetched for `scope`. Returns `false` and leaves the
    /// options untouched when the county changed since the fetch started.
    pub fn apply_cities(&mut self, scope: &CityScope, cities: Vec<String>) -> bool {
        if *scope != self.city_scope() {
            return false;
        }
        self.options.cities = cities;
        true
    }
}

/// Initial option lists; a failed fetch yields empty lists.
pub async fn load_options<T: Transport>(client: &ApiClient<T>) -> FilterOptions {
    match client.filter_options().await {
        Ok(options) => options,
        Err(e) => {
            warn!("Failed to load filter options: {}", e);
            FilterOptions::default()
        }
    }
}

/// City options for a county scope; a failed fetch yields an empty list.
pub async fn cities_for<T: Transport>(client: &ApiClient<T>, scope: &CityScope) -> Vec<String> {
    match client.cities(scope.county.as_deref()).await {
        Ok(cities) => cities,
        Err(e) => {
            warn!("Failed to load cities for {:?}: {}", scope.county, e);
            Vec::new()
        }
    }
}

/// Options containing `needle`, case-insensitively. A blank needle keeps all.
pub fn matching_options<'a>(options: &'a [String], needle: &str) -> Vec<&'a str> {
    let needle = needle.to_lowercase();
    options
        .iter()
        .filter(|option| option.to_lowercase().contains(&needle))
        .map(String::as_str)
        .collect()
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn parse_rating(value: &str) -> Option<u8> {
    value
        .trim()
        .parse::<u8>()
        .ok()
        .filter(|rating| RATING_OPTIONS.contains(rating))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wsd_api::transport::StaticTransport;

    const BASE: &str = "http://api.test/api/v1";

    #[test]
    fn selecting_county_clears_city_and_scopes_cities() {
        let mut state = FilterState::new();
        state.select_county("King");
        state.set_city("Seattle");
        assert_eq!(state.filters.city.as_deref(), Some("Seattle"));

        let scope = state.select_county("Pierce");
        assert_eq!(state.filters.city, None);
        assert_eq!(scope.county.as_deref(), Some("Pierce"));
    }

    #[test]
    fn clearing_county_asks_for_unscoped_cities() {
        let mut state = FilterState::new();
        state.select_county("King");
        let scope = state.select_county("");
        assert_eq!(state.filters.county, None);
        assert_eq!(scope, CityScope { county: None });
    }

    #[test]
    fn stale_city_answer_is_ignored() {
        let mut state = FilterState::new();
        let king = state.select_county("King");
        let pierce = state.select_county("Pierce");

        assert!(!state.apply_cities(&king, vec!["Seattle".into()]));
        assert!(state.options.cities.is_empty());

        assert!(state.apply_cities(&pierce, vec!["Tacoma".into()]));
        assert_eq!(state.options.cities, vec!["Tacoma".to_string()]);
    }

    #[test]
    fn late_initial_options_keep_scoped_cities() {
        let mut state = FilterState::new();
        let scope = state.select_county("Whatcom");
        state.apply_cities(&scope, vec!["Bellingham".into()]);
        state.apply_options(FilterOptions {
            fields: vec!["outdoors".into()],
            counties: vec!["King".into(), "Whatcom".into()],
            cities: vec!["Bellingham".into(), "Seattle".into()],
        });
        assert_eq!(state.options.cities, vec!["Bellingham".to_string()]);
        assert_eq!(state.options.counties.len(), 2);
    }

    #[test]
    fn blank_values_mean_unconstrained() {
        let mut state = FilterState::new();
        state.set_field("food_dining");
        state.set_search("   ");
        state.set_min_rating("");
        state.set_max_rating("9");
        assert_eq!(state.filters.field.as_deref(), Some("food_dining"));
        assert_eq!(state.filters.search, None);
        assert_eq!(state.filters.min_rating, None);
        assert_eq!(state.filters.max_rating, None);
        assert_eq!(
            state.filters.query_pairs(),
            vec![("field", "food_dining".to_string())]
        );

        state.set_field("");
        assert!(state.filters.query_pairs().is_empty());
    }

    #[test]
    fn ratings_parse_within_range() {
        let mut state = FilterState::new();
        state.set_min_rating("3");
        state.set_max_rating("5");
        assert_eq!(state.filters.min_rating, Some(3));
        assert_eq!(state.filters.max_rating, Some(5));
        state.set_min_rating("0");
        assert_eq!(state.filters.min_rating, None);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let options = vec!["King".to_string(), "Kittitas".to_string(), "Pierce".to_string()];
        assert_eq!(matching_options(&options, "ki"), vec!["King", "Kittitas"]);
        assert_eq!(matching_options(&options, ""), vec!["King", "Kittitas", "Pierce"]);
        assert!(matching_options(&options, "zzz").is_empty());
    }

    #[tokio::test]
    async fn cities_for_hits_scoped_endpoint() {
        let transport = StaticTransport::new().with(
            "http://api.test/api/v1/filters/cities?county=King",
            r#"["Bellevue","Seattle"]"#,
        );
        let client = ApiClient::with_transport(BASE, transport);
        let mut state = FilterState::new();
        let scope = state.select_county("King");

        let cities = cities_for(&client, &scope).await;
        assert!(state.apply_cities(&scope, cities));
        assert_eq!(state.options.cities, vec!["Bellevue".to_string(), "Seattle".to_string()]);
        assert_eq!(
            client.transport().requested(),
            vec!["http://api.test/api/v1/filters/cities?county=King".to_string()]
        );
    }

    #[tokio::test]
    async fn failed_option_loads_degrade_to_empty() {
        let client = ApiClient::with_transport(BASE, StaticTransport::new());
        assert_eq!(load_options(&client).await, FilterOptions::default());
        assert!(cities_for(&client, &CityScope::default()).await.is_empty());
    }
}
