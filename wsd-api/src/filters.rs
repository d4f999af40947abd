//! Query parameters and option lists for `/businesses` and `/filters/*`.

use serde::{Deserialize, Serialize};

/// Star ratings accepted by the `min_rating`, `max_rating` and `rating` parameters.
pub const RATING_OPTIONS: [u8; 5] = [1, 2, 3, 4, 5];

/// The six optional business-list constraints. `None` means unconstrained.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Filters {
    /// Category group, e.g. `food_dining`.
    pub field: Option<String>,
    pub county: Option<String>,
    pub city: Option<String>,
    pub min_rating: Option<u8>,
    pub max_rating: Option<u8>,
    /// Free-text name search.
    pub search: Option<String>,
}

impl Filters {
    /// Query pairs for the present constraints only; unset dimensions are
    /// omitted rather than sent as empty parameters.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(field) = &self.field {
            pairs.push(("field", field.clone()));
        }
        if let Some(county) = &self.county {
            pairs.push(("county", county.clone()));
        }
        if let Some(city) = &self.city {
            pairs.push(("city", city.clone()));
        }
        if let Some(min) = self.min_rating {
            pairs.push(("min_rating", min.to_string()));
        }
        if let Some(max) = self.max_rating {
            pairs.push(("max_rating", max.to_string()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        pairs
    }
}

/// Response of `/filters/options`.
///
/// The server also sends a fixed `ratings` list; [`RATING_OPTIONS`] is used
/// instead.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterOptions {
    #[serde(default)]
    pub fields: Vec<String>,
    #[serde(default)]
    pub counties: Vec<String>,
    #[serde(default)]
    pub cities: Vec<String>,
}

/// Parameters of one `/businesses` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessQuery {
    pub filters: Filters,
    pub page: u32,
    pub page_size: u32,
}

impl BusinessQuery {
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("page_size", self.page_size.to_string()),
        ];
        pairs.extend(self.filters.query_pairs());
        pairs
    }
}

/// Parameters of one `/businesses/{id}/reviews` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewQuery {
    pub page: u32,
    pub page_size: u32,
    pub rating: Option<u8>,
}

impl ReviewQuery {
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("page_size", self.page_size.to_string()),
        ];
        if let Some(rating) = self.rating {
            pairs.push(("rating", rating.to_string()));
        }
        pairs
    }
}
