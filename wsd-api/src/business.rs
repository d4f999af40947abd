use serde::{Deserialize, Serialize};

use crate::lenient::present;

/// A point of interest as returned by `/businesses` and `/businesses/{id}`.
///
/// List responses carry the card fields only; the detail endpoint adds
/// `description`, `hours`, `url` and the closure flag. Both decode into this
/// type and the missing fields stay `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Business {
    pub business_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub original_category: Option<String>,
    #[serde(default)]
    pub new_category: Option<String>,
    #[serde(default)]
    pub avg_rating: Option<f64>,
    #[serde(default)]
    pub num_of_reviews: u64,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub county: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// JSON-encoded weekday → time range mapping.
    #[serde(default)]
    pub hours: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub is_permanently_closed: bool,
}

impl Business {
    /// A record with only an id; everything else missing.
    pub fn with_id(business_id: impl Into<String>) -> Self {
        Self {
            business_id: business_id.into(),
            name: None,
            original_category: None,
            new_category: None,
            avg_rating: None,
            num_of_reviews: 0,
            address: None,
            latitude: None,
            longitude: None,
            city: None,
            county: None,
            description: None,
            hours: None,
            url: None,
            is_permanently_closed: false,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn address(&self) -> Option<&str> {
        present(self.address.as_deref())
    }

    pub fn city(&self) -> Option<&str> {
        present(self.city.as_deref())
    }

    pub fn county(&self) -> Option<&str> {
        present(self.county.as_deref())
    }

    pub fn description(&self) -> Option<&str> {
        present(self.description.as_deref())
    }

    pub fn hours(&self) -> Option<&str> {
        present(self.hours.as_deref())
    }

    pub fn url(&self) -> Option<&str> {
        present(self.url.as_deref())
    }

    pub fn category(&self) -> Option<&str> {
        present(self.original_category.as_deref())
    }

    /// Latitude/longitude when both are set. A zero coordinate counts as
    /// missing; upstream uses 0 as a placeholder for unknown positions.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) if lat != 0.0 && lon != 0.0 => Some((lat, lon)),
            _ => None,
        }
    }
}
