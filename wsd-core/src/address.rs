//! Display address for a business record.
//!
//! Precedence, first match wins:
//! 1. the record's own `address`
//! 2. a reverse geocode of its coordinates, if the service names the place
//! 3. `"City, County"` from whichever of the two are present
//! 4. [`NO_ADDRESS`]
//!
//! Geocoder failures are logged and fall through; resolution never fails.

use log::{debug, warn};
use wsd_api::business::Business;
use wsd_api::error::ApiError;
use wsd_api::geocode::ReverseGeocoder;
use wsd_api::transport::Transport;

pub const NO_ADDRESS: &str = "No address available";

/// Reverse geocoding seam.
#[allow(async_fn_in_trait)]
pub trait Geocode {
    async fn reverse(&self, latitude: f64, longitude: f64) -> Result<Option<String>, ApiError>;
}

impl<T: Transport> Geocode for ReverseGeocoder<T> {
    async fn reverse(&self, latitude: f64, longitude: f64) -> Result<Option<String>, ApiError> {
        ReverseGeocoder::<T>::reverse(self, latitude, longitude).await
    }
}

/// Resolves display addresses, consulting `G` only when a record has none.
#[derive(Debug, Clone)]
pub struct AddressResolver<G> {
    geocoder: G,
}

impl<G: Geocode> AddressResolver<G> {
    pub fn new(geocoder: G) -> Self {
        Self { geocoder }
    }

    pub fn geocoder(&self) -> &G {
        &self.geocoder
    }

    pub async fn resolve(&self, business: &Business) -> String {
        if let Some(address) = business.address() {
            return address.to_string();
        }

        if let Some((lat, lon)) = business.coordinates() {
            match self.geocoder.reverse(lat, lon).await {
                Ok(Some(name)) if !name.is_empty() => return name,
                Ok(_) => debug!("No geocoded name for {} at {},{}", business.business_id, lat, lon),
                Err(e) => warn!("Reverse geocode failed for {}: {}", business.business_id, e),
            }
        }

        fallback_address(business.city(), business.county())
            .unwrap_or_else(|| NO_ADDRESS.to_string())
    }
}

/// `"City, County"` from the parts that are present, `None` if neither is.
pub fn fallback_address(city: Option<&str>, county: Option<&str>) -> Option<String> {
    let parts: Vec<&str> = [city, county].into_iter().flatten().collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use wsd_api::transport::StaticTransport;

    /// Geocoder double returning a fixed answer and counting calls.
    struct FixedGeocoder {
        answer: Result<Option<String>, u16>,
        calls: Cell<usize>,
    }

    impl FixedGeocoder {
        fn answering(answer: Result<Option<&str>, u16>) -> Self {
            Self {
                answer: answer.map(|name| name.map(String::from)),
                calls: Cell::new(0),
            }
        }
    }

    impl Geocode for FixedGeocoder {
        async fn reverse(&self, _lat: f64, _lon: f64) -> Result<Option<String>, ApiError> {
            self.calls.set(self.calls.get() + 1);
            self.answer.clone().map_err(ApiError::Status)
        }
    }

    fn located(address: Option<&str>) -> Business {
        Business {
            address: address.map(String::from),
            latitude: Some(47.6062),
            longitude: Some(-122.3321),
            city: Some("Seattle".into()),
            county: Some("King".into()),
            ..Business::with_id("b1")
        }
    }

    #[tokio::test]
    async fn explicit_address_wins_without_geocoding() {
        let resolver = AddressResolver::new(FixedGeocoder::answering(Ok(Some("elsewhere"))));
        let address = resolver.resolve(&located(Some("1912 Pike Pl, Seattle"))).await;
        assert_eq!(address, "1912 Pike Pl, Seattle");
        assert_eq!(resolver.geocoder().calls.get(), 0);
    }

    #[tokio::test]
    async fn null_string_address_is_geocoded() {
        let resolver = AddressResolver::new(FixedGeocoder::answering(Ok(Some("Pioneer Square"))));
        let address = resolver.resolve(&located(Some("null"))).await;
        assert_eq!(address, "Pioneer Square");
        assert_eq!(resolver.geocoder().calls.get(), 1);
    }

    #[tokio::test]
    async fn geocoder_failure_falls_back_to_city_county() {
        let resolver = AddressResolver::new(FixedGeocoder::answering(Err(503)));
        assert_eq!(resolver.resolve(&located(None)).await, "Seattle, King");
    }

    #[tokio::test]
    async fn geocoder_without_name_falls_back_to_city_county() {
        let resolver = AddressResolver::new(FixedGeocoder::answering(Ok(None)));
        assert_eq!(resolver.resolve(&located(None)).await, "Seattle, King");
    }

    #[tokio::test]
    async fn no_coordinates_uses_city_county_scenario() {
        let resolver = AddressResolver::new(FixedGeocoder::answering(Ok(Some("unused"))));
        let business = Business {
            address: None,
            city: Some("Seattle".into()),
            county: Some("King".into()),
            latitude: None,
            ..Business::with_id("b2")
        };
        assert_eq!(resolver.resolve(&business).await, "Seattle, King");
        assert_eq!(resolver.geocoder().calls.get(), 0);
    }

    #[tokio::test]
    async fn nothing_known_yields_sentinel() {
        let resolver = AddressResolver::new(FixedGeocoder::answering(Ok(None)));
        let business = Business {
            city: Some("null".into()),
            ..Business::with_id("b3")
        };
        assert_eq!(resolver.resolve(&business).await, NO_ADDRESS);
    }

    #[tokio::test]
    async fn malformed_geocoder_body_falls_through() {
        let transport = StaticTransport::new().with(
            "https://geo.test/reverse?lat=47.6062&lon=-122.3321&format=json",
            "<html>rate limited</html>",
        );
        let resolver = AddressResolver::new(ReverseGeocoder::with_transport("https://geo.test", transport));
        assert_eq!(resolver.resolve(&located(None)).await, "Seattle, King");
        assert_eq!(resolver.geocoder().transport().requested().len(), 1);
    }

    #[test]
    fn fallback_joins_present_parts() {
        assert_eq!(fallback_address(Some("Spokane"), None).as_deref(), Some("Spokane"));
        assert_eq!(fallback_address(None, Some("Pierce")).as_deref(), Some("Pierce"));
        assert_eq!(fallback_address(None, None), None);
    }
}
