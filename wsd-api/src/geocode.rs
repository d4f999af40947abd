//! Nominatim / OpenStreetMap reverse geocoding.
//!
//! Only the `display_name` of `/reverse?lat&lon&format=json` is used. The
//! public instance allows roughly one request per second; the explorer issues
//! at most one lookup per rendered card, and only for records lacking an
//! address.
//!
//! See <https://nominatim.org/release-docs/develop/api/Reverse/>

use log::debug;
use serde::Deserialize;

use crate::client::endpoint_url;
use crate::config::{build_http_client, ApiConfig};
use crate::error::ApiError;
use crate::transport::{HttpTransport, Transport};

#[derive(Debug, Deserialize)]
struct ReverseResponse {
    #[serde(default)]
    display_name: Option<String>,
}

/// Reverse geocoder client.
#[derive(Debug, Clone)]
pub struct ReverseGeocoder<T = HttpTransport> {
    base: String,
    transport: T,
}

impl ReverseGeocoder<HttpTransport> {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let transport = HttpTransport::new(build_http_client()?);
        Ok(Self::with_transport(&config.geocoder_base, transport))
    }
}

impl<T: Transport> ReverseGeocoder<T> {
    pub fn with_transport(base: &str, transport: T) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
            transport,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Display name for a coordinate pair, `None` when the service has no
    /// usable name for it.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the body is not JSON.
    pub async fn reverse(&self, latitude: f64, longitude: f64) -> Result<Option<String>, ApiError> {
        let url = endpoint_url(
            &self.base,
            &["reverse"],
            &[
                ("lat", latitude.to_string()),
                ("lon", longitude.to_string()),
                ("format", "json".to_string()),
            ],
        )?;
        debug!("GET {}", url);
        let body = self.transport.get(&url).await?;
        parse_reverse(&body)
    }
}

/// Parses a Nominatim reverse response. Error payloads such as
/// `{"error": "Unable to geocode"}` carry no display name and yield `None`.
fn parse_reverse(body: &str) -> Result<Option<String>, ApiError> {
    let response: ReverseResponse = serde_json::from_str(body)?;
    Ok(response
        .display_name
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::StaticTransport;

    #[test]
    fn parses_display_name() {
        let body = r#"{"place_id":1,"lat":"47.62","lon":"-122.35","display_name":"Space Needle, 400, Broad Street, Seattle, King County, Washington, 98109, United States"}"#;
        assert_eq!(
            parse_reverse(body).unwrap().as_deref(),
            Some("Space Needle, 400, Broad Street, Seattle, King County, Washington, 98109, United States")
        );
    }

    #[test]
    fn error_payload_and_blank_name_are_none() {
        assert_eq!(parse_reverse(r#"{"error":"Unable to geocode"}"#).unwrap(), None);
        assert_eq!(parse_reverse(r#"{"display_name":"  "}"#).unwrap(), None);
    }

    #[test]
    fn non_json_is_an_error() {
        assert!(parse_reverse("Bandwidth limit exceeded").is_err());
    }

    #[tokio::test]
    async fn reverse_builds_nominatim_query() {
        let transport = StaticTransport::new().with(
            "https://geo.test/reverse?lat=47.6205&lon=-122.3493&format=json",
            r#"{"display_name":"Seattle Center"}"#,
        );
        let geocoder = ReverseGeocoder::with_transport("https://geo.test", transport);
        let name = geocoder.reverse(47.6205, -122.3493).await.unwrap();
        assert_eq!(name.as_deref(), Some("Seattle Center"));
    }
}
