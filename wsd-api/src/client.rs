//! Typed access to every REST endpoint the explorer consumes.

use log::debug;
use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::business::Business;
use crate::config::{build_http_client, ApiConfig};
use crate::error::ApiError;
use crate::filters::{BusinessQuery, FilterOptions, ReviewQuery};
use crate::page::Page;
use crate::review::{Review, ReviewSummary};
use crate::stats::{MonthlyStat, StatsSeries, StatsTotal, YearlyStat};
use crate::transport::{HttpTransport, Transport};

/// Client for the destinations API.
///
/// Each method is one GET; nothing is cached and nothing is retried.
#[derive(Debug, Clone)]
pub struct ApiClient<T = HttpTransport> {
    base: String,
    transport: T,
}

impl ApiClient<HttpTransport> {
    /// Client talking to `config.api_base` over reqwest.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let transport = HttpTransport::new(build_http_client()?);
        Ok(Self::with_transport(&config.api_base, transport))
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn with_transport(base: &str, transport: T) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
            transport,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// `GET /businesses`
    pub async fn businesses(&self, query: &BusinessQuery) -> Result<Page<Business>, ApiError> {
        self.fetch(&["businesses"], &query.query_pairs()).await
    }

    /// `GET /businesses/{id}`
    pub async fn business(&self, business_id: &str) -> Result<Business, ApiError> {
        self.fetch(&["businesses", business_id], &[]).await
    }

    /// `GET /businesses/{id}/reviews`
    pub async fn reviews(
        &self,
        business_id: &str,
        query: &ReviewQuery,
    ) -> Result<Page<Review>, ApiError> {
        self.fetch(&["businesses", business_id, "reviews"], &query.query_pairs())
            .await
    }

    /// `GET /businesses/{id}/reviews/summary`
    pub async fn review_summary(&self, business_id: &str) -> Result<ReviewSummary, ApiError> {
        self.fetch(&["businesses", business_id, "reviews", "summary"], &[])
            .await
    }

    /// `GET /businesses/{id}/stats/total`
    pub async fn stats_total(&self, business_id: &str) -> Result<StatsTotal, ApiError> {
        self.fetch(&["businesses", business_id, "stats", "total"], &[])
            .await
    }

    /// `GET /businesses/{id}/stats/yearly`
    pub async fn stats_yearly(&self, business_id: &str) -> Result<Vec<YearlyStat>, ApiError> {
        let series: StatsSeries<YearlyStat> = self
            .fetch(&["businesses", business_id, "stats", "yearly"], &[])
            .await?;
        Ok(series.data)
    }

    /// `GET /businesses/{id}/stats/monthly`
    pub async fn stats_monthly(&self, business_id: &str) -> Result<Vec<MonthlyStat>, ApiError> {
        let series: StatsSeries<MonthlyStat> = self
            .fetch(&["businesses", business_id, "stats", "monthly"], &[])
            .await?;
        Ok(series.data)
    }

    /// `GET /filters/options`
    pub async fn filter_options(&self) -> Result<FilterOptions, ApiError> {
        self.fetch(&["filters", "options"], &[]).await
    }

    /// `GET /filters/cities`, scoped to `county` when given.
    pub async fn cities(&self, county: Option<&str>) -> Result<Vec<String>, ApiError> {
        let params: Vec<(&str, String)> = county
            .map(|c| vec![("county", c.to_string())])
            .unwrap_or_default();
        self.fetch(&["filters", "cities"], &params).await
    }

    /// Full URL for `segments` under the base, with form-encoded `params`.
    pub fn url(&self, segments: &[&str], params: &[(&str, String)]) -> Result<Url, ApiError> {
        endpoint_url(&self.base, segments, params)
    }

    async fn fetch<R: DeserializeOwned>(
        &self,
        segments: &[&str],
        params: &[(&str, String)],
    ) -> Result<R, ApiError> {
        let url = self.url(segments, params)?;
        debug!("GET {}", url);
        let body = self.transport.get(&url).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Append path segments (percent-encoded) and query pairs to `base`.
pub(crate) fn endpoint_url(
    base: &str,
    segments: &[&str],
    params: &[(&str, String)],
) -> Result<Url, ApiError> {
    let mut url = Url::parse(base).map_err(|e| ApiError::Url(format!("{}: {}", base, e)))?;
    url.path_segments_mut()
        .map_err(|_| ApiError::Url(format!("{} cannot be a base", base)))?
        .pop_if_empty()
        .extend(segments);
    if !params.is_empty() {
        url.query_pairs_mut()
            .extend_pairs(params.iter().map(|(k, v)| (*k, v.as_str())));
    }
    Ok(url)
}
