//! Authenticated client for the live upstream provider.
//!
//! Every call obtains a bearer token from the credential issuer
//! immediately before dispatch. There is no retry policy: a failed call
//! propagates to the caller as-is.

use std::sync::Arc;
use std::time::Duration;

use chrono::{Local, NaiveDate};
use reqwest::{header, Client};
use serde::de::DeserializeOwned;
use url::Url;

use nimbus_auth::CredentialIssuer;

use crate::types::{
    AirResponse, CityResponse, DailyResponse, HourlyResponse, NowResponse, ProviderError,
    SunResponse, UvResponse,
};

const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Live upstream API client.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: Arc<Client>,
    api_host: String,
    issuer: Arc<CredentialIssuer>,
}

impl UpstreamClient {
    /// # Errors
    ///
    /// Fails if the underlying HTTP client cannot be constructed.
    pub fn new(api_host: String, issuer: Arc<CredentialIssuer>) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client: Arc::new(client),
            api_host,
            issuer,
        })
    }

    /// Base URL for the configured host. Hosts are plain hostnames in
    /// production config; an explicit scheme is honored so tests can point
    /// at a local server.
    fn base_url(&self) -> Result<Url, ProviderError> {
        let base = if self.api_host.starts_with("http://") || self.api_host.starts_with("https://")
        {
            self.api_host.clone()
        } else {
            format!("https://{}", self.api_host)
        };
        Ok(Url::parse(&base)?)
    }

    /// Authenticated GET returning the parsed JSON body.
    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ProviderError> {
        let token = self.issuer.token()?;
        let url = self.base_url()?.join(path)?;

        tracing::debug!(%url, "upstream request");

        let response = self
            .client
            .get(url)
            .query(query)
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }

    /// Free-text city search.
    pub async fn city_lookup(&self, keyword: &str) -> Result<CityResponse, ProviderError> {
        self.get("/geo/v2/city/lookup", &[("location", keyword), ("range", "cn")])
            .await
    }

    /// Top-ranked cities, most prominent first.
    pub async fn top_cities(&self, number: u32) -> Result<CityResponse, ProviderError> {
        let number = number.to_string();
        self.get("/geo/v2/city/top", &[("range", "cn"), ("number", &number)])
            .await
    }

    /// Reverse geocode by coordinates.
    pub async fn city_by_coords(&self, lon: f64, lat: f64) -> Result<CityResponse, ProviderError> {
        let location = format!("{},{}", lon, lat);
        self.get("/geo/v2/city/lookup", &[("location", &location), ("range", "cn")])
            .await
    }

    /// Current conditions for a location id.
    pub async fn weather_now(&self, location_id: &str) -> Result<NowResponse, ProviderError> {
        self.get("/v7/weather/now", &[("location", location_id)]).await
    }

    /// 24-hour hourly forecast.
    pub async fn hourly_24h(&self, location_id: &str) -> Result<HourlyResponse, ProviderError> {
        self.get("/v7/weather/24h", &[("location", location_id)]).await
    }

    /// 168-hour (7-day) hourly forecast.
    pub async fn hourly_168h(&self, location_id: &str) -> Result<HourlyResponse, ProviderError> {
        self.get("/v7/weather/168h", &[("location", location_id)]).await
    }

    /// 7-day daily forecast.
    pub async fn daily_7d(&self, location_id: &str) -> Result<DailyResponse, ProviderError> {
        self.get("/v7/weather/7d", &[("location", location_id)]).await
    }

    /// UV index forecast; the upstream returns 3 days.
    pub async fn uv_index(&self, location_id: &str) -> Result<UvResponse, ProviderError> {
        self.get("/v7/indices/3d", &[("type", "5"), ("location", location_id)])
            .await
    }

    /// Sunrise/sunset for a location and date (defaults to today).
    pub async fn sun_times(
        &self,
        location_id: &str,
        date: Option<NaiveDate>,
    ) -> Result<SunResponse, ProviderError> {
        let date = date.unwrap_or_else(|| Local::now().date_naive());
        let date = date.format("%Y%m%d").to_string();
        self.get(
            "/v7/astronomy/sun",
            &[("location", location_id), ("date", &date)],
        )
        .await
    }

    /// Current air quality by coordinates (coordinate-based, unlike the
    /// location-id categories).
    pub async fn air_quality(&self, lat: f64, lon: f64) -> Result<AirResponse, ProviderError> {
        let path = format!("/airquality/v1/current/{}/{}", lat, lon);
        self.get(&path, &[]).await
    }
}
