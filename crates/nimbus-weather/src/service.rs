//! Dual-mode data-provider facade.
//!
//! One accessor per data category. For every call the facade decides
//! between the live upstream and the synthetic generator, validates
//! parameters before any network or generation work, and applies
//! windowing for single-day views.

use std::sync::Arc;

use chrono::NaiveDate;

use nimbus_auth::CredentialIssuer;
use nimbus_core::ProviderConfig;

use crate::mock;
use crate::types::{
    AirResponse, CityResponse, DailyResponse, HourlyResponse, NowResponse, ProviderError,
    SunResponse, UvDayResponse, UvResponse,
};
use crate::upstream::UpstreamClient;
use crate::window;

/// Operating mode, resolved fresh on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Proxy the authenticated upstream provider.
    Live,
    /// Synthesize data locally.
    Mock,
}

/// Facade over the live upstream client and the synthetic generator.
#[derive(Debug, Clone)]
pub struct WeatherService {
    config: Arc<ProviderConfig>,
    upstream: UpstreamClient,
}

impl WeatherService {
    /// # Errors
    ///
    /// Fails if the HTTP client cannot be constructed.
    pub fn new(config: Arc<ProviderConfig>) -> Result<Self, ProviderError> {
        let issuer = Arc::new(CredentialIssuer::new(&config));
        let upstream = UpstreamClient::new(config.api_host.clone(), issuer)?;
        Ok(Self { config, upstream })
    }

    /// Resolve the operating mode from current configuration: mock when
    /// forced or when any credential field is missing.
    pub fn mode(&self) -> Mode {
        if self.config.force_mock || !self.config.has_credentials() {
            Mode::Mock
        } else {
            Mode::Live
        }
    }

    /// Free-text city search.
    pub async fn search_city(&self, keyword: &str) -> Result<CityResponse, ProviderError> {
        let keyword = non_empty(keyword, "keyword")?;
        match self.mode() {
            Mode::Mock => Ok(mock::city::search(keyword)),
            Mode::Live => self.upstream.city_lookup(keyword).await,
        }
    }

    /// Top-ranked cities; `number` defaults to 10, capped upstream at 20.
    pub async fn top_cities(&self, number: Option<u32>) -> Result<CityResponse, ProviderError> {
        let number = number.unwrap_or(10);
        if !(1..=20).contains(&number) {
            return Err(ProviderError::InvalidParameter(format!(
                "number must be in [1, 20], got {}",
                number
            )));
        }
        match self.mode() {
            Mode::Mock => Ok(mock::city::top(number as usize)),
            Mode::Live => self.upstream.top_cities(number).await,
        }
    }

    /// Reverse geocode by coordinates.
    pub async fn city_by_coords(&self, lon: f64, lat: f64) -> Result<CityResponse, ProviderError> {
        check_coords(lon, lat)?;
        match self.mode() {
            Mode::Mock => Ok(mock::city::by_coords(lon, lat)),
            Mode::Live => self.upstream.city_by_coords(lon, lat).await,
        }
    }

    /// Current conditions.
    pub async fn current_weather(&self, location_id: &str) -> Result<NowResponse, ProviderError> {
        let location_id = non_empty(location_id, "locationId")?;
        match self.mode() {
            Mode::Mock => Ok(mock::weather::current()),
            Mode::Live => self.upstream.weather_now(location_id).await,
        }
    }

    /// 24-hour hourly forecast.
    pub async fn hourly(&self, location_id: &str) -> Result<HourlyResponse, ProviderError> {
        let location_id = non_empty(location_id, "locationId")?;
        match self.mode() {
            Mode::Mock => Ok(mock::weather::hourly(24)),
            Mode::Live => self.upstream.hourly_24h(location_id).await,
        }
    }

    /// Full 168-hour hourly forecast.
    pub async fn hourly_week(&self, location_id: &str) -> Result<HourlyResponse, ProviderError> {
        let location_id = non_empty(location_id, "locationId")?;
        match self.mode() {
            Mode::Mock => Ok(mock::weather::hourly(168)),
            Mode::Live => self.upstream.hourly_168h(location_id).await,
        }
    }

    /// One day of the 168-hour forecast, `day` in `[0, 6]`.
    pub async fn hourly_week_day(
        &self,
        location_id: &str,
        day: usize,
    ) -> Result<HourlyResponse, ProviderError> {
        if day > 6 {
            return Err(ProviderError::InvalidParameter(format!(
                "day must be in [0, 6], got {}",
                day
            )));
        }

        let full = self.hourly_week(location_id).await?;
        let hourly = window::hourly_day_slice(&full.hourly, day)
            .unwrap_or_default()
            .to_vec();
        Ok(HourlyResponse { hourly, ..full })
    }

    /// 7-day daily forecast.
    pub async fn daily_forecast(&self, location_id: &str) -> Result<DailyResponse, ProviderError> {
        let location_id = non_empty(location_id, "locationId")?;
        match self.mode() {
            Mode::Mock => Ok(mock::weather::daily_7d()),
            Mode::Live => self.upstream.daily_7d(location_id).await,
        }
    }

    /// Full 3-day UV index forecast.
    pub async fn uv_index(&self, location_id: &str) -> Result<UvResponse, ProviderError> {
        let location_id = non_empty(location_id, "locationId")?;
        match self.mode() {
            Mode::Mock => Ok(mock::indices::uv_index()),
            Mode::Live => self.upstream.uv_index(location_id).await,
        }
    }

    /// Single-day UV view. Day indices beyond the upstream's 3-day horizon
    /// come back with `available: false`, not an error.
    pub async fn uv_index_day(
        &self,
        location_id: &str,
        day: usize,
    ) -> Result<UvDayResponse, ProviderError> {
        let full = self.uv_index(location_id).await?;
        Ok(window::uv_day(&full, day))
    }

    /// Sunrise/sunset for a date (defaults to the current date).
    pub async fn sun_times(
        &self,
        location_id: &str,
        date: Option<NaiveDate>,
    ) -> Result<SunResponse, ProviderError> {
        let location_id = non_empty(location_id, "locationId")?;
        match self.mode() {
            Mode::Mock => Ok(mock::weather::sun_times(date)),
            Mode::Live => self.upstream.sun_times(location_id, date).await,
        }
    }

    /// Current air quality by coordinates.
    pub async fn air_quality(&self, lat: f64, lon: f64) -> Result<AirResponse, ProviderError> {
        check_coords(lon, lat)?;
        match self.mode() {
            Mode::Mock => Ok(mock::air::air_quality()),
            Mode::Live => self.upstream.air_quality(lat, lon).await,
        }
    }
}

fn non_empty<'a>(value: &'a str, name: &str) -> Result<&'a str, ProviderError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ProviderError::InvalidParameter(format!(
            "{} must not be empty",
            name
        )));
    }
    Ok(trimmed)
}

fn check_coords(lon: f64, lat: f64) -> Result<(), ProviderError> {
    if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
        return Err(ProviderError::InvalidParameter(format!(
            "lon out of range: {}",
            lon
        )));
    }
    if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
        return Err(ProviderError::InvalidParameter(format!(
            "lat out of range: {}",
            lat
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Local};

    fn mock_service() -> WeatherService {
        let config = ProviderConfig {
            force_mock: true,
            ..ProviderConfig::default()
        };
        WeatherService::new(Arc::new(config)).unwrap()
    }

    fn complete_config() -> ProviderConfig {
        ProviderConfig {
            project_id: "proj".into(),
            key_id: "kid".into(),
            private_key: "pem".into(),
            api_host: "api.example.com".into(),
            force_mock: false,
        }
    }

    #[test]
    fn test_mode_live_with_complete_credentials() {
        let service = WeatherService::new(Arc::new(complete_config())).unwrap();
        assert_eq!(service.mode(), Mode::Live);
    }

    #[test]
    fn test_mode_mock_when_forced() {
        let mut config = complete_config();
        config.force_mock = true;
        let service = WeatherService::new(Arc::new(config)).unwrap();
        assert_eq!(service.mode(), Mode::Mock);
    }

    #[test]
    fn test_mode_mock_when_any_credential_missing() {
        for field in 0..4 {
            let mut config = complete_config();
            match field {
                0 => config.project_id.clear(),
                1 => config.key_id.clear(),
                2 => config.private_key.clear(),
                _ => config.api_host.clear(),
            }
            let service = WeatherService::new(Arc::new(config)).unwrap();
            assert_eq!(service.mode(), Mode::Mock, "field {} empty", field);
        }
    }

    #[tokio::test]
    async fn test_empty_keyword_rejected_before_dispatch() {
        let service = mock_service();
        let err = service.search_city("  ").await.unwrap_err();
        assert!(err.is_client_error());
    }

    #[tokio::test]
    async fn test_empty_location_id_rejected() {
        let service = mock_service();
        let err = service.current_weather("").await.unwrap_err();
        assert!(err.is_client_error());
    }

    #[tokio::test]
    async fn test_out_of_range_coordinates_rejected() {
        let service = mock_service();
        assert!(service.air_quality(91.0, 0.0).await.is_err());
        assert!(service.air_quality(0.0, 181.0).await.is_err());
        assert!(service.city_by_coords(f64::NAN, 0.0).await.is_err());
    }

    #[tokio::test]
    async fn test_mock_daily_forecast_is_seven_days_from_today() {
        let service = mock_service();
        let resp = service.daily_forecast("101010100").await.unwrap();
        assert_eq!(resp.daily.len(), 7);

        let today = Local::now().date_naive();
        for (i, entry) in resp.daily.iter().enumerate() {
            let expected = (today + Duration::days(i as i64)).format("%Y-%m-%d").to_string();
            assert_eq!(entry.fx_date, expected);
        }
    }

    #[tokio::test]
    async fn test_mock_uv_without_day_has_three_entries() {
        let service = mock_service();
        let resp = service.uv_index("101010100").await.unwrap();
        assert_eq!(resp.daily.len(), 3);
    }

    #[tokio::test]
    async fn test_uv_day_availability_flag() {
        let service = mock_service();
        for day in 0..3 {
            let resp = service.uv_index_day("101010100", day).await.unwrap();
            assert!(resp.available);
            assert_eq!(resp.daily.len(), 1);
        }
        let resp = service.uv_index_day("101010100", 3).await.unwrap();
        assert!(!resp.available);
        assert!(resp.daily.is_empty());
    }

    #[tokio::test]
    async fn test_hourly_week_day_is_one_day() {
        let service = mock_service();
        let resp = service.hourly_week_day("101010100", 3).await.unwrap();
        assert_eq!(resp.hourly.len(), 24);
        // One condition dominates the whole returned day.
        let icon = &resp.hourly[0].icon;
        assert!(resp.hourly.iter().all(|e| &e.icon == icon));
    }

    #[tokio::test]
    async fn test_hourly_week_day_out_of_range_rejected() {
        let service = mock_service();
        let err = service.hourly_week_day("101010100", 7).await.unwrap_err();
        assert!(err.is_client_error());
    }

    #[tokio::test]
    async fn test_top_cities_number_validated() {
        let service = mock_service();
        assert_eq!(service.top_cities(None).await.unwrap().location.len(), 5);
        assert!(service.top_cities(Some(0)).await.is_err());
        assert!(service.top_cities(Some(21)).await.is_err());
    }

    #[tokio::test]
    async fn test_mock_hourly_horizons() {
        let service = mock_service();
        assert_eq!(service.hourly("x").await.unwrap().hourly.len(), 24);
        assert_eq!(service.hourly_week("x").await.unwrap().hourly.len(), 168);
    }
}
