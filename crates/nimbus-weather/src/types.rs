//! Response shapes for every data category, matching the upstream wire
//! format (camelCase keys, observation values as decimal-formatted
//! strings), plus the crate's error type.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Weather data access errors.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("credential error: {0}")]
    Credential(#[from] nimbus_auth::CredentialError),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("upstream error ({status}): {body}")]
    Upstream { status: u16, body: String },

    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

impl ProviderError {
    /// Whether the failure was caused by caller input rather than the
    /// provider side. The controller maps this to a 4xx status.
    pub fn is_client_error(&self) -> bool {
        matches!(self, ProviderError::InvalidParameter(_))
    }
}

/// A city record from the geo lookup API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityLocation {
    pub name: String,
    pub id: String,
    pub lat: String,
    pub lon: String,
    pub adm2: String,
    pub adm1: String,
    pub country: String,
    pub tz: String,
    pub utc_offset: String,
    pub is_dst: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub rank: String,
    pub fx_link: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityResponse {
    pub code: String,
    #[serde(default)]
    pub location: Vec<CityLocation>,
}

/// Instantaneous observation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherNow {
    pub obs_time: String,
    pub temp: String,
    pub feels_like: String,
    pub icon: String,
    pub text: String,
    pub wind360: String,
    pub wind_dir: String,
    pub wind_scale: String,
    pub wind_speed: String,
    pub humidity: String,
    pub precip: String,
    pub pressure: String,
    pub vis: String,
    pub cloud: String,
    pub dew: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NowResponse {
    pub code: String,
    pub update_time: String,
    pub now: WeatherNow,
}

/// One hour of forecast; like [`WeatherNow`] plus precipitation
/// probability.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlyEntry {
    pub fx_time: String,
    pub temp: String,
    pub icon: String,
    pub text: String,
    pub wind360: String,
    pub wind_dir: String,
    pub wind_scale: String,
    pub wind_speed: String,
    pub humidity: String,
    pub pop: String,
    pub precip: String,
    pub pressure: String,
    pub cloud: String,
    pub dew: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlyResponse {
    pub code: String,
    pub update_time: String,
    #[serde(default)]
    pub hourly: Vec<HourlyEntry>,
}

/// One day of forecast.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyEntry {
    pub fx_date: String,
    pub sunrise: String,
    pub sunset: String,
    pub temp_max: String,
    pub temp_min: String,
    pub icon_day: String,
    pub text_day: String,
    pub icon_night: String,
    pub text_night: String,
    pub wind360_day: String,
    pub wind_dir_day: String,
    pub wind_scale_day: String,
    pub wind_speed_day: String,
    pub humidity: String,
    pub precip: String,
    pub pressure: String,
    pub vis: String,
    pub cloud: String,
    pub uv_index: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyResponse {
    pub code: String,
    pub update_time: String,
    #[serde(default)]
    pub daily: Vec<DailyEntry>,
}

/// One day of the UV index forecast (upstream hard limit: 3 days).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UvEntry {
    pub date: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub level: String,
    pub category: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UvResponse {
    pub code: String,
    #[serde(default)]
    pub daily: Vec<UvEntry>,
}

/// Single-day UV view. `available` is false for day indices beyond the
/// upstream 3-day horizon; that case is signalled here, not as an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UvDayResponse {
    pub code: String,
    pub daily: Vec<UvEntry>,
    pub available: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SunResponse {
    pub code: String,
    pub sunrise: String,
    pub sunset: String,
}

/// RGBA color attached to an AQI index entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AqiColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PollutantRef {
    pub code: String,
    pub name: String,
    pub full_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthAdvice {
    pub general_population: String,
    pub sensitive_population: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthGuidance {
    pub effect: String,
    pub advice: HealthAdvice,
}

/// Overall air-quality index entry.
///
/// Invariant: `level`, `category` and `color` all derive from the single
/// canonical bucket covering `aqi`; they are never set independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AqiIndex {
    pub aqi: u32,
    pub aqi_display: String,
    pub level: String,
    pub category: String,
    pub code: String,
    pub name: String,
    pub color: AqiColor,
    pub primary_pollutant: PollutantRef,
    pub health: HealthGuidance,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Concentration {
    pub value: f64,
    pub unit: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubIndex {
    pub value: u32,
    pub value_display: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pollutant {
    pub code: String,
    pub name: String,
    pub full_name: String,
    pub concentration: Concentration,
    pub sub_index: SubIndex,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirResponse {
    pub code: String,
    pub update_time: String,
    pub indexes: Vec<AqiIndex>,
    pub pollutants: Vec<Pollutant>,
    pub sources: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_response_deserialization() {
        let json = r#"{
            "code": "200",
            "location": [{
                "name": "Beijing",
                "id": "101010100",
                "lat": "39.90499",
                "lon": "116.40529",
                "adm2": "Beijing",
                "adm1": "Beijing",
                "country": "China",
                "tz": "Asia/Shanghai",
                "utcOffset": "+08:00",
                "isDst": "0",
                "type": "city",
                "rank": "10",
                "fxLink": "https://example.com/beijing"
            }]
        }"#;
        let resp: CityResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.code, "200");
        assert_eq!(resp.location[0].id, "101010100");
        assert_eq!(resp.location[0].utc_offset, "+08:00");
    }

    #[test]
    fn test_now_response_round_trips_camel_case() {
        let now = WeatherNow {
            obs_time: "2026-08-29T10:00+08:00".into(),
            temp: "24".into(),
            feels_like: "25".into(),
            icon: "100".into(),
            text: "Sunny".into(),
            wind360: "180".into(),
            wind_dir: "S".into(),
            wind_scale: "3".into(),
            wind_speed: "15".into(),
            humidity: "40".into(),
            precip: "0.0".into(),
            pressure: "1012".into(),
            vis: "25".into(),
            cloud: "10".into(),
            dew: "12".into(),
        };
        let json = serde_json::to_value(&now).unwrap();
        assert_eq!(json["obsTime"], "2026-08-29T10:00+08:00");
        assert_eq!(json["feelsLike"], "25");
        assert_eq!(json["windDir"], "S");
    }

    #[test]
    fn test_uv_entry_type_field_name() {
        let entry = UvEntry {
            date: "2026-08-29".into(),
            kind: "5".into(),
            name: "UV index".into(),
            level: "3".into(),
            category: "Moderate".into(),
            text: "Use SPF 15+ sunscreen.".into(),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["type"], "5");
    }

    #[test]
    fn test_invalid_parameter_is_client_error() {
        assert!(ProviderError::InvalidParameter("x".into()).is_client_error());
        let upstream = ProviderError::Upstream {
            status: 502,
            body: "bad gateway".into(),
        };
        assert!(!upstream.is_client_error());
    }

    #[test]
    fn test_hourly_response_missing_hourly_defaults_empty() {
        let resp: HourlyResponse =
            serde_json::from_str(r#"{"code":"204","updateTime":""}"#).unwrap();
        assert!(resp.hourly.is_empty());
    }
}
