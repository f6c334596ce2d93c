//! Weather data access for the Nimbus backend.
//!
//! Exposes one accessor per data category (city lookup, current
//! conditions, hourly/daily forecast, UV index, sunrise/sunset, air
//! quality) behind [`WeatherService`], which decides per call whether to
//! proxy the live upstream provider or synthesize data locally.

pub mod mock;
pub mod service;
pub mod types;
pub mod upstream;
pub mod window;

pub use service::{Mode, WeatherService};
pub use types::ProviderError;
pub use upstream::UpstreamClient;
