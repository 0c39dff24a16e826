//! Typed async client for the AccuWeather REST API.
//!
//! This crate defines:
//! - Client options & per-sub-client default resolution
//! - A shared request sender and error normalization used by all endpoints
//! - Sub-clients for the location, forecast and current-condition resources
//!
//! ```no_run
//! use accuweather_client::{AccuWeatherClient, ClientOptions, ForecastDays};
//!
//! # async fn run() -> accuweather_client::Result<()> {
//! let client = AccuWeatherClient::new(&ClientOptions::new("YOUR_API_KEY"));
//!
//! let cities = client.location.city_search("paris", Some("FR"), None).await?;
//! let key = &cities[0].key;
//!
//! let forecast = client.forecast.daily(ForecastDays::Five, key).await?;
//! println!("{}", forecast.headline.text);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod model;

mod endpoint;

pub use api::{
    AccuWeatherClient, CurrentConditionsApi, ForecastApi, ForecastDays, ForecastHours,
    HistoricalPeriod, LocationApi, TopCitiesGroup,
};
pub use config::ClientOptions;
pub use error::{Error, Result};
