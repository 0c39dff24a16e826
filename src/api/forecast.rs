//! Forecast sub-client: daily and hourly forecasts by location key.
//!
//! API playground:
//! <https://developer.accuweather.com/accuweather-forecast-api/apis>

use crate::config::ClientOptions;
use crate::endpoint::Endpoint;
use crate::error::Result;
use crate::model::forecast::{DailyForecastResponse, HourlyForecast};

/// Forecast spans offered by the daily endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForecastDays {
    One,
    Five,
    Ten,
    Fifteen,
}

impl ForecastDays {
    pub fn days(self) -> u8 {
        match self {
            ForecastDays::One => 1,
            ForecastDays::Five => 5,
            ForecastDays::Ten => 10,
            ForecastDays::Fifteen => 15,
        }
    }
}

/// Forecast spans offered by the hourly endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForecastHours {
    One,
    Twelve,
    TwentyFour,
    SeventyTwo,
    OneHundredTwenty,
}

impl ForecastHours {
    pub fn hours(self) -> u8 {
        match self {
            ForecastHours::One => 1,
            ForecastHours::Twelve => 12,
            ForecastHours::TwentyFour => 24,
            ForecastHours::SeventyTwo => 72,
            ForecastHours::OneHundredTwenty => 120,
        }
    }
}

/// Client for the `forecasts/v1` endpoints.
#[derive(Debug, Clone)]
pub struct ForecastApi {
    endpoint: Endpoint,
}

impl ForecastApi {
    pub fn new(options: &ClientOptions) -> Self {
        let endpoint = Endpoint::new(
            options,
            "forecasts",
            vec![
                ("apikey", options.apikey.clone()),
                ("language", options.language().to_string()),
                ("details", options.detail().to_string()),
                ("metric", options.metric().to_string()),
            ],
        );

        Self { endpoint }
    }

    /// Daily forecast for the given span and location.
    pub async fn daily(
        &self,
        days: ForecastDays,
        location_key: &str,
    ) -> Result<DailyForecastResponse> {
        self.endpoint
            .get(&format!("daily/{}day/{location_key}", days.days()), &[])
            .await
    }

    /// Hourly forecast for the given span and location.
    pub async fn hourly(
        &self,
        hours: ForecastHours,
        location_key: &str,
    ) -> Result<Vec<HourlyForecast>> {
        self.endpoint
            .get_list(&format!("hourly/{}hour/{location_key}", hours.hours()), &[])
            .await
    }
}
