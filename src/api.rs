//! The three sub-resource clients and the facade aggregating them.

use crate::config::ClientOptions;

pub mod current_condition;
pub mod forecast;
pub mod location;

pub use current_condition::{CurrentConditionsApi, HistoricalPeriod};
pub use forecast::{ForecastApi, ForecastDays, ForecastHours};
pub use location::LocationApi;

/// Number of cities returned by the grouped "top cities" endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopCitiesGroup {
    Fifty,
    Hundred,
    HundredFifty,
}

impl TopCitiesGroup {
    pub fn count(self) -> u16 {
        match self {
            TopCitiesGroup::Fifty => 50,
            TopCitiesGroup::Hundred => 100,
            TopCitiesGroup::HundredFifty => 150,
        }
    }
}

/// One client aggregating all three sub-resources behind a single set of
/// options. Each sub-client can also be constructed on its own.
#[derive(Debug, Clone)]
pub struct AccuWeatherClient {
    pub location: LocationApi,
    pub forecast: ForecastApi,
    pub current_conditions: CurrentConditionsApi,
}

impl AccuWeatherClient {
    pub fn new(options: &ClientOptions) -> Self {
        Self {
            location: LocationApi::new(options),
            forecast: ForecastApi::new(options),
            current_conditions: CurrentConditionsApi::new(options),
        }
    }
}
