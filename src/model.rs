//! Response shapes returned by the service.
//!
//! These mirror the upstream JSON contracts field-for-field; they are
//! external data contracts, not types of this crate's own design. Fields
//! only present on fully-populated (detail) records are `Option`s so both
//! abbreviated and detailed responses deserialize.

use serde::{Deserialize, Serialize};

pub mod current_condition;
pub mod forecast;
pub mod location;

pub use current_condition::{
    CurrentCondition, CurrentWind, PrecipitationSummary, PressureTendency, TemperatureSummary,
    TemperatureWindow, TopCityCurrentCondition, WindGust,
};
pub use forecast::{
    AirAndPollen, DailyForecast, DailyForecastResponse, DayNightSummary, DegreeDaySummary,
    Headline, HourlyForecast, LocalSource, MoonInfo, SunInfo, TemperatureRange, Wind,
    WindDirection,
};
pub use location::{
    AdminArea, AreaBrief, AutocompleteCity, City, CityDetails, Country, DetailSource, GeoPosition,
    ParentCity, Region, SupplementalAdminArea, TimeZoneInfo,
};

/// A measurement in one unit system.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UnitValue {
    pub value: Option<f64>,
    pub unit: String,
    pub unit_type: i32,
}

/// A measurement reported in both unit systems.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MetricImperial {
    pub metric: UnitValue,
    pub imperial: UnitValue,
}
