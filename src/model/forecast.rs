//! Forecast API response shapes.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::UnitValue;

/// Daily forecast payload: a headline plus one entry per forecast day.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DailyForecastResponse {
    pub headline: Headline,
    #[serde(default)]
    pub daily_forecasts: Vec<DailyForecast>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Headline {
    pub effective_date: DateTime<FixedOffset>,
    pub effective_epoch_date: i64,
    pub severity: i32,
    pub text: String,
    pub category: Option<String>,
    pub end_date: Option<DateTime<FixedOffset>>,
    pub end_epoch_date: Option<i64>,
    pub mobile_link: Option<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SunInfo {
    pub rise: Option<DateTime<FixedOffset>>,
    pub epoch_rise: Option<i64>,
    pub set: Option<DateTime<FixedOffset>>,
    pub epoch_set: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MoonInfo {
    pub rise: Option<DateTime<FixedOffset>>,
    pub epoch_rise: Option<i64>,
    pub set: Option<DateTime<FixedOffset>>,
    pub epoch_set: Option<i64>,
    pub phase: Option<String>,
    pub age: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TemperatureRange {
    pub minimum: UnitValue,
    pub maximum: UnitValue,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DegreeDaySummary {
    pub heating: UnitValue,
    pub cooling: UnitValue,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AirAndPollen {
    pub name: String,
    pub value: f64,
    pub category: String,
    pub category_value: i32,
    #[serde(rename = "Type")]
    pub pollen_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WindDirection {
    pub degrees: f64,
    pub localized: String,
    pub english: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Wind {
    pub speed: UnitValue,
    pub direction: Option<WindDirection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LocalSource {
    pub id: i32,
    pub name: String,
    pub weather_code: String,
}

/// Half-day (day or night) summary inside a daily forecast.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DayNightSummary {
    pub icon: i32,
    pub icon_phrase: String,
    pub has_precipitation: bool,
    pub precipitation_type: Option<String>,
    pub precipitation_intensity: Option<String>,
    pub local_source: Option<LocalSource>,
    pub short_phrase: Option<String>,
    pub long_phrase: Option<String>,
    pub precipitation_probability: Option<i32>,
    pub thunderstorm_probability: Option<i32>,
    pub rain_probability: Option<i32>,
    pub snow_probability: Option<i32>,
    pub ice_probability: Option<i32>,
    pub wind: Option<Wind>,
    pub wind_gust: Option<Wind>,
    pub total_liquid: Option<UnitValue>,
    pub rain: Option<UnitValue>,
    pub snow: Option<UnitValue>,
    pub ice: Option<UnitValue>,
    pub hours_of_precipitation: Option<f64>,
    pub hours_of_rain: Option<f64>,
    pub hours_of_snow: Option<f64>,
    pub hours_of_ice: Option<f64>,
    pub cloud_cover: Option<i32>,
    pub evapotranspiration: Option<UnitValue>,
    pub solar_irradiance: Option<UnitValue>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DailyForecast {
    pub date: DateTime<FixedOffset>,
    pub epoch_date: i64,
    pub sun: Option<SunInfo>,
    pub moon: Option<MoonInfo>,
    pub temperature: TemperatureRange,
    pub real_feel_temperature: Option<TemperatureRange>,
    pub real_feel_temperature_shade: Option<TemperatureRange>,
    pub hours_of_sun: Option<f64>,
    pub degree_day_summary: Option<DegreeDaySummary>,
    #[serde(default)]
    pub air_and_pollen: Vec<AirAndPollen>,
    pub day: DayNightSummary,
    pub night: DayNightSummary,
    #[serde(default)]
    pub sources: Vec<String>,
    pub mobile_link: Option<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HourlyForecast {
    pub date_time: DateTime<FixedOffset>,
    pub epoch_date_time: i64,
    pub weather_icon: i32,
    pub icon_phrase: String,
    pub has_precipitation: bool,
    pub precipitation_type: Option<String>,
    pub precipitation_intensity: Option<String>,
    pub is_daylight: bool,
    pub temperature: UnitValue,
    pub real_feel_temperature: Option<UnitValue>,
    pub real_feel_temperature_shade: Option<UnitValue>,
    pub wet_bulb_temperature: Option<UnitValue>,
    pub dew_point: Option<UnitValue>,
    pub wind: Option<Wind>,
    pub wind_gust: Option<Wind>,
    pub relative_humidity: Option<i32>,
    pub indoor_relative_humidity: Option<i32>,
    pub visibility: Option<UnitValue>,
    pub ceiling: Option<UnitValue>,
    #[serde(rename = "UVIndex")]
    pub uv_index: Option<i32>,
    #[serde(rename = "UVIndexText")]
    pub uv_index_text: Option<String>,
    pub precipitation_probability: Option<i32>,
    pub thunderstorm_probability: Option<i32>,
    pub rain_probability: Option<i32>,
    pub snow_probability: Option<i32>,
    pub ice_probability: Option<i32>,
    pub total_liquid: Option<UnitValue>,
    pub rain: Option<UnitValue>,
    pub snow: Option<UnitValue>,
    pub ice: Option<UnitValue>,
    pub cloud_cover: Option<i32>,
    pub evapotranspiration: Option<UnitValue>,
    pub solar_irradiance: Option<UnitValue>,
    pub mobile_link: Option<String>,
    pub link: Option<String>,
}
