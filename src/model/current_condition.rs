//! Current-condition API response shapes.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::MetricImperial;
use super::forecast::{LocalSource, WindDirection};
use super::location::{Country, GeoPosition, TimeZoneInfo};

/// Wind observation: current conditions report speed in both unit systems.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CurrentWind {
    pub direction: Option<WindDirection>,
    pub speed: MetricImperial,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PressureTendency {
    pub localized_text: String,
    pub code: String,
}

/// Accumulated precipitation over trailing windows.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PrecipitationSummary {
    pub precipitation: MetricImperial,
    pub past_hour: MetricImperial,
    pub past3_hours: MetricImperial,
    pub past6_hours: MetricImperial,
    pub past9_hours: MetricImperial,
    pub past12_hours: MetricImperial,
    pub past18_hours: MetricImperial,
    pub past24_hours: MetricImperial,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TemperatureWindow {
    pub minimum: MetricImperial,
    pub maximum: MetricImperial,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TemperatureSummary {
    pub past6_hour_range: TemperatureWindow,
    pub past12_hour_range: TemperatureWindow,
    pub past24_hour_range: TemperatureWindow,
}

/// Current snapshot for a single location.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CurrentCondition {
    pub local_observation_date_time: DateTime<FixedOffset>,
    pub epoch_time: i64,
    pub weather_text: String,
    pub weather_icon: Option<i32>,
    pub has_precipitation: bool,
    pub precipitation_type: Option<String>,
    pub is_day_time: bool,
    pub temperature: MetricImperial,
    pub local_source: Option<LocalSource>,
    pub real_feel_temperature: Option<MetricImperial>,
    pub real_feel_temperature_shade: Option<MetricImperial>,
    pub relative_humidity: Option<i32>,
    pub indoor_relative_humidity: Option<i32>,
    pub dew_point: Option<MetricImperial>,
    pub wind: Option<CurrentWind>,
    pub wind_gust: Option<WindGust>,
    #[serde(rename = "UVIndex")]
    pub uv_index: Option<i32>,
    #[serde(rename = "UVIndexText")]
    pub uv_index_text: Option<String>,
    pub visibility: Option<MetricImperial>,
    pub obstructions_to_visibility: Option<String>,
    pub cloud_cover: Option<i32>,
    pub ceiling: Option<MetricImperial>,
    pub pressure: Option<MetricImperial>,
    pub pressure_tendency: Option<PressureTendency>,
    pub past24_hour_temperature_departure: Option<MetricImperial>,
    pub apparent_temperature: Option<MetricImperial>,
    pub wind_chill_temperature: Option<MetricImperial>,
    pub wet_bulb_temperature: Option<MetricImperial>,
    #[serde(rename = "Precip1hr")]
    pub precip_1hr: Option<MetricImperial>,
    pub precipitation_summary: Option<PrecipitationSummary>,
    pub temperature_summary: Option<TemperatureSummary>,
    pub mobile_link: Option<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WindGust {
    pub speed: MetricImperial,
}

/// Snapshot entry from the grouped "top cities" endpoint: city identity
/// plus an abbreviated condition record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TopCityCurrentCondition {
    pub key: String,
    pub localized_name: String,
    pub english_name: Option<String>,
    pub country: Option<Country>,
    pub time_zone: Option<TimeZoneInfo>,
    pub geo_position: Option<GeoPosition>,
    pub local_observation_date_time: DateTime<FixedOffset>,
    pub epoch_time: i64,
    pub weather_text: String,
    pub weather_icon: Option<i32>,
    pub has_precipitation: bool,
    pub precipitation_type: Option<String>,
    pub is_day_time: bool,
    pub temperature: MetricImperial,
    pub mobile_link: Option<String>,
    pub link: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURRENT_JSON: &str = r#"{
        "LocalObservationDateTime": "2023-05-20T15:35:00+02:00",
        "EpochTime": 1684589700,
        "WeatherText": "Mostly cloudy",
        "WeatherIcon": 6,
        "HasPrecipitation": false,
        "PrecipitationType": null,
        "IsDayTime": true,
        "Temperature": {
            "Metric": {"Value": 21.1, "Unit": "C", "UnitType": 17},
            "Imperial": {"Value": 70.0, "Unit": "F", "UnitType": 18}
        },
        "RelativeHumidity": 50,
        "Wind": {
            "Direction": {"Degrees": 45, "Localized": "NE", "English": "NE"},
            "Speed": {
                "Metric": {"Value": 13.0, "Unit": "km/h", "UnitType": 7},
                "Imperial": {"Value": 8.1, "Unit": "mi/h", "UnitType": 9}
            }
        },
        "PressureTendency": {"LocalizedText": "Steady", "Code": "S"},
        "MobileLink": "http://www.accuweather.com/...",
        "Link": "http://www.accuweather.com/..."
    }"#;

    #[test]
    fn current_condition_deserializes() {
        let cond: CurrentCondition = serde_json::from_str(CURRENT_JSON).unwrap();
        assert_eq!(cond.weather_text, "Mostly cloudy");
        assert_eq!(cond.temperature.metric.value, Some(21.1));
        assert_eq!(cond.relative_humidity, Some(50));
        assert_eq!(cond.wind.unwrap().direction.unwrap().english, "NE");
        assert_eq!(cond.pressure_tendency.unwrap().code, "S");
        assert!(cond.precipitation_summary.is_none());
    }

    #[test]
    fn top_city_condition_deserializes() {
        let json = r#"{
            "Key": "28143",
            "LocalizedName": "Tokyo",
            "EnglishName": "Tokyo",
            "Country": {"ID": "JP", "LocalizedName": "Japan", "EnglishName": "Japan"},
            "LocalObservationDateTime": "2023-05-20T22:30:00+09:00",
            "EpochTime": 1684589400,
            "WeatherText": "Clear",
            "WeatherIcon": 33,
            "HasPrecipitation": false,
            "PrecipitationType": null,
            "IsDayTime": false,
            "Temperature": {
                "Metric": {"Value": 18.0, "Unit": "C", "UnitType": 17},
                "Imperial": {"Value": 64.0, "Unit": "F", "UnitType": 18}
            },
            "MobileLink": "http://www.accuweather.com/...",
            "Link": "http://www.accuweather.com/..."
        }"#;

        let city: TopCityCurrentCondition = serde_json::from_str(json).unwrap();
        assert_eq!(city.key, "28143");
        assert_eq!(city.country.unwrap().id, "JP");
        assert!(!city.is_day_time);
    }
}
