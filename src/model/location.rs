//! Location API response shapes.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::MetricImperial;

/// A world region, e.g. `NAM` / "North America".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Region {
    #[serde(rename = "ID")]
    pub id: String,
    pub localized_name: String,
    pub english_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Country {
    #[serde(rename = "ID")]
    pub id: String,
    pub localized_name: String,
    pub english_name: String,
}

/// A sub-national administrative division (state, province, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AdminArea {
    #[serde(rename = "ID")]
    pub id: String,
    pub localized_name: String,
    pub english_name: String,
    pub level: Option<i32>,
    pub localized_type: Option<String>,
    pub english_type: Option<String>,
    #[serde(rename = "CountryID")]
    pub country_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TimeZoneInfo {
    pub code: String,
    pub name: String,
    pub gmt_offset: f64,
    pub is_daylight_saving: bool,
    pub next_offset_change: Option<DateTime<FixedOffset>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GeoPosition {
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: Option<MetricImperial>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ParentCity {
    pub key: String,
    pub localized_name: String,
    pub english_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SupplementalAdminArea {
    pub level: i32,
    pub localized_name: String,
    pub english_name: String,
}

/// A data source referenced from station [`CityDetails`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetailSource {
    pub data_type: String,
    pub source: String,
    pub source_id: i64,
    pub partner_source_url: Option<String>,
}

/// Station-level details, only present when the detail flag is set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CityDetails {
    pub key: String,
    pub station_code: Option<String>,
    pub station_gmt_offset: Option<f64>,
    pub band_map: Option<String>,
    pub climo: Option<String>,
    pub local_radar: Option<String>,
    pub media_region: Option<String>,
    pub metar: Option<String>,
    #[serde(rename = "NXMetro")]
    pub nx_metro: Option<String>,
    #[serde(rename = "NXState")]
    pub nx_state: Option<String>,
    pub population: Option<i64>,
    pub primary_warning_county_code: Option<String>,
    pub primary_warning_zone_code: Option<String>,
    pub satellite: Option<String>,
    pub synoptic: Option<String>,
    pub marine_station: Option<String>,
    #[serde(rename = "MarineStationGMTOffset")]
    pub marine_station_gmt_offset: Option<f64>,
    pub video_code: Option<String>,
    pub location_stem: Option<String>,
    #[serde(rename = "PartnerID")]
    pub partner_id: Option<i64>,
    #[serde(default)]
    pub sources: Vec<DetailSource>,
    pub canonical_postal_code: Option<String>,
    pub canonical_location_key: Option<String>,
}

/// A city record as returned by the search endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct City {
    pub version: i32,
    /// Opaque location key used by forecast and current-condition calls.
    pub key: String,
    #[serde(rename = "Type")]
    pub location_type: String,
    pub rank: i32,
    pub localized_name: String,
    pub english_name: Option<String>,
    pub primary_postal_code: Option<String>,
    pub region: Option<Region>,
    pub country: Country,
    pub administrative_area: Option<AdminArea>,
    pub time_zone: Option<TimeZoneInfo>,
    pub geo_position: Option<GeoPosition>,
    pub is_alias: Option<bool>,
    pub parent_city: Option<ParentCity>,
    #[serde(default)]
    pub supplemental_admin_areas: Vec<SupplementalAdminArea>,
    #[serde(default)]
    pub data_sets: Vec<String>,
    pub details: Option<CityDetails>,
}

/// Abbreviated area record embedded in autocomplete results.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AreaBrief {
    #[serde(rename = "ID")]
    pub id: String,
    pub localized_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AutocompleteCity {
    pub version: i32,
    pub key: String,
    #[serde(rename = "Type")]
    pub location_type: String,
    pub rank: i32,
    pub localized_name: String,
    pub country: AreaBrief,
    pub administrative_area: AreaBrief,
}
