//! Location sub-client: place resolution and metadata.
//!
//! API playground:
//! <https://developer.accuweather.com/accuweather-locations-api/apis>

use crate::api::TopCitiesGroup;
use crate::config::ClientOptions;
use crate::endpoint::{Endpoint, tiered_search_path};
use crate::error::Result;
use crate::model::location::{AdminArea, AutocompleteCity, City, Country, Region};

/// Client for the `locations/v1` endpoints.
#[derive(Debug, Clone)]
pub struct LocationApi {
    endpoint: Endpoint,
    detail: bool,
    offset: u32,
}

impl LocationApi {
    pub fn new(options: &ClientOptions) -> Self {
        let endpoint = Endpoint::new(
            options,
            "locations",
            vec![
                ("apikey", options.apikey.clone()),
                ("language", options.language().to_string()),
            ],
        );

        Self {
            endpoint,
            detail: options.detail(),
            offset: options.offset(),
        }
    }

    fn details(&self) -> (&'static str, String) {
        ("details", self.detail.to_string())
    }

    fn offset(&self) -> (&'static str, String) {
        ("offset", self.offset.to_string())
    }

    /// List administrative areas of the given country.
    pub async fn admin_areas(&self, country_code: &str) -> Result<Vec<AdminArea>> {
        self.endpoint
            .get_list(&format!("adminareas/{country_code}"), &[self.offset()])
            .await
    }

    /// List countries within the given region.
    pub async fn countries(&self, region: &str) -> Result<Vec<Country>> {
        self.endpoint
            .get_list(&format!("countries/{region}"), &[])
            .await
    }

    /// List all world regions.
    pub async fn regions(&self) -> Result<Vec<Region>> {
        self.endpoint.get_list("regions", &[]).await
    }

    /// Information for the top 50, 100 or 150 cities worldwide.
    pub async fn top_cities(&self, group: TopCitiesGroup) -> Result<Vec<City>> {
        self.endpoint
            .get_list(&format!("topcities/{}", group.count()), &[self.details()])
            .await
    }

    /// Locations matching an autocomplete of the search text.
    pub async fn autocomplete_search(&self, query: &str) -> Result<Vec<AutocompleteCity>> {
        self.endpoint
            .get_list("cities/autocomplete", &[("q", query.to_string())])
            .await
    }

    /// Cities neighboring the location identified by `location_key`.
    pub async fn city_neighbors(&self, location_key: &str) -> Result<Vec<City>> {
        self.endpoint
            .get_list(&format!("cities/{location_key}/neighbors"), &[self.details()])
            .await
    }

    /// Look up a single location by its key.
    pub async fn by_location_key(&self, location_key: &str) -> Result<City> {
        self.endpoint.get(location_key, &[self.details()]).await
    }

    /// Search cities matching the text, optionally narrowed by country and
    /// administrative-area codes.
    pub async fn city_search(
        &self,
        query: &str,
        country_code: Option<&str>,
        admin_code: Option<&str>,
    ) -> Result<Vec<City>> {
        let path = tiered_search_path("cities", country_code, admin_code);
        self.endpoint
            .get_list(
                &path,
                &[("q", query.to_string()), self.details(), self.offset()],
            )
            .await
    }

    /// Search points of interest matching the text.
    pub async fn poi_search(
        &self,
        query: &str,
        country_code: Option<&str>,
        admin_code: Option<&str>,
    ) -> Result<Vec<City>> {
        let path = tiered_search_path("poi", country_code, admin_code);
        self.endpoint
            .get_list(&path, &[("q", query.to_string()), self.details()])
            .await
    }

    /// Search postal codes matching the text.
    pub async fn postal_code_search(
        &self,
        query: &str,
        country_code: Option<&str>,
    ) -> Result<Vec<City>> {
        let path = tiered_search_path("postalcodes", country_code, None);
        self.endpoint
            .get_list(&path, &[("q", query.to_string()), self.details()])
            .await
    }

    /// Search locations of any type matching the text.
    pub async fn text_search(
        &self,
        query: &str,
        country_code: Option<&str>,
        admin_code: Option<&str>,
    ) -> Result<Vec<City>> {
        let path = tiered_search_path("locations", country_code, admin_code);
        self.endpoint
            .get_list(
                &path,
                &[("q", query.to_string()), self.details(), self.offset()],
            )
            .await
    }

    /// Look up locations by geographic position.
    ///
    /// With `top_level` set, the response contains the top-level
    /// administrative location instead of the nearest match.
    pub async fn geoposition_search(
        &self,
        latitude: f64,
        longitude: f64,
        top_level: bool,
    ) -> Result<Vec<City>> {
        self.endpoint
            .get_list(
                "cities/geoposition/search",
                &[
                    ("q", format!("{latitude},{longitude}")),
                    self.details(),
                    ("toplevel", top_level.to_string()),
                ],
            )
            .await
    }

    /// Look up locations by IP address.
    pub async fn ip_search(&self, ip_address: &str) -> Result<Vec<City>> {
        self.endpoint
            .get_list(
                "cities/ipaddress",
                &[("q", ip_address.to_string()), self.details()],
            )
            .await
    }
}
