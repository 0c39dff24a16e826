//! Current-condition sub-client: present and recent observations.
//!
//! API playground:
//! <https://developer.accuweather.com/accuweather-current-conditions-api/apis>

use crate::api::TopCitiesGroup;
use crate::config::ClientOptions;
use crate::endpoint::Endpoint;
use crate::error::Result;
use crate::model::current_condition::{CurrentCondition, TopCityCurrentCondition};

/// Lookback windows offered by the historical endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoricalPeriod {
    SixHours,
    TwentyFourHours,
}

impl HistoricalPeriod {
    pub fn hours(self) -> u8 {
        match self {
            HistoricalPeriod::SixHours => 6,
            HistoricalPeriod::TwentyFourHours => 24,
        }
    }
}

/// Client for the `currentconditions/v1` endpoints.
#[derive(Debug, Clone)]
pub struct CurrentConditionsApi {
    endpoint: Endpoint,
}

impl CurrentConditionsApi {
    pub fn new(options: &ClientOptions) -> Self {
        let endpoint = Endpoint::new(
            options,
            "currentconditions",
            vec![
                ("apikey", options.apikey.clone()),
                ("language", options.language().to_string()),
                ("details", options.detail().to_string()),
            ],
        );

        Self { endpoint }
    }

    /// Current snapshot for the given location.
    pub async fn current(&self, location_key: &str) -> Result<Vec<CurrentCondition>> {
        self.endpoint.get_list(location_key, &[]).await
    }

    /// Current snapshots for the top 50, 100 or 150 cities worldwide.
    pub async fn top_cities(
        &self,
        group: TopCitiesGroup,
    ) -> Result<Vec<TopCityCurrentCondition>> {
        self.endpoint
            .get_list(&format!("topcities/{}", group.count()), &[])
            .await
    }

    /// Observations from the past 6 or 24 hours for the given location.
    ///
    /// The 6-hour window is the upstream default and has no path segment of
    /// its own; only the 24-hour variant is addressed explicitly.
    pub async fn historical(
        &self,
        period: HistoricalPeriod,
        location_key: &str,
    ) -> Result<Vec<CurrentCondition>> {
        let path = match period {
            HistoricalPeriod::SixHours => format!("{location_key}/historical"),
            HistoricalPeriod::TwentyFourHours => format!("{location_key}/historical/24"),
        };
        self.endpoint.get_list(&path, &[]).await
    }
}
