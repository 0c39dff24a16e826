use accuweather_client::{
    AccuWeatherClient, ClientOptions, Error, ForecastDays, ForecastHours, HistoricalPeriod,
    TopCitiesGroup,
};
use mockito::Matcher;

fn options(server: &mockito::ServerGuard) -> ClientOptions {
    ClientOptions::new("KEY").with_base_url(server.url())
}

const CITY_BODY: &str = r#"[{
    "Version": 1,
    "Key": "623",
    "Type": "City",
    "Rank": 31,
    "LocalizedName": "Paris",
    "EnglishName": "Paris",
    "Country": {"ID": "FR", "LocalizedName": "France", "EnglishName": "France"}
}]"#;

#[tokio::test]
async fn location_requests_carry_default_parameters() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/locations/v1/regions")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("apikey".into(), "KEY".into()),
            Matcher::UrlEncoded("language".into(), "en-us".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"ID": "EUR", "LocalizedName": "Europe", "EnglishName": "Europe"}]"#)
        .create_async()
        .await;

    let client = AccuWeatherClient::new(&options(&server));
    let regions = client.location.regions().await.unwrap();

    mock.assert_async().await;
    assert_eq!(regions.len(), 1);
    assert_eq!(regions[0].id, "EUR");
}

#[tokio::test]
async fn configured_language_replaces_default() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/locations/v1/regions")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("apikey".into(), "KEY".into()),
            Matcher::UrlEncoded("language".into(), "de-de".into()),
        ]))
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let opts = options(&server).with_language("de-de");
    let client = AccuWeatherClient::new(&opts);
    client.location.regions().await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn forecast_requests_carry_detail_and_metric_defaults() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/forecasts/v1/hourly/12hour/623")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("apikey".into(), "KEY".into()),
            Matcher::UrlEncoded("language".into(), "en-us".into()),
            Matcher::UrlEncoded("details".into(), "false".into()),
            Matcher::UrlEncoded("metric".into(), "false".into()),
        ]))
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let client = AccuWeatherClient::new(&options(&server));
    let hours = client
        .forecast
        .hourly(ForecastHours::Twelve, "623")
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(hours.is_empty());
}

#[tokio::test]
async fn city_search_uses_generic_path_without_codes() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/locations/v1/cities/search")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("q".into(), "paris".into()),
            Matcher::UrlEncoded("details".into(), "false".into()),
            Matcher::UrlEncoded("offset".into(), "100".into()),
        ]))
        .with_status(200)
        .with_body(CITY_BODY)
        .create_async()
        .await;

    let client = AccuWeatherClient::new(&options(&server));
    let cities = client.location.city_search("paris", None, None).await.unwrap();

    mock.assert_async().await;
    assert_eq!(cities[0].key, "623");
}

#[tokio::test]
async fn city_search_uses_country_path_with_country_code() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/locations/v1/cities/FR/search")
        .match_query(Matcher::UrlEncoded("q".into(), "paris".into()))
        .with_status(200)
        .with_body(CITY_BODY)
        .create_async()
        .await;

    let client = AccuWeatherClient::new(&options(&server));
    client
        .location
        .city_search("paris", Some("FR"), None)
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn city_search_uses_most_specific_path_with_both_codes() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/locations/v1/cities/FR/A1/search")
        .match_query(Matcher::UrlEncoded("q".into(), "paris".into()))
        .with_status(200)
        .with_body(CITY_BODY)
        .create_async()
        .await;

    let client = AccuWeatherClient::new(&options(&server));
    client
        .location
        .city_search("paris", Some("FR"), Some("A1"))
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn empty_string_codes_behave_as_absent() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/locations/v1/cities/search")
        .match_query(Matcher::UrlEncoded("q".into(), "paris".into()))
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let client = AccuWeatherClient::new(&options(&server));
    client
        .location
        .city_search("paris", Some(""), Some(""))
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn null_list_body_normalizes_to_empty_vec() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/locations/v1/cities/autocomplete")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("null")
        .create_async()
        .await;

    let client = AccuWeatherClient::new(&options(&server));
    let results = client.location.autocomplete_search("ber").await.unwrap();

    assert!(results.is_empty());
}

#[tokio::test]
async fn empty_list_body_normalizes_to_empty_vec() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/locations/v1/countries/EUR")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("")
        .create_async()
        .await;

    let client = AccuWeatherClient::new(&options(&server));
    let countries = client.location.countries("EUR").await.unwrap();

    assert!(countries.is_empty());
}

#[tokio::test]
async fn mapped_statuses_produce_domain_errors() {
    let cases = [
        (400, "request had invalid syntax or parameters"),
        (401, "API authorization failed"),
        (403, "caller lacks permission for this endpoint"),
        (404, "no route matches the given resource"),
        (500, "upstream encountered an unexpected condition"),
    ];

    for (status, expected) in cases {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/locations/v1/regions")
            .match_query(Matcher::Any)
            .with_status(status)
            .create_async()
            .await;

        let client = AccuWeatherClient::new(&options(&server));
        let err = client.location.regions().await.unwrap_err();

        match err {
            Error::Api { status: s, message } => {
                assert_eq!(s as usize, status);
                assert_eq!(message, expected);
            }
            other => panic!("expected Api error for {status}, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn unmapped_status_produces_fallback_message() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/currentconditions/v1/623")
        .match_query(Matcher::Any)
        .with_status(503)
        .create_async()
        .await;

    let client = AccuWeatherClient::new(&options(&server));
    let err = client.current_conditions.current("623").await.unwrap_err();

    assert_eq!(err.status(), Some(503));
    match err {
        Error::Api { status, message } => {
            assert_eq!(status, 503);
            assert_eq!(message, "upstream returned an unexpected status");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn daily_forecast_builds_span_path() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/forecasts/v1/daily/5day/623")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(
            r#"{
                "Headline": {
                    "EffectiveDate": "2023-05-20T08:00:00+02:00",
                    "EffectiveEpochDate": 1684562400,
                    "Severity": 4,
                    "Text": "Pleasant this weekend"
                },
                "DailyForecasts": []
            }"#,
        )
        .create_async()
        .await;

    let client = AccuWeatherClient::new(&options(&server));
    let forecast = client
        .forecast
        .daily(ForecastDays::Five, "623")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(forecast.headline.text, "Pleasant this weekend");
    assert!(forecast.daily_forecasts.is_empty());
}

#[tokio::test]
async fn historical_paths_distinguish_lookback_windows() {
    let mut server = mockito::Server::new_async().await;
    let six = server
        .mock("GET", "/currentconditions/v1/623/historical")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;
    let twenty_four = server
        .mock("GET", "/currentconditions/v1/623/historical/24")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let client = AccuWeatherClient::new(&options(&server));
    client
        .current_conditions
        .historical(HistoricalPeriod::SixHours, "623")
        .await
        .unwrap();
    client
        .current_conditions
        .historical(HistoricalPeriod::TwentyFourHours, "623")
        .await
        .unwrap();

    six.assert_async().await;
    twenty_four.assert_async().await;
}

#[tokio::test]
async fn top_cities_group_appears_in_path() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/currentconditions/v1/topcities/150")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("apikey".into(), "KEY".into()),
            Matcher::UrlEncoded("details".into(), "false".into()),
        ]))
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let client = AccuWeatherClient::new(&options(&server));
    client
        .current_conditions
        .top_cities(TopCitiesGroup::HundredFifty)
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn by_location_key_returns_single_record() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/locations/v1/623")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(
            r#"{
                "Version": 1,
                "Key": "623",
                "Type": "City",
                "Rank": 31,
                "LocalizedName": "Paris",
                "Country": {"ID": "FR", "LocalizedName": "France", "EnglishName": "France"}
            }"#,
        )
        .create_async()
        .await;

    let client = AccuWeatherClient::new(&options(&server));
    let city = client.location.by_location_key("623").await.unwrap();

    assert_eq!(city.key, "623");
    assert_eq!(city.country.id, "FR");
}

#[tokio::test]
async fn city_neighbors_interpolates_location_key() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/locations/v1/cities/623/neighbors")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(CITY_BODY)
        .create_async()
        .await;

    let client = AccuWeatherClient::new(&options(&server));
    let neighbors = client.location.city_neighbors("623").await.unwrap();

    mock.assert_async().await;
    assert_eq!(neighbors.len(), 1);
}

#[tokio::test]
async fn geoposition_search_formats_coordinate_pair() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/locations/v1/cities/geoposition/search")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("q".into(), "48.857,2.351".into()),
            Matcher::UrlEncoded("toplevel".into(), "true".into()),
        ]))
        .with_status(200)
        .with_body(CITY_BODY)
        .create_async()
        .await;

    let client = AccuWeatherClient::new(&options(&server));
    client
        .location
        .geoposition_search(48.857, 2.351, true)
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn current_conditions_deserialize_snapshot() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/currentconditions/v1/623")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(
            r#"[{
                "LocalObservationDateTime": "2023-05-20T15:35:00+02:00",
                "EpochTime": 1684589700,
                "WeatherText": "Sunny",
                "WeatherIcon": 1,
                "HasPrecipitation": false,
                "PrecipitationType": null,
                "IsDayTime": true,
                "Temperature": {
                    "Metric": {"Value": 21.1, "Unit": "C", "UnitType": 17},
                    "Imperial": {"Value": 70.0, "Unit": "F", "UnitType": 18}
                }
            }]"#,
        )
        .create_async()
        .await;

    let client = AccuWeatherClient::new(&options(&server));
    let conditions = client.current_conditions.current("623").await.unwrap();

    assert_eq!(conditions.len(), 1);
    assert_eq!(conditions[0].weather_text, "Sunny");
    assert_eq!(conditions[0].temperature.imperial.value, Some(70.0));
}
