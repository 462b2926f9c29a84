//! Distance Matrix HTTP client.

use serde::Deserialize;

use crate::error::FetchError;

const DISTANCE_MATRIX_URL: &str = "https://maps.googleapis.com/maps/api/distancematrix/json";

/// Minimal Distance Matrix client for single origin/destination queries.
#[derive(Debug, Clone)]
pub(crate) struct MapsClient {
    /// Shared HTTP client (connection pooling).
    http: reqwest::Client,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct DistanceMatrixResponse {
    #[serde(default)]
    rows: Vec<MatrixRow>,
}

#[derive(Debug, Deserialize)]
struct MatrixRow {
    #[serde(default)]
    elements: Vec<MatrixElement>,
}

#[derive(Debug, Deserialize)]
struct MatrixElement {
    #[serde(default)]
    status: String,
    duration: Option<DurationValue>,
    duration_in_traffic: Option<DurationValue>,
}

#[derive(Debug, Deserialize)]
struct DurationValue {
    /// Seconds.
    value: f64,
}

impl MapsClient {
    pub(crate) fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
        }
    }

    /// Query the current travel time from `from` to `to`, in minutes.
    ///
    /// `departure_time=now` makes the service include live traffic.
    pub(crate) async fn travel_minutes(&self, from: &str, to: &str) -> Result<f64, FetchError> {
        let response: DistanceMatrixResponse = self
            .http
            .get(DISTANCE_MATRIX_URL)
            .query(&[
                ("origins", from),
                ("destinations", to),
                ("departure_time", "now"),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        extract_minutes(&response, from, to)
    }
}

/// Pull the traffic-aware duration out of a response, in minutes.
fn extract_minutes(
    response: &DistanceMatrixResponse,
    from: &str,
    to: &str,
) -> Result<f64, FetchError> {
    let element = response
        .rows
        .first()
        .and_then(|row| row.elements.first())
        .ok_or_else(|| FetchError::NoRoute {
            from: from.to_string(),
            to: to.to_string(),
        })?;

    if element.status != "OK" {
        return Err(FetchError::RouteStatus(element.status.clone()));
    }

    // duration_in_traffic is only present with a departure time; fall back
    // to the static duration rather than reading a missing field.
    let duration = element
        .duration_in_traffic
        .as_ref()
        .or(element.duration.as_ref())
        .ok_or(FetchError::MissingDuration)?;

    Ok(duration.value / 60.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> DistanceMatrixResponse {
        serde_json::from_str(json).expect("fixture parses")
    }

    #[test]
    fn extracts_traffic_duration_in_minutes() {
        let response = parse(
            r#"{
                "status": "OK",
                "rows": [{
                    "elements": [{
                        "status": "OK",
                        "duration": { "value": 1500, "text": "25 mins" },
                        "duration_in_traffic": { "value": 1860, "text": "31 mins" }
                    }]
                }]
            }"#,
        );
        let minutes = extract_minutes(&response, "a", "b").unwrap();
        assert!((minutes - 31.0).abs() < 1e-9);
    }

    #[test]
    fn falls_back_to_static_duration() {
        let response = parse(
            r#"{
                "rows": [{
                    "elements": [{
                        "status": "OK",
                        "duration": { "value": 1500, "text": "25 mins" }
                    }]
                }]
            }"#,
        );
        let minutes = extract_minutes(&response, "a", "b").unwrap();
        assert!((minutes - 25.0).abs() < 1e-9);
    }

    #[test]
    fn empty_rows_is_no_route() {
        let response = parse(r#"{ "rows": [] }"#);
        let err = extract_minutes(&response, "1 Example St", "2 Office Ave").unwrap_err();
        assert!(matches!(err, FetchError::NoRoute { .. }));
        assert_eq!(
            err.to_string(),
            "no route found from 1 Example St to 2 Office Ave"
        );
    }

    #[test]
    fn empty_elements_is_no_route() {
        let response = parse(r#"{ "rows": [{ "elements": [] }] }"#);
        assert!(matches!(
            extract_minutes(&response, "a", "b"),
            Err(FetchError::NoRoute { .. })
        ));
    }

    #[test]
    fn non_ok_element_status_is_an_error() {
        let response = parse(
            r#"{ "rows": [{ "elements": [{ "status": "ZERO_RESULTS" }] }] }"#,
        );
        match extract_minutes(&response, "a", "b").unwrap_err() {
            FetchError::RouteStatus(status) => assert_eq!(status, "ZERO_RESULTS"),
            other => panic!("expected RouteStatus, got {other:?}"),
        }
    }

    #[test]
    fn ok_element_without_duration_is_an_error() {
        let response = parse(r#"{ "rows": [{ "elements": [{ "status": "OK" }] }] }"#);
        assert!(matches!(
            extract_minutes(&response, "a", "b"),
            Err(FetchError::MissingDuration)
        ));
    }
}
