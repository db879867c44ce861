use std::time::Duration;

use color_eyre::eyre::{eyre, Result, WrapErr};
use serde::Deserialize;

use crate::cli::RouteCategory;

const QUERY_URL: &str = "https://map.schweizmobil.ch/api/4/query/featuresmultilayers";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    /// Coordinate rings of `[easting, northing]` pairs in LV03 meters.
    coordinates: Vec<Vec<[f64; 2]>>,
}

/// Queries the SchweizMobil feature service for a route and returns its
/// first coordinate ring, in the order the service reports it.
pub fn fetch_route(category: RouteCategory, route_number: u32) -> Result<Vec<[f64; 2]>> {
    let client = reqwest::blocking::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .wrap_err("Failed to build HTTP client")?;

    let collection: FeatureCollection = client
        .get(QUERY_URL)
        .query(&[(category.layer(), route_number)])
        .send()
        .wrap_err_with(|| format!("Failed to query {} route {route_number}", category.layer()))?
        .error_for_status()
        .wrap_err("Route query failed")?
        .json()
        .wrap_err("Failed to parse route query response")?;

    first_ring(collection, route_number)
}

fn first_ring(collection: FeatureCollection, route_number: u32) -> Result<Vec<[f64; 2]>> {
    let feature = collection
        .features
        .into_iter()
        .next()
        .ok_or_else(|| eyre!("No features returned for route {route_number}"))?;

    feature
        .geometry
        .coordinates
        .into_iter()
        .next()
        .ok_or_else(|| eyre!("Route {route_number} has no coordinate ring"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESPONSE: &str = r#"{
        "features": [
            {
                "id": "1",
                "geometry": {
                    "type": "MultiLineString",
                    "coordinates": [[[600000.0, 200000.0], [601000.0, 201000.0]]]
                },
                "properties": {}
            }
        ]
    }"#;

    #[test]
    fn extracts_first_ring_in_response_order() {
        let collection: FeatureCollection = serde_json::from_str(RESPONSE).unwrap();
        let ring = first_ring(collection, 7).unwrap();
        assert_eq!(ring, vec![[600_000.0, 200_000.0], [601_000.0, 201_000.0]]);
    }

    #[test]
    fn empty_feature_list_is_an_error() {
        let collection: FeatureCollection = serde_json::from_str(r#"{"features": []}"#).unwrap();
        let err = first_ring(collection, 7).unwrap_err();
        assert!(err.to_string().contains("No features"));
    }

    #[test]
    fn empty_coordinate_list_is_an_error() {
        let body = r#"{"features": [{"geometry": {"coordinates": []}}]}"#;
        let collection: FeatureCollection = serde_json::from_str(body).unwrap();
        let err = first_ring(collection, 7).unwrap_err();
        assert!(err.to_string().contains("no coordinate ring"));
    }

    #[test]
    fn feature_without_geometry_fails_to_parse() {
        let body = r#"{"features": [{"id": "1"}]}"#;
        assert!(serde_json::from_str::<FeatureCollection>(body).is_err());
    }

    #[test]
    fn non_pair_coordinates_fail_to_parse() {
        let body = r#"{"features": [{"geometry": {"coordinates": [[[600000.0]]]}}]}"#;
        assert!(serde_json::from_str::<FeatureCollection>(body).is_err());
    }
}
