use geo_types::Point;

/// Converts civilian LV03 (CH1903) coordinates in meters to a WGS84 point
/// (x = longitude, y = latitude, both in degrees).
///
/// This is swisstopo's published polynomial approximation of the inverse
/// projection, accurate to about a meter over Switzerland.
pub fn lv03_to_wgs84(easting: f64, northing: f64) -> Point<f64> {
    let y_aux = (easting - 600_000.0) / 1_000_000.0;
    let x_aux = (northing - 200_000.0) / 1_000_000.0;

    let lng = (2.6779094
        + 4.728982 * y_aux
        + 0.791484 * y_aux * x_aux
        + 0.1306 * y_aux * x_aux.powi(2)
        - 0.0436 * y_aux.powi(3))
        * 100.0
        / 36.0;

    let lat = (16.9023892
        + 3.238272 * x_aux
        - 0.270978 * y_aux.powi(2)
        - 0.002528 * x_aux.powi(2)
        - 0.0447 * y_aux.powi(2) * x_aux
        - 0.0140 * x_aux.powi(3))
        * 100.0
        / 36.0;

    Point::new(lng, lat)
}
