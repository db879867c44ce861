use geo_types::Point;
use gpx::{Gpx, GpxVersion, Track, TrackSegment, Waypoint};

/// Wraps an ordered list of WGS84 points into a GPX 1.1 document with one
/// track holding one segment. An empty list yields an empty segment.
pub fn gpx_from_points(points: Vec<Point<f64>>) -> Gpx {
    let mut segment = TrackSegment::new();
    segment.points = points.into_iter().map(Waypoint::new).collect();

    let mut track = Track::new();
    track.segments.push(segment);

    let mut gpx = Gpx::default();
    gpx.version = GpxVersion::Gpx11;
    gpx.tracks.push(track);

    gpx
}
