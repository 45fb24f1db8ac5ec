//! Rectangular query regions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Geographic point (lat/lon)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// A rectangular bounding box used to bias or restrict a geocoding query.
///
/// `south_west` must be to the southwest of `north_east`, and the region may
/// not span the antimeridian. To query a region that does, such as the one
/// encompassing Fiji, run one query per side and combine the results.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectangularRegion {
    /// Coordinate at the southwest corner.
    pub south_west: GeoPoint,
    /// Coordinate at the northeast corner.
    pub north_east: GeoPoint,
}

impl RectangularRegion {
    pub fn new(south_west: GeoPoint, north_east: GeoPoint) -> Self {
        Self {
            south_west,
            north_east,
        }
    }

    /// Whether the bounding box contains the given coordinate.
    pub fn contains(&self, coordinate: GeoPoint) -> bool {
        coordinate.lat >= self.south_west.lat
            && coordinate.lat <= self.north_east.lat
            && coordinate.lon >= self.south_west.lon
            && coordinate.lon <= self.north_east.lon
    }
}

impl fmt::Display for RectangularRegion {
    /// `minLon,minLat,maxLon,maxLat`, the encoding used by the service's
    /// `bbox` query parameter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.south_west.lon, self.south_west.lat, self.north_east.lon, self.north_east.lat
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_interior_and_corners() {
        let region = RectangularRegion::new(GeoPoint::new(45.0, -122.9), GeoPoint::new(45.8, -122.0));
        assert!(region.contains(GeoPoint::new(45.5, -122.5)));
        assert!(region.contains(region.south_west));
        assert!(region.contains(region.north_east));
        assert!(!region.contains(GeoPoint::new(46.0, -122.5)));
        assert!(!region.contains(GeoPoint::new(45.5, -121.0)));
    }

    #[test]
    fn test_display_is_bbox_encoding() {
        let region = RectangularRegion::new(GeoPoint::new(45.0, -122.9), GeoPoint::new(45.8, -122.0));
        assert_eq!(region.to_string(), "-122.9,45,-122,45.8");
    }
}
