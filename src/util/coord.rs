use geo_types::Point;
use serde::{Deserialize, Serialize};

/// Anything that can report a longitude/latitude pair in degrees.
///
/// Tuples are read as `(lon, lat)` to match `geo_types` x/y ordering.
pub trait LonLat {
    fn lon(&self) -> f64;
    fn lat(&self) -> f64;
}

impl LonLat for (f64, f64) {
    fn lon(&self) -> f64 { self.0 }
    fn lat(&self) -> f64 { self.1 }
}

impl LonLat for Point<f64> {
    fn lon(&self) -> f64 { self.x() }
    fn lat(&self) -> f64 { self.y() }
}

/// A WGS84 latitude/longitude pair as it appears in layout documents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    #[serde(alias = "lat")]
    pub latitude: f64,
    #[serde(alias = "lng", alias = "lon")]
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn to_point(&self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }

    /// Planar distance in degrees. Only meaningful over city-sized extents.
    pub fn degree_distance(&self, other: &impl LonLat) -> f64 {
        let dlat = self.latitude - other.lat();
        let dlon = self.longitude - other.lon();
        (dlat * dlat + dlon * dlon).sqrt()
    }

    pub(crate) fn bits(&self) -> (u64, u64) {
        (self.latitude.to_bits(), self.longitude.to_bits())
    }
}

impl LonLat for Coordinate {
    fn lon(&self) -> f64 { self.longitude }
    fn lat(&self) -> f64 { self.latitude }
}

impl From<Coordinate> for Point<f64> {
    fn from(c: Coordinate) -> Self {
        c.to_point()
    }
}

impl<C: LonLat> From<&C> for Coordinate {
    fn from(c: &C) -> Self {
        Coordinate::new(c.lat(), c.lon())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lonlat_trait_tuple() {
        let tuple = (72.8777, 19.076);
        assert_eq!(tuple.lon(), 72.8777);
        assert_eq!(tuple.lat(), 19.076);
    }

    #[test]
    fn test_lonlat_trait_point() {
        let point = Point::new(72.8777, 19.076);
        assert_eq!(point.lon(), 72.8777);
        assert_eq!(point.lat(), 19.076);
    }

    #[test]
    fn test_same_coordinate_from_tuple_and_point() {
        let from_tuple = Coordinate::from(&(72.8777, 19.076));
        let from_point = Coordinate::from(&Point::new(72.8777, 19.076));
        assert_eq!(from_tuple, from_point);
        assert_eq!(from_tuple.latitude, 19.076);
    }

    #[test]
    fn test_deserialize_short_field_names() -> Result<(), serde_json::Error> {
        let c: Coordinate = serde_json::from_str(r#"{"lat": 19.076, "lng": 72.8777}"#)?;
        assert_eq!(c, Coordinate::new(19.076, 72.8777));

        let c: Coordinate = serde_json::from_str(r#"{"latitude": 1.5, "lon": 2.5}"#)?;
        assert_eq!(c, Coordinate::new(1.5, 2.5));
        Ok(())
    }

    #[test]
    fn test_degree_distance() {
        let a = Coordinate::new(0.0, 0.0);
        assert!((a.degree_distance(&(0.003, 0.004)) - 0.005).abs() < 1e-12);
        assert_eq!(a.degree_distance(&a), 0.0);
    }
}
