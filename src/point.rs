//! Geographic points on the lat/lon grid.

use crate::angle::{Latitude, Longitude};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A geographical point: a longitude paired with a latitude.
///
/// Both coordinates are mandatory and validated at construction of their own
/// types, so a `Point` is always a well-formed position.
///
/// # Examples
///
/// ```rust
/// use geogrid::{Latitude, Longitude, Point};
///
/// let nyc = Point::new(
///     Longitude::from_degrees(-74.0060)?,
///     Latitude::from_degrees(40.7128)?,
/// );
/// assert_eq!(nyc.latitude().as_degrees(), 40.7128);
/// # Ok::<(), geogrid::GeogridError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    longitude: Longitude,
    latitude: Latitude,
}

impl Point {
    /// Create a point from a longitude and a latitude.
    pub const fn new(longitude: Longitude, latitude: Latitude) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// The longitude of this point.
    pub const fn longitude(&self) -> Longitude {
        self.longitude
    }

    /// The latitude of this point.
    pub const fn latitude(&self) -> Latitude {
        self.latitude
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.longitude, self.latitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(longitude: f64, latitude: f64) -> Point {
        Point::new(
            Longitude::from_degrees(longitude).unwrap(),
            Latitude::from_degrees(latitude).unwrap(),
        )
    }

    #[test]
    fn test_accessors() {
        let p = point(-151.0, 65.6);
        assert_eq!(p.longitude().as_degrees(), -151.0);
        assert_eq!(p.latitude().as_degrees(), 65.6);
    }

    #[test]
    fn test_equality() {
        assert_eq!(point(10.0, 20.0), point(10.0, 20.0));
        assert_ne!(point(10.0, 20.0), point(20.0, 10.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(point(-151.0, 65.6).to_string(), "-151,65.6");
    }

    #[test]
    fn test_serde_round_trip() {
        let p = point(-74.006, 40.7128);
        let json = serde_json::to_string(&p).unwrap();
        let back: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
