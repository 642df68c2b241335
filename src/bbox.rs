//! Axis-aligned bounding boxes on the lat/lon grid.

use crate::angle::{Latitude, Longitude};
use crate::error::{GeogridError, Result};
use crate::point::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An axis-aligned rectangle on the equirectangular lat/lon grid.
///
/// A box is defined by its four edges and maintains the invariant
/// north ≥ south and east ≥ west. Instances are built through
/// [`BoundingBoxBuilder`]; every operation is a pure query and the
/// `with_*` family returns fresh instances.
///
/// Boxes do not handle antimeridian wraparound: a region crossing ±180°
/// longitude cannot be represented, and the intersection predicates assume
/// non-wrapping spans on both axes.
///
/// # Examples
///
/// ```rust
/// use geogrid::{BoundingBox, Latitude, Longitude};
///
/// let alaska = BoundingBox::builder()
///     .north(Latitude::from_degrees(65.74218)?)
///     .south(Latitude::from_degrees(65.56641)?)
///     .east(Longitude::from_degrees(-150.82032)?)
///     .west(Longitude::from_degrees(-151.17187)?)
///     .build()?;
///
/// assert!(BoundingBox::WORLD.contains(&alaska));
/// # Ok::<(), geogrid::GeogridError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BoundingBoxEdges")]
pub struct BoundingBox {
    north: Latitude,
    south: Latitude,
    east: Longitude,
    west: Longitude,
}

/// Raw edges as they appear on the wire; deserialization routes them through
/// the builder so the edge ordering invariant also holds for decoded boxes.
#[derive(Deserialize)]
struct BoundingBoxEdges {
    north: Latitude,
    south: Latitude,
    east: Longitude,
    west: Longitude,
}

impl TryFrom<BoundingBoxEdges> for BoundingBox {
    type Error = GeogridError;

    fn try_from(edges: BoundingBoxEdges) -> Result<Self> {
        BoundingBox::builder()
            .north(edges.north)
            .south(edges.south)
            .east(edges.east)
            .west(edges.west)
            .build()
    }
}

impl BoundingBox {
    /// A bounding box which encompasses the whole world.
    pub const WORLD: Self = Self {
        north: Latitude::MAX,
        south: Latitude::MIN,
        east: Longitude::MAX,
        west: Longitude::MIN,
    };

    /// Start building a bounding box.
    pub fn builder() -> BoundingBoxBuilder {
        BoundingBoxBuilder::default()
    }

    /// Assemble a box whose edges are already known to be ordered, such as
    /// the intervals produced by codec bisection.
    pub(crate) fn from_edges(
        north: Latitude,
        south: Latitude,
        east: Longitude,
        west: Longitude,
    ) -> Self {
        debug_assert!(north >= south && east >= west);
        Self {
            north,
            south,
            east,
            west,
        }
    }

    /// The latitude of the northern edge.
    pub const fn north(&self) -> Latitude {
        self.north
    }

    /// The latitude of the southern edge.
    pub const fn south(&self) -> Latitude {
        self.south
    }

    /// The longitude of the eastern edge.
    pub const fn east(&self) -> Longitude {
        self.east
    }

    /// The longitude of the western edge.
    pub const fn west(&self) -> Longitude {
        self.west
    }

    /// A new box with the given north edge and this box's other edges.
    ///
    /// # Errors
    ///
    /// Returns [`GeogridError::NorthSouthInverted`] if the new edge would
    /// invert the box.
    pub fn with_north(&self, north: Latitude) -> Result<Self> {
        BoundingBoxBuilder::from(*self).north(north).build()
    }

    /// A new box with the given south edge and this box's other edges.
    ///
    /// # Errors
    ///
    /// Returns [`GeogridError::NorthSouthInverted`] if the new edge would
    /// invert the box.
    pub fn with_south(&self, south: Latitude) -> Result<Self> {
        BoundingBoxBuilder::from(*self).south(south).build()
    }

    /// A new box with the given east edge and this box's other edges.
    ///
    /// # Errors
    ///
    /// Returns [`GeogridError::EastWestInverted`] if the new edge would
    /// invert the box.
    pub fn with_east(&self, east: Longitude) -> Result<Self> {
        BoundingBoxBuilder::from(*self).east(east).build()
    }

    /// A new box with the given west edge and this box's other edges.
    ///
    /// # Errors
    ///
    /// Returns [`GeogridError::EastWestInverted`] if the new edge would
    /// invert the box.
    pub fn with_west(&self, west: Longitude) -> Result<Self> {
        BoundingBoxBuilder::from(*self).west(west).build()
    }

    /// The north-western corner of this box.
    pub const fn north_west(&self) -> Point {
        Point::new(self.west, self.north)
    }

    /// The north-eastern corner of this box.
    pub const fn north_east(&self) -> Point {
        Point::new(self.east, self.north)
    }

    /// The south-western corner of this box.
    pub const fn south_west(&self) -> Point {
        Point::new(self.west, self.south)
    }

    /// The south-eastern corner of this box.
    pub const fn south_east(&self) -> Point {
        Point::new(self.east, self.south)
    }

    /// The arithmetic midpoint of the edges. This is a grid midpoint, not a
    /// geodesic one.
    pub fn center(&self) -> Point {
        let latitude = Latitude::from_degrees_unchecked(
            (self.north.as_degrees() + self.south.as_degrees()) / 2.0,
        );
        let longitude = Longitude::from_degrees_unchecked(
            (self.east.as_degrees() + self.west.as_degrees()) / 2.0,
        );
        Point::new(longitude, latitude)
    }

    /// The longitudinal extent of this box in degrees.
    pub fn width(&self) -> f64 {
        self.east.as_degrees() - self.west.as_degrees()
    }

    /// The latitudinal extent of this box in degrees.
    pub fn height(&self) -> f64 {
        self.north.as_degrees() - self.south.as_degrees()
    }

    /// The area of this box in square degrees.
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// True if the point lies within this box, edges included.
    pub fn contains_point(&self, point: &Point) -> bool {
        point.latitude().as_degrees() >= self.south.as_degrees()
            && point.latitude().as_degrees() <= self.north.as_degrees()
            && point.longitude().as_degrees() >= self.west.as_degrees()
            && point.longitude().as_degrees() <= self.east.as_degrees()
    }

    /// True if all four corners of `other` lie within this box.
    pub fn contains(&self, other: &BoundingBox) -> bool {
        self.contains_point(&other.north_east())
            && self.contains_point(&other.north_west())
            && self.contains_point(&other.south_east())
            && self.contains_point(&other.south_west())
    }

    /// True if the latitude spans and the longitude spans of the two boxes
    /// both overlap.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        let latitudes_overlap = self.south.as_degrees() <= other.north.as_degrees()
            && other.south.as_degrees() <= self.north.as_degrees();
        let longitudes_overlap = self.west.as_degrees() <= other.east.as_degrees()
            && other.west.as_degrees() <= self.east.as_degrees();
        latitudes_overlap && longitudes_overlap
    }

    /// True if this box and `other` have any area in common: one contains
    /// the other, or they intersect.
    pub fn shares_area_with(&self, other: &BoundingBox) -> bool {
        self.contains(other) || self.intersects(other) || other.contains(self)
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "W:{}, E:{}, S:{}, N:{}",
            self.west.as_degrees(),
            self.east.as_degrees(),
            self.south.as_degrees(),
            self.north.as_degrees()
        )
    }
}

/// Builder collecting the four edges of a [`BoundingBox`].
///
/// All four edges must be supplied; [`build`](Self::build) validates the
/// edge ordering invariant.
#[derive(Debug, Clone, Default)]
pub struct BoundingBoxBuilder {
    north: Option<Latitude>,
    south: Option<Latitude>,
    east: Option<Longitude>,
    west: Option<Longitude>,
}

impl BoundingBoxBuilder {
    /// Start with no edges set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the north edge.
    pub fn north(mut self, north: Latitude) -> Self {
        self.north = Some(north);
        self
    }

    /// Set the south edge.
    pub fn south(mut self, south: Latitude) -> Self {
        self.south = Some(south);
        self
    }

    /// Set the east edge.
    pub fn east(mut self, east: Longitude) -> Self {
        self.east = Some(east);
        self
    }

    /// Set the west edge.
    pub fn west(mut self, west: Longitude) -> Self {
        self.west = Some(west);
        self
    }

    /// Finalize the box.
    ///
    /// # Errors
    ///
    /// Returns [`GeogridError::IncompleteBounds`] when an edge is missing,
    /// [`GeogridError::NorthSouthInverted`] when north < south, and
    /// [`GeogridError::EastWestInverted`] when east < west.
    pub fn build(self) -> Result<BoundingBox> {
        let north = self.north.ok_or(GeogridError::IncompleteBounds("north"))?;
        let south = self.south.ok_or(GeogridError::IncompleteBounds("south"))?;
        let east = self.east.ok_or(GeogridError::IncompleteBounds("east"))?;
        let west = self.west.ok_or(GeogridError::IncompleteBounds("west"))?;
        if north < south {
            return Err(GeogridError::NorthSouthInverted {
                north: north.as_degrees(),
                south: south.as_degrees(),
            });
        }
        if east < west {
            return Err(GeogridError::EastWestInverted {
                east: east.as_degrees(),
                west: west.as_degrees(),
            });
        }
        Ok(BoundingBox {
            north,
            south,
            east,
            west,
        })
    }
}

impl From<BoundingBox> for BoundingBoxBuilder {
    fn from(reference: BoundingBox) -> Self {
        Self {
            north: Some(reference.north),
            south: Some(reference.south),
            east: Some(reference.east),
            west: Some(reference.west),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn latitude(degrees: f64) -> Latitude {
        Latitude::from_degrees(degrees).unwrap()
    }

    fn longitude(degrees: f64) -> Longitude {
        Longitude::from_degrees(degrees).unwrap()
    }

    fn bbox(south: f64, west: f64, north: f64, east: f64) -> BoundingBox {
        BoundingBox::builder()
            .north(latitude(north))
            .south(latitude(south))
            .east(longitude(east))
            .west(longitude(west))
            .build()
            .unwrap()
    }

    fn point(lon: f64, lat: f64) -> Point {
        Point::new(longitude(lon), latitude(lat))
    }

    #[test]
    fn test_world() {
        assert_eq!(BoundingBox::WORLD.north(), Latitude::MAX);
        assert_eq!(BoundingBox::WORLD.south(), Latitude::MIN);
        assert_eq!(BoundingBox::WORLD.east(), Longitude::MAX);
        assert_eq!(BoundingBox::WORLD.west(), Longitude::MIN);
        assert_eq!(BoundingBox::WORLD.area(), 360.0 * 180.0);
    }

    #[test]
    fn test_builder_requires_all_edges() {
        let err = BoundingBox::builder()
            .north(latitude(10.0))
            .south(latitude(0.0))
            .east(longitude(10.0))
            .build()
            .unwrap_err();
        assert_eq!(err, GeogridError::IncompleteBounds("west"));
    }

    #[test]
    fn test_builder_rejects_inverted_edges() {
        let err = BoundingBox::builder()
            .north(latitude(0.0))
            .south(latitude(10.0))
            .east(longitude(10.0))
            .west(longitude(0.0))
            .build()
            .unwrap_err();
        assert!(matches!(err, GeogridError::NorthSouthInverted { .. }));

        let err = BoundingBox::builder()
            .north(latitude(10.0))
            .south(latitude(0.0))
            .east(longitude(0.0))
            .west(longitude(10.0))
            .build()
            .unwrap_err();
        assert!(matches!(err, GeogridError::EastWestInverted { .. }));
    }

    #[test]
    fn test_degenerate_boxes_allowed() {
        // Zero width and zero height are legal; north == south, east == west.
        let line = bbox(10.0, -5.0, 10.0, 5.0);
        assert_eq!(line.height(), 0.0);
        let spot = bbox(10.0, 5.0, 10.0, 5.0);
        assert_eq!(spot.area(), 0.0);
        assert!(spot.contains_point(&point(5.0, 10.0)));
    }

    #[test]
    fn test_corners_and_center() {
        let b = bbox(0.0, -20.0, 10.0, 20.0);
        assert_eq!(b.north_west(), point(-20.0, 10.0));
        assert_eq!(b.north_east(), point(20.0, 10.0));
        assert_eq!(b.south_west(), point(-20.0, 0.0));
        assert_eq!(b.south_east(), point(20.0, 0.0));
        assert_eq!(b.center(), point(0.0, 5.0));
    }

    #[test]
    fn test_dimensions() {
        let b = bbox(0.0, -20.0, 10.0, 20.0);
        assert_eq!(b.width(), 40.0);
        assert_eq!(b.height(), 10.0);
        assert_eq!(b.area(), 400.0);
    }

    #[test]
    fn test_contains_point_closed_intervals() {
        let b = bbox(0.0, 0.0, 10.0, 10.0);
        assert!(b.contains_point(&point(5.0, 5.0)));
        assert!(b.contains_point(&point(0.0, 0.0)));
        assert!(b.contains_point(&point(10.0, 10.0)));
        assert!(!b.contains_point(&point(-0.1, 5.0)));
        assert!(!b.contains_point(&point(5.0, 10.1)));
    }

    #[test]
    fn test_contains_box() {
        let outer = bbox(0.0, 0.0, 10.0, 10.0);
        let inner = bbox(2.0, 2.0, 8.0, 8.0);
        assert!(outer.contains(&inner));
        assert!(!inner.contains(&outer));
        // A box contains itself (closed intervals).
        assert!(outer.contains(&outer));
    }

    #[test]
    fn test_intersects() {
        let a = bbox(0.0, 0.0, 10.0, 10.0);
        let b = bbox(5.0, 5.0, 15.0, 15.0);
        let c = bbox(20.0, 20.0, 30.0, 30.0);

        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
        assert!(!c.intersects(&a));

        // Touching edges count as intersecting.
        let d = bbox(0.0, 10.0, 10.0, 20.0);
        assert!(a.intersects(&d));
    }

    #[test]
    fn test_shares_area_with() {
        let outer = bbox(0.0, 0.0, 10.0, 10.0);
        let inner = bbox(2.0, 2.0, 8.0, 8.0);
        let overlapping = bbox(5.0, 5.0, 15.0, 15.0);
        let distant = bbox(40.0, 40.0, 50.0, 50.0);

        assert!(outer.shares_area_with(&inner));
        assert!(inner.shares_area_with(&outer));
        assert!(outer.shares_area_with(&overlapping));
        assert!(!outer.shares_area_with(&distant));
    }

    #[test]
    fn test_with_edges() {
        let b = bbox(0.0, 0.0, 10.0, 10.0);
        let taller = b.with_north(latitude(20.0)).unwrap();
        assert_eq!(taller.north().as_degrees(), 20.0);
        assert_eq!(taller.south(), b.south());

        assert!(b.with_north(latitude(-5.0)).is_err());
        assert!(b.with_east(longitude(-5.0)).is_err());
    }

    #[test]
    fn test_display() {
        let b = bbox(0.0, -20.0, 10.0, 20.0);
        assert_eq!(b.to_string(), "W:-20, E:20, S:0, N:10");
    }

    #[test]
    fn test_serde_round_trip() {
        let b = bbox(65.56641, -151.17187, 65.74218, -150.82032);
        let json = serde_json::to_string(&b).unwrap();
        let back: BoundingBox = serde_json::from_str(&json).unwrap();
        assert_eq!(back, b);
    }

    #[test]
    fn test_serde_rejects_inverted_edges() {
        // Decoded boxes pass the same ordering checks as built ones.
        let json = r#"{"north":-10.0,"south":10.0,"east":-20.0,"west":20.0}"#;
        let inverted: std::result::Result<BoundingBox, _> = serde_json::from_str(json);
        assert!(inverted.is_err());

        let json = r#"{"north":10.0,"south":-10.0,"east":-20.0,"west":20.0}"#;
        let wrapped: std::result::Result<BoundingBox, _> = serde_json::from_str(json);
        assert!(wrapped.is_err());
    }
}
