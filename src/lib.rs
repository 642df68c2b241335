//! Geohash codec and adaptive viewport covering on the lat/lon grid.
//!
//! ```rust
//! use geogrid::{BoundingBox, Geohash, GeohashIdentifier, Latitude, Longitude};
//!
//! let viewport = BoundingBox::builder()
//!     .north(Latitude::from_degrees(65.74218)?)
//!     .south(Latitude::from_degrees(65.56641)?)
//!     .east(Longitude::from_degrees(-150.82032)?)
//!     .west(Longitude::from_degrees(-151.17187)?)
//!     .build()?;
//!
//! let identifier = GeohashIdentifier::new();
//! let cover = identifier.get(&viewport);
//! assert!(cover.iter().all(|cell| cell.bounds().shares_area_with(&viewport)));
//!
//! let cell = Geohash::new("best")?;
//! assert!(cell.bounds().shares_area_with(&viewport));
//! # Ok::<(), geogrid::GeogridError>(())
//! ```

pub mod angle;
pub mod bbox;
pub mod error;
pub mod geohash;
pub mod identifier;
pub mod point;

mod alphabet;
mod bits;
mod codec;

pub use angle::{Angle, Latitude, Longitude};
pub use bbox::{BoundingBox, BoundingBoxBuilder};
pub use error::{GeogridError, Result};
pub use geohash::Geohash;
pub use identifier::GeohashIdentifier;
pub use point::Point;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {

    pub use crate::{Angle, Latitude, Longitude, Point};

    pub use crate::{BoundingBox, BoundingBoxBuilder};

    pub use crate::{Geohash, GeohashIdentifier};

    pub use crate::{GeogridError, Result};
}
