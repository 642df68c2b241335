//! Error types for geogrid operations.

use thiserror::Error;

/// Convenient result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GeogridError>;

/// Errors raised when constructing geogrid values.
///
/// Every variant is a construction-time validation failure: the offending
/// value is rejected outright and no partial object is ever produced. The
/// crate itself never catches or wraps these; they surface directly to the
/// caller of the constructing operation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeogridError {
    /// An angle value lies outside the range allowed by its kind.
    #[error("value out of range: {value}; allowed values are in the interval [{minimum},{maximum}]")]
    OutOfRange {
        /// The rejected value in decimal degrees
        value: f64,
        /// Lower bound of the allowed interval in decimal degrees
        minimum: f64,
        /// Upper bound of the allowed interval in decimal degrees
        maximum: f64,
    },

    /// A geohash code contains characters outside the base-32 alphabet.
    #[error("the code {0:?} is invalid")]
    InvalidCode(String),

    /// A bounding box builder was finalized without all four edges.
    #[error("bounding box is missing its {0} edge")]
    IncompleteBounds(&'static str),

    /// A bounding box was given a north edge south of its south edge.
    #[error("north edge ({north}) lies south of south edge ({south})")]
    NorthSouthInverted {
        /// North edge in decimal degrees
        north: f64,
        /// South edge in decimal degrees
        south: f64,
    },

    /// A bounding box was given an east edge west of its west edge.
    #[error("east edge ({east}) lies west of west edge ({west})")]
    EastWestInverted {
        /// East edge in decimal degrees
        east: f64,
        /// West edge in decimal degrees
        west: f64,
    },
}
