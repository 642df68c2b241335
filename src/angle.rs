//! Angular values: the unconstrained [`Angle`] and its range-validated
//! specializations [`Latitude`] and [`Longitude`].
//!
//! Angles compare by exact IEEE-754 bit pattern, never with an epsilon.
//! Arithmetic on angles always yields a plain (unvalidated) `Angle`: the
//! geohash codec bisects coordinate intervals and its midpoints must not
//! trigger spurious range checks.

use crate::error::{GeogridError, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Sub};

/// A geometric angle stored in decimal degrees.
///
/// `Angle` carries no range restriction; use [`Latitude`] or [`Longitude`]
/// when the value must stay within a coordinate axis.
///
/// # Examples
///
/// ```rust
/// use geogrid::Angle;
///
/// let half_turn = Angle::from_degrees(180.0);
/// assert_eq!(half_turn.as_radians(), std::f64::consts::PI);
///
/// let quarter = half_turn / 2.0;
/// assert_eq!(quarter.as_degrees(), 90.0);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Angle {
    degrees: f64,
}

impl Angle {
    /// Create an angle from a value in decimal degrees.
    pub const fn from_degrees(degrees: f64) -> Self {
        Self { degrees }
    }

    /// Create an angle from a value in radians.
    pub fn from_radians(radians: f64) -> Self {
        Self::from_degrees(radians.to_degrees())
    }

    /// The value of this angle in decimal degrees.
    pub const fn as_degrees(&self) -> f64 {
        self.degrees
    }

    /// The value of this angle in radians.
    pub fn as_radians(&self) -> f64 {
        self.degrees.to_radians()
    }
}

impl Add for Angle {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::from_degrees(self.degrees + other.degrees)
    }
}

impl Sub for Angle {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::from_degrees(self.degrees - other.degrees)
    }
}

impl Mul<f64> for Angle {
    type Output = Self;

    fn mul(self, value: f64) -> Self {
        Self::from_degrees(self.degrees * value)
    }
}

impl Div<f64> for Angle {
    type Output = Self;

    fn div(self, value: f64) -> Self {
        Self::from_degrees(self.degrees / value)
    }
}

// Bit-identical comparison; -0.0 and 0.0 are distinct, matching the hash.
impl PartialEq for Angle {
    fn eq(&self, other: &Self) -> bool {
        self.degrees.to_bits() == other.degrees.to_bits()
    }
}

impl Eq for Angle {}

impl PartialOrd for Angle {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Angle {
    fn cmp(&self, other: &Self) -> Ordering {
        self.degrees.total_cmp(&other.degrees)
    }
}

impl Hash for Angle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.degrees.to_bits().hash(state);
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.degrees)
    }
}

macro_rules! validated_angle {
    ($(#[$docs:meta])* $name:ident, $minimum:expr, $maximum:expr) => {
        $(#[$docs])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(try_from = "f64", into = "f64")]
        pub struct $name(Angle);

        impl $name {
            const MINIMUM_DEGREES: f64 = $minimum;
            const MAXIMUM_DEGREES: f64 = $maximum;

            /// The smallest representable value on this axis.
            pub const MIN: Self = Self(Angle::from_degrees($minimum));

            /// The largest representable value on this axis.
            pub const MAX: Self = Self(Angle::from_degrees($maximum));

            /// The zero value on this axis.
            pub const ZERO: Self = Self(Angle::from_degrees(0.0));

            /// Create a value from decimal degrees.
            ///
            /// # Errors
            ///
            /// Returns [`GeogridError::OutOfRange`] when `degrees` falls
            /// outside the axis range (NaN is always rejected).
            pub fn from_degrees(degrees: f64) -> Result<Self> {
                if (Self::MINIMUM_DEGREES..=Self::MAXIMUM_DEGREES).contains(&degrees) {
                    Ok(Self(Angle::from_degrees(degrees)))
                } else {
                    Err(GeogridError::OutOfRange {
                        value: degrees,
                        minimum: Self::MINIMUM_DEGREES,
                        maximum: Self::MAXIMUM_DEGREES,
                    })
                }
            }

            /// Create a value from radians.
            ///
            /// # Errors
            ///
            /// Returns [`GeogridError::OutOfRange`] when the converted degree
            /// value falls outside the axis range.
            pub fn from_radians(radians: f64) -> Result<Self> {
                Self::from_degrees(radians.to_degrees())
            }

            /// Construct without the range check.
            ///
            /// Reserved for values that are in range by construction, such as
            /// bisection interval edges and box midpoints.
            pub(crate) const fn from_degrees_unchecked(degrees: f64) -> Self {
                Self(Angle::from_degrees(degrees))
            }

            /// The value in decimal degrees.
            pub const fn as_degrees(&self) -> f64 {
                self.0.as_degrees()
            }

            /// The value in radians.
            pub fn as_radians(&self) -> f64 {
                self.0.as_radians()
            }

            /// The underlying unconstrained angle.
            pub const fn angle(&self) -> Angle {
                self.0
            }
        }

        impl From<$name> for Angle {
            fn from(value: $name) -> Angle {
                value.0
            }
        }

        impl From<$name> for f64 {
            fn from(value: $name) -> f64 {
                value.as_degrees()
            }
        }

        impl TryFrom<f64> for $name {
            type Error = GeogridError;

            fn try_from(degrees: f64) -> Result<Self> {
                Self::from_degrees(degrees)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

validated_angle!(
    /// A geographical latitude, restricted to [-90, 90] degrees.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use geogrid::Latitude;
    ///
    /// let tropic = Latitude::from_degrees(23.43617)?;
    /// assert!(tropic < Latitude::MAX);
    /// assert!(Latitude::from_degrees(90.5).is_err());
    /// # Ok::<(), geogrid::GeogridError>(())
    /// ```
    Latitude,
    -90.0,
    90.0
);

validated_angle!(
    /// A geographical longitude, restricted to [-180, 180] degrees.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use geogrid::Longitude;
    ///
    /// let antimeridian = Longitude::from_degrees(180.0)?;
    /// assert_eq!(antimeridian, Longitude::MAX);
    /// assert!(Longitude::from_degrees(-180.1).is_err());
    /// # Ok::<(), geogrid::GeogridError>(())
    /// ```
    Longitude,
    -180.0,
    180.0
);
