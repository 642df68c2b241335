//! Geohash cells: a base-32 code paired with its lazily decoded bounds.

use crate::alphabet;
use crate::bbox::BoundingBox;
use crate::codec;
use crate::error::{GeogridError, Result};
use crate::point::Point;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A cell of the hierarchical geohash grid.
///
/// A geohash is identified by its code, a string over the base-32 alphabet;
/// the empty code denotes the whole world. Equality and hashing consider the
/// code only. The cell's bounding box is decoded on first access and cached,
/// which is safe because codes are immutable.
///
/// # Examples
///
/// ```rust
/// use geogrid::Geohash;
///
/// let cell = Geohash::new("best")?;
/// assert_eq!(cell.resolution(), 4);
/// assert_eq!(cell.parent().unwrap().code(), "bes");
/// assert_eq!(cell.children().len(), 32);
/// # Ok::<(), geogrid::GeogridError>(())
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Geohash {
    code: String,
    bounds: OnceCell<BoundingBox>,
}

impl Geohash {
    /// The code of the cell spanning the whole world.
    pub const ROOT_CODE: &'static str = "";

    /// The cell spanning the whole world.
    pub fn world() -> Self {
        Self::unchecked(Self::ROOT_CODE.to_string())
    }

    /// Create a geohash from its code.
    ///
    /// # Errors
    ///
    /// Returns [`GeogridError::InvalidCode`] if the code contains characters
    /// outside the geohash alphabet.
    pub fn new(code: impl Into<String>) -> Result<Self> {
        let code = code.into();
        if !alphabet::is_valid(&code) {
            return Err(GeogridError::InvalidCode(code));
        }
        Ok(Self::unchecked(code))
    }

    /// The geohash of `resolution` characters whose cell contains `point`.
    pub fn for_point(point: &Point, resolution: usize) -> Self {
        Self::unchecked(codec::encode(point, resolution))
    }

    fn unchecked(code: String) -> Self {
        Self {
            code,
            bounds: OnceCell::new(),
        }
    }

    /// The base-32 code of this geohash.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The resolution of this geohash, i.e. the length of its code.
    pub fn resolution(&self) -> usize {
        self.code.len()
    }

    /// True for the whole-world (empty code) geohash.
    pub fn is_world(&self) -> bool {
        self.code.is_empty()
    }

    /// The bounding box of this cell, decoded on first access.
    pub fn bounds(&self) -> &BoundingBox {
        self.bounds.get_or_init(|| codec::decode(&self.code))
    }

    /// The cell one resolution step up, or `None` for the world.
    pub fn parent(&self) -> Option<Geohash> {
        if self.is_world() {
            None
        } else {
            Some(Self::unchecked(self.code[..self.code.len() - 1].to_string()))
        }
    }

    /// The 32 cells one resolution step down, in alphabet order.
    ///
    /// Children are rebuilt on every call; covering searches consume each
    /// generation exactly once.
    pub fn children(&self) -> Vec<Geohash> {
        alphabet::CHARACTERS
            .iter()
            .map(|&character| {
                let mut code = String::with_capacity(self.code.len() + 1);
                code.push_str(&self.code);
                code.push(character);
                Self::unchecked(code)
            })
            .collect()
    }
}

impl PartialEq for Geohash {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Geohash {}

impl Hash for Geohash {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl From<Geohash> for String {
    fn from(geohash: Geohash) -> String {
        geohash.code
    }
}

impl TryFrom<String> for Geohash {
    type Error = GeogridError;

    fn try_from(code: String) -> Result<Self> {
        Self::new(code)
    }
}

impl fmt::Display for Geohash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.code, self.bounds())
    }
}
