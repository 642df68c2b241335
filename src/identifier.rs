//! Adaptive covering search: pick the geohashes that best cover a target
//! region.
//!
//! The size of the returned geohashes depends on the ratio between the
//! geohash side length (in degrees) and the target area side length (also in
//! degrees). Cells are selected so that the actual ratio between their side
//! length and the area's side length does not exceed the configured ratio:
//! a large ratio lets a single geohash cover a large portion of the target
//! area and so yields large cells, while a small ratio forces subdivision
//! into smaller cells.
//!
//! Clients cannot set an arbitrary ratio; they may only step it up or down
//! within fixed bounds, obtaining sparser or denser covers for the same
//! region.

use crate::bbox::BoundingBox;
use crate::geohash::Geohash;
use log::{debug, trace};
use std::collections::HashSet;

/// Side ratio bounds and step, in percentage points. Chosen so that no
/// sequence of steps can move the ratio past either threshold.
const MAXIMUM_SIDE_RATIO: u32 = 85;
const DEFAULT_SIDE_RATIO: u32 = 55;
const MINIMUM_SIDE_RATIO: u32 = 55;
const SIDE_RATIO_STEP: u32 = 30;

/// Margin applied to the configured ratio before comparing against the
/// actual ratio, as a fraction of the configured ratio. Keeps the cover from
/// flapping between resolutions when the actual ratio is marginally over the
/// threshold: at a 40% ratio and 10% leeway the comparison point is 44%.
const SIDE_RATIO_LEEWAY: f64 = 0.10;

/// Selects the geohashes covering a target region at an adaptive resolution.
///
/// This is the single mutable entity of the crate: it owns the current side
/// ratio and the optional zoom-freeze state. It is not synchronized; confine
/// an instance to one thread or guard it externally.
///
/// # Examples
///
/// ```rust
/// use geogrid::{BoundingBox, GeohashIdentifier};
///
/// let identifier = GeohashIdentifier::new();
/// let cover = identifier.get(&BoundingBox::WORLD);
/// assert!(!cover.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct GeohashIdentifier {
    /// The ratio between geohash side length and area side length which must
    /// not be exceeded, in percentage points.
    side_ratio: u32,
    zoom_frozen: bool,
    frozen_cover: Option<HashSet<Geohash>>,
}

impl GeohashIdentifier {
    /// The depth (geohash code length) past which no children are explored,
    /// even if the cover is still a single cell fully encompassing the
    /// target. Bounds the descent for degenerate targets.
    pub const CUTOFF_DEPTH: usize = 10;

    /// Create an identifier at the default side ratio, unfrozen.
    pub fn new() -> Self {
        Self {
            side_ratio: DEFAULT_SIDE_RATIO,
            zoom_frozen: false,
            frozen_cover: None,
        }
    }

    /// The current side ratio as a fraction.
    pub fn side_ratio(&self) -> f64 {
        f64::from(self.side_ratio) / 100.0
    }

    /// The geohashes that cover the given area at the current side ratio.
    ///
    /// While zoom-frozen, returns the cover captured at freeze time
    /// regardless of `bounds`.
    pub fn get(&self, bounds: &BoundingBox) -> HashSet<Geohash> {
        if self.zoom_frozen {
            if let Some(cover) = &self.frozen_cover {
                return cover.clone();
            }
        }
        compute_cover(bounds, self.side_ratio)
    }

    /// True if the side ratio is below its upper threshold.
    pub fn can_increase_side_ratio(&self) -> bool {
        self.side_ratio < MAXIMUM_SIDE_RATIO
    }

    /// True if an increased side ratio would produce a different cover for
    /// the given area. When it would not, the user would not notice the
    /// increase, which might be misleading.
    pub fn would_notice_side_ratio_increase(&self, bounds: &BoundingBox) -> bool {
        let current = compute_cover(bounds, self.side_ratio);
        let increased = compute_cover(bounds, self.side_ratio + SIDE_RATIO_STEP);
        current != increased
    }

    /// Increase the side ratio by one step. No-op at the upper threshold.
    pub fn increase_side_ratio(&mut self) {
        if self.can_increase_side_ratio() {
            self.side_ratio += SIDE_RATIO_STEP;
        }
    }

    /// True if the side ratio is above its lower threshold.
    pub fn can_decrease_side_ratio(&self) -> bool {
        self.side_ratio > MINIMUM_SIDE_RATIO
    }

    /// True if a decreased side ratio would produce a different cover for
    /// the given area.
    pub fn would_notice_side_ratio_decrease(&self, bounds: &BoundingBox) -> bool {
        let current = compute_cover(bounds, self.side_ratio);
        let decreased =
            compute_cover(bounds, self.side_ratio.saturating_sub(SIDE_RATIO_STEP));
        current != decreased
    }

    /// Decrease the side ratio by one step. No-op at the lower threshold.
    pub fn decrease_side_ratio(&mut self) {
        if self.can_decrease_side_ratio() {
            self.side_ratio -= SIDE_RATIO_STEP;
        }
    }

    /// Freeze or unfreeze the cover. Freezing captures the live cover for
    /// `bounds`; subsequent [`get`](Self::get) calls return it verbatim until
    /// unfrozen.
    pub fn set_zoom_freeze(&mut self, frozen: bool, bounds: &BoundingBox) {
        self.zoom_frozen = frozen;
        self.frozen_cover = frozen.then(|| compute_cover(bounds, self.side_ratio));
    }

    /// True while the cover is pinned to the set captured at freeze time.
    pub fn is_zoom_frozen(&self) -> bool {
        self.zoom_frozen
    }
}

impl Default for GeohashIdentifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Descend the geohash quadtree from the world cell until the frontier's
/// side ratio is acceptable or the cutoff depth is reached.
fn compute_cover(bounds: &BoundingBox, side_ratio: u32) -> HashSet<Geohash> {
    let mut cover: HashSet<Geohash> = HashSet::from([Geohash::world()]);
    while !acceptable_side_ratio(&cover, bounds, side_ratio) {
        cover = relevant_children(&cover, bounds);
        trace!("descended to {} candidate geohashes", cover.len());
    }
    debug!(
        "covered {bounds} with {} geohashes at ratio {side_ratio}%",
        cover.len()
    );
    cover
}

fn acceptable_side_ratio(cover: &HashSet<Geohash>, bounds: &BoundingBox, side_ratio: u32) -> bool {
    if at_cutoff_depth(cover) {
        return true;
    }
    // An empty frontier or a single all-encompassing cell shows no visible
    // subdivision, so descend further.
    let Some(representative) = cover.iter().next() else {
        return false;
    };
    if cover.len() == 1 && representative.bounds().contains(bounds) {
        return false;
    }
    let threshold = f64::from(side_ratio) / 100.0 * (1.0 + SIDE_RATIO_LEEWAY);
    actual_side_ratio(representative, bounds) <= threshold
}

fn at_cutoff_depth(cover: &HashSet<Geohash>) -> bool {
    cover
        .iter()
        .any(|geohash| geohash.resolution() >= GeohashIdentifier::CUTOFF_DEPTH)
}

/// The larger side of the representative cell divided by the longitudinal
/// width of the target area. All cells in a frontier share a resolution, so
/// any representative gives the same answer.
fn actual_side_ratio(representative: &Geohash, bounds: &BoundingBox) -> f64 {
    let cell = representative.bounds();
    let cell_side = cell.width().max(cell.height());
    cell_side / bounds.width()
}

/// The next frontier: all children of the current cells that have any area
/// in common with the target. Spatially irrelevant cells are dropped to keep
/// the frontier small.
fn relevant_children(cover: &HashSet<Geohash>, bounds: &BoundingBox) -> HashSet<Geohash> {
    cover
        .iter()
        .flat_map(Geohash::children)
        .filter(|geohash| geohash.bounds().shares_area_with(bounds))
        .collect()
}
