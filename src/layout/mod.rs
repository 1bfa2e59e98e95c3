pub mod aspect;
pub mod row;
pub mod slice;
pub mod squarify;
pub mod stats;

use std::collections::HashMap;

use compact_str::CompactString;

pub use self::aspect::{aspect_ratio, worst_aspect_ratio};
pub use self::slice::slice_layout;
pub use self::squarify::{compute_layout, compute_treemap_layout};
pub use self::stats::LayoutStats;

/// A weighted input to the treemap. `payload` is carried through untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Item<T> {
    pub id: CompactString,
    pub weight: f64,
    pub payload: T,
}

impl<T> Item<T> {
    pub fn new(id: impl Into<CompactString>, weight: f64, payload: T) -> Self {
        Self {
            id: id.into(),
            weight,
            payload,
        }
    }

    /// Only positive, finite weights take part in layout.
    pub fn is_layoutable(&self) -> bool {
        self.weight.is_finite() && self.weight > 0.0
    }
}

impl Item<()> {
    /// Item without payload.
    pub fn bare(id: impl Into<CompactString>, weight: f64) -> Self {
        Self::new(id, weight, ())
    }
}

/// A positioned rectangle in the treemap layout.
///
/// Geometry is expressed in the container's coordinate space (0..100 with
/// the default config). Nothing here is rounded.
#[derive(Debug, Clone, PartialEq)]
pub struct TreemapRect<T> {
    pub id: CompactString,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub weight: f64,
    pub payload: T,
}

impl<T> TreemapRect<T> {
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn aspect_ratio(&self) -> f64 {
        aspect_ratio(self.width, self.height)
    }

    /// Half-open containment, so shared edges belong to exactly one rect.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    /// Inclusive containment, widened by `tolerance` on every side.
    pub fn contains_within(&self, x: f64, y: f64, tolerance: f64) -> bool {
        x >= self.x - tolerance
            && x <= self.x + self.width + tolerance
            && y >= self.y - tolerance
            && y <= self.y + self.height + tolerance
    }

    /// Map into another coordinate space (e.g. percent → pixels).
    /// Pixel snapping, if any, belongs to the caller after this step.
    pub fn scaled(&self, sx: f64, sy: f64) -> Self
    where
        T: Clone,
    {
        Self {
            id: self.id.clone(),
            x: self.x * sx,
            y: self.y * sy,
            width: self.width * sx,
            height: self.height * sy,
            weight: self.weight,
            payload: self.payload.clone(),
        }
    }
}

/// Which subdivision strategy to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutAlgorithm {
    /// Bruls, Huizing & van Wijk 2000.
    #[default]
    Squarified,
    /// Proportional slices along the longer axis.
    Slice,
}

/// Configuration for treemap layout.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Container width (same unit as the output)
    pub width: f64,
    /// Container height
    pub height: f64,
    pub algorithm: LayoutAlgorithm,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: 100.0, // percentage space
            height: 100.0,
            algorithm: LayoutAlgorithm::Squarified,
        }
    }
}

impl LayoutConfig {
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_algorithm(mut self, algorithm: LayoutAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }
}

/// The full layout result (rects + fast lookup).
#[derive(Debug)]
pub struct Layout<T> {
    pub rects: Vec<TreemapRect<T>>,
    /// id → index into `rects` (O(1) hover, tooltip, highlighting)
    pub id_to_rect: HashMap<CompactString, usize>,
}

impl<T> Layout<T> {
    pub fn from_rects(rects: Vec<TreemapRect<T>>) -> Self {
        let id_to_rect = rects
            .iter()
            .enumerate()
            .map(|(i, r)| (r.id.clone(), i))
            .collect();
        Self { rects, id_to_rect }
    }

    pub fn get(&self, id: &str) -> Option<&TreemapRect<T>> {
        self.id_to_rect.get(id).map(|&i| &self.rects[i])
    }

    /// Find which rectangle contains the given point.
    ///
    /// Accumulated offsets can leave slivers a few ulps wide between
    /// neighbours and along the far container edges; points there fall back
    /// to an inclusive check with a small tolerance.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<&TreemapRect<T>> {
        if let Some(hit) = self.rects.iter().find(|r| r.contains(x, y)) {
            return Some(hit);
        }
        let tolerance = 1e-9 * x.abs().max(y.abs()).max(1.0);
        self.rects
            .iter()
            .find(|r| r.contains_within(x, y, tolerance))
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}
