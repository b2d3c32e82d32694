//! Point struct for a single detection in one frame.

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// A detected point-like structure.
///
/// Holds a 2D position, a free-form provenance tag (e.g. "Prox", "Coloc")
/// and, when known, the index of the frame it was detected in.
/// Points are immutable once built; the tracker moves them between
/// point series but never edits them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    position: Point2<f64>,
    tag: String,
    frame: Option<usize>,
}

impl Point {
    /// Create an untagged point with no frame index.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            position: Point2::new(x, y),
            tag: String::new(),
            frame: None,
        }
    }

    /// Create a point with a tag.
    pub fn tagged(x: f64, y: f64, tag: impl Into<String>) -> Self {
        Self {
            position: Point2::new(x, y),
            tag: tag.into(),
            frame: None,
        }
    }

    /// Return a copy of this point carrying the given frame index.
    pub fn in_frame(mut self, frame: usize) -> Self {
        self.frame = Some(frame);
        self
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.position.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.position.y
    }

    #[inline]
    pub fn position(&self) -> &Point2<f64> {
        &self.position
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn frame(&self) -> Option<usize> {
        self.frame
    }

    pub(crate) fn set_frame_if_missing(&mut self, frame: usize) {
        self.frame.get_or_insert(frame);
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(&self, other: &Point) -> f64 {
        nalgebra::distance(&self.position, &other.position)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}
