//! Ordered point collections: one frame of detections, or one track.

use crate::tags::TagMarkers;
use crate::{Error, Point, Result};
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Separator used when tags of several points are concatenated.
pub const TAG_SEPARATOR: char = '\t';

/// An ordered collection of points with a name and an aggregate tag.
///
/// Used both for the detections of a single frame and, once linked, for a
/// track (one point per frame, in increasing frame order).
///
/// Cloning yields a fully independent container, which is what the tracker
/// relies on to leave caller data untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PointSerie {
    name: String,
    tag: String,
    points: Vec<Point>,
}

/// A linked trajectory. Same shape as a frame's point serie.
pub type Track = PointSerie;

impl PointSerie {
    /// Create an empty serie.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tag: String::new(),
            points: Vec::new(),
        }
    }

    /// Create a serie from points. The aggregate tag is the point tags joined
    /// with [`TAG_SEPARATOR`].
    pub fn from_points(name: impl Into<String>, points: Vec<Point>) -> Self {
        let tag = join_tags(&points);
        Self {
            name: name.into(),
            tag,
            points,
        }
    }

    /// Start a serie from a single point, tag seeded with the point's tag.
    pub fn with_point(point: Point) -> Self {
        Self {
            name: String::new(),
            tag: point.tag().to_string(),
            points: vec![point],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Get the point at `index`.
    pub fn get(&self, index: usize) -> Result<&Point> {
        self.points.get(index).ok_or(Error::IndexOutOfBounds {
            index,
            len: self.points.len(),
        })
    }

    /// Append a point. The aggregate tag is left as is.
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Remove and return the point at `index`; later points shift down.
    pub fn remove(&mut self, index: usize) -> Result<Point> {
        if index >= self.points.len() {
            return Err(Error::IndexOutOfBounds {
                index,
                len: self.points.len(),
            });
        }
        Ok(self.points.remove(index))
    }

    /// Remove the point at an index known to be in bounds.
    pub(crate) fn take(&mut self, index: usize) -> Point {
        self.points.remove(index)
    }

    /// Give every point without a frame index the index `frame`.
    pub(crate) fn stamp_frame(&mut self, frame: usize) {
        for point in &mut self.points {
            point.set_frame_if_missing(frame);
        }
    }

    pub fn last(&self) -> Option<&Point> {
        self.points.last()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn set_tag(&mut self, tag: impl Into<String>) {
        self.tag = tag.into();
    }

    /// Append `tag` to the aggregate tag, separated by [`TAG_SEPARATOR`].
    pub fn append_tag(&mut self, tag: &str) {
        self.tag.push(TAG_SEPARATOR);
        self.tag.push_str(tag);
    }

    /// Prox/Coloc markers found in the aggregate tag.
    pub fn markers(&self) -> TagMarkers {
        TagMarkers::from_tag(&self.tag)
    }

    /// Ordered coordinates, e.g. for drawing the track as a polyline.
    pub fn polyline(&self) -> Vec<Point2<f64>> {
        self.points.iter().map(|p| *p.position()).collect()
    }
}

impl FromIterator<Point> for PointSerie {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::from_points(String::new(), iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a PointSerie {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

fn join_tags(points: &[Point]) -> String {
    let mut tag = String::new();
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            tag.push(TAG_SEPARATOR);
        }
        tag.push_str(p.tag());
    }
    tag
}
