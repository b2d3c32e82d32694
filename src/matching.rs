//! Nearest-point search used to extend tracks.

use crate::{Point, PointSerie};

/// Result of a nearest-point query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Closest {
    /// Index of the closest candidate in the searched serie.
    pub index: usize,
    /// Euclidean distance from the reference point.
    pub distance: f64,
}

/// Find the candidate closest to `reference`.
///
/// Linear scan with a strict less-than comparison, so on ties the first
/// candidate in scan order wins. Returns `None` when `candidates` is empty
/// (or holds only points at a NaN or infinite distance).
///
/// # Arguments
/// * `reference` - The point to measure from
/// * `candidates` - Points to search
pub fn closest_point(reference: &Point, candidates: &PointSerie) -> Option<Closest> {
    let mut min_distance = f64::MAX;
    let mut best = None;

    for (index, candidate) in candidates.iter().enumerate() {
        let distance = reference.distance(candidate);
        if distance < min_distance {
            min_distance = distance;
            best = Some(index);
        }
    }

    best.map(|index| Closest {
        index,
        distance: min_distance,
    })
}
