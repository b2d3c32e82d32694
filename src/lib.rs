//! # pointlink - Greedy point linking
//!
//! Links point-like detections (spots, particles, vesicles) across the frames
//! of an image sequence into tracks, using greedy nearest-neighbor assignment
//! with a distance gate and a minimum track length.
//!
//! ## Features
//!
//! - Deterministic greedy linking that never mutates caller data
//! - Inclusive distance gate, optional bridging over out-of-range frames
//! - Tab-joined provenance tags with Prox/Coloc filtering
//! - Polyline and report-row export for host applications
//!
//! ## Example
//!
//! ```rust
//! use pointlink::{GreedyTracker, Point, PointSerie, TrackingParams};
//!
//! let frames: Vec<PointSerie> = vec![
//!     vec![Point::new(0.0, 0.0)].into_iter().collect(),
//!     vec![Point::new(1.0, 0.0)].into_iter().collect(),
//!     vec![Point::new(2.0, 0.0)].into_iter().collect(),
//! ];
//!
//! let tracker = GreedyTracker::new(TrackingParams::new(5.0, 1)).unwrap();
//! let tracks = tracker.link(&frames);
//!
//! assert_eq!(tracks.len(), 1);
//! assert_eq!(tracks.get(0).unwrap().name(), "Track_1");
//! ```

pub mod color;
pub mod export;
pub mod matching;
pub mod point;
pub mod point_serie;
pub mod tags;
pub mod track_set;
pub mod tracker;

// Re-exports for convenience
pub use color::Color;
pub use matching::{closest_point, Closest};
pub use point::Point;
pub use point_serie::{PointSerie, Track, TAG_SEPARATOR};
pub use tags::{TagFilter, TagMarkers};
pub use track_set::TrackSet;
pub use tracker::{link, GapPolicy, GreedyTracker, TrackingParams};

// Error types
pub use crate::error::{Error, Result};

mod error {
    use thiserror::Error;

    /// Errors that can occur in the pointlink library
    #[derive(Error, Debug)]
    pub enum Error {
        #[error("Index {index} out of bounds for point serie of length {len}")]
        IndexOutOfBounds { index: usize, len: usize },

        #[error("Invalid configuration: {0}")]
        InvalidConfig(String),

        #[error("Invalid argument: {0}")]
        InvalidArgument(String),

        #[error("Serialization error: {0}")]
        Serialization(#[from] serde_json::Error),
    }

    /// Result type for pointlink operations
    pub type Result<T> = std::result::Result<T, Error>;
}
