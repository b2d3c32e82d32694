//! Greedy nearest-neighbor tracker.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::matching::closest_point;
use crate::{Color, Error, Point, PointSerie, Result, Track, TrackSet};

/// What to do when the nearest point of a later frame is too far away.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapPolicy {
    /// End the track at that frame.
    #[default]
    Stop,
    /// Skip that frame and keep searching the following ones from the last
    /// linked point. An empty frame still ends the track.
    Bridge,
}

/// Parameters for one linking run.
///
/// `channel` and `color` only annotate exported tracks; they never change
/// which points get linked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackingParams {
    /// Maximum travel distance between two linked points, in point units.
    pub max_distance: f64,

    /// A track is kept only with strictly more points than this.
    pub min_tracked_frames: i32,

    /// Behavior on an out-of-range nearest point.
    pub gap_policy: GapPolicy,

    /// Output channel used to tag exported tracks.
    pub channel: Option<u32>,

    /// Display color of exported tracks.
    pub color: Option<Color>,
}

impl Default for TrackingParams {
    fn default() -> Self {
        Self {
            max_distance: 5.0,
            min_tracked_frames: 3,
            gap_policy: GapPolicy::Stop,
            channel: Some(0),
            color: None,
        }
    }
}

impl TrackingParams {
    /// Create parameters with the given gate and minimum length.
    ///
    /// # Arguments
    /// * `max_distance` - Maximum travel distance between two frames
    /// * `min_tracked_frames` - Tracks need strictly more points than this
    pub fn new(max_distance: f64, min_tracked_frames: i32) -> Self {
        Self {
            max_distance,
            min_tracked_frames,
            ..Self::default()
        }
    }

    pub fn with_gap_policy(mut self, gap_policy: GapPolicy) -> Self {
        self.gap_policy = gap_policy;
        self
    }

    pub fn with_channel(mut self, channel: Option<u32>) -> Self {
        self.channel = channel;
        self
    }

    pub fn with_color(mut self, color: Option<Color>) -> Self {
        self.color = color;
        self
    }

    /// Reject thresholds the tracker cannot work with.
    pub fn validate(&self) -> Result<()> {
        if !self.max_distance.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "max_distance must be finite, got {}",
                self.max_distance
            )));
        }

        if self.max_distance < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "max_distance must be non-negative, got {}",
                self.max_distance
            )));
        }

        if self.min_tracked_frames < 0 {
            return Err(Error::InvalidConfig(format!(
                "min_tracked_frames must be non-negative, got {}",
                self.min_tracked_frames
            )));
        }

        Ok(())
    }

    /// Load and validate parameters from JSON. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Links per-frame detections into tracks.
///
/// For every point still unclaimed at frame `i`, a track is grown forward by
/// taking the nearest remaining point of each following frame, as long as it
/// lies within `max_distance`. Linked points are consumed so that no point
/// belongs to two tracks. The assignment is greedy and never revisited.
///
/// Worst case is O(frames x points^2); frames are expected to hold few
/// detections.
#[derive(Debug, Clone)]
pub struct GreedyTracker {
    params: TrackingParams,
}

impl GreedyTracker {
    /// Create a tracker after validating `params`.
    pub fn new(params: TrackingParams) -> Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &TrackingParams {
        &self.params
    }

    /// Link `frames` (one point serie per time point) into tracks.
    ///
    /// `frames` is left untouched; the tracker works on its own copy.
    pub fn link(&self, frames: &[PointSerie]) -> TrackSet {
        let mut pool = snapshot(frames);
        let mut tracks = TrackSet::new();
        let mut discarded = 0usize;

        // The last frame has nothing to extend into.
        for i in 0..pool.len().saturating_sub(1) {
            let (head, later) = pool.split_at_mut(i + 1);
            let current = &head[i];

            for start in current.iter() {
                let track = self.extend(start.clone(), later);

                if track.len() as i64 > i64::from(self.params.min_tracked_frames) {
                    trace!(frame = i, points = track.len(), "keeping track");
                    tracks.push_named(track);
                } else {
                    trace!(frame = i, points = track.len(), "discarding short track");
                    discarded += 1;
                }
            }
        }

        debug!(
            frames = frames.len(),
            kept = tracks.len(),
            discarded,
            "linked detections"
        );

        tracks
    }

    // Grow a track from `start` through `later` frames, consuming the points
    // it links. Distances are measured from the last linked point.
    fn extend(&self, start: Point, later: &mut [PointSerie]) -> Track {
        let mut reference = start.clone();
        let mut track = Track::with_point(start);

        for frame in later.iter_mut() {
            let Some(closest) = closest_point(&reference, frame) else {
                break;
            };

            if closest.distance <= self.params.max_distance {
                let point = frame.take(closest.index);
                track.append_tag(point.tag());
                reference = point.clone();
                track.push(point);
                continue;
            }

            match self.params.gap_policy {
                GapPolicy::Stop => break,
                GapPolicy::Bridge => continue,
            }
        }

        track
    }
}

/// Validate `params` and link `frames` in one call.
pub fn link(frames: &[PointSerie], params: &TrackingParams) -> Result<TrackSet> {
    let tracker = GreedyTracker::new(params.clone())?;
    Ok(tracker.link(frames))
}

// Private working copy of the detections. Points without a frame index are
// given the index of the frame they sit in.
fn snapshot(frames: &[PointSerie]) -> Vec<PointSerie> {
    frames
        .iter()
        .enumerate()
        .map(|(i, frame)| {
            let mut copy = frame.clone();
            copy.stamp_frame(i);
            copy
        })
        .collect()
}
