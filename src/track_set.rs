//! Ordered collection of kept tracks returned by the tracker.

use crate::tags::TagFilter;
use crate::Track;
use serde::{Deserialize, Serialize};

/// Tracks kept by one linking run, in discovery order.
///
/// Track `i` (0-based) is named `Track_{i+1}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackSet {
    tracks: Vec<Track>,
}

impl TrackSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name `track` after its position in the set and append it.
    pub(crate) fn push_named(&mut self, mut track: Track) {
        track.set_name(format!("Track_{}", self.tracks.len() + 1));
        self.tracks.push(track);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Track> {
        self.tracks.iter()
    }

    /// Tracks accepted by `filter`, with their index in the full set.
    pub fn filtered(&self, filter: TagFilter) -> impl Iterator<Item = (usize, &Track)> + '_ {
        self.tracks
            .iter()
            .enumerate()
            .filter(move |(_, track)| filter.accepts(track.tag()))
    }

    pub fn into_tracks(self) -> Vec<Track> {
        self.tracks
    }
}

impl IntoIterator for TrackSet {
    type Item = Track;
    type IntoIter = std::vec::IntoIter<Track>;

    fn into_iter(self) -> Self::IntoIter {
        self.tracks.into_iter()
    }
}

impl<'a> IntoIterator for &'a TrackSet {
    type Item = &'a Track;
    type IntoIter = std::slice::Iter<'a, Track>;

    fn into_iter(self) -> Self::IntoIter {
        self.tracks.iter()
    }
}
