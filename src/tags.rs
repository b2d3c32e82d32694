//! Tag markers and tag-based track filtering.
//!
//! Tags are free-form strings, but two substrings carry meaning for
//! filtering: `"Prox"` (proximity) and `"Coloc"` (colocalization). Both are
//! computed upstream and only read here.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Marker substring for proximity.
pub const PROX_MARKER: &str = "Prox";

/// Marker substring for colocalization.
pub const COLOC_MARKER: &str = "Coloc";

/// Structured view of the markers present in a tag string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TagMarkers {
    pub prox: bool,
    pub coloc: bool,
}

impl TagMarkers {
    /// Case-sensitive substring check, so "Proximal" counts as `prox`.
    pub fn from_tag(tag: &str) -> Self {
        Self {
            prox: tag.contains(PROX_MARKER),
            coloc: tag.contains(COLOC_MARKER),
        }
    }
}

/// Selection applied to tracks before export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TagFilter {
    /// Keep every track.
    #[default]
    All,
    /// Keep tracks carrying neither marker.
    NonProxColoc,
    /// Keep tracks carrying the proximity marker.
    Prox,
    /// Keep tracks carrying the colocalization marker.
    Coloc,
    /// Keep tracks with proximity but no colocalization.
    ProxOnly,
    /// Keep tracks with colocalization but no proximity.
    ColocOnly,
}

impl TagFilter {
    pub const VARIANTS: [TagFilter; 6] = [
        TagFilter::All,
        TagFilter::NonProxColoc,
        TagFilter::Prox,
        TagFilter::Coloc,
        TagFilter::ProxOnly,
        TagFilter::ColocOnly,
    ];

    /// Whether a track with these markers passes the filter.
    pub fn accepts_markers(self, markers: TagMarkers) -> bool {
        let TagMarkers { prox, coloc } = markers;
        match self {
            TagFilter::All => true,
            TagFilter::NonProxColoc => !prox && !coloc,
            TagFilter::Prox => prox,
            TagFilter::Coloc => coloc,
            TagFilter::ProxOnly => prox && !coloc,
            TagFilter::ColocOnly => coloc && !prox,
        }
    }

    /// Whether a track with this tag string passes the filter.
    pub fn accepts(self, tag: &str) -> bool {
        self.accepts_markers(TagMarkers::from_tag(tag))
    }

    /// Keyword used to select this filter.
    pub fn keyword(self) -> &'static str {
        match self {
            TagFilter::All => "All",
            TagFilter::NonProxColoc => "NonProxColoc",
            TagFilter::Prox => "Prox",
            TagFilter::Coloc => "Coloc",
            TagFilter::ProxOnly => "ProxOnly",
            TagFilter::ColocOnly => "ColocOnly",
        }
    }
}

impl FromStr for TagFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        TagFilter::VARIANTS
            .into_iter()
            .find(|f| f.keyword() == s)
            .ok_or_else(|| Error::InvalidArgument(format!("unknown tag filter '{}'", s)))
    }
}

impl fmt::Display for TagFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
