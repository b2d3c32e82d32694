//! Host-independent descriptions of tracks for display and reporting.
//!
//! Shape-editing and table widgets live in the host application; this module
//! only prepares the data they need: one polyline shape per track, or one
//! report row per tracked point.

use nalgebra::Point2;
use serde::Serialize;

use crate::tags::TagFilter;
use crate::{Color, TrackSet, TrackingParams};

/// A track drawn as a polyline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackShape {
    /// Display name of the shape.
    pub name: String,
    /// Channel position the shape is attached to (0 when unset).
    pub channel_position: u32,
    /// Stroke color, if any.
    pub color: Option<Color>,
    /// Vertices in frame order.
    pub points: Vec<Point2<f64>>,
}

/// One tracked point in a tabular report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    /// 1-based track index within its channel.
    pub track: usize,
    /// 1-based channel index.
    pub channel: usize,
    /// 0-based position of the point along its track.
    pub point: usize,
    pub x: f64,
    pub y: f64,
    pub frame: Option<usize>,
    /// Tag of the point itself.
    pub tag: String,
}

/// Shapes for the tracks of a single linking run.
///
/// Shapes are named `Tracking_Channel {c} Frame {n}`, or `Tracking_Frame {n}`
/// when `params.channel` is unset, `n` being the 1-based track index.
pub fn shapes_for_tracks(tracks: &TrackSet, params: &TrackingParams) -> Vec<TrackShape> {
    let prefix = match params.channel {
        Some(c) => format!("Tracking_Channel {} ", c),
        None => "Tracking_".to_string(),
    };

    tracks
        .iter()
        .enumerate()
        .map(|(i, track)| TrackShape {
            name: format!("{}Frame {}", prefix, i + 1),
            channel_position: params.channel.unwrap_or(0),
            color: params.color,
            points: track.polyline(),
        })
        .collect()
}

/// Shapes for tracks linked separately per channel, keeping only tracks
/// accepted by `filter`.
///
/// `channels[c]` holds the tracks of channel `c`. A shape is named
/// `Track_{n} Channel {c+1}` with `n` the 1-based index in the channel's
/// full track set, so names stay stable whatever the filter.
///
/// With no palette every shape is left uncolored. With a palette, shapes of
/// channel `c` get `palette[c]`, and channels past its end stay uncolored.
pub fn shapes_for_channels(
    channels: &[TrackSet],
    filter: TagFilter,
    palette: Option<&[Color]>,
) -> Vec<TrackShape> {
    let mut shapes = Vec::new();

    for (c, tracks) in channels.iter().enumerate() {
        for (i, track) in tracks.filtered(filter) {
            shapes.push(TrackShape {
                name: format!("Track_{} Channel {}", i + 1, c + 1),
                channel_position: c as u32,
                color: palette.and_then(|p| p.get(c)).copied(),
                points: track.polyline(),
            });
        }
    }

    shapes
}

/// Report rows for every point of every track accepted by `filter`.
pub fn report_rows(channels: &[TrackSet], filter: TagFilter) -> Vec<ReportRow> {
    let mut rows = Vec::new();

    for (c, tracks) in channels.iter().enumerate() {
        for (i, track) in tracks.filtered(filter) {
            rows.extend(track.iter().enumerate().map(|(j, p)| ReportRow {
                track: i + 1,
                channel: c + 1,
                point: j,
                x: p.x(),
                y: p.y(),
                frame: p.frame(),
                tag: p.tag().to_string(),
            }));
        }
    }

    rows
}
