//! Placement computation for one tour bar.

use log::{debug, warn};
use serde::Serialize;

use crate::flags::StatusFlags;
use crate::policy::{Anchor, LayoutPolicy};

/// Rendered geometry of one step marker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerGeometry {
    /// Rendered width in pixels.
    pub width: f64,
    pub flags: StatusFlags,
}

impl MarkerGeometry {
    pub const fn new(width: f64, flags: StatusFlags) -> Self {
        Self { width, flags }
    }
}

/// Rendered geometry of one step label.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelGeometry {
    /// Rendered width in pixels.
    pub width: f64,
}

impl LabelGeometry {
    pub const fn new(width: f64) -> Self {
        Self { width }
    }
}

/// Where one marker and its label go.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MarkerPlacement {
    /// Offset from the anchor edge, in percent of the track.
    pub offset_percent: f64,
    /// Signed pixel margin on the anchor side of the label that centers it
    /// over the marker. `None` when the label is skipped or missing.
    pub label_shift_px: Option<f64>,
}

/// Extent of the "completed" fill segment.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FillPlacement {
    /// Index of the marker the fill runs up to.
    pub current_step: usize,
    /// Width of the fill from the left edge, in percent.
    pub extent_percent: f64,
    /// Pixel shift of the fill start, set under trailing anchoring so the fill
    /// edge lands under the middle of the current marker.
    pub start_shift_px: Option<f64>,
}

/// Marker and label counts that disagree. Labels past the shorter list are
/// left alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Misalignment {
    pub markers: usize,
    pub labels: usize,
}

/// Everything a host needs to write back for one container.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TourPlacement {
    pub anchor: Anchor,
    pub markers: Vec<MarkerPlacement>,
    /// `None` when no marker qualifies as the current step; the fill keeps
    /// its markup default.
    pub fill: Option<FillPlacement>,
    pub misalignment: Option<Misalignment>,
}

/// Margin that centers a label of `label_width` over a marker of `marker_width`.
pub fn label_shift(label_width: f64, marker_width: f64) -> f64 {
    -(label_width / 2.0) + (marker_width / 2.0)
}

/// Compute the placement of a tour bar.
///
/// Returns `None` for an empty bar: there is nothing to place and the bar must
/// stay as it is. Markers and labels are paired by index; if the lists differ
/// in length the label pass stops at the shorter one and the result carries a
/// [`Misalignment`].
pub fn compute_placement(
    markers: &[MarkerGeometry],
    labels: &[LabelGeometry],
    policy: &LayoutPolicy,
) -> Option<TourPlacement> {
    let count = markers.len();
    if count == 0 {
        return None;
    }

    let misalignment = (labels.len() != count).then(|| {
        warn!(
            "tour bar has {count} markers but {} labels; centering only the first {}",
            labels.len(),
            count.min(labels.len())
        );
        Misalignment {
            markers: count,
            labels: labels.len(),
        }
    });

    let placed: Vec<MarkerPlacement> = markers
        .iter()
        .enumerate()
        .map(|(index, marker)| {
            let label_shift_px = labels
                .get(index)
                .filter(|_| !policy.skips_label(index, count))
                .map(|label| label_shift(label.width, marker.width));
            MarkerPlacement {
                offset_percent: policy.offset(index, count),
                label_shift_px,
            }
        })
        .collect();

    let flags: Vec<StatusFlags> = markers.iter().map(|marker| marker.flags).collect();
    let fill = policy.current_step.find(&flags).and_then(|current_step| {
        let marker = markers.get(current_step)?;
        let offset = placed.get(current_step)?.offset_percent;
        Some(match policy.anchor {
            Anchor::Leading => FillPlacement {
                current_step,
                extent_percent: offset,
                start_shift_px: None,
            },
            Anchor::Trailing => FillPlacement {
                current_step,
                extent_percent: 100.0 - offset,
                start_shift_px: Some(-(marker.width / 2.0)),
            },
        })
    });

    debug!(
        "placed {count} tour markers with {policy}; current step {:?}",
        fill.map(|placement| placement.current_step)
    );

    Some(TourPlacement {
        anchor: policy.anchor,
        markers: placed,
        fill,
        misalignment,
    })
}
