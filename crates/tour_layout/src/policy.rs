//! Layout policy: the three independent axes a tour bar is configured along.
//!
//! A policy is picked per container type and passed explicitly; nothing here
//! inspects ambient data to choose between variants.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::flags::{StatusFlags, StepStatus};

/// Which edge of the track percentage offsets are measured from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    /// Offsets run from the left edge; marker 0 sits nearest to it.
    Leading,
    /// Offsets run from the right edge; the last marker sits nearest to it.
    #[default]
    Trailing,
}

impl Anchor {
    /// Physical CSS edge the anchor corresponds to in a left-to-right track.
    pub const fn edge(self) -> &'static str {
        match self {
            Self::Leading => "left",
            Self::Trailing => "right",
        }
    }

    /// Number of segments between the anchor edge and marker `index`.
    ///
    /// An `index` past the end counts as sitting on the trailing edge.
    pub const fn steps_from_edge(self, index: usize, count: usize) -> usize {
        match self {
            Self::Leading => index,
            Self::Trailing => count.saturating_sub(index).saturating_sub(1),
        }
    }

    /// Index of the marker closest to the anchor edge. `0` for an empty track.
    pub const fn edge_index(self, count: usize) -> usize {
        match self {
            Self::Leading => 0,
            Self::Trailing => count.saturating_sub(1),
        }
    }
}

/// How `n` markers divide the track.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Spacing {
    /// `n` equal segments of `100 / n`; the far edge stays unoccupied.
    #[default]
    Uniform,
    /// `n - 1` segments of `100 / (n - 1)`; the end markers land on 0% and 100%.
    Endpoint,
}

impl Spacing {
    /// Width of one segment in percent. A lone marker under endpoint spacing
    /// has nothing to divide, so its segment is 0.
    pub fn segment(self, count: usize) -> f64 {
        match self {
            Self::Uniform if count > 0 => 100.0 / count as f64,
            Self::Endpoint if count > 1 => 100.0 / (count - 1) as f64,
            Self::Uniform | Self::Endpoint => 0.0,
        }
    }

    /// Offset in percent of a marker `steps` segments away from the anchor edge.
    ///
    /// Computed as `100 * steps / denominator` rather than `segment * steps`
    /// so the edge markers land exactly on 0 and 100.
    pub fn offset(self, steps: usize, count: usize) -> f64 {
        let denominator = match self {
            Self::Uniform => count,
            Self::Endpoint => count.saturating_sub(1),
        };
        if denominator == 0 {
            return 0.0;
        }
        100.0 * steps as f64 / denominator as f64
    }
}

/// Rule that picks the marker representing "progress achieved up to here".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CurrentStepRule {
    /// First marker flagged `current available`; failing that, the first
    /// marker after the start flagged `incomplete available`.
    #[default]
    FlagBased,
    /// Last marker flagged `complete`.
    LastComplete,
}

impl CurrentStepRule {
    /// Index of the current step among `flags`, if any marker qualifies.
    pub fn find(self, flags: &[StatusFlags]) -> Option<usize> {
        match self {
            Self::FlagBased => {
                let current = StatusFlags::EMPTY
                    .with(StepStatus::Current)
                    .with(StepStatus::Available);
                let reachable = StatusFlags::EMPTY
                    .with(StepStatus::Incomplete)
                    .with(StepStatus::Available);
                flags
                    .iter()
                    .position(|marker| marker.contains_all(current))
                    .or_else(|| {
                        flags
                            .iter()
                            .enumerate()
                            .skip(1)
                            .find(|(_, marker)| marker.contains_all(reachable))
                            .map(|(index, _)| index)
                    })
            }
            Self::LastComplete => flags
                .iter()
                .rposition(|marker| marker.contains(StepStatus::Complete)),
        }
    }
}

/// The full policy record for one container type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct LayoutPolicy {
    pub anchor: Anchor,
    pub spacing: Spacing,
    pub current_step: CurrentStepRule,
}

/// Named presets, in the order they are matched when displaying a policy.
const PRESETS: [(&str, LayoutPolicy); 3] = [
    (
        "leading-endpoint-flags",
        LayoutPolicy::LEADING_ENDPOINT_FLAGS,
    ),
    (
        "trailing-uniform-flags",
        LayoutPolicy::TRAILING_UNIFORM_FLAGS,
    ),
    (
        "trailing-uniform-last-complete",
        LayoutPolicy::TRAILING_UNIFORM_LAST_COMPLETE,
    ),
];

impl LayoutPolicy {
    /// Markers from the left edge, ends pinned to 0% and 100%, flag-based current step.
    pub const LEADING_ENDPOINT_FLAGS: Self = Self::new(
        Anchor::Leading,
        Spacing::Endpoint,
        CurrentStepRule::FlagBased,
    );

    /// Markers from the right edge in `n` equal segments, flag-based current step.
    pub const TRAILING_UNIFORM_FLAGS: Self = Self::new(
        Anchor::Trailing,
        Spacing::Uniform,
        CurrentStepRule::FlagBased,
    );

    /// Markers from the right edge in `n` equal segments, fill up to the last complete step.
    pub const TRAILING_UNIFORM_LAST_COMPLETE: Self = Self::new(
        Anchor::Trailing,
        Spacing::Uniform,
        CurrentStepRule::LastComplete,
    );

    pub const fn new(anchor: Anchor, spacing: Spacing, current_step: CurrentStepRule) -> Self {
        Self {
            anchor,
            spacing,
            current_step,
        }
    }

    /// Name of the preset this policy matches, if any.
    pub fn preset_name(&self) -> Option<&'static str> {
        PRESETS
            .iter()
            .find(|(_, preset)| preset == self)
            .map(|(name, _)| *name)
    }

    /// Percentage offset of marker `index` out of `count`, from the anchor edge.
    pub fn offset(&self, index: usize, count: usize) -> f64 {
        self.spacing
            .offset(self.anchor.steps_from_edge(index, count), count)
    }

    /// Whether the label of marker `index` is left uncentered.
    ///
    /// Under uniform spacing the marker on the anchor edge sits flush with the
    /// track end, and centering its label would push it past the track.
    pub fn skips_label(&self, index: usize, count: usize) -> bool {
        match self.spacing {
            Spacing::Uniform => index == self.anchor.edge_index(count),
            Spacing::Endpoint => false,
        }
    }
}

/// A preset name that matched none of the known presets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tour layout preset `{0}`")]
pub struct UnknownPreset(pub String);

impl FromStr for LayoutPolicy {
    type Err = UnknownPreset;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let trimmed = name.trim();
        PRESETS
            .iter()
            .find(|(preset, _)| preset.eq_ignore_ascii_case(trimmed))
            .map(|(_, policy)| *policy)
            .ok_or_else(|| UnknownPreset(trimmed.to_owned()))
    }
}

impl fmt::Display for LayoutPolicy {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = self.preset_name() {
            return formatter.write_str(name);
        }
        write!(
            formatter,
            "{:?}/{:?}/{:?}",
            self.anchor, self.spacing, self.current_step
        )
    }
}
