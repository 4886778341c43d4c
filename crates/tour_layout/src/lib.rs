//! Tour bar layout.
//!
//! Turns the geometry of a tour bar (marker widths, label widths and the
//! status flags carried by each marker) into placements: a percentage offset
//! per marker, a pixel centering shift per label and the extent of the
//! "completed" fill segment.
//!
//! The computation is pure. Reading geometry out of a render tree and writing
//! the placement back is the job of the host binding.

#![forbid(unsafe_code)]

pub mod flags;
pub mod placement;
pub mod policy;

pub use flags::{StatusFlags, StepStatus};
pub use placement::{
    FillPlacement, LabelGeometry, MarkerGeometry, MarkerPlacement, Misalignment, TourPlacement,
    compute_placement, label_shift,
};
pub use policy::{Anchor, CurrentStepRule, LayoutPolicy, Spacing, UnknownPreset};
