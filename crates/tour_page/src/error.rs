use core::fmt;

use thiserror::Error;
use tour_layout::UnknownPreset;

/// A required part of a tour bar container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContainerPart {
    Fill,
    Wrapper,
}

impl fmt::Display for ContainerPart {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(match self {
            Self::Fill => "fill segment",
            Self::Wrapper => "bar wrapper",
        })
    }
}

/// Why one container could not be laid out. These never abort a page run.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TourError {
    #[error("tour container has no {part} (class `{class}`)")]
    MalformedContainer { part: ContainerPart, class: String },
    #[error("tour container requests an unknown layout: {0}")]
    UnknownPolicy(#[from] UnknownPreset),
    #[error("tour container is not an element of this document")]
    NotAnElement,
}
