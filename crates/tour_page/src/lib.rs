//! Tour bar host binding for parsed HTML documents.
//!
//! This crate discovers tour bar containers in a parsed document when the page
//! finishes loading, reads their marker and label geometry, runs the layout
//! computation and writes the result back as inline styles before revealing
//! each bar.

pub mod config;
pub mod container;
pub mod error;
pub mod trigger;

pub use config::{MarkupClasses, TourConfig};
pub use container::{ContainerLayout, LayoutOutcome, TourBarLayout};
pub use error::{ContainerPart, TourError};
pub use trigger::{ContainerReport, PageEvent, PageLoadTrigger, RunReport};

use anyhow::Error;
use tour_dom::{Document, parse_html};

/// Parse `html`, fire the load event and return the laid-out document.
///
/// # Errors
/// Returns an error if the document cannot be parsed. Failures of individual
/// containers are reported in the [`RunReport`] instead.
pub fn process_html(html: &str, config: TourConfig) -> Result<(Document, RunReport), Error> {
    let mut doc = parse_html(html)?;
    let report = PageLoadTrigger::new(config).run(&mut doc);
    Ok((doc, report))
}
