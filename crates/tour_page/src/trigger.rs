//! Page load wiring: find every tour bar once the page is ready and lay each
//! one out, isolating failures per container.

use log::{debug, info, warn};
use tour_dom::{DeclaredMetrics, Document, ElementMetrics, NodeId};

use crate::config::TourConfig;
use crate::container::{LayoutOutcome, TourBarLayout};
use crate::error::TourError;

/// Document lifecycle events a host may forward.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PageEvent {
    /// The document has been parsed. Widths may not be final yet.
    DomContentLoaded,
    /// The page and its subresources have loaded.
    Load,
}

/// Result for one container.
#[derive(Clone, Debug, PartialEq)]
pub struct ContainerReport {
    pub container: NodeId,
    pub result: Result<LayoutOutcome, TourError>,
}

/// Per-container results of one page run, in document order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunReport {
    pub containers: Vec<ContainerReport>,
}

impl RunReport {
    /// Number of containers that were positioned and revealed.
    pub fn laid_out(&self) -> usize {
        self.containers
            .iter()
            .filter(|report| matches!(report.result, Ok(LayoutOutcome::Laid(_))))
            .count()
    }

    pub fn failures(&self) -> impl Iterator<Item = (NodeId, &TourError)> {
        self.containers
            .iter()
            .filter_map(|report| report.result.as_ref().err().map(|err| (report.container, err)))
    }

    pub fn is_clean(&self) -> bool {
        self.failures().next().is_none()
    }
}

/// Runs [`TourBarLayout`] over every container on [`PageEvent::Load`].
#[derive(Clone, Debug)]
pub struct PageLoadTrigger<M = DeclaredMetrics> {
    layout: TourBarLayout<M>,
}

impl PageLoadTrigger<DeclaredMetrics> {
    pub fn new(config: TourConfig) -> Self {
        Self::with_layout(TourBarLayout::from_config(config))
    }
}

impl<M: ElementMetrics> PageLoadTrigger<M> {
    pub const fn with_layout(layout: TourBarLayout<M>) -> Self {
        Self { layout }
    }

    pub const fn layout(&self) -> &TourBarLayout<M> {
        &self.layout
    }

    /// React to a lifecycle event. Only [`PageEvent::Load`] triggers a run.
    pub fn handle_event(&self, doc: &mut Document, event: PageEvent) -> Option<RunReport> {
        match event {
            PageEvent::Load => Some(self.run(doc)),
            PageEvent::DomContentLoaded => {
                debug!("ignoring {event:?}; tour bars are laid out on load");
                None
            }
        }
    }

    /// Lay out every container in the document, in document order.
    ///
    /// A container that fails is logged and skipped; the rest still run.
    pub fn run(&self, doc: &mut Document) -> RunReport {
        let containers = doc.elements_by_class(doc.root(), &self.layout.classes().container);
        let mut report = RunReport {
            containers: Vec::with_capacity(containers.len()),
        };
        for container in containers {
            let result = self.layout.layout(doc, container);
            if let Err(err) = &result {
                warn!("skipping tour container {container:?}: {err}");
            }
            report.containers.push(ContainerReport { container, result });
        }
        info!(
            "laid out {} of {} tour containers",
            report.laid_out(),
            report.containers.len()
        );
        report
    }
}
