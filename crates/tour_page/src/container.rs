//! Lays out one tour bar container inside a document.
//!
//! Markers and labels are collected in document order with container-wide
//! class queries, so the host markup must keep them index-aligned: the label of
//! marker `i` is the `i`-th label in the container. Misaligned lists are
//! clamped and reported, never fatal.

use log::{debug, warn};
use tour_dom::{DeclaredMetrics, Document, ElementMetrics, NodeId, class_list};
use tour_layout::{
    LabelGeometry, LayoutPolicy, MarkerGeometry, Misalignment, StatusFlags, TourPlacement,
    compute_placement,
};
use tour_style_attr::{percent, px, set_property};

use crate::config::{MarkupClasses, TourConfig};
use crate::error::{ContainerPart, TourError};

/// What happened to one container.
#[derive(Clone, Debug, PartialEq)]
pub enum LayoutOutcome {
    /// No markers: nothing was written and the bar stays hidden.
    Empty,
    Laid(ContainerLayout),
}

/// Summary of a container that was laid out.
#[derive(Clone, Debug, PartialEq)]
pub struct ContainerLayout {
    pub markers: usize,
    pub policy: LayoutPolicy,
    /// Index of the step the fill runs up to, if any.
    pub current_step: Option<usize>,
    pub misalignment: Option<Misalignment>,
}

/// The parts of a container found by class.
struct ContainerParts {
    markers: Vec<NodeId>,
    labels: Vec<NodeId>,
    fill: NodeId,
    wrapper: NodeId,
}

/// Stateless layout engine for tour bar containers.
#[derive(Clone, Debug)]
pub struct TourBarLayout<M = DeclaredMetrics> {
    policy: LayoutPolicy,
    classes: MarkupClasses,
    metrics: M,
}

impl TourBarLayout<DeclaredMetrics> {
    pub fn from_config(config: TourConfig) -> Self {
        Self::new(config.policy, config.classes, config.metrics)
    }
}

impl<M: ElementMetrics> TourBarLayout<M> {
    pub const fn new(policy: LayoutPolicy, classes: MarkupClasses, metrics: M) -> Self {
        Self {
            policy,
            classes,
            metrics,
        }
    }

    pub const fn classes(&self) -> &MarkupClasses {
        &self.classes
    }

    pub const fn policy(&self) -> LayoutPolicy {
        self.policy
    }

    /// Position the markers, labels and fill of `container`, then reveal it.
    ///
    /// # Errors
    /// Returns an error without touching the document if the container lacks
    /// its fill segment or bar wrapper, or names an unknown layout preset.
    pub fn layout(&self, doc: &mut Document, container: NodeId) -> Result<LayoutOutcome, TourError> {
        if doc.tag(container).is_none() {
            return Err(TourError::NotAnElement);
        }
        let Some(parts) = self.find_parts(doc, container)? else {
            debug!("tour container {container:?} has no markers; leaving it untouched");
            return Ok(LayoutOutcome::Empty);
        };
        let policy = self.resolve_policy(doc, container)?;

        let (markers, labels) = self.measure(doc, &parts);

        let Some(placement) = compute_placement(&markers, &labels, &policy) else {
            return Ok(LayoutOutcome::Empty);
        };
        self.apply(doc, &parts, &placement);

        Ok(LayoutOutcome::Laid(ContainerLayout {
            markers: markers.len(),
            policy,
            current_step: placement.fill.map(|fill| fill.current_step),
            misalignment: placement.misalignment,
        }))
    }

    /// `None` when the container has no markers. Fill and wrapper are only
    /// required once there is something to lay out.
    fn find_parts(&self, doc: &Document, container: NodeId) -> Result<Option<ContainerParts>, TourError> {
        let markers = doc.elements_by_class(container, &self.classes.marker);
        if markers.is_empty() {
            return Ok(None);
        }
        let fill = doc
            .first_by_class(container, &self.classes.fill)
            .ok_or_else(|| TourError::MalformedContainer {
                part: ContainerPart::Fill,
                class: self.classes.fill.clone(),
            })?;
        let wrapper = doc
            .first_by_class(container, &self.classes.wrapper)
            .ok_or_else(|| TourError::MalformedContainer {
                part: ContainerPart::Wrapper,
                class: self.classes.wrapper.clone(),
            })?;
        Ok(Some(ContainerParts {
            labels: doc.elements_by_class(container, &self.classes.label),
            markers,
            fill,
            wrapper,
        }))
    }

    fn measure(&self, doc: &Document, parts: &ContainerParts) -> (Vec<MarkerGeometry>, Vec<LabelGeometry>) {
        let markers = parts
            .markers
            .iter()
            .map(|marker| {
                let flags = doc
                    .attribute(*marker, "class")
                    .map(StatusFlags::from_class_attr)
                    .unwrap_or_default();
                MarkerGeometry::new(self.metrics.box_width(doc, *marker), flags)
            })
            .collect();
        let labels = parts
            .labels
            .iter()
            .map(|label| LabelGeometry::new(self.metrics.text_width(doc, *label)))
            .collect();
        (markers, labels)
    }

    fn resolve_policy(&self, doc: &Document, container: NodeId) -> Result<LayoutPolicy, TourError> {
        match doc.attribute(container, &self.classes.policy_attribute) {
            Some(name) if !name.trim().is_empty() => Ok(name.parse()?),
            Some(_) | None => Ok(self.policy),
        }
    }

    fn apply(&self, doc: &mut Document, parts: &ContainerParts, placement: &TourPlacement) {
        let edge = placement.anchor.edge();
        let label_margin = format!("margin-{edge}");

        for (marker, placed) in parts.markers.iter().zip(&placement.markers) {
            set_style(doc, *marker, edge, &percent(placed.offset_percent));
        }
        for (label, placed) in parts.labels.iter().zip(&placement.markers) {
            if let Some(shift) = placed.label_shift_px {
                set_style(doc, *label, &label_margin, &px(shift));
            }
        }

        if let Some(fill) = placement.fill {
            set_style(doc, parts.fill, "width", &percent(fill.extent_percent));
            if let Some(shift) = fill.start_shift_px {
                set_style(doc, parts.fill, "margin-left", &px(shift));
            }
        }

        let revealed = doc
            .attribute(parts.wrapper, "class")
            .and_then(|class_attr| class_list::remove(class_attr, &self.classes.reveal_token));
        if let Some(class_attr) = revealed {
            doc.set_attribute(parts.wrapper, "class", class_attr);
        }
    }
}

/// Set one inline style property, keeping the element's other declarations.
fn set_style(doc: &mut Document, node: NodeId, property: &str, value: &str) {
    let updated = set_property(doc.attribute(node, "style").unwrap_or_default(), property, value);
    if !doc.set_attribute(node, "style", updated) {
        warn!("cannot style tour node {node:?}: not an element");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tour_dom::parse_html;
    use tour_style_attr::property_value;

    fn style_of(doc: &Document, node: NodeId, property: &str) -> Option<String> {
        doc.attribute(node, "style")
            .and_then(|style| property_value(style, property))
    }

    fn first(doc: &Document, class: &str) -> NodeId {
        doc.first_by_class(doc.root(), class).expect("fixture element")
    }

    #[test]
    fn labels_are_centered_on_the_anchor_side() {
        let mut doc = parse_html(
            r#"<div class="tour-wrap"><div class="tour-bar-wrap hidden">
                <div class="tour-bar"><div class="completed"></div></div>
                <a class="step-circle complete available" data-width="20"><span class="step-name" data-width="60">A</span></a>
                <a class="step-circle current available" data-width="20"><span class="step-name" data-width="40">B</span></a>
            </div></div>"#,
        )
        .expect("valid html");
        let container = first(&doc, "tour-wrap");
        let layout = TourBarLayout::from_config(TourConfig::default());
        let outcome = layout.layout(&mut doc, container).expect("well-formed container");

        assert_eq!(
            outcome,
            LayoutOutcome::Laid(ContainerLayout {
                markers: 2,
                policy: LayoutPolicy::TRAILING_UNIFORM_FLAGS,
                current_step: Some(1),
                misalignment: None,
            })
        );
        let labels = doc.elements_by_class(container, "step-name");
        assert_eq!(style_of(&doc, labels[0], "margin-right").as_deref(), Some("-20px"));
        // The last marker sits on the trailing edge and keeps its natural label position
        assert_eq!(doc.attribute(labels[1], "style"), None);

        let fill = first(&doc, "completed");
        assert_eq!(style_of(&doc, fill, "width").as_deref(), Some("100%"));
        assert_eq!(style_of(&doc, fill, "margin-left").as_deref(), Some("-10px"));
    }

    #[test]
    fn malformed_container_is_left_untouched() {
        let html = r#"<div class="tour-wrap"><div class="tour-bar-wrap hidden">
                <a class="step-circle current available"><span class="step-name">A</span></a>
            </div></div>"#;
        let mut doc = parse_html(html).expect("valid html");
        let before = doc.to_html();
        let container = first(&doc, "tour-wrap");

        let err = TourBarLayout::from_config(TourConfig::default())
            .layout(&mut doc, container)
            .unwrap_err();
        assert_eq!(
            err,
            TourError::MalformedContainer {
                part: ContainerPart::Fill,
                class: "completed".to_owned(),
            }
        );
        assert_eq!(doc.to_html(), before);
    }

    #[test]
    fn container_attribute_overrides_the_page_policy() {
        let mut doc = parse_html(
            r#"<div class="tour-wrap" data-tour-layout="leading-endpoint-flags"><div class="tour-bar-wrap">
                <div class="completed"></div>
                <a class="step-circle complete available"><span class="step-name" data-width="60">A</span></a>
                <a class="step-circle current available"><span class="step-name" data-width="40">B</span></a>
                <a class="step-circle incomplete unavailable"><span class="step-name" data-width="20">C</span></a>
            </div></div>"#,
        )
        .expect("valid html");
        let container = first(&doc, "tour-wrap");
        TourBarLayout::from_config(TourConfig::default())
            .layout(&mut doc, container)
            .expect("well-formed container");

        let markers = doc.elements_by_class(container, "step-circle");
        let lefts: Vec<Option<String>> = markers
            .iter()
            .map(|marker| style_of(&doc, *marker, "left"))
            .collect();
        assert_eq!(
            lefts,
            vec![Some("0%".to_owned()), Some("50%".to_owned()), Some("100%".to_owned())]
        );
        // Endpoint spacing centers every label, on the left edge
        let labels = doc.elements_by_class(container, "step-name");
        let label_margins: Vec<Option<String>> = labels
            .iter()
            .map(|label| style_of(&doc, *label, "margin-left"))
            .collect();
        assert_eq!(
            label_margins,
            vec![Some("-20px".to_owned()), Some("-10px".to_owned()), Some("0px".to_owned())]
        );
        assert!(labels.iter().all(|label| style_of(&doc, *label, "margin-right").is_none()));

        let fill = first(&doc, "completed");
        assert_eq!(style_of(&doc, fill, "width").as_deref(), Some("50%"));
        assert_eq!(style_of(&doc, fill, "margin-left"), None);
    }

    #[test]
    fn unknown_container_policy_is_an_error() {
        let mut doc = parse_html(
            r#"<div class="tour-wrap" data-tour-layout="zigzag"><div class="tour-bar-wrap">
                <div class="completed"></div><a class="step-circle"></a>
            </div></div>"#,
        )
        .expect("valid html");
        let container = first(&doc, "tour-wrap");
        let err = TourBarLayout::from_config(TourConfig::default())
            .layout(&mut doc, container)
            .unwrap_err();
        assert!(matches!(err, TourError::UnknownPolicy(_)));
        assert_eq!(
            err.to_string(),
            "tour container requests an unknown layout: unknown tour layout preset `zigzag`"
        );
    }

    #[test]
    fn non_element_container_is_rejected() {
        let mut doc = Document::new();
        let root = doc.root();
        let err = TourBarLayout::from_config(TourConfig::default())
            .layout(&mut doc, root)
            .unwrap_err();
        assert_eq!(err, TourError::NotAnElement);
    }
}
