//! Parsing the tour navigation markup into the arena document.

use tour_dom::{DeclaredMetrics, ElementMetrics, class_list, parse_html};

const NAVIGATION: &str = r#"<!DOCTYPE html>
<html><body>
<div class="tour-wrap">
    <div class="tour-name">Example Tour</div>
    <div class="tour-bar-wrap hidden">
        <div class="tour-bar"><div class="completed"></div></div>
        <a href="/step/one/" class="step-circle current complete available" style="width: 24px">
            <span class="step-name">Step One</span>
        </a>
        <a href="/step/two/" class="step-circle incomplete available" data-width="24">
            <span class="step-name">Step Two &amp; More</span>
        </a>
    </div>
</div>
</body></html>"#;

#[test]
fn queries_find_every_part_of_the_bar() {
    let _ = env_logger::builder().is_test(true).try_init();
    let doc = parse_html(NAVIGATION).expect("valid html");
    let container = doc
        .first_by_class(doc.root(), "tour-wrap")
        .expect("container");

    let markers = doc.elements_by_class(container, "step-circle");
    let labels = doc.elements_by_class(container, "step-name");
    assert_eq!(markers.len(), 2);
    assert_eq!(labels.len(), 2);
    assert!(doc.first_by_class(container, "completed").is_some());

    let wrapper = doc
        .first_by_class(container, "tour-bar-wrap")
        .expect("wrapper");
    let class_attr = doc.attribute(wrapper, "class").expect("class attribute");
    assert!(class_list::contains(class_attr, "hidden"));
    assert_eq!(doc.attribute(markers[0], "href"), Some("/step/one/"));
}

#[test]
fn metrics_read_declared_widths_and_estimate_labels() {
    let doc = parse_html(NAVIGATION).expect("valid html");
    let metrics = DeclaredMetrics::default();
    let markers = doc.elements_by_class(doc.root(), "step-circle");
    let labels = doc.elements_by_class(doc.root(), "step-name");

    assert_eq!(metrics.box_width(&doc, markers[0]), 24.0);
    assert_eq!(metrics.box_width(&doc, markers[1]), 24.0);
    // "Step Two & More" is 15 glyphs at 8px
    assert_eq!(metrics.text_width(&doc, labels[1]), 120.0);
}

#[test]
fn serialization_escapes_entities_back() {
    let doc = parse_html(NAVIGATION).expect("valid html");
    let html = doc.to_html();
    assert!(html.starts_with("<!DOCTYPE html><html>"));
    assert!(html.contains("Step Two &amp; More"));
    assert!(html.contains(r#"style="width: 24px""#));

    let snapshot = doc.to_json();
    assert_eq!(snapshot["type"], "document");
}
