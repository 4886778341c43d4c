//! HTML5 parsing using html5ever.

use anyhow::{Context as _, Error};
use html5ever::tendril::TendrilSink as _;
use html5ever::{ParseOpts, parse_document};
use log::trace;
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};

use crate::dom::Document;
use indextree::NodeId;

/// Parse an HTML document.
///
/// # Errors
/// Returns an error if the input cannot be read as UTF-8.
pub fn parse_html(html: &str) -> Result<Document, Error> {
    let rc_dom: RcDom = parse_document(RcDom::default(), ParseOpts::default())
        .from_utf8()
        .read_from(&mut html.as_bytes())
        .context("reading HTML document")?;

    let mut doc = Document::new();
    let root = doc.root();
    convert_node(&mut doc, &rc_dom.document, root);
    trace!("parsed {} bytes of html", html.len());
    Ok(doc)
}

/// Copy an html5ever node and its subtree under `parent`.
fn convert_node(doc: &mut Document, rc_node: &Handle, parent: NodeId) {
    match &rc_node.data {
        RcNodeData::Document => {
            for child in rc_node.children.borrow().iter() {
                convert_node(doc, child, parent);
            }
        }

        RcNodeData::Doctype { name, .. } => doc.set_doctype(name.to_string()),

        RcNodeData::Text { contents } => {
            let text = contents.borrow().to_string();
            // Whitespace-only runs carry no content for the tour bar
            if text.trim().is_empty() {
                return;
            }
            doc.append_text(parent, text);
        }

        RcNodeData::Comment { contents } => {
            doc.append_comment(parent, contents.to_string());
        }

        RcNodeData::Element { name, attrs, .. } => {
            let attributes: Vec<(String, String)> = attrs
                .borrow()
                .iter()
                .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
                .collect();
            let node = doc.append_element(parent, &name.local, attributes);
            for child in rc_node.children.borrow().iter() {
                convert_node(doc, child, node);
            }
        }

        RcNodeData::ProcessingInstruction { .. } => {}
    }
}
