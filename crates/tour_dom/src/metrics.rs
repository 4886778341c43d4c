//! Rendered widths of elements.
//!
//! There is no box tree here, so widths come from what the markup declares.
//! Text boxes without a declared width fall back to a character-count
//! approximation scaled by font size.

use indextree::NodeId;
use serde::{Deserialize, Serialize};
use tour_style_attr::{parse_px, property_value};

use crate::dom::Document;

/// Source of rendered element widths, in pixels.
pub trait ElementMetrics {
    /// Width of a box sized by its stylesheet, such as a step marker.
    fn box_width(&self, doc: &Document, node: NodeId) -> f64;

    /// Width of a box sized by its text, such as a step label.
    fn text_width(&self, doc: &Document, node: NodeId) -> f64;
}

/// Widths from inline `width: <n>px`, then a `data-width` attribute, then
/// the fallbacks below.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct DeclaredMetrics {
    /// Average glyph advance at a 16px font size.
    pub char_width: f64,
    pub font_size: f64,
    /// Width used for boxes that declare nothing.
    pub default_box_width: f64,
}

impl Default for DeclaredMetrics {
    fn default() -> Self {
        Self {
            char_width: 8.0,
            font_size: 16.0,
            default_box_width: 20.0,
        }
    }
}

impl DeclaredMetrics {
    fn declared_width(doc: &Document, node: NodeId) -> Option<f64> {
        doc.attribute(node, "style")
            .and_then(|style| property_value(style, "width"))
            .and_then(|width| parse_px(&width))
            .or_else(|| doc.attribute(node, "data-width").and_then(parse_px))
            .filter(|width| *width >= 0.0)
    }

    /// Approximate advance of `text` after whitespace collapsing.
    pub fn estimate_text(&self, text: &str) -> f64 {
        let glyphs = collapse_whitespace(text).chars().count();
        let scale = (self.font_size / 16.0).max(0.01);
        glyphs as f64 * self.char_width * scale
    }
}

impl ElementMetrics for DeclaredMetrics {
    fn box_width(&self, doc: &Document, node: NodeId) -> f64 {
        Self::declared_width(doc, node).unwrap_or(self.default_box_width)
    }

    fn text_width(&self, doc: &Document, node: NodeId) -> f64 {
        Self::declared_width(doc, node).unwrap_or_else(|| {
            let text = doc.text_content(node);
            if text.trim().is_empty() {
                self.default_box_width
            } else {
                self.estimate_text(&text)
            }
        })
    }
}

/// Collapse runs of ASCII whitespace into one space and trim both ends, as
/// `white-space: normal` does. Non-breaking spaces are kept.
pub fn collapse_whitespace(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut in_whitespace = false;
    for character in input.chars() {
        match character {
            ' ' | '\t' | '\n' | '\r' | '\u{000C}' => {
                if !in_whitespace && !output.is_empty() {
                    output.push(' ');
                }
                in_whitespace = true;
            }
            _ => {
                output.push(character);
                in_whitespace = false;
            }
        }
    }
    if output.ends_with(' ') {
        output.pop();
    }
    output
}
