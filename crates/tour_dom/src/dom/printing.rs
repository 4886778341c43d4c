
use super::{Document, DomNode, NodeKind};
use indextree::NodeId;

use serde_json::{Map, Value, json};

/// Elements that never have content or an end tag.
const VOID_ELEMENTS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr", "param",
];

/// Elements whose text is written without escaping.
const RAW_TEXT_ELEMENTS: [&str; 2] = ["script", "style"];

fn escape_text(text: &str, out: &mut String) {
    for character in text.chars() {
        match character {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{00A0}' => out.push_str("&nbsp;"),
            other => out.push(other),
        }
    }
}

fn escape_attr(value: &str, out: &mut String) {
    for character in value.chars() {
        match character {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\u{00A0}' => out.push_str("&nbsp;"),
            other => out.push(other),
        }
    }
}

fn write_html(doc: &Document, id: NodeId, raw_text: bool, out: &mut String) {
    let Some(DomNode { kind, attrs }) = doc.node(id) else {
        return;
    };
    match kind {
        NodeKind::Document => {
            for child in doc.children(id) {
                write_html(doc, child, false, out);
            }
        }
        NodeKind::Element { tag } => {
            out.push('<');
            out.push_str(tag);
            for (name, value) in attrs {
                out.push(' ');
                out.push_str(name);
                out.push_str("=\"");
                escape_attr(value, out);
                out.push('"');
            }
            out.push('>');
            if VOID_ELEMENTS.contains(&tag.as_str()) {
                return;
            }
            let child_raw = RAW_TEXT_ELEMENTS.contains(&tag.as_str());
            for child in doc.children(id) {
                write_html(doc, child, child_raw, out);
            }
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
        }
        NodeKind::Text { text } => {
            if raw_text {
                out.push_str(text);
            } else {
                escape_text(text, out);
            }
        }
        NodeKind::Comment { text } => {
            out.push_str("<!--");
            out.push_str(text);
            out.push_str("-->");
        }
    }
}

fn flush_text(children: &mut Vec<Value>, text_buf: &mut String) {
    if !text_buf.trim().is_empty() {
        children.push(json!({ "type": "text", "text": text_buf.clone() }));
    }
    text_buf.clear();
}

fn coalesce_children(doc: &Document, id: NodeId) -> Vec<Value> {
    let mut children: Vec<Value> = Vec::new();
    let mut text_buf = String::new();
    for child in doc.children(id) {
        match doc.node(child).map(|entry| &entry.kind) {
            Some(NodeKind::Text { text }) => text_buf.push_str(text),
            Some(NodeKind::Comment { .. }) | None => {}
            Some(NodeKind::Document | NodeKind::Element { .. }) => {
                flush_text(&mut children, &mut text_buf);
                children.push(node_to_json(doc, child));
            }
        }
    }
    flush_text(&mut children, &mut text_buf);
    children
}

fn node_to_json(doc: &Document, id: NodeId) -> Value {
    let Some(DomNode { kind, attrs }) = doc.node(id) else {
        return Value::Null;
    };
    match kind {
        NodeKind::Document => json!({ "type": "document", "children": coalesce_children(doc, id) }),
        NodeKind::Element { tag } => {
            // Sorted by name for deterministic snapshots
            let mut pairs: Vec<&(String, String)> = attrs.iter().collect();
            pairs.sort_by(|left, right| left.0.cmp(&right.0));
            let mut attrs_obj = Map::new();
            for (name, value) in pairs {
                attrs_obj.insert(name.clone(), Value::String(value.clone()));
            }
            json!({
                "type": "element",
                "tag": tag,
                "attrs": Value::Object(attrs_obj),
                "children": coalesce_children(doc, id),
            })
        }
        NodeKind::Text { text } => json!({ "type": "text", "text": text }),
        NodeKind::Comment { text } => json!({ "type": "comment", "text": text }),
    }
}

impl Document {
    /// Serialize the document back to HTML.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        if let Some(name) = self.doctype() {
            out.push_str("<!DOCTYPE ");
            out.push_str(name);
            out.push('>');
        }
        write_html(self, self.root(), false, &mut out);
        out
    }

    /// Deterministic JSON snapshot: attributes sorted by name, adjacent text
    /// merged, whitespace-only text and comments dropped.
    pub fn to_json(&self) -> Value {
        node_to_json(self, self.root())
    }
}
