#![allow(
    clippy::missing_docs_in_private_items,
    reason = "Internal implementation details don't need public documentation"
)]
#![allow(
    clippy::missing_inline_in_public_items,
    reason = "Inlining decisions left to compiler for this crate"
)]

//! Host render tree for tour bars: an HTML document parsed with html5ever into
//! an `indextree` arena, with the class-token queries, attribute writes and
//! width metrics the tour bar binding needs.

pub mod dom;
pub mod metrics;
pub mod parser;

pub use dom::class_list;
pub use dom::{DomNode, Document, NodeKind};
pub use indextree::NodeId;
pub use metrics::{DeclaredMetrics, ElementMetrics};
pub use parser::parse_html;
