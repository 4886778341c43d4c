pub mod class_list;
mod printing;

use indextree::{Arena, NodeId};
use smallvec::SmallVec;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum NodeKind {
    #[default]
    Document,
    Element {
        tag: String,
    },
    Text {
        text: String,
    },
    Comment {
        text: String,
    },
}

#[derive(Debug, Clone, Default)]
pub struct DomNode {
    pub kind: NodeKind,
    /// Attributes in source order.
    pub attrs: SmallVec<[(String, String); 4]>,
}

impl DomNode {
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(attr_name, _)| attr_name.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub const fn is_element(&self) -> bool {
        matches!(self.kind, NodeKind::Element { .. })
    }
}

/// An HTML document held in an arena. Node ids stay valid for the life of the
/// document; nothing is ever removed.
#[derive(Debug)]
pub struct Document {
    arena: Arena<DomNode>,
    root: NodeId,
    doctype: Option<String>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        let mut arena = Arena::new();
        Self {
            root: arena.new_node(DomNode::default()),
            arena,
            doctype: None,
        }
    }

    pub const fn root(&self) -> NodeId {
        self.root
    }

    pub fn doctype(&self) -> Option<&str> {
        self.doctype.as_deref()
    }

    pub fn set_doctype(&mut self, name: String) {
        self.doctype = Some(name);
    }

    pub fn node(&self, node: NodeId) -> Option<&DomNode> {
        self.arena.get(node).map(|entry| entry.get())
    }

    fn node_mut(&mut self, node: NodeId) -> Option<&mut DomNode> {
        self.arena.get_mut(node).map(|entry| entry.get_mut())
    }

    fn append(&mut self, parent: NodeId, data: DomNode) -> NodeId {
        let child = self.arena.new_node(data);
        parent.append(child, &mut self.arena);
        child
    }

    /// Append an element with the given attributes under `parent`.
    pub fn append_element<I>(&mut self, parent: NodeId, tag: &str, attrs: I) -> NodeId
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.append(
            parent,
            DomNode {
                kind: NodeKind::Element {
                    tag: tag.to_ascii_lowercase(),
                },
                attrs: attrs.into_iter().collect(),
            },
        )
    }

    pub fn append_text(&mut self, parent: NodeId, text: String) -> NodeId {
        self.append(
            parent,
            DomNode {
                kind: NodeKind::Text { text },
                attrs: SmallVec::new(),
            },
        )
    }

    pub fn append_comment(&mut self, parent: NodeId, text: String) -> NodeId {
        self.append(
            parent,
            DomNode {
                kind: NodeKind::Comment { text },
                attrs: SmallVec::new(),
            },
        )
    }

    pub fn tag(&self, node: NodeId) -> Option<&str> {
        match &self.node(node)?.kind {
            NodeKind::Element { tag } => Some(tag),
            NodeKind::Document | NodeKind::Text { .. } | NodeKind::Comment { .. } => None,
        }
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.node(node)?.attribute(name)
    }

    /// Set an attribute, replacing an existing value. Returns false when
    /// `node` is not an element of this document.
    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: String) -> bool {
        let Some(entry) = self.node_mut(node).filter(|entry| entry.is_element()) else {
            return false;
        };
        match entry
            .attrs
            .iter_mut()
            .find(|(attr_name, _)| attr_name.eq_ignore_ascii_case(name))
        {
            Some((_, existing)) => *existing = value,
            None => entry.attrs.push((name.to_ascii_lowercase(), value)),
        }
        true
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.attribute(node, "class")
            .is_some_and(|class_attr| class_list::contains(class_attr, class))
    }

    pub fn children(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        node.children(&self.arena)
    }

    /// Elements below `scope` carrying `class`, in document order. `scope`
    /// itself is never included.
    pub fn elements_by_class(&self, scope: NodeId, class: &str) -> Vec<NodeId> {
        scope
            .descendants(&self.arena)
            .skip(1)
            .filter(|candidate| self.has_class(*candidate, class))
            .collect()
    }

    /// First element below `scope` carrying `class`.
    pub fn first_by_class(&self, scope: NodeId, class: &str) -> Option<NodeId> {
        scope
            .descendants(&self.arena)
            .skip(1)
            .find(|candidate| self.has_class(*candidate, class))
    }

    /// Concatenated text of every text node below `node`.
    pub fn text_content(&self, node: NodeId) -> String {
        let mut out = String::new();
        for descendant in node.descendants(&self.arena) {
            if let Some(NodeKind::Text { text }) = self.node(descendant).map(|entry| &entry.kind) {
                out.push_str(text);
            }
        }
        out
    }
}
