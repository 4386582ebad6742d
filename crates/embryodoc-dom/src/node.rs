//! Document nodes.

use crate::style::{Edge, Font, FontWeight, Style, StyleKey};

/// Structural role of a container node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Root of a composed page.
    Body,
    /// Site navigation bar.
    Navigation,
    /// Generic grouping block.
    Section,
    /// Children laid out horizontally.
    Row,
    /// Page footer.
    Footer,
}

impl Region {
    pub(crate) fn tag(self) -> &'static str {
        match self {
            Region::Navigation => "nav",
            Region::Footer => "footer",
            Region::Body | Region::Section | Region::Row => "div",
        }
    }

    pub(crate) fn class_name(self) -> &'static str {
        match self {
            Region::Body => "page",
            Region::Navigation => "navbar",
            Region::Section => "section",
            Region::Row => "row-list",
            Region::Footer => "footer",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Text { content: String },
    Link { label: String, target: String },
    Container { region: Region, children: Vec<Node> },
}

/// One renderable element.
///
/// Nodes own their children, so a tree is always finite and acyclic.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    kind: NodeKind,
    id: Option<String>,
    styles: Vec<Style>,
}

impl Node {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            id: None,
            styles: Vec::new(),
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self::new(NodeKind::Text {
            content: content.into(),
        })
    }

    /// A link to `target`, either a `#anchor` or a URL.
    pub fn link(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self::new(NodeKind::Link {
            label: label.into(),
            target: target.into(),
        })
    }

    pub fn container(region: Region, children: Vec<Node>) -> Self {
        Self::new(NodeKind::Container { region, children })
    }

    pub fn section(children: Vec<Node>) -> Self {
        Self::container(Region::Section, children)
    }

    pub fn row(children: Vec<Node>) -> Self {
        Self::container(Region::Row, children)
    }

    /// Apply a style modifier.
    ///
    /// A modifier with the same key as an earlier one replaces it and moves to
    /// the end, so the list stays in application order with no duplicate keys.
    pub fn style(mut self, style: Style) -> Self {
        let key = style.key();
        self.styles.retain(|s| s.key() != key);
        self.styles.push(style);
        self
    }

    pub fn font(self, font: Font) -> Self {
        self.style(Style::Font(font))
    }

    pub fn weight(self, weight: FontWeight) -> Self {
        self.style(Style::FontWeight(weight))
    }

    pub fn margin(self, edge: Edge, px: u32) -> Self {
        self.style(Style::Margin(edge, px))
    }

    pub fn padding(self, edge: Edge, px: u32) -> Self {
        self.style(Style::Padding(edge, px))
    }

    /// Give the node an anchor id that `#id` links can target.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn anchor_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn styles(&self) -> &[Style] {
        &self.styles
    }

    pub fn style_for(&self, key: StyleKey) -> Option<&Style> {
        self.styles.iter().find(|s| s.key() == key)
    }

    pub fn children(&self) -> &[Node] {
        match &self.kind {
            NodeKind::Container { children, .. } => children,
            _ => &[],
        }
    }

    pub fn region(&self) -> Option<Region> {
        match &self.kind {
            NodeKind::Container { region, .. } => Some(*region),
            _ => None,
        }
    }

    /// Link target, if this node is a link.
    pub fn target(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Link { target, .. } => Some(target),
            _ => None,
        }
    }

    /// This node and all of its descendants, depth first in document order.
    pub fn descendants(&self) -> Vec<&Node> {
        let mut out = vec![self];
        for child in self.children() {
            out.extend(child.descendants());
        }
        out
    }

    /// All link nodes in document order.
    pub fn links(&self) -> Vec<&Node> {
        self.descendants()
            .into_iter()
            .filter(|n| matches!(n.kind, NodeKind::Link { .. }))
            .collect()
    }

    /// Anchor ids defined anywhere in this tree.
    pub fn anchors(&self) -> Vec<&str> {
        self.descendants()
            .into_iter()
            .filter_map(Node::anchor_id)
            .collect()
    }
}
