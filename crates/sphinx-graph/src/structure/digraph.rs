//! Node and edge storage for [`Digraph`].

use std::fmt;

use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;

/// Direction in which ranks are laid out.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum RankDir {
    #[serde(rename = "TB")]
    TopToBottom,
    #[default]
    #[serde(rename = "LR")]
    LeftToRight,
    #[serde(rename = "BT")]
    BottomToTop,
    #[serde(rename = "RL")]
    RightToLeft,
}

impl From<RankDir> for &'static str {
    fn from(val: RankDir) -> Self {
        match val {
            RankDir::TopToBottom => "TB",
            RankDir::LeftToRight => "LR",
            RankDir::BottomToTop => "BT",
            RankDir::RightToLeft => "RL",
        }
    }
}

impl fmt::Display for RankDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// HTML-like label markup of a node, already wrapped in `<...>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label(String);

impl Label {
    pub fn html(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A node of the graph. Every node is drawn as a rounded box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    id: String,
    label: Label,
}

impl Node {
    pub const SHAPE: &'static str = "box";
    pub const STYLE: &'static str = "rounded";
    pub const MARGIN: &'static str = ".2";

    pub fn new(id: impl Into<String>, label: Label) -> Self {
        Self {
            id: id.into(),
            label,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &Label {
        &self.label
    }
}

/// Source of an edge: a port of a node's label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    node: String,
    port: String,
}

impl Endpoint {
    pub fn port(node: impl Into<String>, port: impl Into<String>) -> Self {
        Self {
            node: node.into(),
            port: port.into(),
        }
    }

    pub fn node_id(&self) -> &str {
        &self.node
    }

    pub fn port_name(&self) -> &str {
        &self.port
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.node, self.port)
    }
}

/// Line style of an edge.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeStyle {
    #[default]
    Solid,
    Dashed,
}

/// A directed edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    source: Endpoint,
    target: String,
    style: EdgeStyle,
}

impl Edge {
    pub fn new(source: Endpoint, target: impl Into<String>) -> Self {
        Self {
            source,
            target: target.into(),
            style: EdgeStyle::Solid,
        }
    }

    pub fn with_style(mut self, style: EdgeStyle) -> Self {
        self.style = style;
        self
    }

    pub fn source(&self) -> &Endpoint {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn style(&self) -> EdgeStyle {
        self.style
    }
}

/// A directed graph of labelled nodes.
///
/// Nodes are keyed by id and kept in insertion order. Objects, events and
/// the pipeline pseudo-nodes share one id space, so adding a node with an
/// existing id replaces its label in place and the graph keeps a single
/// node for both; Graphviz merges same-named nodes the same way. Edges may
/// reference ids that have no node, in which case the renderer decides how
/// to draw them.
#[derive(Debug, Clone, Default)]
pub struct Digraph {
    comment: String,
    rankdir: RankDir,
    nodes: IndexMap<String, Node>,
    edges: Vec<Edge>,
}

impl Digraph {
    pub fn new(comment: impl Into<String>, rankdir: RankDir) -> Self {
        Self {
            comment: comment.into(),
            rankdir,
            nodes: IndexMap::new(),
            edges: Vec::new(),
        }
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn rankdir(&self) -> RankDir {
        self.rankdir
    }

    /// Add `node`, returning the node it replaced, if any.
    pub fn add_node(&mut self, node: Node) -> Option<Node> {
        let replaced = self.nodes.insert(node.id.clone(), node);
        if let Some(old) = &replaced {
            debug!(id = old.id; "Node replaced by a later node with the same id");
        }
        replaced
    }

    pub fn add_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    /// Edges whose source is the node `id`, on any port.
    pub fn edges_from<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Edge> {
        self.edges
            .iter()
            .filter(move |edge| edge.source.node == id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
