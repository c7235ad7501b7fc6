//! Graph model consumed by the layout engine.
//!
//! The types here are plain data: a [`Node`] carries an identifier, a label,
//! and styling hints; an [`Edge`] connects two node identifiers. Neither type
//! has layout behavior. A [`Diagram`] bundles the two sequences with an
//! optional title and [`LayoutEngine`] hint, matching the JSON shape accepted
//! by the CLI.
//!
//! Edges are not checked against the node list by the engine. Callers that
//! want to reject malformed input can use [`validate_nodes`] and
//! [`dangling_edges`].

use std::{
    collections::HashSet,
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Visual category of a node.
///
/// This is a rendering hint only (it selects a palette entry in the renderer)
/// and has no effect on layout.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeType {
    #[default]
    Concept,
    Process,
    Actor,
    Data,
    Decision,
}

impl From<NodeType> for &'static str {
    fn from(val: NodeType) -> Self {
        match val {
            NodeType::Concept => "concept",
            NodeType::Process => "process",
            NodeType::Actor => "actor",
            NodeType::Data => "data",
            NodeType::Decision => "decision",
        }
    }
}

impl Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// Available layout engines.
///
/// Used both as the caller's hint and as the record of which engine actually
/// produced a layout. The names match external configuration strings
/// (snake_case).
///
/// # Variants
///
/// - `Hierarchical` - Top-down layered layout (default). Falls back to
///   `Radial` when the graph contains a cycle.
/// - `Radial` - Nodes evenly spaced on a circle.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutEngine {
    /// Layered layout engine (default)
    #[default]
    Hierarchical,
    /// Circular layout engine
    Radial,
}

impl FromStr for LayoutEngine {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hierarchical" => Ok(Self::Hierarchical),
            "radial" => Ok(Self::Radial),
            _ => Err("Unsupported layout engine"),
        }
    }
}

impl From<LayoutEngine> for &'static str {
    fn from(val: LayoutEngine) -> Self {
        match val {
            LayoutEngine::Hierarchical => "hierarchical",
            LayoutEngine::Radial => "radial",
        }
    }
}

impl Display for LayoutEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// A labeled node of the diagram.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Node {
    id: String,
    label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(rename = "type", default)]
    node_type: NodeType,
}

impl Node {
    /// Creates a concept node with the given id and label.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            description: None,
            node_type: NodeType::default(),
        }
    }

    /// Sets the drill-down description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the visual category.
    pub fn with_type(mut self, node_type: NodeType) -> Self {
        self.node_type = node_type;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn node_type(&self) -> NodeType {
        self.node_type
    }
}

/// A directed connection between two node ids.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Edge {
    from: String,
    to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    #[serde(default)]
    animated: bool,
}

impl Edge {
    /// Creates an unlabeled, static edge.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            label: None,
            animated: false,
        }
    }

    /// Sets the edge label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Marks the edge as animated.
    pub fn with_animated(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn is_animated(&self) -> bool {
        self.animated
    }

    /// Returns true when the edge starts and ends at the same node.
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

/// A complete diagram description: nodes, edges, and an optional layout hint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Diagram {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(default)]
    nodes: Vec<Node>,
    #[serde(default)]
    edges: Vec<Edge>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    layout: Option<LayoutEngine>,
}

impl Diagram {
    /// Creates a diagram without title or layout hint.
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self {
            title: None,
            nodes,
            edges,
            layout: None,
        }
    }

    /// Sets the diagram title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the layout hint.
    pub fn with_layout(mut self, layout: LayoutEngine) -> Self {
        self.layout = Some(layout);
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The caller's layout hint, if any.
    pub fn layout(&self) -> Option<LayoutEngine> {
        self.layout
    }
}

/// Structural problems in a node list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("Duplicate node id `{0}`")]
    DuplicateNodeId(String),

    #[error("Node at index {0} has an empty id")]
    EmptyNodeId(usize),
}

/// Checks that every node has a non-empty id and that ids are unique.
///
/// # Errors
///
/// Returns the first [`GraphError`] found, in input order.
pub fn validate_nodes(nodes: &[Node]) -> Result<(), GraphError> {
    let mut seen = HashSet::with_capacity(nodes.len());
    for (index, node) in nodes.iter().enumerate() {
        if node.id.is_empty() {
            return Err(GraphError::EmptyNodeId(index));
        }
        if !seen.insert(node.id.as_str()) {
            return Err(GraphError::DuplicateNodeId(node.id.clone()));
        }
    }
    Ok(())
}

/// Returns the edges whose source or target id does not name any node.
///
/// Such edges are ignored by the layout engines and cannot be anchored.
pub fn dangling_edges<'a>(nodes: &[Node], edges: &'a [Edge]) -> impl Iterator<Item = &'a Edge> {
    let ids: HashSet<&str> = nodes.iter().map(Node::id).collect();
    edges
        .iter()
        .filter(move |edge| !ids.contains(edge.from()) || !ids.contains(edge.to()))
}
