// SPDX-License-Identifier: MIT OR Apache-2.0
//! Graph store: the authoritative mapping of nodes and edges.

use crate::edge::{Edge, EdgeId};
use crate::node::{Node, NodeId};
use crate::port::PortDirection;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A blueprint graph: nodes plus the edges wired between their ports.
///
/// The graph is the sole owner of its nodes and edges. All mutations go
/// through its methods; `connect` validates fully before inserting, so a
/// rejected connection leaves the graph untouched. Invariant: every edge's
/// endpoints resolve to an existing node and an in-range port index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    /// Nodes in the graph
    nodes: IndexMap<NodeId, Node>,
    /// Edges between node ports
    edges: IndexMap<EdgeId, Edge>,
}

impl Graph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node to the graph
    pub fn add_node(&mut self, node: Node) -> NodeId {
        let id = node.id;
        self.nodes.insert(id, node);
        id
    }

    /// Remove a node and every edge incident to it.
    ///
    /// Returns `None` (and removes nothing) if the node is absent.
    pub fn remove_node(&mut self, node_id: NodeId) -> Option<Node> {
        let node = self.nodes.swap_remove(&node_id)?;
        self.edges.retain(|_, e| !e.involves_node(node_id));
        Some(node)
    }

    /// Get a node by ID
    pub fn node(&self, node_id: NodeId) -> Option<&Node> {
        self.nodes.get(&node_id)
    }

    /// Get a mutable node by ID
    pub fn node_mut(&mut self, node_id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(&node_id)
    }

    /// Get all nodes
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Get all node IDs
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }

    /// Get the number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Connect an output port to an input port.
    ///
    /// Validates node existence, port index range, direction and type-tag
    /// compatibility, the self-connection ban, and input multiplicity (an
    /// input port accepts at most one incoming edge; an occupied port fails
    /// rather than silently replacing the edge). Nothing is inserted unless
    /// every check passes.
    pub fn connect(
        &mut self,
        source_node: NodeId,
        source_port: usize,
        target_node: NodeId,
        target_port: usize,
    ) -> Result<EdgeId, GraphError> {
        let source = self
            .nodes
            .get(&source_node)
            .ok_or(GraphError::NodeNotFound(source_node))?;
        let target = self
            .nodes
            .get(&target_node)
            .ok_or(GraphError::NodeNotFound(target_node))?;

        let output = source
            .output(source_port)
            .ok_or(GraphError::PortIndexOutOfRange {
                node: source_node,
                direction: PortDirection::Output,
                index: source_port,
            })?;
        let input = target
            .input(target_port)
            .ok_or(GraphError::PortIndexOutOfRange {
                node: target_node,
                direction: PortDirection::Input,
                index: target_port,
            })?;

        if source_node == target_node {
            return Err(GraphError::SelfConnection);
        }

        if !output.can_connect(input) {
            return Err(GraphError::IncompatiblePorts);
        }

        if self.edge_into(target_node, target_port).is_some() {
            return Err(GraphError::InputPortOccupied {
                node: target_node,
                index: target_port,
            });
        }

        let edge = Edge::new(source_node, source_port, target_node, target_port);
        let id = edge.id;
        self.edges.insert(id, edge);
        Ok(id)
    }

    /// Remove an edge, returning it if it was present
    pub fn disconnect(&mut self, edge_id: EdgeId) -> Option<Edge> {
        self.edges.swap_remove(&edge_id)
    }

    /// Get an edge by ID
    pub fn edge(&self, edge_id: EdgeId) -> Option<&Edge> {
        self.edges.get(&edge_id)
    }

    /// Get all edges
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    /// Get the number of edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Get all edges incident to a node
    pub fn edges_for_node(&self, node_id: NodeId) -> impl Iterator<Item = &Edge> {
        self.edges.values().filter(move |e| e.involves_node(node_id))
    }

    /// Get the edge feeding an input port, if any.
    ///
    /// An input port holds at most one incoming edge, so a single lookup
    /// answers the multiplicity question.
    pub fn edge_into(&self, node_id: NodeId, input_index: usize) -> Option<&Edge> {
        self.edges
            .values()
            .find(|e| e.target_node == node_id && e.target_port == input_index)
    }

    /// Check referential integrity: every edge endpoint resolves to an
    /// existing node and an in-range port index of the right direction.
    pub fn is_consistent(&self) -> bool {
        self.edges.values().all(|e| {
            let source_ok = self
                .nodes
                .get(&e.source_node)
                .is_some_and(|n| n.output(e.source_port).is_some());
            let target_ok = self
                .nodes
                .get(&e.target_node)
                .is_some_and(|n| n.input(e.target_port).is_some());
            source_ok && target_ok
        })
    }
}

/// Error from a graph mutation
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// Node not found
    #[error("node not found: {0:?}")]
    NodeNotFound(NodeId),

    /// Edge not found
    #[error("edge not found: {0:?}")]
    EdgeNotFound(EdgeId),

    /// Port index outside the node's declared port list
    #[error("no {direction:?} port at index {index} on node {node:?}")]
    PortIndexOutOfRange {
        /// Node whose port list was indexed
        node: NodeId,
        /// Which port list was indexed
        direction: PortDirection,
        /// The out-of-range index
        index: usize,
    },

    /// Port type tags or directions do not match
    #[error("incompatible port types")]
    IncompatiblePorts,

    /// A node may not connect to itself
    #[error("a node may not connect to itself")]
    SelfConnection,

    /// The input port already has an incoming edge
    #[error("input port {index} on node {node:?} already has an incoming edge")]
    InputPortOccupied {
        /// Node owning the occupied input port
        node: NodeId,
        /// Index of the occupied input port
        index: usize,
    },

    /// The inserted node's ports cannot carry the split edge
    #[error("inserted node's ports cannot carry the split edge")]
    IncompatibleInsertedNode,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeTemplate;
    use crate::port::{Port, TypeTag};

    fn gate(title: &str, inputs: usize) -> Node {
        Node::from_template(&NodeTemplate {
            kind: title.to_lowercase(),
            title: title.to_string(),
            subtitle: format!("{title} Gate"),
            inputs: (0..inputs)
                .map(|i| Port::input(format!("In {}", i + 1), TypeTag::Bool))
                .collect(),
            outputs: vec![Port::output("Out", TypeTag::Bool)],
        })
    }

    fn float_source() -> Node {
        Node::from_template(&NodeTemplate {
            kind: "float".to_string(),
            title: "Float".to_string(),
            subtitle: "Constant".to_string(),
            inputs: vec![],
            outputs: vec![Port::output("Value", TypeTag::Float)],
        })
    }

    #[test]
    fn connect_inserts_edge() {
        let mut graph = Graph::new();
        let a = graph.add_node(gate("NAND", 2));
        let b = graph.add_node(gate("OR", 2));

        let id = graph.connect(a, 0, b, 0).unwrap();
        let edge = graph.edge(id).unwrap();
        assert_eq!(edge.source_node, a);
        assert_eq!(edge.target_node, b);
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.is_consistent());
    }

    #[test]
    fn connect_missing_node_fails() {
        let mut graph = Graph::new();
        let a = graph.add_node(gate("NOT", 1));
        let ghost = NodeId::new();

        assert!(matches!(
            graph.connect(a, 0, ghost, 0),
            Err(GraphError::NodeNotFound(id)) if id == ghost
        ));
        assert!(matches!(
            graph.connect(ghost, 0, a, 0),
            Err(GraphError::NodeNotFound(_))
        ));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn connect_bad_port_index_fails() {
        let mut graph = Graph::new();
        let a = graph.add_node(gate("NAND", 2));
        let b = graph.add_node(gate("OR", 2));

        // NAND has a single output.
        assert!(matches!(
            graph.connect(a, 1, b, 0),
            Err(GraphError::PortIndexOutOfRange {
                direction: PortDirection::Output,
                index: 1,
                ..
            })
        ));
        // OR has two inputs.
        assert!(matches!(
            graph.connect(a, 0, b, 2),
            Err(GraphError::PortIndexOutOfRange {
                direction: PortDirection::Input,
                index: 2,
                ..
            })
        ));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn connect_mismatched_tags_fails() {
        let mut graph = Graph::new();
        let a = graph.add_node(float_source());
        let b = graph.add_node(gate("OR", 2));

        assert!(matches!(
            graph.connect(a, 0, b, 0),
            Err(GraphError::IncompatiblePorts)
        ));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn self_connection_rejected() {
        let mut graph = Graph::new();
        // NOT has a Bool input and a Bool output, so the ports themselves
        // would be compatible.
        let x = graph.add_node(gate("NOT", 1));

        assert!(matches!(
            graph.connect(x, 0, x, 0),
            Err(GraphError::SelfConnection)
        ));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn occupied_input_fails_without_replacing() {
        let mut graph = Graph::new();
        let a = graph.add_node(gate("NAND", 2));
        let b = graph.add_node(gate("NOT", 1));
        let c = graph.add_node(gate("OR", 2));

        let first = graph.connect(a, 0, b, 0).unwrap();
        assert!(matches!(
            graph.connect(c, 0, b, 0),
            Err(GraphError::InputPortOccupied { node, index: 0 }) if node == b
        ));
        // The original edge survives.
        assert!(graph.edge(first).is_some());
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn output_ports_fan_out() {
        let mut graph = Graph::new();
        let a = graph.add_node(gate("NOT", 1));
        let b = graph.add_node(gate("NAND", 2));
        let c = graph.add_node(gate("OR", 2));

        graph.connect(a, 0, b, 0).unwrap();
        graph.connect(a, 0, c, 0).unwrap();
        assert_eq!(graph.edge_count(), 2);
        assert!(graph.is_consistent());
    }

    #[test]
    fn remove_node_cascades_edges() {
        let mut graph = Graph::new();
        let a = graph.add_node(gate("NOT", 1));
        let b = graph.add_node(gate("NAND", 2));
        let c = graph.add_node(gate("OR", 2));

        graph.connect(a, 0, b, 0).unwrap();
        graph.connect(b, 0, c, 0).unwrap();
        graph.connect(a, 0, c, 1).unwrap();

        graph.remove_node(b);
        assert!(graph.node(b).is_none());
        assert!(graph.edges().all(|e| !e.involves_node(b)));
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.is_consistent());
    }

    #[test]
    fn remove_absent_node_is_noop() {
        let mut graph = Graph::new();
        let a = graph.add_node(gate("NOT", 1));
        let b = graph.add_node(gate("NAND", 2));
        graph.connect(a, 0, b, 0).unwrap();

        assert!(graph.remove_node(NodeId::new()).is_none());
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn edge_into_finds_the_feeding_edge() {
        let mut graph = Graph::new();
        let a = graph.add_node(gate("NOT", 1));
        let b = graph.add_node(gate("NAND", 2));

        let id = graph.connect(a, 0, b, 1).unwrap();
        assert!(graph.edge_into(b, 0).is_none());
        assert_eq!(graph.edge_into(b, 1).map(|e| e.id), Some(id));
    }

    #[test]
    fn graph_survives_ron_round_trip() {
        let mut graph = Graph::new();
        let a = graph.add_node(gate("NAND", 2));
        let b = graph.add_node(gate("OR", 2));
        graph.connect(a, 0, b, 0).unwrap();

        let text = ron::ser::to_string(&graph).unwrap();
        let restored: Graph = ron::de::from_str(&text).unwrap();
        assert_eq!(restored, graph);
    }
}
