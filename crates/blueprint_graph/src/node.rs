// SPDX-License-Identifier: MIT OR Apache-2.0
//! Node definitions and the template catalog.

use crate::port::Port;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub Uuid);

impl NodeId {
    /// Create a new random node ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

/// Named specification of a spawnable node.
///
/// Templates are external data owned by the surrounding application; the
/// engine never hard-codes a palette. The port lists fix the spawned node's
/// port order for its whole lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeTemplate {
    /// Unique template kind identifier
    pub kind: String,
    /// Display title
    pub title: String,
    /// Display subtitle
    pub subtitle: String,
    /// Input ports of a spawned node
    pub inputs: Vec<Port>,
    /// Output ports of a spawned node
    pub outputs: Vec<Port>,
}

/// A node instance in the graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique instance ID
    pub id: NodeId,
    /// Template kind this node was spawned from
    pub template_kind: String,
    /// Display title
    pub display_title: String,
    /// Display subtitle
    pub display_subtitle: String,
    /// Position on the canvas
    pub position: [f32; 2],
    /// Input ports, addressed by index; never reordered after creation
    pub inputs: Vec<Port>,
    /// Output ports, addressed by index; never reordered after creation
    pub outputs: Vec<Port>,
}

impl Node {
    /// Create a new node from a template
    pub fn from_template(template: &NodeTemplate) -> Self {
        Self {
            id: NodeId::new(),
            template_kind: template.kind.clone(),
            display_title: template.title.clone(),
            display_subtitle: template.subtitle.clone(),
            position: [0.0, 0.0],
            inputs: template.inputs.clone(),
            outputs: template.outputs.clone(),
        }
    }

    /// Set the position
    pub fn with_position(mut self, x: f32, y: f32) -> Self {
        self.position = [x, y];
        self
    }

    /// Get an input port by index
    pub fn input(&self, index: usize) -> Option<&Port> {
        self.inputs.get(index)
    }

    /// Get an output port by index
    pub fn output(&self, index: usize) -> Option<&Port> {
        self.outputs.get(index)
    }

    /// Get all ports
    pub fn ports(&self) -> impl Iterator<Item = &Port> {
        self.inputs.iter().chain(self.outputs.iter())
    }
}

/// Catalog of available node templates
#[derive(Debug, Clone, Default)]
pub struct TemplateCatalog {
    /// Registered templates by kind
    templates: indexmap::IndexMap<String, NodeTemplate>,
}

impl TemplateCatalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a template, replacing any previous one of the same kind
    pub fn register(&mut self, template: NodeTemplate) {
        self.templates.insert(template.kind.clone(), template);
    }

    /// Get a template by kind
    pub fn get(&self, kind: &str) -> Option<&NodeTemplate> {
        self.templates.get(kind)
    }

    /// Get all registered templates, in registration order
    pub fn templates(&self) -> impl Iterator<Item = &NodeTemplate> {
        self.templates.values()
    }

    /// Create a node from a template kind
    pub fn create_node(&self, kind: &str) -> Option<Node> {
        self.get(kind).map(Node::from_template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::TypeTag;

    fn relay_template() -> NodeTemplate {
        NodeTemplate {
            kind: "relay".to_string(),
            title: "Relay".to_string(),
            subtitle: "Signal Relay".to_string(),
            inputs: vec![Port::input("In", TypeTag::Signal)],
            outputs: vec![Port::output("Out", TypeTag::Signal)],
        }
    }

    #[test]
    fn spawned_nodes_copy_template_ports() {
        let template = relay_template();
        let node = Node::from_template(&template);
        assert_eq!(node.template_kind, "relay");
        assert_eq!(node.display_title, "Relay");
        assert_eq!(node.inputs, template.inputs);
        assert_eq!(node.outputs, template.outputs);
    }

    #[test]
    fn spawned_nodes_get_distinct_ids() {
        let template = relay_template();
        let a = Node::from_template(&template);
        let b = Node::from_template(&template);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn catalog_lookup_and_create() {
        let mut catalog = TemplateCatalog::new();
        catalog.register(relay_template());
        assert!(catalog.get("relay").is_some());
        assert!(catalog.get("missing").is_none());
        assert!(catalog.create_node("missing").is_none());

        let node = catalog.create_node("relay").unwrap();
        assert_eq!(node.template_kind, "relay");
        assert_eq!(catalog.templates().count(), 1);
    }
}
