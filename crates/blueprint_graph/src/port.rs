// SPDX-License-Identifier: MIT OR Apache-2.0
//! Port definitions for node inputs/outputs.

use serde::{Deserialize, Serialize};

/// Port direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PortDirection {
    /// Input port
    Input,
    /// Output port
    Output,
}

/// Type tag carried by a port.
///
/// Two ports are compatible iff their tags are equal; there is no subtyping
/// and no implicit conversion. `Custom` tags compare by their string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeTag {
    /// Boolean signal
    Bool,
    /// Integer value
    Int,
    /// Floating point value
    Float,
    /// String value
    String,
    /// Untyped execution signal
    Signal,
    /// Custom type
    Custom(String),
}

impl TypeTag {
    /// Get the color for this tag (for the renderer's port dots)
    pub fn color(&self) -> [u8; 3] {
        match self {
            Self::Bool => [200, 80, 80],
            Self::Int => [80, 200, 200],
            Self::Float => [80, 200, 80],
            Self::String => [200, 180, 150],
            Self::Signal => [200, 200, 200],
            Self::Custom(_) => [136, 136, 136],
        }
    }
}

/// A port on a node.
///
/// Ports are immutable once their node is created and are addressed by
/// zero-based index within the node's input or output list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Port {
    /// Port direction
    pub direction: PortDirection,
    /// Compatibility key
    pub type_tag: TypeTag,
    /// Display label
    pub label: String,
}

impl Port {
    /// Create a new input port
    pub fn input(label: impl Into<String>, type_tag: TypeTag) -> Self {
        Self {
            direction: PortDirection::Input,
            type_tag,
            label: label.into(),
        }
    }

    /// Create a new output port
    pub fn output(label: impl Into<String>, type_tag: TypeTag) -> Self {
        Self {
            direction: PortDirection::Output,
            type_tag,
            label: label.into(),
        }
    }

    /// Check whether this port may feed the given input port.
    ///
    /// True iff `self` is an output, `input` is an input, and the type tags
    /// are equal. Self-connection and multiplicity are checked by the graph,
    /// which is the only place node identity and existing edges are known.
    pub fn can_connect(&self, input: &Port) -> bool {
        self.direction == PortDirection::Output
            && input.direction == PortDirection::Input
            && self.type_tag == input.type_tag
    }
}
