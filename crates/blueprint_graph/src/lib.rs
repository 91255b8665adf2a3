// SPDX-License-Identifier: MIT OR Apache-2.0
//! Graph mutation and validation engine for blueprint-style node editors.
//!
//! Users place typed nodes with labeled input/output ports, wire edges
//! between compatible ports, and perform interactive graph surgery:
//! inserting a node into an existing edge, cascading deletes,
//! multi-selection, and spawning nodes from a template palette.
//!
//! This crate owns the in-memory model and every rule deciding whether a
//! mutation is legal. Rendering, camera transforms, and gesture capture
//! belong to the embedding application: it delivers gestures one at a time,
//! each operation validates fully and then commits (or commits nothing),
//! and the application re-reads the model afterwards.
//!
//! ## Architecture
//!
//! The engine is built on:
//! - Typed input/output ports addressed by stable zero-based index
//! - Connection validation (direction, type-tag equality, multiplicity)
//! - Atomic gesture-level operations over graph + selection
//! - Node templates supplied as external catalog data

pub mod node;
pub mod port;
pub mod edge;
pub mod graph;
pub mod editor;
pub mod selection;
pub mod gates;

pub use node::{Node, NodeId, NodeTemplate, TemplateCatalog};
pub use port::{Port, PortDirection, TypeTag};
pub use edge::{Edge, EdgeId};
pub use graph::{Graph, GraphError};
pub use editor::GraphEditor;
pub use selection::{SelectMode, SelectTarget, Selection};
