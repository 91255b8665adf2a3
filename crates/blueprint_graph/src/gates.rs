// SPDX-License-Identifier: MIT OR Apache-2.0
//! Stock logic-gate template catalog.
//!
//! The classic blueprint palette: boolean gates wired with `Bool` signal
//! ports, plus the pass-through adjustment node offered when splitting an
//! edge. Applications with their own domain supply their own catalog; this
//! one doubles as a realistic fixture.

use crate::node::{NodeTemplate, TemplateCatalog};
use crate::port::{Port, TypeTag};

/// Build the logic-gate catalog (NAND, OR, AND, NOT, plus `adjustment`)
pub fn gate_catalog() -> TemplateCatalog {
    let mut catalog = TemplateCatalog::new();

    for (kind, title, input_count) in [
        ("nand", "NAND", 2),
        ("or", "OR", 2),
        ("and", "AND", 2),
        ("not", "NOT", 1),
    ] {
        catalog.register(NodeTemplate {
            kind: kind.to_string(),
            title: title.to_string(),
            subtitle: format!("{title} Gate"),
            inputs: (0..input_count)
                .map(|i| Port::input(format!("In {}", i + 1), TypeTag::Bool))
                .collect(),
            outputs: vec![Port::output("Out", TypeTag::Bool)],
        });
    }

    // One-in/one-out relay inserted when the user splits an edge.
    catalog.register(NodeTemplate {
        kind: "adjustment".to_string(),
        title: "Adjust".to_string(),
        subtitle: "Pass-through".to_string(),
        inputs: vec![Port::input("In", TypeTag::Bool)],
        outputs: vec![Port::output("Out", TypeTag::Bool)],
    });

    catalog
}
