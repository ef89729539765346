//! Abstract directed graph produced by the assembler.
//!
//! The graph is a plain description of nodes and edges with Graphviz
//! attributes attached. It performs no layout; it is handed to an exporter
//! ([`crate::export`]) which serializes it for an external renderer.

mod digraph;

pub use digraph::{Digraph, Edge, EdgeStyle, Endpoint, Label, Node, RankDir};
