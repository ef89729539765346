//! sphinx-graph Core Types and Definitions
//!
//! This crate provides the foundational types for sphinx-graph. It includes:
//!
//! - **Model**: The description of a build process ([`model::Description`]),
//!   deserialized from TOML
//! - **Markup**: Graphviz HTML-like label builders ([`markup::Table`],
//!   [`markup::Cell`]) and inline formatting helpers

pub mod markup;
pub mod model;
