//! Graphviz HTML-like label markup.
//!
//! This module assembles the nested, attributed `<TABLE>`/`<TD>` markup used
//! as node labels. Everything here is pure string formatting with no graph
//! semantics.
//!
//! # Overview
//!
//! - [`Table`] - Rows of cells plus table-level [`TableAttribute`]s.
//! - [`Cell`] - Content plus cell-level [`CellAttribute`]s.
//! - Inline helpers: [`u`], [`o`], [`b`], [`i`], [`s`], [`sub`], [`sup`],
//!   [`br`], [`multiline`] and [`html`].
//!
//! # Limitations
//!
//! Attribute values and cell contents are emitted verbatim. No escaping is
//! performed, so callers must supply text that is already safe markup.
//!
//! # Example
//!
//! ```
//! use sphinx_graph_core::markup::{self, Cell, CellAlign, Table};
//!
//! let mut table = Table::new().with_border(0).with_cellspacing(0);
//! table.add_row(vec![Cell::new(markup::u("build()")).with_align(CellAlign::Center)]);
//!
//! let label = markup::html(&table.to_string());
//! assert!(label.starts_with("<<TABLE BORDER=\"0\" CELLSPACING=\"0\">"));
//! ```

mod attribute;
mod inline;
mod table;

pub use attribute::{Align, CellAlign, CellAttribute, TableAttribute, VAlign};
pub use inline::{b, br, html, i, multiline, o, s, sub, sup, u};
pub use table::{Cell, Table};
