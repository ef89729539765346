//! `<TABLE>` and `<TD>` builders.

use std::fmt;

use crate::markup::attribute::{CellAlign, CellAttribute, TableAttribute};

/// A single `<TD>` cell.
///
/// Attributes are written in the order they were added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    content: String,
    attributes: Vec<CellAttribute>,
}

impl Cell {
    /// Creates a cell with the given content and no attributes.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            attributes: Vec::new(),
        }
    }

    /// Returns the cell content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the attributes in insertion order.
    pub fn attributes(&self) -> &[CellAttribute] {
        &self.attributes
    }

    /// Returns the value of the `PORT` attribute, if set.
    pub fn port(&self) -> Option<&str> {
        self.attributes.iter().find_map(|attr| match attr {
            CellAttribute::Port(port) => Some(port.as_str()),
            _ => None,
        })
    }

    /// Appends an attribute.
    pub fn with_attribute(mut self, attribute: CellAttribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn with_align(self, align: CellAlign) -> Self {
        self.with_attribute(CellAttribute::Align(align))
    }

    pub fn with_bgcolor(self, color: impl Into<String>) -> Self {
        self.with_attribute(CellAttribute::BgColor(color.into()))
    }

    pub fn with_border(self, border: u8) -> Self {
        self.with_attribute(CellAttribute::Border(border))
    }

    pub fn with_cellpadding(self, padding: u8) -> Self {
        self.with_attribute(CellAttribute::CellPadding(padding))
    }

    pub fn with_colspan(self, span: u16) -> Self {
        self.with_attribute(CellAttribute::ColSpan(span))
    }

    pub fn with_port(self, port: impl Into<String>) -> Self {
        self.with_attribute(CellAttribute::Port(port.into()))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<TD")?;
        for attribute in &self.attributes {
            write!(f, " {attribute}")?;
        }
        write!(f, ">\n{}\n</TD>", self.content)
    }
}

/// A `<TABLE>` of rows of [`Cell`]s.
///
/// # Example
///
/// ```
/// use sphinx_graph_core::markup::{Cell, Table};
///
/// let mut table = Table::new().with_border(0);
/// table.add_row(vec![Cell::new("a"), Cell::new("b")]);
///
/// assert_eq!(
///     table.to_string(),
///     "<TABLE BORDER=\"0\">\n<TR>\n<TD>\na\n</TD><TD>\nb\n</TD></TR>\n</TABLE>\n"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    attributes: Vec<TableAttribute>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Creates an empty table with no attributes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a row of cells.
    pub fn add_row(&mut self, cells: Vec<Cell>) {
        self.rows.push(cells);
    }

    /// Returns the rows in insertion order.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Returns the attributes in insertion order.
    pub fn attributes(&self) -> &[TableAttribute] {
        &self.attributes
    }

    /// Appends an attribute.
    pub fn with_attribute(mut self, attribute: TableAttribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn with_border(self, border: u8) -> Self {
        self.with_attribute(TableAttribute::Border(border))
    }

    pub fn with_cellspacing(self, spacing: u8) -> Self {
        self.with_attribute(TableAttribute::CellSpacing(spacing))
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<TABLE")?;
        for attribute in &self.attributes {
            write!(f, " {attribute}")?;
        }
        f.write_str(">\n")?;
        for row in &self.rows {
            f.write_str("<TR>\n")?;
            for cell in row {
                write!(f, "{cell}")?;
            }
            f.write_str("</TR>\n")?;
        }
        f.write_str("</TABLE>\n")
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::markup::attribute::{Align, VAlign};

    #[test]
    fn test_empty_cell() {
        assert_eq!(Cell::new("").to_string(), "<TD>\n\n</TD>");
    }

    #[test]
    fn test_cell_attributes_keep_insertion_order() {
        let cell = Cell::new("text")
            .with_align(CellAlign::Left)
            .with_port("1")
            .with_border(1)
            .with_bgcolor("lightblue");

        assert_eq!(
            cell.to_string(),
            "<TD ALIGN=\"LEFT\" PORT=\"1\" BORDER=\"1\" BGCOLOR=\"lightblue\">\ntext\n</TD>"
        );
        assert_eq!(cell.port(), Some("1"));
    }

    #[test]
    fn test_cell_without_port() {
        let cell = Cell::new("text").with_colspan(2);
        assert_eq!(cell.port(), None);
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(Table::new().to_string(), "<TABLE>\n</TABLE>\n");
    }

    #[test]
    fn test_table_with_rows() {
        let mut table = Table::new()
            .with_border(0)
            .with_cellspacing(0)
            .with_attribute(TableAttribute::FixedSize(true));
        table.add_row(vec![Cell::new("head").with_colspan(2)]);
        table.add_row(vec![Cell::new("a"), Cell::new("b")]);

        let expected = concat!(
            "<TABLE BORDER=\"0\" CELLSPACING=\"0\" FIXEDSIZE=\"TRUE\">\n",
            "<TR>\n<TD COLSPAN=\"2\">\nhead\n</TD></TR>\n",
            "<TR>\n<TD>\na\n</TD><TD>\nb\n</TD></TR>\n",
            "</TABLE>\n",
        );
        assert_eq!(table.to_string(), expected);
        assert_eq!(table.rows().len(), 2);
    }

    #[test]
    fn test_nested_table_content() {
        let mut inner = Table::new();
        inner.add_row(vec![Cell::new("inner")]);

        let mut outer = Table::new();
        outer.add_row(vec![Cell::new(inner.to_string())]);

        assert!(outer.to_string().contains("<TD>\n<TABLE>\n<TR>\n"));
    }

    fn table_attribute() -> impl Strategy<Value = TableAttribute> {
        prop_oneof![
            any::<u8>().prop_map(TableAttribute::Border),
            any::<u8>().prop_map(TableAttribute::CellPadding),
            any::<u16>().prop_map(TableAttribute::Width),
            any::<bool>().prop_map(TableAttribute::FixedSize),
            "[a-z]{1,8}".prop_map(TableAttribute::BgColor),
            Just(TableAttribute::Align(Align::Right)),
            Just(TableAttribute::VAlign(VAlign::Top)),
        ]
    }

    proptest! {
        #[test]
        fn test_table_attributes_render_in_order(attrs in prop::collection::vec(table_attribute(), 0..8)) {
            let table = attrs
                .iter()
                .cloned()
                .fold(Table::new(), Table::with_attribute);

            let rendered = table.to_string();
            let open_tag = rendered.lines().next().unwrap_or_default();

            let expected: String = attrs.iter().map(|attr| format!(" {attr}")).collect();
            prop_assert_eq!(open_tag, format!("<TABLE{expected}>"));
        }

        #[test]
        fn test_attribute_names_are_upper_case(attrs in prop::collection::vec(table_attribute(), 1..8)) {
            for attr in &attrs {
                let name = attr.name();
                prop_assert_eq!(name, name.to_uppercase());
            }
        }
    }
}
