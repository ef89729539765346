//! Attribute sets for tables and cells.
//!
//! Graphviz accepts a fixed vocabulary of attributes on `<TABLE>` and `<TD>`
//! elements. Each vocabulary is modelled as a closed enum so only valid
//! attribute names can be produced. An attribute displays as `NAME="value"`,
//! with the name upper-cased and booleans rendered as `TRUE`/`FALSE`.

use std::fmt;

/// Horizontal placement of a table or of a line break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Align {
    Center,
    Left,
    Right,
}

impl From<Align> for &'static str {
    fn from(val: Align) -> Self {
        match val {
            Align::Center => "CENTER",
            Align::Left => "LEFT",
            Align::Right => "RIGHT",
        }
    }
}

impl fmt::Display for Align {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// Horizontal placement of a cell's content.
///
/// `Text` lets `<BR>` elements inside the cell control their own alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellAlign {
    Center,
    Left,
    Right,
    Text,
}

impl From<CellAlign> for &'static str {
    fn from(val: CellAlign) -> Self {
        match val {
            CellAlign::Center => "CENTER",
            CellAlign::Left => "LEFT",
            CellAlign::Right => "RIGHT",
            CellAlign::Text => "TEXT",
        }
    }
}

impl fmt::Display for CellAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// Vertical placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VAlign {
    Bottom,
    Middle,
    Top,
}

impl From<VAlign> for &'static str {
    fn from(val: VAlign) -> Self {
        match val {
            VAlign::Bottom => "BOTTOM",
            VAlign::Middle => "MIDDLE",
            VAlign::Top => "TOP",
        }
    }
}

impl fmt::Display for VAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// Attributes accepted on a `<TABLE>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableAttribute {
    /// Horizontal placement.
    Align(Align),
    /// Background color.
    BgColor(String),
    /// Width of the border around the table. Zero means no border, max 255.
    Border(u8),
    /// Border width for all cells, max 127.
    CellBorder(u8),
    /// Space in points between a cell's border and its content, max 255.
    CellPadding(u8),
    /// Space in points between cells and between a cell and the table border, max 127.
    CellSpacing(u8),
    /// Border color.
    Color(String),
    /// Whether `WIDTH` and `HEIGHT` are enforced.
    FixedSize(bool),
    /// Angle of a gradient fill when `BGCOLOR` is a color list.
    GradientAngle(u16),
    /// Minimum height in points, max 65535.
    Height(u16),
    /// URL attached to the table.
    Href(String),
    /// Unique ID for the table.
    Id(String),
    /// Port name for edges to attach to.
    Port(String),
    /// Row formatting; `*` draws a rule between every row.
    Rows(String),
    /// Which border sides to draw, any of `L`, `T`, `R`, `B`.
    Sides(String),
    /// Comma-separated style list, `ROUNDED` and `RADIAL`.
    Style(String),
    /// Browser window used for `HREF`.
    Target(String),
    /// Tooltip attached when `HREF` is present.
    Title(String),
    /// Vertical placement.
    VAlign(VAlign),
    /// Minimum width in points, max 65535.
    Width(u16),
}

impl TableAttribute {
    /// Returns the upper-case attribute name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Align(_) => "ALIGN",
            Self::BgColor(_) => "BGCOLOR",
            Self::Border(_) => "BORDER",
            Self::CellBorder(_) => "CELLBORDER",
            Self::CellPadding(_) => "CELLPADDING",
            Self::CellSpacing(_) => "CELLSPACING",
            Self::Color(_) => "COLOR",
            Self::FixedSize(_) => "FIXEDSIZE",
            Self::GradientAngle(_) => "GRADIENTANGLE",
            Self::Height(_) => "HEIGHT",
            Self::Href(_) => "HREF",
            Self::Id(_) => "ID",
            Self::Port(_) => "PORT",
            Self::Rows(_) => "ROWS",
            Self::Sides(_) => "SIDES",
            Self::Style(_) => "STYLE",
            Self::Target(_) => "TARGET",
            Self::Title(_) => "TITLE",
            Self::VAlign(_) => "VALIGN",
            Self::Width(_) => "WIDTH",
        }
    }

    fn write_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Align(v) => write!(f, "{v}"),
            Self::VAlign(v) => write!(f, "{v}"),
            Self::FixedSize(v) => f.write_str(bool_value(*v)),
            Self::Border(v) | Self::CellBorder(v) | Self::CellPadding(v) | Self::CellSpacing(v) => {
                write!(f, "{v}")
            }
            Self::GradientAngle(v) | Self::Height(v) | Self::Width(v) => write!(f, "{v}"),
            Self::BgColor(v)
            | Self::Color(v)
            | Self::Href(v)
            | Self::Id(v)
            | Self::Port(v)
            | Self::Rows(v)
            | Self::Sides(v)
            | Self::Style(v)
            | Self::Target(v)
            | Self::Title(v) => f.write_str(v),
        }
    }
}

impl fmt::Display for TableAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}=\"", self.name())?;
        self.write_value(f)?;
        f.write_str("\"")
    }
}

/// Attributes accepted on a `<TD>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellAttribute {
    /// Horizontal placement of the content.
    Align(CellAlign),
    /// Default alignment of `<BR>` elements in the cell.
    BAlign(Align),
    /// Background color.
    BgColor(String),
    /// Border width. Zero means no border, max 255.
    Border(u8),
    /// Space in points between the border and the content, max 255.
    CellPadding(u8),
    /// Space in points around the cell, max 127.
    CellSpacing(u8),
    /// Border color.
    Color(String),
    /// Number of columns spanned, max 65535.
    ColSpan(u16),
    /// Whether `WIDTH` and `HEIGHT` are enforced.
    FixedSize(bool),
    /// Angle of a gradient fill when `BGCOLOR` is a color list.
    GradientAngle(u16),
    /// Minimum height in points, max 65535.
    Height(u16),
    /// URL attached to the cell.
    Href(String),
    /// Unique ID for the cell.
    Id(String),
    /// Port name for edges to attach to.
    Port(String),
    /// Number of rows spanned, max 65535.
    RowSpan(u16),
    /// Which border sides to draw, any of `L`, `T`, `R`, `B`.
    Sides(String),
    /// Comma-separated style list, only `RADIAL`.
    Style(String),
    /// Browser window used for `HREF`.
    Target(String),
    /// Tooltip attached when `HREF` is present.
    Title(String),
    /// Vertical placement.
    VAlign(VAlign),
    /// Minimum width in points, max 65535.
    Width(u16),
}

impl CellAttribute {
    /// Returns the upper-case attribute name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Align(_) => "ALIGN",
            Self::BAlign(_) => "BALIGN",
            Self::BgColor(_) => "BGCOLOR",
            Self::Border(_) => "BORDER",
            Self::CellPadding(_) => "CELLPADDING",
            Self::CellSpacing(_) => "CELLSPACING",
            Self::Color(_) => "COLOR",
            Self::ColSpan(_) => "COLSPAN",
            Self::FixedSize(_) => "FIXEDSIZE",
            Self::GradientAngle(_) => "GRADIENTANGLE",
            Self::Height(_) => "HEIGHT",
            Self::Href(_) => "HREF",
            Self::Id(_) => "ID",
            Self::Port(_) => "PORT",
            Self::RowSpan(_) => "ROWSPAN",
            Self::Sides(_) => "SIDES",
            Self::Style(_) => "STYLE",
            Self::Target(_) => "TARGET",
            Self::Title(_) => "TITLE",
            Self::VAlign(_) => "VALIGN",
            Self::Width(_) => "WIDTH",
        }
    }

    fn write_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Align(v) => write!(f, "{v}"),
            Self::BAlign(v) => write!(f, "{v}"),
            Self::VAlign(v) => write!(f, "{v}"),
            Self::FixedSize(v) => f.write_str(bool_value(*v)),
            Self::Border(v) | Self::CellPadding(v) | Self::CellSpacing(v) => write!(f, "{v}"),
            Self::ColSpan(v)
            | Self::GradientAngle(v)
            | Self::Height(v)
            | Self::RowSpan(v)
            | Self::Width(v) => write!(f, "{v}"),
            Self::BgColor(v)
            | Self::Color(v)
            | Self::Href(v)
            | Self::Id(v)
            | Self::Port(v)
            | Self::Sides(v)
            | Self::Style(v)
            | Self::Target(v)
            | Self::Title(v) => f.write_str(v),
        }
    }
}

impl fmt::Display for CellAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}=\"", self.name())?;
        self.write_value(f)?;
        f.write_str("\"")
    }
}

fn bool_value(value: bool) -> &'static str {
    if value { "TRUE" } else { "FALSE" }
}
