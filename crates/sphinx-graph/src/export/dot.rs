//! Graphviz DOT serialization.

use std::{fmt::Write as _, fs};

use log::{debug, info};

use crate::{
    export::{self, Exporter},
    structure::{Digraph, Edge, EdgeStyle, Endpoint, Node},
};

/// Writes a graph as DOT source to `file_name`.
pub struct Dot {
    file_name: String,
}

impl Dot {
    pub fn new(file_name: &str) -> Self {
        Self {
            file_name: file_name.to_string(),
        }
    }
}

impl Exporter for Dot {
    fn export_graph(&self, graph: &Digraph) -> Result<(), export::Error> {
        let source = to_dot(graph);
        fs::write(&self.file_name, source)?;
        info!(file_name = self.file_name; "DOT file saved");
        Ok(())
    }
}

/// Serialize `graph` as DOT source.
///
/// The description comment becomes a leading `//` comment, nodes come in
/// insertion order followed by edges in insertion order.
///
/// # Example
///
/// ```
/// use sphinx_graph::export::dot::to_dot;
/// use sphinx_graph::structure::{Digraph, Edge, Endpoint, RankDir};
///
/// let mut graph = Digraph::new("", RankDir::LeftToRight);
/// graph.add_edge(Edge::new(Endpoint::port("a", "1"), "b"));
///
/// assert_eq!(to_dot(&graph), "digraph {\n\tgraph [rankdir=LR]\n\t\"a\":\"1\" -> \"b\"\n}\n");
/// ```
pub fn to_dot(graph: &Digraph) -> String {
    let mut out = String::new();

    for line in graph.comment().lines() {
        push_line(&mut out, format_args!("// {line}"));
    }
    out.push_str("digraph {\n");
    push_line(&mut out, format_args!("\tgraph [rankdir={}]", graph.rankdir()));

    for node in graph.nodes() {
        write_node(&mut out, node);
    }
    for edge in graph.edges() {
        write_edge(&mut out, edge);
    }

    out.push_str("}\n");

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        bytes = out.len();
        "Serialized graph to DOT"
    );
    out
}

fn write_node(out: &mut String, node: &Node) {
    // HTML-like labels are already delimited by `<...>`.
    let label = node.label().as_str();
    push_line(
        out,
        format_args!(
            "\t{} [label={label} margin=\"{}\" shape={} style={}]",
            quote(node.id()),
            Node::MARGIN,
            Node::SHAPE,
            Node::STYLE,
        ),
    );
}

fn write_edge(out: &mut String, edge: &Edge) {
    let source = endpoint(edge.source());
    let target = quote(edge.target());
    match edge.style() {
        EdgeStyle::Solid => push_line(out, format_args!("\t{source} -> {target}")),
        EdgeStyle::Dashed => push_line(out, format_args!("\t{source} -> {target} [style=dashed]")),
    }
}

fn endpoint(endpoint: &Endpoint) -> String {
    format!(
        "{}:{}",
        quote(endpoint.node_id()),
        quote(endpoint.port_name())
    )
}

fn push_line(out: &mut String, args: std::fmt::Arguments<'_>) {
    // Writing to a String cannot fail.
    let _ = out.write_fmt(args);
    out.push('\n');
}

/// Quote a DOT identifier.
fn quote(s: &str) -> String {
    format!("\"{}\"", escape(s))
}

fn escape(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::{Label, RankDir};

    #[test]
    fn test_escape() {
        assert_eq!(escape("hello"), "hello");
        assert_eq!(escape("back\\slash"), "back\\\\slash");
        assert_eq!(escape("quote\"here"), "quote\\\"here");
        assert_eq!(escape("two\nlines"), "two\\nlines");
    }

    #[test]
    fn test_empty_graph() {
        let graph = Digraph::new("", RankDir::TopToBottom);
        assert_eq!(to_dot(&graph), "digraph {\n\tgraph [rankdir=TB]\n}\n");
    }

    #[test]
    fn test_comment_lines() {
        let graph = Digraph::new("first\nsecond", RankDir::LeftToRight);
        assert!(to_dot(&graph).starts_with("// first\n// second\ndigraph {\n"));
    }

    #[test]
    fn test_html_node() {
        let mut graph = Digraph::default();
        graph.add_node(Node::new("pkg.foo", Label::html("<<B>foo</B>>")));

        assert!(to_dot(&graph).contains(
            "\t\"pkg.foo\" [label=<<B>foo</B>> margin=\".2\" shape=box style=rounded]\n"
        ));
    }

    #[test]
    fn test_node_id_is_quoted() {
        let mut graph = Digraph::default();
        graph.add_node(Node::new("say \"hi\"", Label::html("<hi>")));

        assert!(to_dot(&graph).contains("\t\"say \\\"hi\\\"\" [label=<hi> "));
    }

    #[test]
    fn test_edges() {
        let mut graph = Digraph::default();
        graph.add_edge(Edge::new(Endpoint::port("a", "1"), "b"));
        graph.add_edge(Edge::new(Endpoint::port("a", "2"), "c").with_style(EdgeStyle::Dashed));
        graph.add_edge(Edge::new(Endpoint::port("c", "op\"1"), "d"));

        let dot = to_dot(&graph);
        assert!(dot.contains("\t\"a\":\"1\" -> \"b\"\n"));
        assert!(dot.contains("\t\"a\":\"2\" -> \"c\" [style=dashed]\n"));
        assert!(dot.contains("\t\"c\":\"op\\\"1\" -> \"d\"\n"));
    }

    #[test]
    fn test_nodes_precede_edges() {
        let mut graph = Digraph::default();
        graph.add_edge(Edge::new(Endpoint::port("a", "1"), "b"));
        graph.add_node(Node::new("a", Label::html("<A>")));

        let dot = to_dot(&graph);
        let node = dot.find("\"a\" [label").unwrap();
        let edge = dot.find("->").unwrap();
        assert!(node < edge);
    }

    #[test]
    fn test_dot_exporter_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.dot");
        let graph = Digraph::new("saved", RankDir::LeftToRight);

        Dot::new(path.to_str().unwrap()).export_graph(&graph).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, to_dot(&graph));
    }
}
