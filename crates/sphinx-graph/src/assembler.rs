//! Turns a [`Description`] into a [`Digraph`].
//!
//! Every object becomes a node whose label is a table: a name row, an
//! optional description row, one row per call and the override rows. Rows
//! that reference something carry a numeric port so that their edge leaves
//! from the row itself rather than from the node. Events, transforms and
//! post-transforms get one node each (see the `pipeline` submodule).
//!
//! Missing references never abort assembly: the row is still drawn, no edge
//! is added, and a [`Diagnostic`] is recorded.

mod cursor;
mod pipeline;

use log::{debug, info};

use sphinx_graph_core::{
    markup::{self, Align, Cell, CellAlign, Table},
    model::{Call, CallKind, Description, Object, display_name},
};

use crate::{
    config::{AppConfig, StyleConfig},
    diagnostic::{Diagnostic, DiagnosticCollector},
    structure::{Digraph, Edge, EdgeStyle, Endpoint, Label, Node},
};

use cursor::CallCursor;

/// Node id of the transforms pseudo-node.
pub const TRANSFORMS_ID: &str = "_apply_transforms";

/// Node id of the post-transforms pseudo-node.
pub const POST_TRANSFORMS_ID: &str = "_apply_post_transforms";

/// The result of a build: the graph and every diagnostic raised on the way.
#[derive(Debug, Clone)]
pub struct Assembly {
    graph: Digraph,
    diagnostics: Vec<Diagnostic>,
}

impl Assembly {
    pub fn graph(&self) -> &Digraph {
        &self.graph
    }

    /// Diagnostics in the order they were raised.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_parts(self) -> (Digraph, Vec<Diagnostic>) {
        (self.graph, self.diagnostics)
    }
}

/// Build the graph of `description` with the default configuration.
///
/// This never fails: unresolved references are reported in
/// [`Assembly::diagnostics`] and simply produce no edge.
///
/// # Example
///
/// ```
/// use sphinx_graph::build_graph;
/// use sphinx_graph_core::model::{Call, Description, Object, ObjectKind};
///
/// let description = Description::new("example")
///     .with_object("pkg.foo", Object::new(ObjectKind::Function).with_call(Call::standard("pkg.bar")))
///     .with_object("pkg.bar", Object::new(ObjectKind::Function));
///
/// let assembly = build_graph(&description);
///
/// assert_eq!(assembly.graph().node_count(), 2);
/// assert_eq!(assembly.graph().edge_count(), 1);
/// assert!(assembly.diagnostics().is_empty());
/// ```
pub fn build_graph(description: &Description) -> Assembly {
    Assembler::new(description, &AppConfig::default()).assemble()
}

/// What a call row links to.
enum Resolution<'a> {
    /// Draw an edge from the row to `target`.
    Edge { target: &'a str, style: EdgeStyle },
    /// The target does not exist; report it if a diagnostic is given.
    Missing(Option<Diagnostic>),
    /// The row is not a reference.
    Unlinked,
}

/// Single-use state of one graph build.
pub(crate) struct Assembler<'a> {
    description: &'a Description,
    style: &'a StyleConfig,
    graph: Digraph,
    diagnostics: DiagnosticCollector,
}

impl<'a> Assembler<'a> {
    pub(crate) fn new(description: &'a Description, config: &'a AppConfig) -> Self {
        Self {
            description,
            style: config.style(),
            graph: Digraph::new(description.comment(), config.graph().rankdir()),
            diagnostics: DiagnosticCollector::new(),
        }
    }

    pub(crate) fn assemble(mut self) -> Assembly {
        info!(
            objects = self.description.objects().len(),
            events = self.description.events().len();
            "Assembling graph"
        );

        for (path, object) in self.description.objects() {
            self.add_object(path, object);
        }

        for (name, event) in self.description.events() {
            self.add_event(name, event);
        }

        self.add_transforms();
        self.add_post_transforms();

        debug!(
            nodes = self.graph.node_count(),
            edges = self.graph.edge_count(),
            diagnostics = self.diagnostics.len();
            "Graph assembled"
        );

        Assembly {
            graph: self.graph,
            diagnostics: self.diagnostics.finish(),
        }
    }

    fn add_object(&mut self, path: &str, object: &Object) {
        let mut table = label_table();
        table.add_row(vec![
            Cell::new(markup::u(&display_name(path, Some(object.kind()))))
                .with_align(CellAlign::Center),
        ]);

        if !object.description().is_empty() {
            table.add_row(vec![
                Cell::new(markup::multiline(object.description(), Some(Align::Left)))
                    .with_align(CellAlign::Left)
                    .with_cellpadding(10),
            ]);
        }

        let mut cursor = CallCursor::new();
        for call in object.calls() {
            self.add_call(path, call, &mut cursor, &mut table);
        }

        if object.is_overridable() || !object.overrides().is_empty() {
            self.add_overrides(path, object, &mut cursor, &mut table);
        }

        self.graph.add_node(Node::new(path, html_label(&table)));
    }

    fn add_call(&mut self, path: &str, call: &Call, cursor: &mut CallCursor, table: &mut Table) {
        if call.kind() == CallKind::Exit {
            if !cursor.close_block() {
                self.diagnostics.emit(Diagnostic::unmatched_exit(path));
            }
            return;
        }

        let port = cursor.next_port().to_string();
        let indentation = cursor.indentation();
        let text = self.call_text(call);

        let (text, background) = match call.kind() {
            CallKind::Enter => {
                cursor.open_block();
                let text = match call.context() {
                    Some(context) => format!("{context} {text}:"),
                    None => format!("{text}:"),
                };
                (text, None)
            }
            CallKind::Emit => (format!("emit {text}"), Some(self.style.event_color())),
            CallKind::ApplyTransforms | CallKind::ApplyPostTransforms => {
                (text, Some(self.style.pipeline_color()))
            }
            CallKind::Standard | CallKind::Exit => (text, None),
        };

        let mut cell = Cell::new(format!("{indentation}{text}"))
            .with_align(CellAlign::Left)
            .with_port(port.as_str())
            .with_border(1);
        if let Some(background) = background {
            cell = cell.with_bgcolor(background);
        }
        table.add_row(vec![cell]);

        match self.resolve_call(path, call) {
            Resolution::Edge { target, style } => {
                self.graph
                    .add_edge(Edge::new(Endpoint::port(path, port), target).with_style(style));
            }
            Resolution::Missing(Some(diagnostic)) => self.diagnostics.emit(diagnostic),
            Resolution::Missing(None) | Resolution::Unlinked => {}
        }
    }

    /// The text shown for a call, before indentation and kind decorations.
    ///
    /// References are shortened with the kind of the object they resolve to,
    /// falling back to the call's own hint.
    fn call_text(&self, call: &Call) -> String {
        if !call.is_reference() {
            return call.text().to_string();
        }

        let kind = self
            .description
            .object(call.text())
            .map(Object::kind)
            .or(call.obj_type());
        display_name(call.text(), kind)
    }

    /// Decide where the row of `call`, made from within `source`, links to.
    fn resolve_call<'c>(&self, source: &str, call: &'c Call) -> Resolution<'c> {
        let target = call.text();

        match call.kind() {
            CallKind::Standard | CallKind::Enter => {
                if !call.is_reference() {
                    Resolution::Unlinked
                } else if self.description.object(target).is_some() {
                    Resolution::Edge {
                        target,
                        style: EdgeStyle::Solid,
                    }
                } else {
                    Resolution::Missing(
                        call.warn_no_object()
                            .then(|| Diagnostic::unresolved_call(source, target)),
                    )
                }
            }
            CallKind::Emit => {
                if self.description.event(target).is_some() {
                    Resolution::Edge {
                        target,
                        style: EdgeStyle::Solid,
                    }
                } else {
                    Resolution::Missing(Some(Diagnostic::unresolved_event(source, target)))
                }
            }
            CallKind::ApplyTransforms => Resolution::Edge {
                target: TRANSFORMS_ID,
                style: EdgeStyle::Dashed,
            },
            CallKind::ApplyPostTransforms => Resolution::Edge {
                target: POST_TRANSFORMS_ID,
                style: EdgeStyle::Dashed,
            },
            CallKind::Exit => Resolution::Unlinked,
        }
    }

    fn add_overrides(
        &mut self,
        path: &str,
        object: &Object,
        cursor: &mut CallCursor,
        table: &mut Table,
    ) {
        table.add_row(vec![
            Cell::new(markup::i("Overridable"))
                .with_align(CellAlign::Left)
                .with_cellpadding(10),
        ]);

        for name in object.overrides() {
            let port = cursor.next_port().to_string();
            // Overrides are shortened with the kind of the overridden object.
            table.add_row(vec![
                Cell::new(display_name(name, Some(object.kind())))
                    .with_align(CellAlign::Left)
                    .with_border(1)
                    .with_port(port.as_str()),
            ]);

            if self.description.object(name).is_some() {
                self.graph.add_edge(
                    Edge::new(Endpoint::port(path, port), name.as_str())
                        .with_style(EdgeStyle::Dashed),
                );
            } else {
                self.diagnostics
                    .emit(Diagnostic::unresolved_override(path, name));
            }
        }
    }
}

/// An empty borderless label table.
fn label_table() -> Table {
    Table::new().with_border(0).with_cellspacing(0)
}

fn html_label(table: &Table) -> Label {
    Label::html(markup::html(&table.to_string()))
}
