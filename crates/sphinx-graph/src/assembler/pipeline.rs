//! Event, transform and post-transform nodes.

use sphinx_graph_core::{
    markup::{self, Align, Cell, CellAlign, Table},
    model::Event,
};

use super::{Assembler, POST_TRANSFORMS_ID, TRANSFORMS_ID, html_label, label_table};
use crate::structure::{Edge, Endpoint, Node};

impl Assembler<'_> {
    /// Add the node of event `name` listing its visible callbacks.
    pub(super) fn add_event(&mut self, name: &str, event: &Event) {
        let mut table = label_table();
        table.add_row(vec![header(name, 2, self.style.event_color())]);

        for (callback, data) in event.callbacks() {
            if data.is_hidden() {
                continue;
            }
            table.add_row(vec![
                self.name_cell(callback),
                Cell::new(data.priority().to_string())
                    .with_align(CellAlign::Center)
                    .with_border(1),
            ]);
            add_doc_row(&mut table, data.doc(), 2);
        }

        self.graph.add_node(Node::new(name, html_label(&table)));
    }

    /// Add the transforms pseudo-node, if any transform is declared.
    pub(super) fn add_transforms(&mut self) {
        let transforms = self.description.transforms();
        if transforms.is_empty() {
            return;
        }

        let mut table = label_table();
        table.add_row(vec![header("Transforms", 2, self.style.pipeline_color())]);

        for (name, transform) in transforms {
            if transform.is_hidden() {
                continue;
            }
            table.add_row(vec![
                self.name_cell(name),
                Cell::new(transform.priority().to_string())
                    .with_align(CellAlign::Center)
                    .with_border(1)
                    .with_port(name.as_str()),
            ]);
            if let Some(event) = transform.emit() {
                self.graph
                    .add_edge(Edge::new(Endpoint::port(TRANSFORMS_ID, name.as_str()), event));
            }
            add_doc_row(&mut table, transform.doc(), 2);
        }

        self.graph
            .add_node(Node::new(TRANSFORMS_ID, html_label(&table)));
    }

    /// Add the post-transforms pseudo-node, if any post-transform is declared.
    pub(super) fn add_post_transforms(&mut self) {
        let transforms = self.description.post_transforms();
        if transforms.is_empty() {
            return;
        }

        let mut table = label_table();
        table.add_row(vec![header("Post Transforms", 3, self.style.pipeline_color())]);

        for (name, transform) in transforms {
            if transform.is_hidden() {
                continue;
            }
            let tags: Vec<&str> = transform.tags().collect();
            table.add_row(vec![
                self.name_cell(name),
                Cell::new(tags.join(","))
                    .with_align(CellAlign::Left)
                    .with_border(1)
                    .with_port(name.as_str()),
            ]);
            if let Some(event) = transform.emit() {
                self.graph.add_edge(Edge::new(
                    Endpoint::port(POST_TRANSFORMS_ID, name.as_str()),
                    event,
                ));
            }
            add_doc_row(&mut table, transform.doc(), 3);
        }

        self.graph
            .add_node(Node::new(POST_TRANSFORMS_ID, html_label(&table)));
    }

    fn name_cell(&self, name: &str) -> Cell {
        Cell::new(self.style.short_name(name))
            .with_align(CellAlign::Left)
            .with_border(1)
            .with_cellpadding(3)
    }
}

fn header(title: &str, colspan: u16, background: &str) -> Cell {
    Cell::new(markup::u(title))
        .with_align(CellAlign::Center)
        .with_colspan(colspan)
        .with_bgcolor(background)
}

fn add_doc_row(table: &mut Table, doc: &str, colspan: u16) {
    if doc.is_empty() {
        return;
    }
    table.add_row(vec![
        Cell::new(markup::multiline(doc, Some(Align::Left)))
            .with_align(CellAlign::Left)
            .with_colspan(colspan),
    ]);
}
