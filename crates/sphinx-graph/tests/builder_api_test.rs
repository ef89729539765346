//! Integration tests for the GraphBuilder API
//!
//! These tests drive the public API from TOML source through to DOT output.

use sphinx_graph::{
    GraphBuilder, POST_TRANSFORMS_ID, SphinxGraphError, TRANSFORMS_ID,
    config::{AppConfig, GraphConfig, StyleConfig},
    diagnostic::{DiagnosticCode, write_diagnostics},
    export::OutputFormat,
    structure::RankDir,
};

const PIPELINE: &str = r#"
comment = "Sphinx build"

[objects."sphinx.application.Sphinx.build"]
type = "method"
description = "Build the project"
calls = [
    { text = "sphinx.builders.Builder.build" },
    { text = "builder-inited", type = "emit" },
]

[objects."sphinx.builders.Builder.build"]
type = "method"
overridable = true
overrides = ["sphinx.builders.html.StandaloneHTMLBuilder.build"]
calls = [
    { text = "docname", type = "enter", context = "for", warn_no_object = false },
    { text = "read doctree", is_ref = false },
    { text = "apply transforms", type = "apply_transforms" },
    { type = "exit", text = "" },
    { text = "apply post-transforms", type = "apply_post_transforms" },
]

[objects."sphinx.builders.html.StandaloneHTMLBuilder.build"]
type = "method"

[events.builder-inited]
callbacks = { "sphinx.ext.autosummary.process_generate_options" = { priority = 500 } }

[transforms."sphinx.transforms.Locale"]
priority = 20

[post_transforms."sphinx.transforms.post_transforms.ReferencesResolver"]
priority = 10
formats = ["html"]
"#;

#[test]
fn test_builder_api_exists() {
    let _builder = GraphBuilder::default();
}

#[test]
fn test_parse_pipeline() {
    let builder = GraphBuilder::default();
    let result = builder.parse(PIPELINE);
    assert!(
        result.is_ok(),
        "Should parse valid description: {:?}",
        result.err()
    );
}

#[test]
fn test_build_pipeline_graph() {
    let builder = GraphBuilder::default();
    let description = builder.parse(PIPELINE).expect("Failed to parse description");
    let assembly = builder.build(&description);
    let graph = assembly.graph();

    // 3 objects + 1 event + transforms + post-transforms
    assert_eq!(graph.node_count(), 6);
    assert!(graph.contains_node(TRANSFORMS_ID));
    assert!(graph.contains_node(POST_TRANSFORMS_ID));
    assert!(
        assembly.diagnostics().is_empty(),
        "Unexpected diagnostics: {:?}",
        assembly.diagnostics()
    );

    let builder_edges: Vec<String> = graph
        .edges_from("sphinx.builders.Builder.build")
        .map(|edge| format!("{} -> {}", edge.source(), edge.target()))
        .collect();
    assert_eq!(
        builder_edges,
        [
            "sphinx.builders.Builder.build:3 -> _apply_transforms",
            "sphinx.builders.Builder.build:4 -> _apply_post_transforms",
            "sphinx.builders.Builder.build:5 -> sphinx.builders.html.StandaloneHTMLBuilder.build",
        ]
    );
}

#[test]
fn test_render_dot() {
    let builder = GraphBuilder::default();
    let description = builder.parse(PIPELINE).expect("Failed to parse");
    let assembly = builder.build(&description);

    let dot = builder.render_dot(assembly.graph());

    assert!(dot.starts_with("// Sphinx build\ndigraph {\n\tgraph [rankdir=LR]\n"));
    assert!(dot.contains(
        "\t\"sphinx.application.Sphinx.build\":\"1\" -> \"sphinx.builders.Builder.build\"\n"
    ));
    assert!(dot.contains(
        "\t\"sphinx.application.Sphinx.build\":\"2\" -> \"builder-inited\"\n"
    ));
    assert!(dot.contains(
        "\t\"sphinx.builders.Builder.build\":\"3\" -> \"_apply_transforms\" [style=dashed]\n"
    ));
    assert!(dot.ends_with("}\n"));
}

#[test]
fn test_missing_references_are_diagnostics() {
    let source = r#"
        comment = ""

        [objects."pkg.foo"]
        type = "function"
        calls = [
            { text = "pkg.missing" },
            { text = "pkg.quiet", warn_no_object = false },
            { text = "no-such-event", type = "emit", warn_no_object = false },
        ]
    "#;

    let builder = GraphBuilder::default();
    let description = builder.parse(source).expect("Failed to parse");
    let assembly = builder.build(&description);

    assert_eq!(assembly.graph().edge_count(), 0);

    let codes: Vec<DiagnosticCode> = assembly
        .diagnostics()
        .iter()
        .map(|diagnostic| diagnostic.code())
        .collect();
    assert_eq!(codes, [DiagnosticCode::W001, DiagnosticCode::W002]);

    let mut out = Vec::new();
    write_diagnostics(&mut out, assembly.diagnostics()).expect("Failed to write");
    assert_eq!(
        String::from_utf8(out).expect("UTF-8 output"),
        "Warning: 'pkg.missing' not found, called from 'pkg.foo'\n\
         Warning: 'no-such-event' event not found, called from 'pkg.foo'\n"
    );
}

#[test]
fn test_builder_with_config() {
    let config = AppConfig::new(
        GraphConfig::new(RankDir::TopToBottom),
        StyleConfig::new("palegreen", "wheat", "myext."),
    );
    let source = r#"
        comment = ""

        [objects."pkg.run"]
        type = "function"
        calls = [{ text = "done", type = "emit" }]

        [events.done]
        callbacks = { "myext.on_done" = { priority = 1 } }
    "#;

    let builder = GraphBuilder::new(config);
    let description = builder.parse(source).expect("Failed to parse");
    let dot = builder.render_dot(builder.build(&description).graph());

    assert!(dot.contains("graph [rankdir=TB]"));
    assert!(dot.contains("BGCOLOR=\"palegreen\""));
    assert!(dot.contains("\non_done\n"));
}

#[test]
fn test_parse_error_keeps_source() {
    let source = "comment = \"\"\n[objects.\"pkg.foo\"]\ntype = \"class\"\n";

    let builder = GraphBuilder::default();
    let err = builder.parse(source).expect_err("Unknown object type must fail");

    match err {
        SphinxGraphError::Model { err, src } => {
            assert_eq!(src, source);
            assert!(err.span().is_some());
        }
        other => panic!("Expected model error, got {other:?}"),
    }
}

#[test]
fn test_render_dot_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("graph.dot");
    let file_name = path.to_str().expect("UTF-8 path");

    let builder = GraphBuilder::default();
    let description = builder.parse(PIPELINE).expect("Failed to parse");
    let assembly = builder.build(&description);

    builder
        .render(assembly.graph(), OutputFormat::Dot, file_name)
        .expect("Failed to write DOT file");

    let written = std::fs::read_to_string(&path).expect("Failed to read DOT file");
    assert_eq!(written, builder.render_dot(assembly.graph()));
}

#[test]
fn test_nodes_follow_source_order() {
    let source = r#"
        comment = ""

        [objects."pkg.zeta"]
        [objects."pkg.alpha"]
        [objects."pkg.mu"]

        [events.env-updated]
        callbacks = { "pkg.second" = { priority = 500 }, "pkg.first" = { priority = 500 } }

        [events.builder-inited]
        callbacks = {}
    "#;

    let builder = GraphBuilder::default();
    let description = builder.parse(source).expect("Failed to parse");
    let assembly = builder.build(&description);
    let graph = assembly.graph();

    let ids: Vec<&str> = graph.nodes().map(|node| node.id()).collect();
    assert_eq!(
        ids,
        ["pkg.zeta", "pkg.alpha", "pkg.mu", "env-updated", "builder-inited"]
    );

    let label = graph
        .node("env-updated")
        .map(|node| node.label().as_str())
        .expect("Event node exists");
    let second = label.find("pkg.second").expect("Callback row");
    let first = label.find("pkg.first").expect("Callback row");
    assert!(second < first);
}

#[test]
fn test_object_sharing_event_name_is_merged() {
    let source = r#"
        comment = ""

        [objects."pkg.run"]
        calls = [{ text = "done", type = "emit" }]

        [objects.done]

        [events.done]
        callbacks = {}
    "#;

    let builder = GraphBuilder::default();
    let description = builder.parse(source).expect("Failed to parse");
    let assembly = builder.build(&description);
    let graph = assembly.graph();

    // The event replaces the object's label but keeps its position.
    assert_eq!(graph.node_count(), 2);
    let ids: Vec<&str> = graph.nodes().map(|node| node.id()).collect();
    assert_eq!(ids, ["pkg.run", "done"]);
    assert!(
        graph
            .node("done")
            .map(|node| node.label().as_str())
            .is_some_and(|label| label.contains("<U>done</U>"))
    );
    assert_eq!(graph.edge_count(), 1);
}
