//! Configuration types for sphinx-graph rendering.
//!
//! This module provides configuration structures that control how the graph
//! is laid out and styled. All types implement [`serde::Deserialize`] for
//! loading from a TOML file, and reject unknown keys.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining graph and style settings.
//! - [`GraphConfig`] - Graph-level attributes such as rank direction.
//! - [`StyleConfig`] - Label colors and the name prefix stripped from entries.
//! - [`RenderConfig`] - The external program used to render images.
//!
//! # Example
//!
//! ```
//! # use sphinx_graph::config::AppConfig;
//! let config: AppConfig = toml::from_str(r#"
//!     [style]
//!     event_color = "lightgreen"
//! "#).unwrap();
//!
//! assert_eq!(config.style().event_color(), "lightgreen");
//! assert_eq!(config.style().pipeline_color(), "lightyellow");
//! ```

use serde::Deserialize;

use crate::{export::graphviz::DEFAULT_PROGRAM, structure::RankDir};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Graph configuration section.
    #[serde(default)]
    graph: GraphConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,

    /// Render configuration section.
    #[serde(default)]
    render: RenderConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified graph and style configurations.
    pub fn new(graph: GraphConfig, style: StyleConfig) -> Self {
        Self {
            graph,
            style,
            render: RenderConfig::default(),
        }
    }

    /// Replaces the render configuration.
    pub fn with_render(mut self, render: RenderConfig) -> Self {
        self.render = render;
        self
    }

    /// Returns the graph configuration.
    pub fn graph(&self) -> &GraphConfig {
        &self.graph
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the render configuration.
    pub fn render(&self) -> &RenderConfig {
        &self.render
    }
}

/// Graph-level attributes.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphConfig {
    /// Direction in which ranks are laid out, `LR` unless configured.
    #[serde(default)]
    rankdir: RankDir,
}

impl GraphConfig {
    pub fn new(rankdir: RankDir) -> Self {
        Self { rankdir }
    }

    pub fn rankdir(&self) -> RankDir {
        self.rankdir
    }
}

/// Label styling.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleConfig {
    /// Background of event headers and of `emit` rows.
    event_color: String,

    /// Background of pipeline headers and of `apply_*` rows.
    pipeline_color: String,

    /// Prefix removed from callback and transform names in labels.
    strip_prefix: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            event_color: "lightblue".to_string(),
            pipeline_color: "lightyellow".to_string(),
            strip_prefix: "sphinx.".to_string(),
        }
    }
}

impl StyleConfig {
    pub fn new(
        event_color: impl Into<String>,
        pipeline_color: impl Into<String>,
        strip_prefix: impl Into<String>,
    ) -> Self {
        Self {
            event_color: event_color.into(),
            pipeline_color: pipeline_color.into(),
            strip_prefix: strip_prefix.into(),
        }
    }

    pub fn event_color(&self) -> &str {
        &self.event_color
    }

    pub fn pipeline_color(&self) -> &str {
        &self.pipeline_color
    }

    pub fn strip_prefix(&self) -> &str {
        &self.strip_prefix
    }

    /// Returns `name` without the configured prefix, for display.
    pub fn short_name<'a>(&self, name: &'a str) -> &'a str {
        name.strip_prefix(self.strip_prefix.as_str())
            .unwrap_or(name)
    }
}

/// Image rendering settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Graphviz program the DOT source is piped through.
    program: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
        }
    }
}

impl RenderConfig {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}
